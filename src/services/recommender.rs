// src/services/recommender.rs
use crate::models::{AdvicePlan, Recommendation};
use log::warn;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

/// Fixed category table, checked in declaration order. The order is the
/// tie-break: a goal mentioning several keys always gets the first one here.
const CATEGORIES: [(&str, AdvicePlan); 3] = [
    (
        "brightening",
        AdvicePlan {
            routine: "Use Vitamin C serum in morning, Niacinamide serum at night, and always apply SPF 30+",
            key_ingredients: "Vitamin C, Niacinamide, Alpha Arbutin, Kojic Acid",
            avoid: "Harsh scrubs, over-exfoliation, products with alcohol",
            timeline: "4-8 weeks for visible results",
        },
    ),
    (
        "anti-aging",
        AdvicePlan {
            routine: "Retinol at night, Hyaluronic acid serum, and broad-spectrum sunscreen daily",
            key_ingredients: "Retinol, Peptides, Hyaluronic Acid, Vitamin E",
            avoid: "Mixing retinol with AHA/BHA, sun exposure without SPF",
            timeline: "6-12 weeks for visible results",
        },
    ),
    (
        "acne",
        AdvicePlan {
            routine: "Salicylic acid cleanser, Benzoyl peroxide spot treatment, oil-free moisturizer",
            key_ingredients: "Salicylic Acid, Benzoyl Peroxide, Niacinamide, Tea Tree Oil",
            avoid: "Over-cleansing, heavy oils, comedogenic ingredients",
            timeline: "2-6 weeks for improvement",
        },
    ),
];

const DEFAULT_PLAN: AdvicePlan = AdvicePlan {
    routine: "Gentle cleanser, moisturizer suited for your skin type, and daily SPF protection",
    key_ingredients: "Hyaluronic Acid, Ceramides, Niacinamide",
    avoid: "Harsh ingredients, over-exfoliation",
    timeline: "4-6 weeks for visible results",
};

/// Why a generation attempt did not produce usable text. Every variant is
/// absorbed into the local fallback; one warn line is logged per degrade.
#[derive(Debug, Error)]
enum GenerationFailure {
    #[error("endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("no usable text in response")]
    EmptyText,

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct RecommenderConfig {
    pub api_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

pub struct Recommender {
    config: RecommenderConfig,
    client: Client,
}

impl Recommender {
    pub fn new(config: RecommenderConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Produce a recommendation for the given inputs. Never fails outward:
    /// any problem with the generation endpoint degrades to the local table.
    pub async fn recommend(&self, goal: &str, history: &str, brightness: f64) -> Recommendation {
        let prompt = build_prompt(goal, history, brightness);

        match self.generate(&prompt).await {
            Ok(text) => Recommendation::generated(text),
            Err(reason) => {
                warn!("generation degraded to local fallback: {reason}");
                fallback_for(goal)
            }
        }
    }

    /// Single attempt against the inference endpoint, bounded by the
    /// configured timeout.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationFailure> {
        let response = self
            .client
            .post(&self.config.api_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .timeout(self.config.timeout)
            .json(&json!({
                "inputs": prompt,
                "parameters": {
                    "max_length": 200,
                    "temperature": 0.7,
                    "do_sample": true
                }
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationFailure::Status(status));
        }

        let result: serde_json::Value = response.json().await?;

        let generated = result
            .get(0)
            .and_then(|entry| entry["generated_text"].as_str())
            .unwrap_or_default();

        // The endpoint echoes the prompt ahead of the completion.
        let cleaned = generated.replace(prompt, "").trim().to_string();
        if cleaned.is_empty() {
            Err(GenerationFailure::EmptyText)
        } else {
            Ok(cleaned)
        }
    }
}

fn build_prompt(goal: &str, history: &str, brightness: f64) -> String {
    format!(
        "As a skincare expert, provide a recommendation based on:\n\
         - Skincare Goal: {goal}\n\
         - Past Product History: {history}\n\
         - Skin Brightness Score: {brightness}/255 (higher means brighter skin)\n\
         \n\
         Please provide:\n\
         1. A specific skincare routine recommendation\n\
         2. Key ingredients to look for\n\
         3. Products to avoid\n\
         4. Expected timeline for results\n\
         \n\
         Keep the response concise and professional."
    )
}

/// First category whose key appears case-insensitively in the goal wins;
/// no match serves the default plan.
pub fn fallback_for(goal: &str) -> Recommendation {
    let goal = goal.to_lowercase();
    for (key, plan) in &CATEGORIES {
        if goal.contains(key) {
            return Recommendation::Fallback(plan.clone());
        }
    }
    Recommendation::Fallback(DEFAULT_PLAN)
}
