// src/models.rs
use serde::Serialize;

/// Coarse brightness label derived from the mean-luminance score.
/// The cut points are left-exclusive: exactly 200.0 is still Medium
/// and exactly 100.0 is still Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BrightnessLevel {
    Low,
    Medium,
    High,
}

impl BrightnessLevel {
    pub fn from_score(score: f64) -> Self {
        if score > 200.0 {
            BrightnessLevel::High
        } else if score > 100.0 {
            BrightnessLevel::Medium
        } else {
            BrightnessLevel::Low
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub brightness_score: f64,
    pub brightness_level: BrightnessLevel,
    pub image_processed: bool,
}

/// Canned advice block served when the generation endpoint is unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvicePlan {
    pub routine: &'static str,
    pub key_ingredients: &'static str,
    pub avoid: &'static str,
    pub timeline: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedAdvice {
    pub recommendation: String,
    pub source: &'static str,
}

/// Either outcome of the selector is a valid terminal result; the wire
/// shape is whichever variant's fields, with no extra tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Recommendation {
    Generated(GeneratedAdvice),
    Fallback(AdvicePlan),
}

impl Recommendation {
    pub fn generated(text: String) -> Self {
        Recommendation::Generated(GeneratedAdvice {
            recommendation: text,
            source: "AI Generated",
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserInput {
    pub goal: String,
    pub history: String,
}

/// The single JSON object returned per successful request. Built once,
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseEnvelope {
    pub analysis: Analysis,
    pub recommendation: Recommendation,
    pub user_input: UserInput,
    pub mock_collection_link: String,
    pub status: &'static str,
}

impl ResponseEnvelope {
    /// Pure composition: echoes goal/history exactly as submitted and
    /// derives the level from the same score it reports.
    pub fn assemble(
        brightness_score: f64,
        recommendation: Recommendation,
        goal: String,
        history: String,
    ) -> Self {
        let mock_collection_link = collection_link(&goal);
        ResponseEnvelope {
            analysis: Analysis {
                brightness_score,
                brightness_level: BrightnessLevel::from_score(brightness_score),
                image_processed: true,
            },
            recommendation,
            user_input: UserInput { goal, history },
            mock_collection_link,
            status: "success",
        }
    }
}

/// Synthetic, non-dereferenced link: goal lower-cased, spaces to hyphens,
/// everything else (punctuation included) left alone.
fn collection_link(goal: &str) -> String {
    format!(
        "https://skincare-collection.com/recommended/{}",
        goal.to_lowercase().replace(' ', "-")
    )
}
