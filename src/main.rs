// src/main.rs
use actix_web::{App, HttpResponse, HttpServer, middleware, web};
use log::info;
use std::sync::Arc;
use std::time::Duration;

mod errors;
mod handlers;
mod models;
mod services;

use crate::handlers::recommend;
use crate::services::{ImageAnalyzer, Recommender, RecommenderConfig};

const DEFAULT_API_URL: &str = "https://api-inference.huggingface.co/models/gpt2";

#[derive(Clone)]
pub struct AppState {
    recommender: Arc<Recommender>,
    image_analyzer: Arc<ImageAnalyzer>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Glowcast service...");

    let config = RecommenderConfig {
        api_url: std::env::var("HF_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        api_key: std::env::var("HUGGING_FACE_API_KEY").unwrap_or_default(),
        timeout: Duration::from_secs(
            std::env::var("HF_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        ),
    };

    let app_state = AppState {
        recommender: Arc::new(Recommender::new(config)),
        image_analyzer: Arc::new(ImageAnalyzer::new()),
    };

    info!("Starting HTTP server on 0.0.0.0:8000");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .route("/recommend", web::post().to(recommend))
            .route("/", web::get().to(health_check))
    })
    .bind("0.0.0.0:8000")?
    .run()
    .await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "AI Skincare Recommendation API is running!",
        "version": "1.0.0",
        "endpoints": {
            "POST /recommend": "Get skincare recommendations",
            "GET /": "Health check"
        }
    }))
}
