// src/services/mod.rs
pub mod image_analyzer;
pub mod recommender;

pub use image_analyzer::ImageAnalyzer;
pub use recommender::{Recommender, RecommenderConfig};
