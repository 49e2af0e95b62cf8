// src/errors.rs
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlowcastError {
    #[error("File must be an image")]
    NotAnImage,

    #[error("Error processing image: {0}")]
    ImageProcessing(String),

    #[error("Missing form field: {0}")]
    MissingField(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for GlowcastError {
    fn error_response(&self) -> HttpResponse {
        match self {
            GlowcastError::NotAnImage
            | GlowcastError::ImageProcessing(_)
            | GlowcastError::MissingField(_) => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "detail": self.to_string()
                }))
            }
            GlowcastError::Internal(_) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "detail": self.to_string()
                }))
            }
        }
    }
}
