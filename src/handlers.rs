// src/handlers.rs
use crate::{AppState, errors::GlowcastError, models::ResponseEnvelope};
use actix_multipart::{Field, Multipart};
use actix_web::{HttpResponse, web};
use futures_util::TryStreamExt;

pub async fn recommend(
    mut payload: Multipart,
    data: web::Data<AppState>,
) -> Result<HttpResponse, GlowcastError> {
    let mut image_bytes: Option<Vec<u8>> = None;
    let mut goal: Option<String> = None;
    let mut history: Option<String> = None;

    while let Some(mut field) = payload.try_next().await.map_err(internal)? {
        match field.name() {
            "image" => {
                let content_type = field
                    .content_type()
                    .map(|ct| ct.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                // Declared type is checked before any bytes reach the decoder.
                if !content_type.starts_with("image/") {
                    return Err(GlowcastError::NotAnImage);
                }

                image_bytes = Some(read_bytes(&mut field).await?);
            }
            "goal" => goal = Some(read_text(&mut field).await?),
            "history" => history = Some(read_text(&mut field).await?),
            _ => {
                // Drain unknown parts so the stream can advance.
                while field.try_next().await.map_err(internal)?.is_some() {}
            }
        }
    }

    let image_bytes =
        image_bytes.ok_or_else(|| GlowcastError::MissingField("image".to_string()))?;
    let goal = goal.ok_or_else(|| GlowcastError::MissingField("goal".to_string()))?;
    let history = history.ok_or_else(|| GlowcastError::MissingField("history".to_string()))?;

    let brightness = data.image_analyzer.analyze(&image_bytes)?;

    let recommendation = data
        .recommender
        .recommend(&goal, &history, brightness)
        .await;

    let envelope = ResponseEnvelope::assemble(brightness, recommendation, goal, history);

    Ok(HttpResponse::Ok().json(envelope))
}

async fn read_bytes(field: &mut Field) -> Result<Vec<u8>, GlowcastError> {
    let mut buf = Vec::new();
    while let Some(chunk) = field.try_next().await.map_err(internal)? {
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

async fn read_text(field: &mut Field) -> Result<String, GlowcastError> {
    let bytes = read_bytes(field).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Catch-all for faults outside the client-input taxonomy, mirroring the
/// 500 `{"detail": "Internal server error: <msg>"}` contract.
fn internal(e: impl std::fmt::Display) -> GlowcastError {
    GlowcastError::Internal(e.to_string())
}
