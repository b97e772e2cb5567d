// src/api/handlers/summarize.rs
use actix_web::error::JsonPayloadError;
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{web, HttpResponse, ResponseError};
use log::{error, info, warn};
use serde_json::Value;
use uuid::Uuid;

use crate::api::AppState;
use crate::errors::{LegalEaseError, Result};
use crate::models::{SummaryRequest, SummaryResult};
use crate::summarizer;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// JSON extractor settings for the summarize endpoint: any content type is
/// accepted and every decoding failure becomes a validation error.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .content_type_required(false)
        .error_handler(move |err, _req| {
            let mapped = match err {
                JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
                    LegalEaseError::PayloadTooLarge { limit }
                }
                other => {
                    warn!("Rejecting summarize request body: {}", other);
                    LegalEaseError::MissingText
                }
            };
            mapped.into()
        })
}

pub async fn summarize(
    state: web::Data<AppState>,
    req: web::Json<Value>,
) -> HttpResponse {
    let request_id = Uuid::new_v4().to_string();
    let outcome = match SummaryRequest::from_value(req.into_inner()) {
        Ok(body) => run(&state, &body, &request_id).await,
        Err(e) => {
            warn!("[{}] Rejecting summarize request: {}", request_id, e);
            Err(e)
        }
    };

    let mut response = match outcome {
        Ok(summary) => {
            info!("[{}] Summary ready", request_id);
            HttpResponse::Ok().json(SummaryResult::Summary { summary })
        }
        Err(e) => e.error_response(),
    };

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    response
}

async fn run(state: &AppState, body: &SummaryRequest, request_id: &str) -> Result<String> {
    info!(
        "[{}] Summarize request: {} chars, key override: {}",
        request_id,
        body.text.chars().count(),
        body.api_key.as_deref().is_some_and(|k| !k.is_empty())
    );

    summarizer::summarize_document(&state.config, &state.client, body)
        .await
        .inspect_err(|e| match e {
            LegalEaseError::Config(_) => error!("[{}] Configuration error: {}", request_id, e),
            _ => warn!("[{}] Summarization failed: {}", request_id, e),
        })
}
