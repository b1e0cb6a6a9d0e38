use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::any::Any;
use utoipa::ToSchema;

use crate::nasa::ProviderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// Successful `/api/nasa` response.
#[derive(Debug, Serialize, ToSchema)]
pub struct Envelope<T> {
    pub status: EnvelopeStatus,
    pub data: T,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl<T> Envelope<T> {
    pub fn success(data: T, message: &str) -> Self {
        Envelope {
            status: EnvelopeStatus::Success,
            data,
            message: message.to_string(),
            timestamp: Local::now(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorEnvelope {
    pub status: EnvelopeStatus,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl ErrorEnvelope {
    pub fn new(message: String) -> Self {
        ErrorEnvelope {
            status: EnvelopeStatus::Error,
            message,
            timestamp: Local::now(),
        }
    }
}

pub enum ApiError {
    Provider {
        context: &'static str,
        source: ProviderError,
    },
}

impl ApiError {
    pub fn provider(context: &'static str) -> impl FnOnce(ProviderError) -> ApiError {
        move |source| ApiError::Provider { context, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Clients check `status` in the body, so failures still answer 200.
            ApiError::Provider { context, source } => {
                log::warn!("{}: {}", context, source);
                (
                    StatusCode::OK,
                    Json(ErrorEnvelope::new(format!("{}: {}", context, source))),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Renders a handler panic as an error envelope without leaking a backtrace.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    log::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorEnvelope::new(detail)),
    )
        .into_response()
}
