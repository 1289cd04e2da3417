use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::domain::a001_unit_economics::PricingError;
use serde_json::json;
use thiserror::Error;

/// Ошибки HTTP-слоя
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Некорректный JSON: {0}")]
    InvalidJson(String),

    #[error("Пакет пуст")]
    EmptyBatch,

    #[error("Слишком много товаров в пакете: {count}, максимум {max}")]
    BatchTooLarge { count: usize, max: usize },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Pricing(_)
            | AppError::InvalidJson(_)
            | AppError::EmptyBatch
            | AppError::BatchTooLarge { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": self.to_string(),
        }));
        (status, body).into_response()
    }
}
