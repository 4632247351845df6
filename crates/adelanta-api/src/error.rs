//! Error-to-HTTP mapping. Lookup misses become 404, state and validation
//! failures 400, arithmetic failures 500; the body is always the envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use adelanta_core::AdelantaError;

use crate::envelope::ApiResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] AdelantaError),

    #[error("{0}")]
    BadRequest(&'static str),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(err) => match err {
                AdelantaError::InvoiceNotFound
                | AdelantaError::SmeNotFound
                | AdelantaError::WalletNotFound => StatusCode::NOT_FOUND,
                AdelantaError::Overflow => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::BAD_REQUEST,
            },
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ApiResponse::err(self.to_string()))).into_response()
    }
}
