//! Route table and request logging.

pub mod health;
pub mod invoices;
pub mod marketplace;
pub mod reputation;
pub mod stats;
pub mod wallets;

use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::envelope::ApiResponse;
use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/invoices", get(invoices::list).post(invoices::create))
        .route("/api/invoices/{id}", get(invoices::get_one))
        .route("/api/invoices/{id}/fund", post(invoices::fund))
        .route("/api/invoices/{id}/settle", post(invoices::settle))
        .route("/api/invoices/{id}/cancel", post(invoices::cancel))
        .route(
            "/api/invoices/{id}/preview-settlement",
            get(invoices::preview_settlement),
        )
        .route("/api/marketplace", get(marketplace::list))
        .route("/api/reputation/{sme_id}", get(reputation::get_one))
        .route("/api/wallets/{id}", get(wallets::get_one))
        .route("/api/stats", get(stats::get_stats))
        .fallback(not_found)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let response = next.run(req).await;
    tracing::info!(%method, %path, status = %response.status(), "request");
    response
}

async fn not_found() -> (StatusCode, Json<ApiResponse<()>>) {
    (StatusCode::NOT_FOUND, Json(ApiResponse::err("Not found")))
}
