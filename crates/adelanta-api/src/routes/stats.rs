use axum::extract::State;
use axum::Json;

use adelanta_core::types::ProtocolStats;

use crate::envelope::ApiResponse;
use crate::AppState;

pub async fn get_stats(State(state): State<AppState>) -> Json<ApiResponse<ProtocolStats>> {
    Json(ApiResponse::ok(state.store().stats()))
}
