use axum::Json;
use serde::Serialize;

use crate::unix_now;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub timestamp: u64,
}

pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        timestamp: unix_now(),
    })
}
