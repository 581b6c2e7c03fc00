//! HTTP route handlers for the PoolWart API.
//!
//! This module contains all the HTTP endpoint handlers for the asset-pool
//! management service. Each sub-module handles a specific domain of functionality:
//!
//! - `health`: Health check and system status endpoints
//! - `pools`: Create, delete and combined listing of the four asset pools

pub mod health;
pub mod pools;

use axum::{
    routing::{get, post},
    Router,
};

use crate::error::AppError;
use crate::state::AppState;

/// Builds the API routing table. The server binary and the API tests both go
/// through here so they always exercise the same routes.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .route("/metrics", get(health::metrics))
        .route("/metrics/prometheus", get(health::metrics_prometheus))
        .route("/version", get(health::version))
        .route("/models/create", post(pools::create_model))
        .route("/models/delete", post(pools::delete_model))
        .route("/materials/create", post(pools::create_material))
        .route("/materials/delete", post(pools::delete_material))
        .route("/hdris/create", post(pools::create_hdri))
        .route("/hdris/delete", post(pools::delete_hdri))
        .route("/lightsets/create", post(pools::create_lightset))
        .route("/lightsets/delete", post(pools::delete_lightset))
        .route("/all_pools", get(pools::all_pools))
        .fallback(fallback)
}

// Unknown routes get the same JSON error envelope as everything else
async fn fallback() -> AppError {
    AppError::NotFound("no such endpoint".to_string())
}
