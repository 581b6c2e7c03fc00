use axum::{extract::State, Json};
use sqlx::Row;
use tracing::info;

use crate::{
    error::AppResult,
    state::AppState,
    types::{AllPoolsResponse, AssetRecord, AssetRequest, MessageResponse, PoolKind},
};

// Thin named wrappers keep the routing table readable; the actual work happens
// in the generic helpers below, parameterized by PoolKind.

pub async fn create_model(
    State(state): State<AppState>,
    Json(req): Json<AssetRequest>,
) -> AppResult<Json<MessageResponse>> {
    create_asset(&state, PoolKind::Model, req).await
}

pub async fn delete_model(
    State(state): State<AppState>,
    Json(req): Json<AssetRequest>,
) -> AppResult<Json<MessageResponse>> {
    delete_asset(&state, PoolKind::Model, req).await
}

pub async fn create_material(
    State(state): State<AppState>,
    Json(req): Json<AssetRequest>,
) -> AppResult<Json<MessageResponse>> {
    create_asset(&state, PoolKind::Material, req).await
}

pub async fn delete_material(
    State(state): State<AppState>,
    Json(req): Json<AssetRequest>,
) -> AppResult<Json<MessageResponse>> {
    delete_asset(&state, PoolKind::Material, req).await
}

pub async fn create_hdri(
    State(state): State<AppState>,
    Json(req): Json<AssetRequest>,
) -> AppResult<Json<MessageResponse>> {
    create_asset(&state, PoolKind::Hdri, req).await
}

pub async fn delete_hdri(
    State(state): State<AppState>,
    Json(req): Json<AssetRequest>,
) -> AppResult<Json<MessageResponse>> {
    delete_asset(&state, PoolKind::Hdri, req).await
}

pub async fn create_lightset(
    State(state): State<AppState>,
    Json(req): Json<AssetRequest>,
) -> AppResult<Json<MessageResponse>> {
    create_asset(&state, PoolKind::Lightset, req).await
}

pub async fn delete_lightset(
    State(state): State<AppState>,
    Json(req): Json<AssetRequest>,
) -> AppResult<Json<MessageResponse>> {
    delete_asset(&state, PoolKind::Lightset, req).await
}

pub async fn all_pools(State(state): State<AppState>) -> AppResult<Json<AllPoolsResponse>> {
    // Four sequential reads over the shared pool. Not wrapped in a transaction,
    // so writes landing between the reads can show up in one list and not
    // another. Accepted for this endpoint.
    let materials = fetch_pool(&state, PoolKind::Material).await?;
    let models = fetch_pool(&state, PoolKind::Model).await?;
    let hdris = fetch_pool(&state, PoolKind::Hdri).await?;
    let lightsets = fetch_pool(&state, PoolKind::Lightset).await?;

    state.metrics.inc_list_requests();

    Ok(Json(AllPoolsResponse { materials, models, hdris, lightsets }))
}

async fn create_asset(
    state: &AppState,
    kind: PoolKind,
    req: AssetRequest,
) -> AppResult<Json<MessageResponse>> {
    let sql = format!("INSERT INTO {} (name, path) VALUES (?1, ?2)", kind.table());
    sqlx::query(&sql).bind(&req.name).bind(&req.path).execute(&state.db).await?;

    state.metrics.inc_assets_created();
    info!("{} pool {} created", kind.label(), req.name);

    Ok(Json(MessageResponse {
        message: format!("{} pool {} created successfully", kind.label(), req.name),
    }))
}

async fn delete_asset(
    state: &AppState,
    kind: PoolKind,
    req: AssetRequest,
) -> AppResult<Json<MessageResponse>> {
    // Deletion matches on name alone and removes every record carrying it; the
    // path field in the body is accepted for symmetry with create but ignored.
    // Deleting an absent name is a no-op that still reports success.
    let sql = format!("DELETE FROM {} WHERE name = ?1", kind.table());
    let result = sqlx::query(&sql).bind(&req.name).execute(&state.db).await?;

    state.metrics.add_assets_deleted(result.rows_affected());
    info!("{} pool {} deleted ({} rows)", kind.label(), req.name, result.rows_affected());

    Ok(Json(MessageResponse {
        message: format!("{} pool {} deleted successfully", kind.label(), req.name),
    }))
}

async fn fetch_pool(state: &AppState, kind: PoolKind) -> AppResult<Vec<AssetRecord>> {
    let sql = format!("SELECT id, name, path FROM {}", kind.table());
    let rows = sqlx::query(&sql).fetch_all(&state.db).await?;

    let records = rows
        .into_iter()
        .map(|r| AssetRecord {
            id: r.get::<i64, _>("id"),
            name: r.get::<String, _>("name"),
            path: r.get::<String, _>("path"),
        })
        .collect();

    Ok(records)
}
