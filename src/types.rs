use serde::{Deserialize, Serialize};

/// The four asset-pool kinds. Table names, labels and thus all SQL text
/// derive from this descriptor, so the pools share a single code path
/// instead of four pasted ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolKind {
    Model,
    Material,
    Hdri,
    Lightset,
}

impl PoolKind {
    pub const ALL: [PoolKind; 4] =
        [PoolKind::Model, PoolKind::Material, PoolKind::Hdri, PoolKind::Lightset];

    /// Name of the SQLite table backing this pool.
    pub fn table(self) -> &'static str {
        match self {
            PoolKind::Model => "models",
            PoolKind::Material => "materials",
            PoolKind::Hdri => "hdris",
            PoolKind::Lightset => "lightsets",
        }
    }

    /// Label used in confirmation messages and log lines.
    pub fn label(self) -> &'static str {
        match self {
            PoolKind::Model => "Model",
            PoolKind::Material => "Material",
            PoolKind::Hdri => "HDRI",
            PoolKind::Lightset => "Lightset",
        }
    }
}

// DTOs for the pool endpoints

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetRecord {
    pub id: i64,
    pub name: String,
    pub path: String,
}

/// Request body for create and delete. Both fields are required on the wire;
/// delete matches on `name` alone and ignores `path`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetRequest {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Snapshot of all four pools as returned by `GET /all_pools`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllPoolsResponse {
    pub materials: Vec<AssetRecord>,
    pub models: Vec<AssetRecord>,
    pub hdris: Vec<AssetRecord>,
    pub lightsets: Vec<AssetRecord>,
}
