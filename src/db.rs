use sqlx::SqlitePool;

use crate::types::PoolKind;

pub async fn init_db(pool: &SqlitePool) -> anyhow::Result<()> {
    // Pragmas for better durability/performance (best-effort)
    if let Err(e) = sqlx::query("PRAGMA journal_mode=WAL;").execute(pool).await {
        tracing::warn!("Failed to set WAL journal mode: {}", e);
    }
    if let Err(e) = sqlx::query("PRAGMA synchronous=NORMAL;").execute(pool).await {
        tracing::warn!("Failed to set synchronous mode: {}", e);
    }
    if let Err(e) = sqlx::query("PRAGMA busy_timeout=10000;").execute(pool).await {
        tracing::warn!("Failed to set busy_timeout: {}", e);
    }

    // One table per pool, all cut from the same pattern. AUTOINCREMENT keeps
    // rowids monotonic, so ids of deleted assets are never handed out again.
    for kind in PoolKind::ALL {
        let ddl = format!(
            r#"CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                path TEXT NOT NULL
            )"#,
            kind.table()
        );
        sqlx::query(&ddl).execute(pool).await?;
    }

    // Name indexes speed up delete-by-name; creation failures are non-fatal
    for kind in PoolKind::ALL {
        let table = kind.table();
        let name = format!("idx_{}_name", table);
        let query = format!("CREATE INDEX IF NOT EXISTS {} ON {}(name)", name, table);
        if let Err(e) = sqlx::query(&query).execute(pool).await {
            match &e {
                sqlx::Error::Database(db_err) => {
                    let msg = db_err.message().to_lowercase();
                    if msg.contains("already exists") || msg.contains("duplicate") {
                        tracing::debug!("Index {} already exists, skipping", name);
                    } else {
                        tracing::warn!("Failed to create index {}: {}", name, e);
                    }
                }
                _ => {
                    tracing::warn!("Failed to create index {}: {}", name, e);
                }
            }
        }
    }

    Ok(())
}
