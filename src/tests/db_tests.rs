#[cfg(test)]
mod tests {
    use crate::config;
    use crate::db;
    use sqlx::migrate::MigrateDatabase;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_test_db() -> sqlx::SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        db::init_db(&pool).await.unwrap();

        pool
    }

    #[tokio::test]
    async fn test_init_db() {
        let pool = setup_test_db().await;

        // Check if tables exist
        let tables: Vec<String> =
            sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
                .fetch_all(&pool)
                .await
                .unwrap();

        assert!(tables.contains(&"models".to_string()));
        assert!(tables.contains(&"materials".to_string()));
        assert!(tables.contains(&"hdris".to_string()));
        assert!(tables.contains(&"lightsets".to_string()));

        // Name indexes should exist as well
        let indexes: Vec<String> =
            sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='index'")
                .fetch_all(&pool)
                .await
                .unwrap();

        assert!(indexes.contains(&"idx_models_name".to_string()));
        assert!(indexes.contains(&"idx_lightsets_name".to_string()));
    }

    #[tokio::test]
    async fn test_init_db_idempotent() {
        let pool = setup_test_db().await;

        // Running the schema setup again must not fail or duplicate tables
        db::init_db(&pool).await.unwrap();

        let tables: Vec<String> =
            sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table'")
                .fetch_all(&pool)
                .await
                .unwrap();

        for t in ["models", "materials", "hdris", "lightsets"] {
            assert_eq!(tables.iter().filter(|n| n.as_str() == t).count(), 1);
        }
    }

    #[tokio::test]
    async fn test_autoincrement_ids_stay_monotonic() {
        let pool = setup_test_db().await;

        sqlx::query("INSERT INTO models (name, path) VALUES ('a', '/a')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO models (name, path) VALUES ('b', '/b')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("DELETE FROM models WHERE name = 'b'").execute(&pool).await.unwrap();
        sqlx::query("INSERT INTO models (name, path) VALUES ('c', '/c')")
            .execute(&pool)
            .await
            .unwrap();

        // The id freed by deleting 'b' must not be handed out again
        let id: i64 = sqlx::query_scalar("SELECT id FROM models WHERE name = 'c'")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(id, 3);
    }

    #[tokio::test]
    async fn test_delete_by_name_is_bulk() {
        let pool = setup_test_db().await;

        sqlx::query("INSERT INTO materials (name, path) VALUES ('oak', '/t/oak_a.mat')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO materials (name, path) VALUES ('oak', '/t/oak_b.mat')")
            .execute(&pool)
            .await
            .unwrap();

        let result = sqlx::query("DELETE FROM materials WHERE name = ?1")
            .bind("oak")
            .execute(&pool)
            .await
            .unwrap();
        assert_eq!(result.rows_affected(), 2);

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM materials")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_file_database_created_on_disk() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let db_path = temp_dir.path().join("data").join("poolwart.db");
        let db_url = format!("sqlite://{}", db_path.display());

        // Parent directory is created on demand, as on server startup
        config::ensure_sqlite_parent_dir(&db_url).unwrap();
        assert!(db_path.parent().unwrap().is_dir());

        sqlx::Sqlite::create_database(&db_url).await.unwrap();
        let pool = SqlitePoolOptions::new().max_connections(1).connect(&db_url).await.unwrap();
        db::init_db(&pool).await.unwrap();

        sqlx::query("INSERT INTO hdris (name, path) VALUES ('sky', '/h/sky.hdr')")
            .execute(&pool)
            .await
            .unwrap();

        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM hdris").fetch_one(&pool).await.unwrap();
        assert_eq!(count, 1);

        pool.close().await;
        assert!(db_path.is_file());
    }
}
