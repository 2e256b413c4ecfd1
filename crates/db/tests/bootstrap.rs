use sqlx::SqlitePool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: SqlitePool) {
    holonet_db::health_check(&pool).await.unwrap();

    for table in ["users", "people", "planets", "favorites"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Unique indexes follow the `uq_` naming convention.
#[sqlx::test(migrations = "./migrations")]
async fn test_unique_indexes_exist(pool: SqlitePool) {
    let names: Vec<(String,)> = sqlx::query_as(
        "SELECT name FROM sqlite_master WHERE type = 'index' AND name LIKE 'uq_%' ORDER BY name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let names: Vec<&str> = names.iter().map(|(n,)| n.as_str()).collect();
    assert_eq!(
        names,
        ["uq_favorites_user_people", "uq_favorites_user_planet", "uq_users_email"]
    );
}

/// `create_pool` creates a missing database file and enables foreign keys.
#[tokio::test]
async fn test_create_pool_on_fresh_file() {
    let path = std::env::temp_dir().join(format!("holonet-bootstrap-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let url = format!("sqlite://{}", path.display());

    let pool = holonet_db::create_pool(&url).await.unwrap();
    holonet_db::run_migrations(&pool).await.unwrap();

    let fk: (i64,) = sqlx::query_as("PRAGMA foreign_keys")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(fk.0, 1, "foreign keys must be enforced");

    pool.close().await;
    let _ = std::fs::remove_file(&path);
}
