use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use tracing::info;

pub async fn connect(path: &str) -> anyhow::Result<SqlitePool> {
    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true),
    )
    .await?;

    Ok(pool)
}

async fn migration_count(pool: &SqlitePool) -> anyhow::Result<i64> {
    match sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await
    {
        Ok(count) => Ok(count),
        // table does not exist before the first run
        Err(sqlx::Error::Database(_)) => Ok(0),
        Err(e) => Err(e.into()),
    }
}

pub async fn apply_migrations(pool: &SqlitePool) -> anyhow::Result<()> {
    let before_count = migration_count(pool).await?;

    sqlx::migrate!("./migrations").run(pool).await?;

    let after_count = migration_count(pool).await?;
    let limit = after_count - before_count;

    let new_migrations = sqlx::query_as::<_, (i64, String)>(
        "SELECT version, description FROM _sqlx_migrations ORDER BY version DESC LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    for (version, description) in new_migrations {
        info!(
            msg = "Applied database migration",
            %version,
            %description,
        );
    }

    Ok(())
}
