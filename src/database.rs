// src/database.rs
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::{info, instrument};

/// Sample catalog inserted on first start: (name, category, unit, cost_price, sale_price).
pub const SEED_PRODUCTS: [(&str, &str, &str, f64, f64); 5] = [
    ("Konstruktionsvirke 45x195mm", "Virke", "m", 45.0, 89.0),
    ("Skruv 4.2x55mm (200-pack)", "Fästelement", "förpackning", 85.0, 159.0),
    ("Mineralull 195mm", "Isolering", "m²", 95.0, 179.0),
    ("Gipsskiva 13mm", "Skivor", "st", 65.0, 119.0),
    ("Betong C25/30", "Betong", "m³", 950.0, 1650.0),
];

/// Opens (creating if missing) the database file in WAL mode, applies migrations and seeds.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;
    seed_products(&pool).await?;

    Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Inserts the sample products in one transaction, only when the table is empty.
/// Returns the number of rows inserted.
#[instrument(skip(pool))]
pub async fn seed_products(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Products")
        .fetch_one(&mut *tx)
        .await?;

    if count > 0 {
        tx.rollback().await?;
        return Ok(0);
    }

    let mut inserted = 0;
    for (name, category, unit, cost_price, sale_price) in SEED_PRODUCTS {
        inserted += sqlx::query(
            "INSERT INTO Products (name, category, unit, cost_price, sale_price)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind(category)
        .bind(unit)
        .bind(cost_price)
        .bind(sale_price)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    tx.commit().await?;
    info!("Database seeded with {} products.", inserted);
    Ok(inserted)
}

/// Single-connection in-memory database, migrated and seeded.
#[cfg(test)]
pub async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();
    init_schema(&pool).await.unwrap();
    seed_products(&pool).await.unwrap();
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn product_count(pool: &SqlitePool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM Products")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn seeds_five_products_once() {
        let pool = memory_pool().await;
        assert_eq!(product_count(&pool).await, 5);

        assert_eq!(seed_products(&pool).await.unwrap(), 0);
        assert_eq!(product_count(&pool).await, 5);
    }

    #[tokio::test]
    async fn restart_against_seeded_file_keeps_five_rows() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("products.db").display());

        let first = create_pool(&url, 2).await.unwrap();
        assert_eq!(product_count(&first).await, 5);
        first.close().await;

        let second = create_pool(&url, 2).await.unwrap();
        assert_eq!(product_count(&second).await, 5);

        let mode: String = sqlx::query_scalar("PRAGMA journal_mode")
            .fetch_one(&second)
            .await
            .unwrap();
        assert_eq!(mode.to_lowercase(), "wal");
    }

    #[tokio::test]
    async fn seed_ids_are_sequential_from_one() {
        let pool = memory_pool().await;
        let ids: Vec<i64> = sqlx::query_scalar("SELECT id FROM Products ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
