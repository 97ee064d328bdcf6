//! SQLite-backed `GeoSource`.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use tracing::{debug, info};

use crate::errors::SourceError;
use crate::interfaces::GeoSource;
use crate::sqlite::queries::VILLAGE_PAGE_QUERY;
use wilayah_shared::GeoRow;

/// Reads the administrative hierarchy from a SQLite database.
///
/// The database is opened read-only; a missing file is a connection error.
#[derive(Debug, Clone)]
pub struct SqliteGeoSource {
    pool: SqlitePool,
}

impl SqliteGeoSource {
    /// Open the database at `database_url`, e.g. `sqlite://wilayah.db`.
    pub async fn connect(database_url: &str) -> Result<Self, SourceError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| {
                SourceError::connection(format!("Invalid database URL {}: {}", database_url, e))
            })?
            .read_only(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| SourceError::connection(e.to_string()))?;

        info!(database_url = %database_url, "Opened SQLite source");

        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn map_row(row: &SqliteRow) -> Result<GeoRow, SourceError> {
        // The SQLite driver decodes NULL as "" for String, so NULL is checked explicitly.
        let column = |name: &str| -> Result<String, SourceError> {
            row.try_get::<Option<String>, _>(name)
                .map_err(|e| SourceError::scan(format!("{}: {}", name, e)))?
                .ok_or_else(|| SourceError::scan(format!("{}: NULL", name)))
        };

        Ok(GeoRow {
            village_id: column("village_id")?,
            village_name: column("village_name")?,
            district_id: column("district_id")?,
            district_name: column("district_name")?,
            city_id: column("city_id")?,
            city_name: column("city_name")?,
            province_id: column("province_id")?,
            province_name: column("province_name")?,
        })
    }
}

#[async_trait]
impl GeoSource for SqliteGeoSource {
    async fn fetch_page(&self, limit: usize, offset: usize) -> Result<Vec<GeoRow>, SourceError> {
        let limit = i64::try_from(limit)
            .map_err(|_| SourceError::query(format!("limit {} out of range", limit)))?;
        let offset = i64::try_from(offset)
            .map_err(|_| SourceError::query(format!("offset {} out of range", offset)))?;

        let rows = sqlx::query(VILLAGE_PAGE_QUERY)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| SourceError::query(e.to_string()))?;

        debug!(limit, offset, rows = rows.len(), "Fetched page");

        rows.iter().map(Self::map_row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const SCHEMA: [&str; 4] = [
        "CREATE TABLE provinces (id INTEGER PRIMARY KEY, name TEXT NOT NULL)",
        "CREATE TABLE cities \
         (id TEXT PRIMARY KEY, province_id INTEGER NOT NULL, name TEXT NOT NULL)",
        "CREATE TABLE districts (id TEXT PRIMARY KEY, city_id TEXT NOT NULL, name TEXT NOT NULL)",
        "CREATE TABLE villages (id TEXT PRIMARY KEY, district_id TEXT NOT NULL, name TEXT)",
    ];

    async fn memory_pool() -> SqlitePool {
        // A single connection that never recycles, so the in-memory database survives.
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    async fn seeded_source(villages: usize) -> SqliteGeoSource {
        let pool = memory_pool().await;
        for statement in SCHEMA {
            sqlx::query(statement).execute(&pool).await.unwrap();
        }

        sqlx::query("INSERT INTO provinces (id, name) VALUES (32, 'Jawa Barat')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query(
            "INSERT INTO cities (id, province_id, name) VALUES ('3273', 32, 'Kota Bandung')",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO districts (id, city_id, name) VALUES ('327301', '3273', 'Sukasari')",
        )
        .execute(&pool)
        .await
        .unwrap();

        for i in 0..villages {
            sqlx::query("INSERT INTO villages (id, district_id, name) VALUES (?, '327301', ?)")
                .bind(format!("327301{:04}", i))
                .bind(format!("Desa {}", i))
                .execute(&pool)
                .await
                .unwrap();
        }

        SqliteGeoSource::from_pool(pool)
    }

    #[tokio::test]
    async fn test_pages_cover_join_once() {
        let source = seeded_source(250).await;

        let mut sizes = Vec::new();
        let mut ids = HashSet::new();
        let mut offset = 0;
        loop {
            let page = source.fetch_page(100, offset).await.unwrap();
            sizes.push(page.len());
            if page.is_empty() {
                break;
            }
            ids.extend(page.into_iter().map(|row| row.village_id));
            offset += 100;
        }

        assert_eq!(sizes, vec![100, 100, 50, 0]);
        assert_eq!(ids.len(), 250);
    }

    #[tokio::test]
    async fn test_row_mapping() {
        let source = seeded_source(1).await;

        let page = source.fetch_page(10, 0).await.unwrap();

        assert_eq!(
            page,
            vec![GeoRow {
                village_id: "3273010000".to_string(),
                village_name: "Desa 0".to_string(),
                district_id: "327301".to_string(),
                district_name: "Sukasari".to_string(),
                city_id: "3273".to_string(),
                city_name: "Kota Bandung".to_string(),
                province_id: "32".to_string(),
                province_name: "Jawa Barat".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_null_column_is_scan_error() {
        let source = seeded_source(0).await;
        sqlx::query(
            "INSERT INTO villages (id, district_id, name) VALUES ('3273019999', '327301', NULL)",
        )
        .execute(&source.pool)
        .await
        .unwrap();

        let result = source.fetch_page(10, 0).await;

        match result {
            Err(SourceError::ScanError(msg)) => assert_eq!(msg, "village_name: NULL"),
            other => panic!("expected scan error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_tables_is_query_error() {
        let source = SqliteGeoSource::from_pool(memory_pool().await);

        let result = source.fetch_page(10, 0).await;

        assert!(matches!(result, Err(SourceError::QueryError(_))));
    }

    #[tokio::test]
    async fn test_connect_missing_file() {
        let result = SqliteGeoSource::connect("sqlite:///nonexistent-dir/wilayah.db").await;

        assert!(matches!(result, Err(SourceError::ConnectionError(_))));
    }
}
