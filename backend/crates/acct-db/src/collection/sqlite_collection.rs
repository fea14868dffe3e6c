use crate::{CollectionName, DocumentCollection, Result as DbErrorResult};

use std::sync::Arc;

use async_trait::async_trait;
use log::info;
use serde_json::Value;
use sqlx::SqlitePool;

/// `DocumentCollection` stored as one SQLite table of `(id, document)` rows,
/// the document kept as JSON text.
#[derive(Debug, Clone)]
pub struct SqliteCollection {
    pool: SqlitePool,
    name: CollectionName,
    select_sql: Arc<str>,
    upsert_sql: Arc<str>,
}

impl SqliteCollection {
    /// Bind `name` to `pool`, creating the backing table if missing.
    pub async fn open(pool: SqlitePool, name: CollectionName) -> DbErrorResult<Self> {
        let table = name.table_identifier();

        sqlx::query(&format!(
            r#"
              CREATE TABLE IF NOT EXISTS {table} (
                  id TEXT PRIMARY KEY NOT NULL,
                  document TEXT NOT NULL
              )
              "#
        ))
        .execute(&pool)
        .await?;

        info!("Opened collection {name}");

        Ok(Self {
            select_sql: format!("SELECT document FROM {table} WHERE id = ?").into(),
            upsert_sql: format!(
                r#"
                  INSERT INTO {table} (id, document) VALUES (?, ?)
                  ON CONFLICT(id) DO UPDATE SET document = excluded.document
                  "#
            )
            .into(),
            pool,
            name,
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl DocumentCollection for SqliteCollection {
    fn name(&self) -> &CollectionName {
        &self.name
    }

    async fn find_one(&self, id: &str) -> DbErrorResult<Option<Value>> {
        let document: Option<String> = sqlx::query_scalar(&self.select_sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(document
            .map(|text| serde_json::from_str(&text))
            .transpose()?)
    }

    async fn replace_one(&self, id: &str, document: &Value) -> DbErrorResult<()> {
        sqlx::query(&self.upsert_sql)
            .bind(id)
            .bind(document.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
