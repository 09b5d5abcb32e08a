// src/candidats/repository.rs
//! SQLite-backed candidat store

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use super::models::{Candidat, CandidatRow};
use super::store::{CandidatStore, StoreError};

pub struct SqliteCandidatStore {
    db: SqlitePool,
}

impl SqliteCandidatStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CandidatStore for SqliteCandidatStore {
    async fn save(&self, candidat: Candidat) -> Result<Candidat, StoreError> {
        let attributes = serde_json::to_string(&candidat.attributes)?;
        let now = chrono::Utc::now().to_rfc3339();

        let row = match candidat.id {
            None => {
                sqlx::query_as::<_, CandidatRow>(
                    r#"
                    INSERT INTO candidats (attributes, created_at, updated_at)
                    VALUES (?, ?, ?)
                    RETURNING id, attributes
                    "#,
                )
                .bind(&attributes)
                .bind(&now)
                .bind(&now)
                .fetch_one(&self.db)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, CandidatRow>(
                    r#"
                    INSERT INTO candidats (id, attributes, created_at, updated_at)
                    VALUES (?, ?, ?, ?)
                    ON CONFLICT(id) DO UPDATE SET
                        attributes = excluded.attributes,
                        updated_at = excluded.updated_at
                    RETURNING id, attributes
                    "#,
                )
                .bind(id)
                .bind(&attributes)
                .bind(&now)
                .bind(&now)
                .fetch_one(&self.db)
                .await?
            }
        };

        debug!(candidat_id = row.id, "Saved candidat");

        Ok(Candidat::try_from(row)?)
    }

    async fn find_all(&self) -> Result<Vec<Candidat>, StoreError> {
        let rows = sqlx::query_as::<_, CandidatRow>(
            r#"
            SELECT id, attributes
            FROM candidats
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        rows.into_iter()
            .map(|row| Candidat::try_from(row).map_err(StoreError::from))
            .collect()
    }

    async fn find_one(&self, id: i64) -> Result<Option<Candidat>, StoreError> {
        let row = sqlx::query_as::<_, CandidatRow>(
            r#"
            SELECT id, attributes
            FROM candidats
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Candidat::try_from).transpose()?)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM candidats WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        debug!(
            candidat_id = id,
            rows_affected = result.rows_affected(),
            "Deleted candidat"
        );

        Ok(())
    }
}
