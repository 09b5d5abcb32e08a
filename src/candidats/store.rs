// src/candidats/store.rs
//! Persistence port for candidats and its in-memory adapter

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use super::models::Candidat;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Store returned a candidat without an identifier")]
    MissingIdentifier,

    #[error("No identifier left to assign")]
    IdentifierSpaceExhausted,
}

/// Persistence operations the candidat endpoint relies on.
///
/// `save` assigns an identifier when the candidat has none and upserts
/// otherwise. `delete` of an unknown identifier is a no-op.
#[async_trait]
pub trait CandidatStore: Send + Sync {
    async fn save(&self, candidat: Candidat) -> Result<Candidat, StoreError>;

    async fn find_all(&self) -> Result<Vec<Candidat>, StoreError>;

    async fn find_one(&self, id: i64) -> Result<Option<Candidat>, StoreError>;

    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
struct MemoryState {
    records: BTreeMap<i64, Candidat>,
    last_id: i64,
}

/// Candidat store kept in process memory
#[derive(Debug, Default)]
pub struct InMemoryCandidatStore {
    state: RwLock<MemoryState>,
}

impl InMemoryCandidatStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CandidatStore for InMemoryCandidatStore {
    async fn save(&self, candidat: Candidat) -> Result<Candidat, StoreError> {
        let mut state = self.state.write().await;

        // Identifiers are never reused, even after an explicit upsert
        let id = match candidat.id {
            Some(id) => {
                state.last_id = state.last_id.max(id);
                id
            }
            None => {
                state.last_id = state
                    .last_id
                    .checked_add(1)
                    .ok_or(StoreError::IdentifierSpaceExhausted)?;
                state.last_id
            }
        };

        let saved = Candidat {
            id: Some(id),
            attributes: candidat.attributes,
        };
        state.records.insert(id, saved.clone());

        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<Candidat>, StoreError> {
        let state = self.state.read().await;
        Ok(state.records.values().cloned().collect())
    }

    async fn find_one(&self, id: i64) -> Result<Option<Candidat>, StoreError> {
        let state = self.state.read().await;
        Ok(state.records.get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.records.remove(&id);
        Ok(())
    }
}
