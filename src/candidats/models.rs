// src/candidats/models.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;

/// A candidat: an optional store-assigned identifier plus opaque attributes.
///
/// Attributes are flattened into the JSON body, so `{"id":1,"name":"Alice"}`
/// maps to `id = Some(1)` and `attributes = {"name":"Alice"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidat {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Row shape of the `candidats` table; attributes are stored as JSON text
#[derive(Debug, FromRow)]
pub struct CandidatRow {
    pub id: i64,
    pub attributes: String,
}

impl TryFrom<CandidatRow> for Candidat {
    type Error = serde_json::Error;

    fn try_from(row: CandidatRow) -> Result<Self, Self::Error> {
        let attributes: Map<String, Value> = serde_json::from_str(&row.attributes)?;
        Ok(Candidat {
            id: Some(row.id),
            attributes,
        })
    }
}
