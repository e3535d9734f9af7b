//! Board wire types.

use crate::stroke::Stroke;
use serde::{Deserialize, Deserializer, Serialize};

/// A named stroke container owned by a user.
///
/// Stroke order is z-order. Boards are never partially deleted; clear
/// is a replace with an empty collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub strokes: Vec<Stroke>,
}

/// Board listing entry, without the stroke collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl From<&Board> for BoardSummary {
    fn from(board: &Board) -> Self {
        Self {
            id: board.id.clone(),
            title: board.title.clone(),
            created_at: board.created_at.clone(),
            updated_at: board.updated_at.clone(),
        }
    }
}

/// Accept board ids as either JSON strings or numbers; they end up in
/// URL paths either way.
fn id_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    use serde_json::Value;

    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "board id must be a string or number, got {other}"
        ))),
    }
}
