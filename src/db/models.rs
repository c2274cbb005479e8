use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};
use sqlx::FromRow;

/// Envelope JSON keys owned by the server; stripped from client payloads
/// before storage and re-attached on the way out.
pub const ENVELOPE_KEYS: [&str; 4] = ["id", "order", "created_at", "updated_at"];

/// One row of any content table: identity, display position, the freeform
/// field document, and server-assigned timestamps.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct DbRecord {
    pub id: i64,
    pub position: i64,
    pub data: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbRecord {
    /// Merges the stored field document with the envelope columns into the
    /// wire shape: `{ id, order, created_at, updated_at, ...fields }`.
    pub fn into_value(self) -> Value {
        let mut obj = match serde_json::from_str(&self.data) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        obj.insert("id".to_string(), json!(self.id));
        obj.insert("order".to_string(), json!(self.position));
        obj.insert("created_at".to_string(), json!(self.created_at));
        obj.insert("updated_at".to_string(), json!(self.updated_at));
        Value::Object(obj)
    }
}
