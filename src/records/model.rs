//! Record types

use serde::{Deserialize, Serialize};

use super::id::new_id;

/// A stored contact record
///
/// The same shape is used on the wire and as the row mapping for the
/// `records` table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::FromRow)]
pub struct Record {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
}

/// Creation payload: a record without an id
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
}

impl RecordRequest {
    /// Pair the request fields with a freshly minted id
    pub fn to_record(&self) -> Record {
        Record {
            id: new_id(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone_number: self.phone_number.clone(),
        }
    }
}
