//! Encoding and decoding between entity records and the `record` column.
//!
//! Records are stored as compact JSON in the same flat shape the API speaks,
//! embedded snapshots included.

use serde::{Serialize, de::DeserializeOwned};

use crate::Result;

pub fn encode_record<E: Serialize>(record: &E) -> Result<String> {
  Ok(serde_json::to_string(record)?)
}

pub fn decode_record<E: DeserializeOwned>(s: &str) -> Result<E> {
  Ok(serde_json::from_str(s)?)
}
