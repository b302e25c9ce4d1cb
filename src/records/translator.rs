//! # Request Translator
//!
//! Decodes raw JSON request bodies into domain values.
//!
//! Field presence is not enforced: a missing field decodes to an empty
//! string. Anything that is not a JSON object with string fields is a
//! [`DecodeError`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::errors::DecodeResult;
use super::model::{Record, RecordRequest};

/// Decode a creation payload
pub fn decode_create(payload: &[u8]) -> DecodeResult<RecordRequest> {
    decode_object(payload)
}

/// Decode an update payload, which carries the full record including its id
pub fn decode_update(payload: &[u8]) -> DecodeResult<Record> {
    decode_object(payload)
}

// Derived struct deserializers also accept sequences, filling fields by
// position. Going through a map first limits payloads to JSON objects.
fn decode_object<T: DeserializeOwned>(payload: &[u8]) -> DecodeResult<T> {
    let object: Map<String, Value> = serde_json::from_slice(payload)?;
    Ok(serde_json::from_value(Value::Object(object))?)
}
