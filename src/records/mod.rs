//! # Records
//!
//! The record entity and the translation of request payloads into it.
//!
//! A record is identified by an opaque id minted once at creation time by
//! [`new_id`]. The id never changes afterwards; updates may only rewrite the
//! three data fields.

mod errors;
mod id;
mod model;
mod translator;

pub use errors::{DecodeError, DecodeResult};
pub use id::new_id;
pub use model::{Record, RecordRequest};
pub use translator::{decode_create, decode_update};
