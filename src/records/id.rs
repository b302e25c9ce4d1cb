//! Record identifier generation

use uuid::Uuid;

/// Mint a fresh record id.
///
/// Ids are UUIDv7 strings: time-ordered, with enough randomness that two
/// calls never collide in practice.
pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}
