//! recordkeeper - an HTTP service for contact records
//!
//! Create/read/update/delete over a single `records` table in MySQL or
//! PostgreSQL, optionally gated by a shared-secret header.

pub mod cli;
pub mod config;
pub mod observability;
pub mod records;
pub mod rest_api;
pub mod store;
