//! # Records REST API
//!
//! HTTP endpoints for create/read/update/delete over the `records` table.
//!
//! - `GET /records/` - list all records
//! - `POST /records/` - create a record
//! - `GET /records/{id}` - fetch one record
//! - `PUT /records/{id}` - replace a record's fields
//! - `DELETE /records/{id}` - remove a record

pub mod auth;
pub mod errors;
pub mod handler;
pub mod server;

pub use auth::{TokenAuth, AUTH_HEADER};
pub use errors::{ErrorResponse, RestError, RestResult};
pub use server::RecordsServer;
