//! # Record Endpoint Handlers
//!
//! One handler per route. Each runs a fixed sequence of checks and the
//! first failing check picks the response:
//!
//! | Handler | Sequence | Success |
//! |---|---|---|
//! | list | get_all | 200 + array |
//! | get | get_by_id | 200 + record |
//! | create | decode → mint id → upsert → re-read | 201 + record |
//! | update | id check → get_by_id → decode → upsert → re-read | 200 + record |
//! | delete | get_by_id → delete | 204 |
//!
//! Update decodes the body up front but only acts on the result in two
//! places: a decoded body whose id differs from the path is a 400 before
//! the existence check, so it is rejected whether or not the path id
//! exists; an undecodable body is a 400 only after the existence check, so
//! an unknown id is still a 404.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::records::{decode_create, decode_update, Record};
use crate::store::{RecordStore, StoreError, StoreOperation};

use super::errors::{RestError, RestResult};

/// Shared state type
pub type StoreState<S> = State<Arc<S>>;


/// `GET /records/`
pub async fn list_records<S: RecordStore>(
    State(store): StoreState<S>,
) -> RestResult<Json<Vec<Record>>> {
    let records = store.get_all().await?;
    Ok(Json(records))
}

/// `GET /records/{id}`
pub async fn get_record<S: RecordStore>(
    State(store): StoreState<S>,
    Path(record_id): Path<String>,
) -> RestResult<Json<Record>> {
    let record = store
        .get_by_id(&record_id)
        .await?
        .ok_or(RestError::NotFound)?;
    Ok(Json(record))
}

/// `POST /records/`
pub async fn create_record<S: RecordStore>(
    State(store): StoreState<S>,
    body: Bytes,
) -> RestResult<(StatusCode, Json<Record>)> {
    let record = decode_create(&body)?.to_record();

    store.upsert(&record).await?;
    tracing::info!(record_id = %record.id, "record created");

    // The row was just written under a fresh id; not finding it is a store fault.
    let saved = store.get_by_id(&record.id).await?.ok_or_else(|| {
        StoreError::query(StoreOperation::GetOne, "created record missing on read-back")
    })?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// `PUT /records/{id}`
pub async fn update_record<S: RecordStore>(
    State(store): StoreState<S>,
    Path(record_id): Path<String>,
    body: Bytes,
) -> RestResult<Json<Record>> {
    let decoded = decode_update(&body);
    if matches!(&decoded, Ok(record) if record.id != record_id) {
        return Err(RestError::IdMismatch);
    }

    if store.get_by_id(&record_id).await?.is_none() {
        return Err(RestError::NotFound);
    }

    let record = decoded?;
    store.upsert(&record).await?;
    tracing::info!(record_id = %record_id, "record updated");

    // A concurrent delete can remove the row between the write and this read.
    let saved = store
        .get_by_id(&record_id)
        .await?
        .ok_or(RestError::NotFound)?;
    Ok(Json(saved))
}

/// `DELETE /records/{id}`
pub async fn delete_record<S: RecordStore>(
    State(store): StoreState<S>,
    Path(record_id): Path<String>,
) -> RestResult<StatusCode> {
    if store.get_by_id(&record_id).await?.is_none() {
        return Err(RestError::NotFound);
    }

    // Zero rows means another request deleted it after the check above.
    if !store.delete(&record_id).await? {
        return Err(RestError::NotFound);
    }
    tracing::info!(record_id = %record_id, "record deleted");

    Ok(StatusCode::NO_CONTENT)
}
