//! SQL Store Tests
//!
//! Runs the store's statements against a live database. Ignored by default.
//! To run them, create the table from `sql/<engine>.sql`, export the same
//! `DB_*` variables the service reads (`DB_ENGINE`, `DB_HOST`, `DB_PORT`,
//! `DB_USERNAME`, `DB_PASSWORD`, `DB_NAME`), then:
//!
//! ```text
//! cargo test --test sql_store -- --ignored
//! ```

use clap::Parser;
use recordkeeper::config::Settings;
use recordkeeper::records::{new_id, Record};
use recordkeeper::store::{RecordStore, SqlRecordStore};

// =============================================================================
// Helper Functions
// =============================================================================

async fn connect() -> SqlRecordStore {
    let settings = Settings::try_parse_from(["recordkeeper", "--service-port", "0"]).unwrap();
    SqlRecordStore::connect(&settings.connection_descriptor(), settings.pool_settings())
        .await
        .unwrap()
}

fn record(id: &str, first_name: &str, phone_number: &str) -> Record {
    Record {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: "Lovelace".to_string(),
        phone_number: phone_number.to_string(),
    }
}

// =============================================================================
// Statement Tests
// =============================================================================

/// Upserting one id twice leaves a single row holding the latest values.
#[tokio::test]
#[ignore = "needs a database configured through DB_* variables"]
async fn test_upsert_inserts_then_overwrites() {
    let store = connect().await;
    let id = new_id();

    store.upsert(&record(&id, "Ada", "555-0100")).await.unwrap();
    store.upsert(&record(&id, "Augusta", "555-0199")).await.unwrap();

    let stored = store.get_by_id(&id).await.unwrap().unwrap();
    assert_eq!(stored, record(&id, "Augusta", "555-0199"));

    let matching = store
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.id == id)
        .count();
    assert_eq!(matching, 1);

    store.delete(&id).await.unwrap();
}

#[tokio::test]
#[ignore = "needs a database configured through DB_* variables"]
async fn test_get_by_unknown_id_is_absent() {
    let store = connect().await;
    assert!(store.get_by_id(&new_id()).await.unwrap().is_none());
}

/// Delete reports whether a row went away and is a no-op for unknown ids.
#[tokio::test]
#[ignore = "needs a database configured through DB_* variables"]
async fn test_delete_reports_rows_affected() {
    let store = connect().await;
    let id = new_id();

    store.upsert(&record(&id, "Ada", "555-0100")).await.unwrap();
    assert!(store.delete(&id).await.unwrap());
    assert!(!store.delete(&id).await.unwrap());
    assert!(store.get_by_id(&id).await.unwrap().is_none());

    store.close().await;
}
