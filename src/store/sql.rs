//! # SQL Record Store
//!
//! [`RecordStore`] over a sqlx connection pool, for MySQL or PostgreSQL.
//!
//! The pool is the only shared resource. It is internally synchronised, so
//! request tasks use it concurrently without any extra locking.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::records::Record;

use super::engine::{ConnectionDescriptor, DbEngine};
use super::errors::{StoreError, StoreOperation, StoreResult};
use super::RecordStore;

/// SQL text for one engine
struct Statements {
    select_one: &'static str,
    select_all: &'static str,
    upsert: &'static str,
    delete: &'static str,
}

// MySQL 8.0.19+ row alias syntax for ON DUPLICATE KEY UPDATE.
const MYSQL: Statements = Statements {
    select_one: "SELECT id, first_name, last_name, phone_number FROM records WHERE id = ?",
    select_all: "SELECT id, first_name, last_name, phone_number FROM records",
    upsert: "INSERT INTO records (id, first_name, last_name, phone_number) VALUES (?, ?, ?, ?) AS new \
             ON DUPLICATE KEY UPDATE first_name = new.first_name, last_name = new.last_name, \
             phone_number = new.phone_number",
    delete: "DELETE FROM records WHERE id = ?",
};

const POSTGRES: Statements = Statements {
    select_one: "SELECT id, first_name, last_name, phone_number FROM records WHERE id = $1",
    select_all: "SELECT id, first_name, last_name, phone_number FROM records",
    upsert: "INSERT INTO records (id, first_name, last_name, phone_number) VALUES ($1, $2, $3, $4) \
             ON CONFLICT (id) DO UPDATE SET first_name = EXCLUDED.first_name, \
             last_name = EXCLUDED.last_name, phone_number = EXCLUDED.phone_number",
    delete: "DELETE FROM records WHERE id = $1",
};

/// Pool options shared by both engines
#[derive(Debug, Clone, Copy)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

enum DbPool {
    MySql(MySqlPool),
    Postgres(PgPool),
}

/// Record store backed by MySQL or PostgreSQL
pub struct SqlRecordStore {
    pool: DbPool,
}

impl SqlRecordStore {
    /// Open a pool for the descriptor's engine.
    ///
    /// At least one connection is established before this returns, so an
    /// unreachable database fails here rather than on the first request.
    pub async fn connect(
        descriptor: &ConnectionDescriptor,
        settings: PoolSettings,
    ) -> StoreResult<Self> {
        tracing::info!(database = %descriptor, "connecting to the database");

        let pool = match descriptor.engine {
            DbEngine::MySql => MySqlPoolOptions::new()
                .max_connections(settings.max_connections)
                .acquire_timeout(settings.acquire_timeout)
                .connect_with(descriptor.mysql_options())
                .await
                .map(DbPool::MySql),
            DbEngine::Postgres => PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .acquire_timeout(settings.acquire_timeout)
                .connect_with(descriptor.postgres_options())
                .await
                .map(DbPool::Postgres),
        };

        let pool = pool.map_err(|err| {
            tracing::error!(database = %descriptor, error = %err, "cannot connect to the database");
            StoreError::Connect(descriptor.to_string())
        })?;

        Ok(Self { pool })
    }

    pub fn engine(&self) -> DbEngine {
        match self.pool {
            DbPool::MySql(_) => DbEngine::MySql,
            DbPool::Postgres(_) => DbEngine::Postgres,
        }
    }

    fn statements(&self) -> &'static Statements {
        match self.pool {
            DbPool::MySql(_) => &MYSQL,
            DbPool::Postgres(_) => &POSTGRES,
        }
    }

    /// Close all pooled connections
    pub async fn close(&self) {
        match &self.pool {
            DbPool::MySql(pool) => pool.close().await,
            DbPool::Postgres(pool) => pool.close().await,
        }
    }
}

#[async_trait]
impl RecordStore for SqlRecordStore {
    async fn get_by_id(&self, id: &str) -> StoreResult<Option<Record>> {
        let sql = self.statements().select_one;
        let result = match &self.pool {
            DbPool::MySql(pool) => {
                sqlx::query_as::<_, Record>(sql)
                    .bind(id)
                    .fetch_optional(pool)
                    .await
            }
            DbPool::Postgres(pool) => {
                sqlx::query_as::<_, Record>(sql)
                    .bind(id)
                    .fetch_optional(pool)
                    .await
            }
        };

        result.map_err(|err| StoreError::query(StoreOperation::GetOne, err))
    }

    async fn get_all(&self) -> StoreResult<Vec<Record>> {
        let sql = self.statements().select_all;
        let result = match &self.pool {
            DbPool::MySql(pool) => sqlx::query_as::<_, Record>(sql).fetch_all(pool).await,
            DbPool::Postgres(pool) => sqlx::query_as::<_, Record>(sql).fetch_all(pool).await,
        };

        result.map_err(|err| StoreError::query(StoreOperation::GetAll, err))
    }

    async fn upsert(&self, record: &Record) -> StoreResult<()> {
        let sql = self.statements().upsert;
        let result = match &self.pool {
            DbPool::MySql(pool) => sqlx::query(sql)
                .bind(&record.id)
                .bind(&record.first_name)
                .bind(&record.last_name)
                .bind(&record.phone_number)
                .execute(pool)
                .await
                .map(|_| ()),
            DbPool::Postgres(pool) => sqlx::query(sql)
                .bind(&record.id)
                .bind(&record.first_name)
                .bind(&record.last_name)
                .bind(&record.phone_number)
                .execute(pool)
                .await
                .map(|_| ()),
        };

        result.map_err(|err| StoreError::query(StoreOperation::Save, err))
    }

    async fn delete(&self, id: &str) -> StoreResult<bool> {
        let sql = self.statements().delete;
        let result = match &self.pool {
            DbPool::MySql(pool) => sqlx::query(sql)
                .bind(id)
                .execute(pool)
                .await
                .map(|done| done.rows_affected()),
            DbPool::Postgres(pool) => sqlx::query(sql)
                .bind(id)
                .execute(pool)
                .await
                .map(|done| done.rows_affected()),
        };

        result
            .map(|rows| rows > 0)
            .map_err(|err| StoreError::query(StoreOperation::Delete, err))
    }
}
