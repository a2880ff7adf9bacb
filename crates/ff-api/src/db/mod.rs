//! Lead persistence

pub mod schema;

#[cfg(test)]
pub mod memory;

pub use schema::Lead;

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Write side of the lead table
#[async_trait]
pub trait LeadStore: Send + Sync {
    async fn insert(&self, lead: &Lead) -> Result<(), StoreError>;
}

/// Postgres-backed lead store
pub struct PgLeadStore {
    pool: PgPool,
}

impl PgLeadStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeadStore for PgLeadStore {
    async fn insert(&self, lead: &Lead) -> Result<(), StoreError> {
        if self.pool.is_closed() {
            return Err(StoreError::Unavailable("connection pool closed".to_string()));
        }

        sqlx::query(
            r#"
            INSERT INTO leads (id, name, email, country, message, source, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(lead.id)
        .bind(&lead.name)
        .bind(&lead.email)
        .bind(&lead.country)
        .bind(&lead.message)
        .bind(&lead.source)
        .bind(lead.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
