//! Database schema types

use chrono::{DateTime, Utc};
use ff_core::RfqSubmission;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub country: Option<String>,
    pub message: Option<String>,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

impl Lead {
    pub fn from_submission(submission: RfqSubmission, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: submission.name,
            email: submission.email,
            country: submission.country,
            message: submission.message,
            source: submission.source,
            created_at,
        }
    }
}
