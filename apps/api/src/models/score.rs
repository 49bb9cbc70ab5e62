use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted score row. One per `(user_id, assessment_id, dimension)`,
/// including the module-wide `Total` row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScoreRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub assessment_id: Uuid,
    pub dimension: String,
    pub raw_score: f64,
    pub normalized_score: i32,
    pub category: String,
    pub created_at: DateTime<Utc>,
}
