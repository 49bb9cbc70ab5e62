//! Score persistence — pluggable store behind the scoring handlers.
//!
//! `AppState` holds an `Arc<dyn ScoreStore>`. `PgScoreStore` is the production
//! backend; tests substitute an in-memory one.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::assessment::{AssessmentRow, ResponseQuestionRow, ResponseWithQuestion};
use crate::models::score::ScoreRow;
use crate::scoring::NewScoreRow;

#[async_trait]
pub trait ScoreStore: Send + Sync {
    async fn find_assessment(&self, assessment_id: Uuid) -> Result<Option<AssessmentRow>, AppError>;

    /// Responses of one session, each joined with its question's metadata.
    async fn load_session_responses(
        &self,
        session_id: Uuid,
        user_id: Uuid,
        assessment_id: Uuid,
    ) -> Result<Vec<ResponseWithQuestion>, AppError>;

    /// Writes rows keyed on `(user_id, assessment_id, dimension)`, replacing
    /// any row already stored under the same key. Returns rows written.
    async fn upsert_scores(&self, rows: &[NewScoreRow]) -> Result<u64, AppError>;

    async fn list_scores(
        &self,
        user_id: Uuid,
        assessment_id: Option<Uuid>,
    ) -> Result<Vec<ScoreRow>, AppError>;
}

pub struct PgScoreStore {
    pool: PgPool,
}

impl PgScoreStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScoreStore for PgScoreStore {
    async fn find_assessment(&self, assessment_id: Uuid) -> Result<Option<AssessmentRow>, AppError> {
        Ok(sqlx::query_as::<_, AssessmentRow>(
            "SELECT id, code, title FROM assessments WHERE id = $1",
        )
        .bind(assessment_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn load_session_responses(
        &self,
        session_id: Uuid,
        user_id: Uuid,
        assessment_id: Uuid,
    ) -> Result<Vec<ResponseWithQuestion>, AppError> {
        let rows = sqlx::query_as::<_, ResponseQuestionRow>(
            r#"
            SELECT r.question_id,
                   r.answer_value,
                   r.score_value,
                   q.type     AS question_type,
                   q.category AS question_category,
                   q.options  AS question_options
            FROM responses r
            JOIN questions q ON q.id = r.question_id
            WHERE r.session_id = $1 AND r.user_id = $2 AND r.assessment_id = $3
            ORDER BY r.created_at ASC
            "#,
        )
        .bind(session_id)
        .bind(user_id)
        .bind(assessment_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ResponseWithQuestion::from).collect())
    }

    async fn upsert_scores(&self, rows: &[NewScoreRow]) -> Result<u64, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut written = 0;

        for row in rows {
            let result = sqlx::query(
                r#"
                INSERT INTO scores
                    (user_id, assessment_id, dimension, raw_score, normalized_score, category)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (user_id, assessment_id, dimension) DO UPDATE
                SET raw_score = EXCLUDED.raw_score,
                    normalized_score = EXCLUDED.normalized_score,
                    category = EXCLUDED.category,
                    created_at = NOW()
                "#,
            )
            .bind(row.user_id)
            .bind(row.assessment_id)
            .bind(&row.dimension)
            .bind(row.raw_score)
            .bind(row.normalized_score)
            .bind(row.category.as_str())
            .execute(&mut *tx)
            .await?;
            written += result.rows_affected();
        }

        tx.commit().await?;

        if let Some(first) = rows.first() {
            info!(
                "Upserted {written} score rows for user {} assessment {}",
                first.user_id, first.assessment_id
            );
        }
        Ok(written)
    }

    async fn list_scores(
        &self,
        user_id: Uuid,
        assessment_id: Option<Uuid>,
    ) -> Result<Vec<ScoreRow>, AppError> {
        Ok(sqlx::query_as::<_, ScoreRow>(
            r#"
            SELECT id, user_id, assessment_id, dimension, raw_score,
                   normalized_score, category, created_at
            FROM scores
            WHERE user_id = $1 AND ($2::uuid IS NULL OR assessment_id = $2)
            ORDER BY assessment_id, created_at ASC
            "#,
        )
        .bind(user_id)
        .bind(assessment_id)
        .fetch_all(&self.pool)
        .await?)
    }
}
