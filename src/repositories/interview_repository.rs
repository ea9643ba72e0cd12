use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::interview::Interview;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InterviewRepository: Send + Sync {
    async fn find_by_candidate(&self, candidate_id: Uuid) -> Result<Vec<Interview>>;

    /// Newest first by creation time, at most `limit` rows.
    async fn find_recent_by_candidate(
        &self,
        candidate_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Interview>>;
}

#[derive(Clone)]
pub struct PgInterviewRepository {
    pool: PgPool,
}

impl PgInterviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InterviewRepository for PgInterviewRepository {
    async fn find_by_candidate(&self, candidate_id: Uuid) -> Result<Vec<Interview>> {
        let interviews = sqlx::query_as::<_, Interview>(
            r#"
            SELECT id, candidate_id, scheduled_at, status, interview_type, created_at
            FROM interviews
            WHERE candidate_id = $1
            "#,
        )
        .bind(candidate_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(interviews)
    }

    async fn find_recent_by_candidate(
        &self,
        candidate_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Interview>> {
        let interviews = sqlx::query_as::<_, Interview>(
            r#"
            SELECT id, candidate_id, scheduled_at, status, interview_type, created_at
            FROM interviews
            WHERE candidate_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(candidate_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(interviews)
    }
}
