use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::application::Application;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    async fn find_by_candidate(&self, candidate_id: Uuid) -> Result<Vec<Application>>;

    async fn find_recent_by_candidate(
        &self,
        candidate_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Application>>;
}

#[derive(Clone)]
pub struct PgApplicationRepository {
    pool: PgPool,
}

impl PgApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationRepository for PgApplicationRepository {
    async fn find_by_candidate(&self, candidate_id: Uuid) -> Result<Vec<Application>> {
        let applications = sqlx::query_as::<_, Application>(
            r#"SELECT id, candidate_id, job_title, status, created_at FROM applications WHERE candidate_id = $1"#,
        )
        .bind(candidate_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(applications)
    }

    async fn find_recent_by_candidate(
        &self,
        candidate_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Application>> {
        let applications = sqlx::query_as::<_, Application>(
            r#"
            SELECT id, candidate_id, job_title, status, created_at
            FROM applications
            WHERE candidate_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(candidate_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(applications)
    }
}
