use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::document::CandidateDocument;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn find_by_candidate(&self, candidate_id: Uuid) -> Result<Vec<CandidateDocument>>;

    /// Newest first, at most `limit` rows.
    async fn find_recent_by_candidate(
        &self,
        candidate_id: Uuid,
        limit: i64,
    ) -> Result<Vec<CandidateDocument>>;
}

#[derive(Clone)]
pub struct PgDocumentRepository {
    pool: PgPool,
}

impl PgDocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentRepository for PgDocumentRepository {
    async fn find_by_candidate(&self, candidate_id: Uuid) -> Result<Vec<CandidateDocument>> {
        let documents = sqlx::query_as::<_, CandidateDocument>(
            r#"
            SELECT id, candidate_id, document_type, status, file_name, created_at
            FROM candidate_documents
            WHERE candidate_id = $1
            "#,
        )
        .bind(candidate_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(documents)
    }

    async fn find_recent_by_candidate(
        &self,
        candidate_id: Uuid,
        limit: i64,
    ) -> Result<Vec<CandidateDocument>> {
        let documents = sqlx::query_as::<_, CandidateDocument>(
            r#"
            SELECT id, candidate_id, document_type, status, file_name, created_at
            FROM candidate_documents
            WHERE candidate_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(candidate_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(documents)
    }
}
