use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value as JsonValue;
use sqlx::{types::Json, FromRow, PgPool};
use uuid::Uuid;

use crate::error::Result;
use crate::models::user::{Address, ProfessionalInfo, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;
}

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    birth_date: Option<NaiveDate>,
    nationality: Option<String>,
    address: Option<Json<Address>>,
    professional_info: Option<Json<ProfessionalInfo>>,
    skills: Json<Vec<String>>,
    education: Json<Vec<JsonValue>>,
    languages: Json<Vec<JsonValue>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            birth_date: row.birth_date,
            nationality: row.nationality,
            address: row.address.map(|a| a.0),
            professional_info: row.professional_info.map(|p| p.0),
            skills: row.skills.0,
            education: row.education.0,
            languages: row.languages.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, phone, birth_date, nationality, address, professional_info,
                   skills, education, languages, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }
}
