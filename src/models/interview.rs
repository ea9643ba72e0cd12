use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    #[sqlx(try_from = "String")]
    pub status: InterviewStatus,
    pub interview_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
    Cancelled,
    Other(String),
}

impl InterviewStatus {
    pub fn as_str(&self) -> &str {
        match self {
            InterviewStatus::Scheduled => "scheduled",
            InterviewStatus::Completed => "completed",
            InterviewStatus::Cancelled => "cancelled",
            InterviewStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for InterviewStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "scheduled" => InterviewStatus::Scheduled,
            "completed" => InterviewStatus::Completed,
            "cancelled" => InterviewStatus::Cancelled,
            _ => InterviewStatus::Other(value),
        }
    }
}

impl From<InterviewStatus> for String {
    fn from(value: InterviewStatus) -> Self {
        match value {
            InterviewStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}
