use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A candidate's application to a job posting.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub job_title: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApplicationStatus {
    Pending,
    Reviewing,
    Shortlisted,
    Rejected,
    Accepted,
    Other(String),
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Reviewing => "reviewing",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for ApplicationStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => ApplicationStatus::Pending,
            "reviewing" => ApplicationStatus::Reviewing,
            "shortlisted" => ApplicationStatus::Shortlisted,
            "rejected" => ApplicationStatus::Rejected,
            "accepted" => ApplicationStatus::Accepted,
            _ => ApplicationStatus::Other(value),
        }
    }
}

impl From<ApplicationStatus> for String {
    fn from(value: ApplicationStatus) -> Self {
        match value {
            ApplicationStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}
