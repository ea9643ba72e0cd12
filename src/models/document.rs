use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CandidateDocument {
    pub id: Uuid,
    pub candidate_id: Uuid,
    #[sqlx(try_from = "String")]
    pub document_type: DocumentType,
    #[sqlx(try_from = "String")]
    pub status: DocumentStatus,
    pub file_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocumentType {
    Cv,
    Passport,
    Diploma,
    Certificate,
    Other(String),
}

/// Types every candidate must have on file, in reporting order.
pub static REQUIRED_DOCUMENT_TYPES: [DocumentType; 3] =
    [DocumentType::Cv, DocumentType::Passport, DocumentType::Diploma];

impl DocumentType {
    pub fn as_str(&self) -> &str {
        match self {
            DocumentType::Cv => "cv",
            DocumentType::Passport => "passport",
            DocumentType::Diploma => "diploma",
            DocumentType::Certificate => "certificate",
            DocumentType::Other(raw) => raw,
        }
    }

    /// Display name used in activity feed texts.
    pub fn label(&self) -> &str {
        match self {
            DocumentType::Cv => "Currículo",
            DocumentType::Passport => "Passaporte",
            DocumentType::Diploma => "Diploma",
            DocumentType::Certificate => "Certificado",
            DocumentType::Other(raw) => raw,
        }
    }
}

impl From<String> for DocumentType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "cv" => DocumentType::Cv,
            "passport" => DocumentType::Passport,
            "diploma" => DocumentType::Diploma,
            "certificate" => DocumentType::Certificate,
            _ => DocumentType::Other(value),
        }
    }
}

impl From<DocumentType> for String {
    fn from(value: DocumentType) -> Self {
        match value {
            DocumentType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocumentStatus {
    Pending,
    Verified,
    Rejected,
    Other(String),
}

impl DocumentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Verified => "verified",
            DocumentStatus::Rejected => "rejected",
            DocumentStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for DocumentStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => DocumentStatus::Pending,
            "verified" => DocumentStatus::Verified,
            "rejected" => DocumentStatus::Rejected,
            _ => DocumentStatus::Other(value),
        }
    }
}

impl From<DocumentStatus> for String {
    fn from(value: DocumentStatus) -> Self {
        match value {
            DocumentStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}
