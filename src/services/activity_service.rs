use uuid::Uuid;

use crate::error::Result;
use crate::models::application::{Application, ApplicationStatus};
use crate::models::dashboard::{Activity, ActivityType};
use crate::models::document::{CandidateDocument, DocumentStatus};
use crate::models::interview::{Interview, InterviewStatus};
use crate::repositories::RecordStores;
use crate::utils::time::epoch_millis;

/// Rows fetched from each collection before merging.
pub const RECENT_PER_SOURCE: i64 = 5;
/// Entries kept in the merged feed.
pub const FEED_LIMIT: usize = 10;

#[derive(Clone)]
pub struct ActivityService {
    stores: RecordStores,
}

impl ActivityService {
    pub fn new(stores: RecordStores) -> Self {
        Self { stores }
    }

    /// Newest five per collection, then the newest ten overall. A busy
    /// collection can crowd the others out of the second cut.
    pub async fn recent_activity(&self, candidate_id: Uuid) -> Result<Vec<Activity>> {
        let (documents, interviews, applications) = tokio::try_join!(
            self.stores
                .documents
                .find_recent_by_candidate(candidate_id, RECENT_PER_SOURCE),
            self.stores
                .interviews
                .find_recent_by_candidate(candidate_id, RECENT_PER_SOURCE),
            self.stores
                .applications
                .find_recent_by_candidate(candidate_id, RECENT_PER_SOURCE),
        )?;

        Ok(merge_feed(&documents, &interviews, &applications))
    }
}

pub fn merge_feed(
    documents: &[CandidateDocument],
    interviews: &[Interview],
    applications: &[Application],
) -> Vec<Activity> {
    let mut feed: Vec<Activity> = documents
        .iter()
        .map(document_activity)
        .chain(interviews.iter().map(interview_activity))
        .chain(applications.iter().map(application_activity))
        .collect();
    feed.sort_by(|a, b| b.date.cmp(&a.date));
    feed.truncate(FEED_LIMIT);
    feed
}

fn document_status_label(status: &DocumentStatus) -> &'static str {
    match status {
        DocumentStatus::Verified => "aprovado",
        DocumentStatus::Rejected => "rejeitado",
        _ => "enviado para análise",
    }
}

fn interview_status_label(status: &InterviewStatus) -> &'static str {
    match status {
        InterviewStatus::Scheduled => "agendada",
        InterviewStatus::Completed => "realizada",
        InterviewStatus::Cancelled => "cancelada",
        _ => "pendente",
    }
}

fn application_status_label(status: &ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Pending => "enviada",
        ApplicationStatus::Shortlisted => "pré-selecionada",
        ApplicationStatus::Rejected => "rejeitada",
        ApplicationStatus::Accepted => "aceita",
        _ => "em análise",
    }
}

fn document_activity(document: &CandidateDocument) -> Activity {
    let label = document_status_label(&document.status);
    let name = document.document_type.label();
    Activity {
        activity_type: ActivityType::Document,
        title: format!("Documento {}", label),
        description: document
            .file_name
            .clone()
            .unwrap_or_else(|| name.to_string()),
        date: document.created_at,
        status: document.status.as_str().to_string(),
        message: format!("Seu documento {} foi {}", name, label),
        timestamp: epoch_millis(document.created_at),
    }
}

fn interview_activity(interview: &Interview) -> Activity {
    let label = interview_status_label(&interview.status);
    Activity {
        activity_type: ActivityType::Interview,
        title: format!("Entrevista {}", label),
        description: interview
            .interview_type
            .clone()
            .unwrap_or_else(|| "Entrevista".to_string()),
        date: interview.created_at,
        status: interview.status.as_str().to_string(),
        message: format!(
            "Entrevista {} para {}",
            label,
            interview.scheduled_at.format("%d/%m/%Y %H:%M")
        ),
        timestamp: epoch_millis(interview.created_at),
    }
}

fn application_activity(application: &Application) -> Activity {
    let label = application_status_label(&application.status);
    let job = application.job_title.as_deref().unwrap_or("vaga");
    Activity {
        activity_type: ActivityType::Application,
        title: format!("Candidatura {}", label),
        description: job.to_string(),
        date: application.created_at,
        status: application.status.as_str().to_string(),
        message: format!("Sua candidatura para {} está {}", job, label),
        timestamp: epoch_millis(application.created_at),
    }
}
