use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::Result;
use crate::models::application::{Application, ApplicationStatus};
use crate::models::dashboard::{QuickStats, SimulationStats};
use crate::models::document::{CandidateDocument, DocumentStatus};
use crate::models::interview::{Interview, InterviewStatus};
use crate::models::user::User;
use crate::repositories::RecordStores;
use crate::services::profile_service::profile_completion;

#[derive(Clone)]
pub struct StatsService {
    stores: RecordStores,
}

impl StatsService {
    pub fn new(stores: RecordStores) -> Self {
        Self { stores }
    }

    pub async fn quick_stats(&self, candidate_id: Uuid, now: DateTime<Utc>) -> Result<QuickStats> {
        let (documents, interviews, applications, user, simulations) = tokio::try_join!(
            self.stores.documents.find_by_candidate(candidate_id),
            self.stores.interviews.find_by_candidate(candidate_id),
            self.stores.applications.find_by_candidate(candidate_id),
            self.stores.users.find_by_id(candidate_id),
            self.stores.simulations.stats(candidate_id),
        )?;

        Ok(compute_quick_stats(
            &documents,
            &interviews,
            &applications,
            user.as_ref(),
            simulations,
            now,
        ))
    }
}

fn count<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> u32 {
    items.iter().filter(|item| predicate(*item)).count() as u32
}

pub fn compute_quick_stats(
    documents: &[CandidateDocument],
    interviews: &[Interview],
    applications: &[Application],
    user: Option<&User>,
    simulations: SimulationStats,
    now: DateTime<Utc>,
) -> QuickStats {
    QuickStats {
        total_documents: documents.len() as u32,
        pending_documents: count(documents, |d| d.status == DocumentStatus::Pending),
        verified_documents: count(documents, |d| d.status == DocumentStatus::Verified),
        rejected_documents: count(documents, |d| d.status == DocumentStatus::Rejected),
        upcoming_interviews: count(interviews, |i| {
            i.scheduled_at > now && i.status == InterviewStatus::Scheduled
        }),
        total_interviews: interviews.len() as u32,
        completed_interviews: count(interviews, |i| i.status == InterviewStatus::Completed),
        total_applications: applications.len() as u32,
        pending_applications: count(applications, |a| a.status == ApplicationStatus::Pending),
        shortlisted_applications: count(applications, |a| {
            a.status == ApplicationStatus::Shortlisted
        }),
        rejected_applications: count(applications, |a| a.status == ApplicationStatus::Rejected),
        accepted_applications: count(applications, |a| a.status == ApplicationStatus::Accepted),
        completed_simulations: simulations.completed,
        available_simulations: simulations.available,
        profile_completion: profile_completion(user).percentage,
    }
}
