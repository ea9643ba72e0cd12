use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::error::Error;
use crate::models::application::Application;
use crate::models::dashboard::SimulationStats;
use crate::models::document::CandidateDocument;
use crate::models::interview::Interview;
use crate::models::user::User;
use crate::repositories::application_repository::MockApplicationRepository;
use crate::repositories::document_repository::MockDocumentRepository;
use crate::repositories::interview_repository::MockInterviewRepository;
use crate::repositories::user_repository::MockUserRepository;
use crate::repositories::RecordStores;
use crate::services::simulation_service::MockSimulationStatsProvider;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
}

pub fn document(doc_type: &str, status: &str, created_at: DateTime<Utc>) -> CandidateDocument {
    CandidateDocument {
        id: Uuid::new_v4(),
        candidate_id: Uuid::nil(),
        document_type: doc_type.to_string().into(),
        status: status.to_string().into(),
        file_name: None,
        created_at,
    }
}

pub fn interview(status: &str, scheduled_at: DateTime<Utc>, created_at: DateTime<Utc>) -> Interview {
    Interview {
        id: Uuid::new_v4(),
        candidate_id: Uuid::nil(),
        scheduled_at,
        status: status.to_string().into(),
        interview_type: None,
        created_at,
    }
}

pub fn application(status: &str, created_at: DateTime<Utc>) -> Application {
    Application {
        id: Uuid::new_v4(),
        candidate_id: Uuid::nil(),
        job_title: None,
        status: status.to_string().into(),
        created_at,
    }
}

fn newest_first<T: Clone>(items: &[T], created_at: impl Fn(&T) -> DateTime<Utc>, limit: i64) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| std::cmp::Reverse(created_at(item)));
    sorted.truncate(limit as usize);
    sorted
}

fn store_down() -> Error {
    Error::Database(sqlx::Error::PoolTimedOut)
}

/// Snapshot of one candidate's collections served through mockall doubles.
pub struct Fixture {
    pub documents: Vec<CandidateDocument>,
    pub interviews: Vec<Interview>,
    pub applications: Vec<Application>,
    pub user: Option<User>,
    pub simulations: SimulationStats,
    pub fail_interviews: bool,
}

impl Default for Fixture {
    fn default() -> Self {
        Self {
            documents: Vec::new(),
            interviews: Vec::new(),
            applications: Vec::new(),
            user: None,
            simulations: SimulationStats {
                completed: 0,
                available: 5,
            },
            fail_interviews: false,
        }
    }
}

impl Fixture {
    pub fn stores(self) -> RecordStores {
        let mut documents = MockDocumentRepository::new();
        let all = self.documents.clone();
        documents
            .expect_find_by_candidate()
            .returning(move |_| Ok(all.clone()));
        let all = self.documents;
        documents
            .expect_find_recent_by_candidate()
            .returning(move |_, limit| Ok(newest_first(&all, |d| d.created_at, limit)));

        let mut interviews = MockInterviewRepository::new();
        if self.fail_interviews {
            interviews
                .expect_find_by_candidate()
                .returning(|_| Err(store_down()));
            interviews
                .expect_find_recent_by_candidate()
                .returning(|_, _| Err(store_down()));
        } else {
            let all = self.interviews.clone();
            interviews
                .expect_find_by_candidate()
                .returning(move |_| Ok(all.clone()));
            let all = self.interviews;
            interviews
                .expect_find_recent_by_candidate()
                .returning(move |_, limit| Ok(newest_first(&all, |i| i.created_at, limit)));
        }

        let mut applications = MockApplicationRepository::new();
        let all = self.applications.clone();
        applications
            .expect_find_by_candidate()
            .returning(move |_| Ok(all.clone()));
        let all = self.applications;
        applications
            .expect_find_recent_by_candidate()
            .returning(move |_, limit| Ok(newest_first(&all, |a| a.created_at, limit)));

        let mut users = MockUserRepository::new();
        let user = self.user;
        users.expect_find_by_id().returning(move |_| Ok(user.clone()));

        let mut simulations = MockSimulationStatsProvider::new();
        let stats = self.simulations;
        simulations.expect_stats().returning(move |_| Ok(stats));

        RecordStores {
            documents: Arc::new(documents),
            interviews: Arc::new(interviews),
            applications: Arc::new(applications),
            users: Arc::new(users),
            simulations: Arc::new(simulations),
        }
    }
}
