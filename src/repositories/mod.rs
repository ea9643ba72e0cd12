//! Read-only access to the candidate-scoped collections.
//!
//! Each collection sits behind its own trait so the dashboard services can be
//! driven by Postgres in production and by fakes in tests.

pub mod application_repository;
pub mod document_repository;
pub mod interview_repository;
pub mod user_repository;

pub use application_repository::{ApplicationRepository, PgApplicationRepository};
pub use document_repository::{DocumentRepository, PgDocumentRepository};
pub use interview_repository::{InterviewRepository, PgInterviewRepository};
pub use user_repository::{PgUserRepository, UserRepository};

use std::sync::Arc;

use sqlx::PgPool;

use crate::services::simulation_service::{SimulationStatsProvider, UnimplementedSimulationStats};

/// Every collection the dashboard reads, bundled for sharing between services.
#[derive(Clone)]
pub struct RecordStores {
    pub documents: Arc<dyn DocumentRepository>,
    pub interviews: Arc<dyn InterviewRepository>,
    pub applications: Arc<dyn ApplicationRepository>,
    pub users: Arc<dyn UserRepository>,
    pub simulations: Arc<dyn SimulationStatsProvider>,
}

impl RecordStores {
    pub fn postgres(pool: PgPool, available_simulations: u32) -> Self {
        Self {
            documents: Arc::new(PgDocumentRepository::new(pool.clone())),
            interviews: Arc::new(PgInterviewRepository::new(pool.clone())),
            applications: Arc::new(PgApplicationRepository::new(pool.clone())),
            users: Arc::new(PgUserRepository::new(pool)),
            simulations: Arc::new(UnimplementedSimulationStats::new(available_simulations)),
        }
    }
}
