use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::dashboard::SimulationStats;

/// Source of interview-simulation counts for a candidate.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SimulationStatsProvider: Send + Sync {
    async fn stats(&self, candidate_id: Uuid) -> Result<SimulationStats>;
}

/// Placeholder provider used until simulation attempts are persisted.
/// Reports no completed simulations and a fixed catalogue size.
#[derive(Debug, Clone)]
pub struct UnimplementedSimulationStats {
    available: u32,
}

impl UnimplementedSimulationStats {
    pub const DEFAULT_AVAILABLE: u32 = 5;

    pub fn new(available: u32) -> Self {
        Self { available }
    }
}

impl Default for UnimplementedSimulationStats {
    fn default() -> Self {
        Self::new(Self::DEFAULT_AVAILABLE)
    }
}

#[async_trait]
impl SimulationStatsProvider for UnimplementedSimulationStats {
    async fn stats(&self, _candidate_id: Uuid) -> Result<SimulationStats> {
        Ok(SimulationStats {
            completed: 0,
            available: self.available,
        })
    }
}
