//! Entry point for the candidate dashboard.
//!
//! The three sections are independent and fetched concurrently. Any store
//! failure empties the whole summary: `get_dashboard_summary` never fails,
//! it logs the failing section and returns `DashboardSummary::default()`.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::dashboard::{Activity, DashboardAlert, DashboardSummary, QuickStats};
use crate::repositories::RecordStores;
use crate::services::activity_service::ActivityService;
use crate::services::alert_service::AlertService;
use crate::services::stats_service::StatsService;
use crate::utils::time;

#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    #[error("alert generation failed: {0}")]
    Alerts(#[source] Error),

    #[error("quick stats failed: {0}")]
    QuickStats(#[source] Error),

    #[error("recent activity failed: {0}")]
    RecentActivity(#[source] Error),
}

impl AggregationError {
    pub fn section(&self) -> &'static str {
        match self {
            AggregationError::Alerts(_) => "alerts",
            AggregationError::QuickStats(_) => "quick_stats",
            AggregationError::RecentActivity(_) => "recent_activity",
        }
    }
}

#[derive(Clone)]
pub struct DashboardService {
    alerts: AlertService,
    stats: StatsService,
    activity: ActivityService,
}

impl DashboardService {
    pub fn new(stores: RecordStores) -> Self {
        Self {
            alerts: AlertService::new(stores.clone()),
            stats: StatsService::new(stores.clone()),
            activity: ActivityService::new(stores),
        }
    }

    pub async fn get_dashboard_summary(&self, candidate_id: Uuid) -> DashboardSummary {
        self.get_dashboard_summary_at(candidate_id, time::now()).await
    }

    pub async fn get_dashboard_summary_at(
        &self,
        candidate_id: Uuid,
        now: DateTime<Utc>,
    ) -> DashboardSummary {
        match self.try_get_dashboard_summary(candidate_id, now).await {
            Ok(summary) => summary,
            Err(err) => {
                tracing::error!(
                    candidate_id = %candidate_id,
                    section = err.section(),
                    error = ?err,
                    "Dashboard aggregation failed, serving empty summary"
                );
                DashboardSummary::default()
            }
        }
    }

    pub async fn try_get_dashboard_summary(
        &self,
        candidate_id: Uuid,
        now: DateTime<Utc>,
    ) -> std::result::Result<DashboardSummary, AggregationError> {
        let (alerts, quick_stats, recent_activity) = tokio::try_join!(
            async {
                self.alerts
                    .generate(candidate_id, now)
                    .await
                    .map_err(AggregationError::Alerts)
            },
            async {
                self.stats
                    .quick_stats(candidate_id, now)
                    .await
                    .map_err(AggregationError::QuickStats)
            },
            async {
                self.activity
                    .recent_activity(candidate_id)
                    .await
                    .map_err(AggregationError::RecentActivity)
            },
        )?;

        Ok(DashboardSummary {
            alerts,
            quick_stats,
            recent_activity,
        })
    }

    pub async fn alerts(&self, candidate_id: Uuid) -> Result<Vec<DashboardAlert>> {
        self.alerts.generate(candidate_id, time::now()).await
    }

    pub async fn quick_stats(&self, candidate_id: Uuid) -> Result<QuickStats> {
        self.stats.quick_stats(candidate_id, time::now()).await
    }

    pub async fn recent_activity(&self, candidate_id: Uuid) -> Result<Vec<Activity>> {
        self.activity.recent_activity(candidate_id).await
    }
}
