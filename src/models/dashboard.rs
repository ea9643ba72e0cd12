//! Per-request dashboard view types. None of these are persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    Document,
    Interview,
    Simulation,
    Application,
    Profile,
    General,
}

/// Variant order is significant: `Ord` ranks `Urgent` highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertPriority {
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertAction {
    pub label: String,
    pub url: String,
}

impl AlertAction {
    pub fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAlert {
    /// Static rule key, e.g. `rejected-documents`.
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub priority: AlertPriority,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<AlertAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickStats {
    pub total_documents: u32,
    pub pending_documents: u32,
    pub verified_documents: u32,
    pub rejected_documents: u32,
    pub upcoming_interviews: u32,
    pub total_interviews: u32,
    pub completed_interviews: u32,
    pub total_applications: u32,
    pub pending_applications: u32,
    pub shortlisted_applications: u32,
    pub rejected_applications: u32,
    pub accepted_applications: u32,
    pub completed_simulations: u32,
    pub available_simulations: u32,
    pub profile_completion: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Document,
    Interview,
    Application,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub status: String,
    pub message: String,
    /// `date` as epoch milliseconds.
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationStats {
    pub completed: u32,
    pub available: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub alerts: Vec<DashboardAlert>,
    pub quick_stats: QuickStats,
    pub recent_activity: Vec<Activity>,
}

impl DashboardAlert {
    pub fn new(
        id: &str,
        alert_type: AlertType,
        priority: AlertPriority,
        title: &str,
        message: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.to_string(),
            alert_type,
            priority,
            title: title.to_string(),
            message,
            action: None,
            data: None,
            created_at,
        }
    }

    pub fn with_action(mut self, label: &str, url: &str) -> Self {
        self.action = Some(AlertAction::new(label, url));
        self
    }

    pub fn with_data(mut self, data: JsonValue) -> Self {
        self.data = Some(data);
        self
    }
}
