//! Rule-based dashboard alerts.
//!
//! Every rule emits at most one alert with a fixed id, however many records
//! triggered it. Ages are compared with millisecond precision.

use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use uuid::Uuid;

use crate::error::Result;
use crate::models::application::{Application, ApplicationStatus};
use crate::models::dashboard::{AlertPriority, AlertType, DashboardAlert, SimulationStats};
use crate::models::document::{CandidateDocument, DocumentStatus, REQUIRED_DOCUMENT_TYPES};
use crate::models::interview::Interview;
use crate::models::user::User;
use crate::repositories::RecordStores;
use crate::services::profile_service::profile_completion;
use crate::utils::time::whole_days_since;

pub const REJECTED_DOCUMENTS: &str = "rejected-documents";
pub const PENDING_DOCUMENTS_LONG: &str = "pending-documents-long";
pub const MISSING_REQUIRED_DOCUMENTS: &str = "missing-required-documents";
pub const UPCOMING_INTERVIEWS: &str = "upcoming-interviews";
pub const SCHEDULED_INTERVIEWS: &str = "scheduled-interviews";
pub const NO_SIMULATIONS: &str = "no-simulations";
pub const INCOMPLETE_PROFILE: &str = "incomplete-profile";
pub const STALE_PROFILE: &str = "stale-profile";
pub const STALE_APPLICATIONS: &str = "stale-applications";

const PENDING_DOCUMENT_DAYS: i64 = 7;
const UPCOMING_INTERVIEW_HOURS: i64 = 24;
const SCHEDULED_INTERVIEW_DAYS: i64 = 7;
const PROFILE_COMPLETION_THRESHOLD: u8 = 70;
const STALE_PROFILE_DAYS: i64 = 30;
const STALE_APPLICATION_DAYS: i64 = 14;

const DOCUMENTS_URL: &str = "/candidato/documentos";
const INTERVIEWS_URL: &str = "/candidato/entrevistas";
const SIMULATIONS_URL: &str = "/candidato/simulacoes";
const PROFILE_URL: &str = "/candidato/perfil";
const APPLICATIONS_URL: &str = "/candidato/candidaturas";

#[derive(Clone)]
pub struct AlertService {
    stores: RecordStores,
}

impl AlertService {
    pub fn new(stores: RecordStores) -> Self {
        Self { stores }
    }

    /// Runs every rule against the candidate's records, most urgent first.
    pub async fn generate(&self, candidate_id: Uuid, now: DateTime<Utc>) -> Result<Vec<DashboardAlert>> {
        let (documents, interviews, simulations, user, applications) = tokio::try_join!(
            self.stores.documents.find_by_candidate(candidate_id),
            self.stores.interviews.find_by_candidate(candidate_id),
            self.stores.simulations.stats(candidate_id),
            self.stores.users.find_by_id(candidate_id),
            self.stores.applications.find_by_candidate(candidate_id),
        )?;

        let mut alerts = document_alerts(&documents, now);
        alerts.extend(interview_alerts(&interviews, now));
        alerts.extend(simulation_alerts(simulations, now));
        alerts.extend(profile_alerts(user.as_ref(), now));
        alerts.extend(application_alerts(&applications, now));
        sort_alerts(&mut alerts);

        tracing::debug!(
            candidate_id = %candidate_id,
            alert_count = alerts.len(),
            "Generated dashboard alerts"
        );
        Ok(alerts)
    }
}

/// Priority descending, newest first within a priority. Stable.
pub fn sort_alerts(alerts: &mut [DashboardAlert]) {
    alerts.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

pub fn document_alerts(documents: &[CandidateDocument], now: DateTime<Utc>) -> Vec<DashboardAlert> {
    let mut alerts = Vec::new();

    let rejected = documents
        .iter()
        .filter(|d| d.status == DocumentStatus::Rejected)
        .count();
    if rejected > 0 {
        alerts.push(
            DashboardAlert::new(
                REJECTED_DOCUMENTS,
                AlertType::Document,
                AlertPriority::High,
                "Documentos rejeitados",
                format!(
                    "{} documento(s) foram rejeitados e precisam ser reenviados.",
                    rejected
                ),
                now,
            )
            .with_action("Ver documentos", DOCUMENTS_URL)
            .with_data(json!({ "rejectedCount": rejected })),
        );
    }

    let pending_cutoff = now - Duration::days(PENDING_DOCUMENT_DAYS);
    let long_pending = documents
        .iter()
        .filter(|d| d.status == DocumentStatus::Pending && d.created_at < pending_cutoff)
        .count();
    if long_pending > 0 {
        alerts.push(
            DashboardAlert::new(
                PENDING_DOCUMENTS_LONG,
                AlertType::Document,
                AlertPriority::Medium,
                "Documentos aguardando análise",
                format!(
                    "{} documento(s) estão em análise há mais de {} dias.",
                    long_pending, PENDING_DOCUMENT_DAYS
                ),
                now,
            )
            .with_action("Ver documentos", DOCUMENTS_URL)
            .with_data(json!({ "pendingCount": long_pending })),
        );
    }

    let missing: Vec<&str> = REQUIRED_DOCUMENT_TYPES
        .iter()
        .filter(|required| !documents.iter().any(|d| &d.document_type == *required))
        .map(|required| required.as_str())
        .collect();
    if !missing.is_empty() {
        let labels: Vec<&str> = REQUIRED_DOCUMENT_TYPES
            .iter()
            .filter(|required| missing.contains(&required.as_str()))
            .map(|required| required.label())
            .collect();
        alerts.push(
            DashboardAlert::new(
                MISSING_REQUIRED_DOCUMENTS,
                AlertType::Document,
                AlertPriority::Urgent,
                "Documentos obrigatórios pendentes",
                format!("Envie os documentos obrigatórios: {}.", labels.join(", ")),
                now,
            )
            .with_action("Enviar documentos", DOCUMENTS_URL)
            .with_data(json!({ "missingTypes": missing })),
        );
    }

    alerts
}

pub fn interview_alerts(interviews: &[Interview], now: DateTime<Utc>) -> Vec<DashboardAlert> {
    let mut alerts = Vec::new();

    if let Some(alert) = interview_window_alert(
        interviews,
        now,
        now + Duration::hours(UPCOMING_INTERVIEW_HOURS),
        UPCOMING_INTERVIEWS,
        AlertPriority::Urgent,
        "Entrevista nas próximas 24 horas",
        "as próximas 24 horas",
    ) {
        alerts.push(alert);
    }

    if let Some(alert) = interview_window_alert(
        interviews,
        now,
        now + Duration::days(SCHEDULED_INTERVIEW_DAYS),
        SCHEDULED_INTERVIEWS,
        AlertPriority::Medium,
        "Entrevistas agendadas",
        "os próximos 7 dias",
    ) {
        alerts.push(alert);
    }

    alerts
}

fn interview_window_alert(
    interviews: &[Interview],
    now: DateTime<Utc>,
    until: DateTime<Utc>,
    id: &str,
    priority: AlertPriority,
    title: &str,
    window_text: &str,
) -> Option<DashboardAlert> {
    let in_window: Vec<&Interview> = interviews
        .iter()
        .filter(|i| i.scheduled_at > now && i.scheduled_at < until)
        .collect();
    let next = in_window.iter().map(|i| i.scheduled_at).min()?;

    Some(
        DashboardAlert::new(
            id,
            AlertType::Interview,
            priority,
            title,
            format!(
                "Você tem {} entrevista(s) agendada(s) para {}.",
                in_window.len(),
                window_text
            ),
            now,
        )
        .with_action("Ver entrevistas", INTERVIEWS_URL)
        .with_data(json!({ "count": in_window.len(), "nextScheduledAt": next })),
    )
}

pub fn simulation_alerts(stats: SimulationStats, now: DateTime<Utc>) -> Vec<DashboardAlert> {
    if stats.completed > 0 {
        return Vec::new();
    }
    vec![DashboardAlert::new(
        NO_SIMULATIONS,
        AlertType::Simulation,
        AlertPriority::Medium,
        "Pratique com simulações",
        format!(
            "Você ainda não realizou nenhuma simulação de entrevista. {} simulações estão disponíveis.",
            stats.available
        ),
        now,
    )
    .with_action("Iniciar simulação", SIMULATIONS_URL)
    .with_data(json!({ "available": stats.available }))]
}

/// A missing profile yields no alerts.
pub fn profile_alerts(user: Option<&User>, now: DateTime<Utc>) -> Vec<DashboardAlert> {
    let Some(user) = user else {
        return Vec::new();
    };
    let mut alerts = Vec::new();

    let completion = profile_completion(Some(user));
    if completion.percentage < PROFILE_COMPLETION_THRESHOLD {
        alerts.push(
            DashboardAlert::new(
                INCOMPLETE_PROFILE,
                AlertType::Profile,
                AlertPriority::High,
                "Complete seu perfil",
                format!(
                    "Seu perfil está {}% completo. Perfis completos têm mais chances de seleção.",
                    completion.percentage
                ),
                now,
            )
            .with_action("Editar perfil", PROFILE_URL)
            .with_data(json!({
                "completion": completion.percentage,
                "missingFields": completion.missing_fields,
            })),
        );
    }

    if user.updated_at < now - Duration::days(STALE_PROFILE_DAYS) {
        let days = whole_days_since(user.updated_at, now);
        alerts.push(
            DashboardAlert::new(
                STALE_PROFILE,
                AlertType::Profile,
                AlertPriority::Low,
                "Atualize seu perfil",
                format!("Seu perfil não é atualizado há {} dias.", days),
                now,
            )
            .with_action("Editar perfil", PROFILE_URL)
            .with_data(json!({ "daysSinceUpdate": days })),
        );
    }

    alerts
}

pub fn application_alerts(applications: &[Application], now: DateTime<Utc>) -> Vec<DashboardAlert> {
    let cutoff = now - Duration::days(STALE_APPLICATION_DAYS);
    let stale = applications
        .iter()
        .filter(|a| a.status == ApplicationStatus::Pending && a.created_at < cutoff)
        .count();
    if stale == 0 {
        return Vec::new();
    }
    vec![DashboardAlert::new(
        STALE_APPLICATIONS,
        AlertType::Application,
        AlertPriority::Low,
        "Candidaturas sem resposta",
        format!(
            "{} candidatura(s) aguardam resposta há mais de {} dias.",
            stale, STALE_APPLICATION_DAYS
        ),
        now,
    )
    .with_action("Ver candidaturas", APPLICATIONS_URL)
    .with_data(json!({ "count": stale }))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{
        application, document, fixed_now, interview, Fixture,
    };

    fn ids(alerts: &[DashboardAlert]) -> Vec<&str> {
        alerts.iter().map(|a| a.id.as_str()).collect()
    }

    fn all_required(now: DateTime<Utc>) -> Vec<CandidateDocument> {
        vec![
            document("cv", "verified", now - Duration::days(1)),
            document("passport", "verified", now - Duration::days(1)),
            document("diploma", "verified", now - Duration::days(1)),
        ]
    }

    #[test]
    fn many_rejections_produce_one_alert_with_count() {
        let now = fixed_now();
        let mut documents = all_required(now);
        for _ in 0..100 {
            documents.push(document("certificate", "rejected", now - Duration::days(2)));
        }

        let alerts = document_alerts(&documents, now);

        assert_eq!(ids(&alerts), vec![REJECTED_DOCUMENTS]);
        let data = alerts[0].data.as_ref().unwrap();
        assert_eq!(data["rejectedCount"], 100);
        assert_eq!(alerts[0].priority, AlertPriority::High);
    }

    #[test]
    fn pending_document_age_boundary_is_millisecond_exact() {
        let now = fixed_now();
        let week = Duration::days(7);

        let mut fresh = all_required(now);
        fresh.push(document("certificate", "pending", now - week + Duration::milliseconds(1)));
        assert!(document_alerts(&fresh, now).is_empty());

        let mut exact = all_required(now);
        exact.push(document("certificate", "pending", now - week));
        assert!(document_alerts(&exact, now).is_empty());

        let mut old = all_required(now);
        old.push(document("certificate", "pending", now - week - Duration::milliseconds(1)));
        assert_eq!(ids(&document_alerts(&old, now)), vec![PENDING_DOCUMENTS_LONG]);
    }

    #[test]
    fn six_days_twenty_three_hours_is_not_long_pending() {
        let now = fixed_now();
        let mut documents = all_required(now);
        documents.push(document(
            "certificate",
            "pending",
            now - Duration::days(6) - Duration::hours(23),
        ));
        assert!(document_alerts(&documents, now).is_empty());
    }

    #[test]
    fn missing_required_types_are_listed_in_order() {
        let now = fixed_now();
        let documents = vec![document("cv", "pending", now)];

        let alerts = document_alerts(&documents, now);

        assert_eq!(ids(&alerts), vec![MISSING_REQUIRED_DOCUMENTS]);
        assert_eq!(alerts[0].priority, AlertPriority::Urgent);
        let data = alerts[0].data.as_ref().unwrap();
        assert_eq!(data["missingTypes"], serde_json::json!(["passport", "diploma"]));
    }

    #[test]
    fn rejected_required_document_still_counts_as_uploaded() {
        let now = fixed_now();
        let mut documents = all_required(now);
        documents[1] = document("passport", "rejected", now);
        assert_eq!(ids(&document_alerts(&documents, now)), vec![REJECTED_DOCUMENTS]);
    }

    #[test]
    fn interview_windows_are_open_intervals() {
        let now = fixed_now();
        let interviews = vec![
            interview("scheduled", now + Duration::hours(3), now - Duration::days(1)),
            interview("scheduled", now + Duration::days(3), now - Duration::days(1)),
            interview("scheduled", now + Duration::days(7), now - Duration::days(1)),
            interview("completed", now - Duration::hours(1), now - Duration::days(5)),
        ];

        let alerts = interview_alerts(&interviews, now);

        assert_eq!(ids(&alerts), vec![UPCOMING_INTERVIEWS, SCHEDULED_INTERVIEWS]);
        assert_eq!(alerts[0].data.as_ref().unwrap()["count"], 1);
        assert_eq!(alerts[1].data.as_ref().unwrap()["count"], 2);
    }

    #[test]
    fn interview_exactly_now_plus_day_is_not_urgent() {
        let now = fixed_now();
        let interviews = vec![interview("scheduled", now + Duration::hours(24), now)];
        assert_eq!(
            ids(&interview_alerts(&interviews, now)),
            vec![SCHEDULED_INTERVIEWS]
        );
    }

    #[test]
    fn simulations_alert_only_without_completions() {
        let now = fixed_now();
        let none = SimulationStats { completed: 0, available: 5 };
        let some = SimulationStats { completed: 2, available: 5 };
        assert_eq!(ids(&simulation_alerts(none, now)), vec![NO_SIMULATIONS]);
        assert!(simulation_alerts(some, now).is_empty());
    }

    #[test]
    fn profile_rules_cover_completion_and_staleness() {
        let now = fixed_now();
        let user = User {
            name: Some("Ana".into()),
            updated_at: now - Duration::days(45),
            ..Default::default()
        };

        let alerts = profile_alerts(Some(&user), now);

        assert_eq!(ids(&alerts), vec![INCOMPLETE_PROFILE, STALE_PROFILE]);
        assert_eq!(alerts[0].data.as_ref().unwrap()["completion"], 15);
        assert_eq!(alerts[1].data.as_ref().unwrap()["daysSinceUpdate"], 45);
        assert!(profile_alerts(None, now).is_empty());
    }

    #[test]
    fn stale_applications_need_pending_status_and_age() {
        let now = fixed_now();
        let applications = vec![
            application("pending", now - Duration::days(15)),
            application("pending", now - Duration::days(20)),
            application("rejected", now - Duration::days(30)),
            application("pending", now - Duration::days(3)),
        ];

        let alerts = application_alerts(&applications, now);

        assert_eq!(ids(&alerts), vec![STALE_APPLICATIONS]);
        assert_eq!(alerts[0].data.as_ref().unwrap()["count"], 2);
    }

    #[test]
    fn sort_orders_by_priority_descending() {
        let now = fixed_now();
        let mut alerts = vec![
            DashboardAlert::new("a", AlertType::General, AlertPriority::Low, "a", String::new(), now),
            DashboardAlert::new("b", AlertType::General, AlertPriority::Urgent, "b", String::new(), now),
            DashboardAlert::new("c", AlertType::General, AlertPriority::Medium, "c", String::new(), now),
            DashboardAlert::new("d", AlertType::General, AlertPriority::High, "d", String::new(), now),
        ];

        sort_alerts(&mut alerts);

        let priorities: Vec<AlertPriority> = alerts.iter().map(|a| a.priority).collect();
        assert_eq!(
            priorities,
            vec![
                AlertPriority::Urgent,
                AlertPriority::High,
                AlertPriority::Medium,
                AlertPriority::Low
            ]
        );
    }

    #[tokio::test]
    async fn generate_merges_all_sources() {
        let now = fixed_now();
        let fixture = Fixture {
            documents: vec![document("cv", "rejected", now - Duration::days(1))],
            interviews: vec![interview("scheduled", now + Duration::hours(2), now)],
            applications: vec![application("pending", now - Duration::days(20))],
            user: Some(User {
                name: Some("Ana".into()),
                updated_at: now,
                ..Default::default()
            }),
            ..Fixture::default()
        };

        let alerts = AlertService::new(fixture.stores()).generate(Uuid::new_v4(), now).await.unwrap();

        assert_eq!(
            ids(&alerts),
            vec![
                MISSING_REQUIRED_DOCUMENTS,
                UPCOMING_INTERVIEWS,
                REJECTED_DOCUMENTS,
                INCOMPLETE_PROFILE,
                SCHEDULED_INTERVIEWS,
                NO_SIMULATIONS,
                STALE_APPLICATIONS,
            ]
        );
    }

    #[tokio::test]
    async fn generate_propagates_store_failure() {
        let fixture = Fixture {
            fail_interviews: true,
            ..Fixture::default()
        };
        let result = AlertService::new(fixture.stores())
            .generate(Uuid::new_v4(), fixed_now())
            .await;
        assert!(result.is_err());
    }
}
