pub mod activity_service;
pub mod alert_service;
pub mod dashboard_service;
pub mod profile_service;
pub mod simulation_service;
pub mod stats_service;

#[cfg(test)]
pub(crate) mod test_support;
