pub mod config;
pub mod database;
pub mod error;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::repositories::RecordStores;
use crate::services::dashboard_service::DashboardService;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub jwt_secret: String,
}

impl AppState {
    pub fn new(pool: PgPool, config: &Config) -> Self {
        let stores = RecordStores::postgres(pool, config.available_simulations);
        Self::from_stores(stores, config.jwt_secret.clone())
    }

    pub fn from_stores(stores: RecordStores, jwt_secret: String) -> Self {
        Self {
            dashboard_service: DashboardService::new(stores),
            jwt_secret,
        }
    }
}
