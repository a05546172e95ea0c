use crate::{
    auth::JwtService, config::Config, services::metrics::MetricsService, storage::Storage,
    store::CatalogStore,
};
use std::sync::Arc;

pub mod admin;
pub mod docs;
pub mod games;
pub mod health;
pub mod metrics;
pub mod pages;
pub mod upload;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
    pub storage: Arc<dyn Storage>,
    pub config: Config,
    pub jwt: Arc<JwtService>,
    pub metrics: Arc<MetricsService>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn CatalogStore>,
        storage: Arc<dyn Storage>,
        config: Config,
    ) -> anyhow::Result<Self> {
        let jwt = Arc::new(JwtService::new(&config.jwt_secret));
        let metrics = Arc::new(MetricsService::new()?);

        Ok(Self {
            store,
            storage,
            config,
            jwt,
            metrics,
        })
    }
}
