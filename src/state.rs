use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::{postgres::PgStore, TrackerStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TrackerStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let store = PgStore::connect(&config).await?;
        store.migrate().await;
        Ok(Self::from_parts(Arc::new(store), Arc::new(config)))
    }

    pub fn from_parts(store: Arc<dyn TrackerStore>, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }
}
