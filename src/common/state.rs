use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::hive::HiveClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: Arc<HiveClient>,
    pub dashboard: Arc<RwLock<Dashboard>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, client: HiveClient, dashboard: Dashboard) -> Self {
        Self {
            config: Arc::new(config),
            client: Arc::new(client),
            dashboard: Arc::new(RwLock::new(dashboard)),
        }
    }
}
