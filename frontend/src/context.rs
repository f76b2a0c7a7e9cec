use shared::{AppConfig, UserInfo};
use crate::services::api::ApiClient;

/// Shared by every screen through `ContextProvider`
#[derive(Debug, Clone, PartialEq)]
pub struct AppContext {
    pub config: AppConfig,
    pub api_client: ApiClient,
    /// `None` until `/api/user/info` has answered
    pub user: Option<UserInfo>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { api_client: ApiClient::with_base_url(config.api_base_url.clone()), config, user: None }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

/// Defaults overridden by `FLOW_TRACKER_API_URL` and `FLOW_TRACKER_LOG`
/// at build time
pub fn build_config() -> AppConfig {
    AppConfig::default().with_overrides(option_env!("FLOW_TRACKER_API_URL"), option_env!("FLOW_TRACKER_LOG"))
}
