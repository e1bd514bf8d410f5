use std::sync::Arc;

use api::ApiClient;
use config::Config;
use error::ApiError;
use navigation::Navigator;
use session::SessionStore;

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod navigation;
pub mod records;
pub mod result;
pub mod session;

/// 客户端共享状态：配置、会话与网关
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub session: Arc<SessionStore>,
    pub client: ApiClient,
}

impl AppState {
    pub fn new(
        config: Config,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let client = ApiClient::new(&config, session.clone(), navigator)?;
        Ok(Self {
            config,
            session,
            client,
        })
    }
}
