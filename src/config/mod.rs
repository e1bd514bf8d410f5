use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::error::ApiError;

pub const DEFAULT_BACKEND_URL: &str = "https://hopsital-management-system.onrender.com";
pub const DEFAULT_SESSION_STORE_NAME: &str = "auth-storage";
pub const DEFAULT_LOGIN_ROUTE: &str = "/login";

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub request_timeout_secs: u64,
    pub session_store_name: String,
    pub session_store_dir: String,
    pub redis_url: Option<String>,
    pub login_route: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_secs: 30,
            session_store_name: DEFAULT_SESSION_STORE_NAME.to_string(),
            session_store_dir: ".hospital".to_string(),
            redis_url: None,
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ApiError> {
        dotenv::dotenv().ok();

        let defaults = Config::default();
        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.trim_end_matches('s').parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(defaults.request_timeout_secs);

        let config = Config {
            backend_url: env::var("BACKEND_URL").unwrap_or(defaults.backend_url),
            request_timeout_secs,
            session_store_name: env::var("SESSION_STORE_NAME")
                .unwrap_or(defaults.session_store_name),
            session_store_dir: env::var("SESSION_STORE_DIR").unwrap_or(defaults.session_store_dir),
            redis_url: env::var("REDIS_URL").ok().filter(|v| !v.trim().is_empty()),
            login_route: env::var("LOGIN_ROUTE").unwrap_or(defaults.login_route),
        };

        // 提前校验地址，避免第一次请求时才失败
        config.base_url()?;
        Ok(config)
    }

    /// 指定后端地址，其余取默认值
    pub fn with_backend_url(url: impl Into<String>) -> Self {
        Config {
            backend_url: url.into(),
            ..Config::default()
        }
    }

    pub fn base_url(&self) -> Result<Url, ApiError> {
        Url::parse(&self.backend_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.backend_url, e)))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_hosted_backend() {
        let config = Config::default();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.session_store_name, "auth-storage");
        assert_eq!(config.login_route, "/login");
        assert!(config.redis_url.is_none());
    }

    #[test]
    fn invalid_backend_url_is_rejected() {
        let config = Config::with_backend_url("not a url");
        assert!(matches!(config.base_url(), Err(ApiError::InvalidUrl(_))));
    }
}
