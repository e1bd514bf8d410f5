use reqwest::StatusCode;
use thiserror::Error;

/// 会话快照读写错误
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("snapshot io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot redis failure: {0}")]
    Redis(#[from] redis::RedisError),
    #[error("snapshot serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 网关调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401，会话已被清空
    #[error("unauthorized")]
    Unauthorized { detail: Option<String> },
    #[error("request failed with status {status}")]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },
    /// 网络错误、超时
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// 服务端返回的 detail
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { detail } | ApiError::Status { detail, .. } => {
                detail.as_deref()
            }
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// 展示给用户的提示：优先使用服务端 detail
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}
