use std::sync::{Mutex, PoisonError};

use crate::session::SessionStore;

/// 路由跳转，由宿主界面实现
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// 只记录日志的跳转实现，用于命令行
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: &str) {
        tracing::info!("Redirecting to {}", route);
    }
}

/// 记录每次跳转
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<String> {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn count(&self, route: &str) -> usize {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.as_str() == route)
            .count()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route.to_string());
    }
}

/// 受保护页面的守卫：未登录时跳转到登录页并返回 false
pub fn require_auth(session: &SessionStore, navigator: &dyn Navigator, login_route: &str) -> bool {
    if session.is_authenticated() {
        return true;
    }
    navigator.navigate(login_route);
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::User;
    use crate::session::snapshot::MemorySnapshotStore;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn guard_redirects_when_unauthenticated() {
        let session = SessionStore::new("auth-storage", Arc::new(MemorySnapshotStore::new()), None);
        let navigator = RecordingNavigator::new();

        assert!(!require_auth(&session, &navigator, "/login"));
        assert_eq!(navigator.routes(), vec!["/login".to_string()]);
    }

    #[tokio::test]
    async fn guard_passes_live_session() {
        let session = SessionStore::new("auth-storage", Arc::new(MemorySnapshotStore::new()), None);
        let token = encode(
            &Header::default(),
            &json!({ "exp": (Utc::now() + Duration::minutes(30)).timestamp() }),
            &EncodingKey::from_secret(b"secret"),
        )
        .unwrap();
        session
            .set_auth(
                token,
                User {
                    id: 1,
                    email: "admin@hospital.test".into(),
                    role: "admin".into(),
                },
            )
            .await
            .unwrap();
        let navigator = RecordingNavigator::new();

        assert!(require_auth(&session, &navigator, "/login"));
        assert!(navigator.routes().is_empty());
    }
}
