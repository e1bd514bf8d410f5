pub mod cookie;
pub mod snapshot;
pub mod token;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use reqwest::cookie::Jar;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use cookie::TokenCookie;
use snapshot::SnapshotStore;

/// 登录用户
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: String,
}

/// 当前会话；只有 token 有效时 user 才有意义
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

/// 快照格式，与浏览器端持久化格式一致
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    state: Session,
    #[serde(default)]
    version: u32,
}

/// 会话存储：登录状态的唯一来源
pub struct SessionStore {
    name: String,
    state: RwLock<Session>,
    snapshots: Arc<dyn SnapshotStore>,
    cookie: Option<TokenCookie>,
}

impl SessionStore {
    /// 空会话，不读取快照
    pub fn new(
        name: impl Into<String>,
        snapshots: Arc<dyn SnapshotStore>,
        cookie: Option<TokenCookie>,
    ) -> Self {
        Self {
            name: name.into(),
            state: RwLock::new(Session::default()),
            snapshots,
            cookie,
        }
    }

    /// 从快照恢复；快照中没有 token 时尝试 cookie
    pub async fn hydrate(
        name: impl Into<String>,
        snapshots: Arc<dyn SnapshotStore>,
        cookie: Option<TokenCookie>,
    ) -> Self {
        let store = Self::new(name, snapshots, cookie);

        let mut session = match store.snapshots.load(&store.name).await {
            Ok(Some(raw)) => match serde_json::from_str::<PersistedSession>(&raw) {
                Ok(persisted) => persisted.state,
                Err(e) => {
                    tracing::warn!("Ignoring unreadable session snapshot {}: {}", store.name, e);
                    Session::default()
                }
            },
            Ok(None) => Session::default(),
            Err(e) => {
                tracing::warn!("Failed to load session snapshot {}: {}", store.name, e);
                Session::default()
            }
        };

        if session.token.is_none() {
            if let Some(token) = store.cookie.as_ref().and_then(TokenCookie::token) {
                tracing::debug!("Recovered session token from cookie");
                session.token = Some(token);
            }
        }

        *store.write() = session;
        store
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cookie_jar(&self) -> Option<Arc<Jar>> {
        self.cookie.as_ref().map(TokenCookie::jar)
    }

    pub fn snapshot(&self) -> Session {
        self.read().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    /// 请求使用的令牌：内存优先，其次 cookie
    pub fn bearer_token(&self) -> Option<String> {
        self.token()
            .or_else(|| self.cookie.as_ref().and_then(TokenCookie::token))
    }

    /// 直接覆盖 token 与 user，不校验令牌结构
    pub async fn set_auth(
        &self,
        token: impl Into<String>,
        user: User,
    ) -> Result<(), SessionError> {
        let session = Session {
            token: Some(token.into()),
            user: Some(user),
        };
        *self.write() = session.clone();
        tracing::debug!("Session updated for {}", self.name);
        self.persist(&session).await
    }

    /// 清空会话并让 cookie 失效，可重复调用
    pub async fn logout(&self) -> Result<(), SessionError> {
        if let Some(cookie) = &self.cookie {
            cookie.expire();
        }
        *self.write() = Session::default();
        tracing::debug!("Session cleared for {}", self.name);
        self.persist(&Session::default()).await
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(Utc::now())
    }

    pub fn is_authenticated_at(&self, now: DateTime<Utc>) -> bool {
        match self.read().token.as_deref() {
            Some(token) => token::is_token_live(token, now),
            None => false,
        }
    }

    /// 清空内存状态并删除快照
    pub async fn teardown(&self) -> Result<(), SessionError> {
        *self.write() = Session::default();
        self.snapshots.remove(&self.name).await
    }

    async fn persist(&self, session: &Session) -> Result<(), SessionError> {
        let raw = serde_json::to_string(&PersistedSession {
            state: session.clone(),
            version: 0,
        })?;
        self.snapshots.save(&self.name, &raw).await
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
