#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration as StdDuration;

use axum::Router;
use chrono::{Duration, Utc};
use hospital_client::{
    api::ApiClient,
    config::Config,
    navigation::RecordingNavigator,
    session::{SessionStore, User, cookie::TokenCookie, snapshot::MemorySnapshotStore},
};
use jsonwebtoken::{EncodingKey, Header, encode};
use reqwest::Url;
use reqwest::cookie::Jar;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub struct Harness {
    pub base_url: String,
    pub client: ApiClient,
    pub session: Arc<SessionStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub cookie: TokenCookie,
}

/// 在随机端口上启动测试服务
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// 手写 HTTP 响应的服务：读完请求头后写出 `reply`，等待 `hold` 后断开连接
pub async fn spawn_raw(reply: &'static str, hold: StdDuration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            tokio::spawn(async move {
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => return,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let _ = socket.write_all(reply.as_bytes()).await;
                let _ = socket.flush().await;
                tokio::time::sleep(hold).await;
            });
        }
    });
    format!("http://{}", addr)
}

pub async fn harness(router: Router) -> Harness {
    harness_with(router, |_| {}).await
}

pub async fn harness_with(router: Router, tweak: impl FnOnce(&mut Config)) -> Harness {
    harness_at(spawn(router).await, tweak)
}

pub fn harness_at(base_url: String, tweak: impl FnOnce(&mut Config)) -> Harness {
    let mut config = Config::with_backend_url(base_url.clone());
    tweak(&mut config);

    let cookie = TokenCookie::new(Arc::new(Jar::default()), Url::parse(&base_url).unwrap());
    let session = Arc::new(SessionStore::new(
        config.session_store_name.clone(),
        Arc::new(MemorySnapshotStore::new()),
        Some(cookie.clone()),
    ));
    let navigator = Arc::new(RecordingNavigator::new());
    let client = ApiClient::new(&config, session.clone(), navigator.clone()).unwrap();

    Harness {
        base_url,
        client,
        session,
        navigator,
        cookie,
    }
}

pub fn live_token() -> String {
    encode(
        &Header::default(),
        &json!({
            "sub": "admin@hospital.test",
            "role": "admin",
            "user_id": 1,
            "exp": (Utc::now() + Duration::minutes(30)).timestamp(),
        }),
        &EncodingKey::from_secret(b"your-secret-key"),
    )
    .unwrap()
}

pub fn admin() -> User {
    User {
        id: 1,
        email: "admin@hospital.test".into(),
        role: "admin".into(),
    }
}
