use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::ApiError;
use crate::middleware::{attach_bearer, inspect_status};
use crate::navigation::Navigator;
use crate::session::SessionStore;

/// 后端 API 客户端：每次请求附加令牌，401 时强制登出
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
    login_route: String,
}

impl ApiClient {
    pub fn new(
        config: &Config,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let base_url = config.base_url()?;

        let mut builder = reqwest::Client::builder().timeout(config.request_timeout());
        // 与会话共享 cookie，服务端写入的 token cookie 才能被读到
        if let Some(jar) = session.cookie_jar() {
            builder = builder.cookie_provider(jar);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            session,
            navigator,
            login_route: config.login_route.clone(),
        })
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    /// 单次发送，不重试
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let token = self.session.bearer_token();
        let request = attach_bearer(request, token.as_deref()).build()?;
        tracing::debug!("API request: {} {}", request.method(), request.url());

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("API request failed: {}", e);
                return Err(e.into());
            }
        };
        tracing::debug!("API response: {} {}", response.status(), response.url());

        inspect_status(
            response,
            &self.session,
            self.navigator.as_ref(),
            &self.login_route,
        )
        .await
    }

    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send_json(self.request(Method::GET, path)).await
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send_json(self.request(Method::GET, path).query(query))
            .await
    }

    pub async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(self.request(Method::POST, path).json(body))
            .await
    }

    /// application/x-www-form-urlencoded
    pub async fn post_form<T, B>(&self, path: &str, form: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(self.request(Method::POST, path).form(form))
            .await
    }

    pub async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send_json(self.request(Method::PUT, path).json(body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send_json(self.request(Method::DELETE, path)).await
    }
}
