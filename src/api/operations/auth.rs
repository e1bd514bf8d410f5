use serde_json::Value;

use crate::api::client::ApiClient;
use crate::api::models::{LoginForm, LoginResponse, RegisterRequest, User};
use crate::error::ApiError;

/// 登录与注册
pub struct AuthOperations;

impl AuthOperations {
    /// 表单登录，成功后写入会话
    pub async fn login(
        client: &ApiClient,
        username: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        let form = LoginForm {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = client.post_form("/auth/login", &form).await?;

        client
            .session()
            .set_auth(response.token, response.user.clone())
            .await?;
        tracing::info!("Login successful for {}", response.user.email);
        Ok(response.user)
    }

    /// 注册不会自动登录
    pub async fn register(
        client: &ApiClient,
        email: &str,
        password: &str,
        role: &str,
    ) -> Result<Value, ApiError> {
        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        };
        let created = client.post_json("/auth/register", &request).await?;
        tracing::info!("Registered {} with role {}", email, role);
        Ok(created)
    }

    /// 本地登出，不请求服务端
    pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
        client.session().logout().await?;
        Ok(())
    }
}
