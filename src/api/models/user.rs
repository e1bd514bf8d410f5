use serde::{Deserialize, Serialize};

pub use crate::session::User;

/// 登录表单，username 即邮箱
#[derive(Debug, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: String,
}

pub const DEFAULT_ROLE: &str = "user";
