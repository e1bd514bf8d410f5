use std::sync::Arc;

use reqwest::Url;
use reqwest::cookie::{CookieStore, Jar};

pub const TOKEN_COOKIE: &str = "token";

/// 服务端登录时可能直接写入的 token cookie
#[derive(Debug, Clone)]
pub struct TokenCookie {
    jar: Arc<Jar>,
    url: Url,
}

impl TokenCookie {
    pub fn new(jar: Arc<Jar>, url: Url) -> Self {
        Self { jar, url }
    }

    /// 与 HTTP 客户端共享的 cookie jar
    pub fn jar(&self) -> Arc<Jar> {
        self.jar.clone()
    }

    pub fn token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.url)?;
        let raw = header.to_str().ok()?;
        raw.split(';')
            .map(str::trim)
            .find_map(|pair| pair.strip_prefix("token="))
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    /// 立即过期，重新加载后无法再读回
    pub fn expire(&self) {
        self.jar.add_cookie_str(
            "token=; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT; Path=/",
            &self.url,
        );
    }
}
