use reqwest::RequestBuilder;

/// 发送前附加 Bearer 令牌；没有令牌时照常发送
pub fn attach_bearer(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token),
        None => {
            tracing::warn!("No JWT token found in session store or cookie");
            request
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;

    #[test]
    fn header_present_only_with_token() {
        let client = reqwest::Client::new();

        let with = attach_bearer(client.get("http://localhost/patients"), Some("abc.def.ghi"))
            .build()
            .unwrap();
        assert_eq!(
            with.headers().get(AUTHORIZATION).unwrap(),
            "Bearer abc.def.ghi"
        );

        let without = attach_bearer(client.get("http://localhost/patients"), None)
            .build()
            .unwrap();
        assert!(without.headers().get(AUTHORIZATION).is_none());
    }
}
