use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// 载荷中只关心 exp（秒）
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPayload {
    pub exp: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("token has no payload segment")]
    MissingPayload,
    #[error("payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not a JSON object with exp: {0}")]
    Json(#[from] serde_json::Error),
}

/// 只解码第二段，不看头部和签名；签名由服务端负责
pub fn decode_payload(token: &str) -> Result<TokenPayload, DecodeError> {
    let segment = token
        .split('.')
        .nth(1)
        .filter(|s| !s.is_empty())
        .ok_or(DecodeError::MissingPayload)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// 载荷可解码且 exp 尚未到达时返回 true，任何解码错误都视为失效
pub fn is_token_live(token: &str, now: DateTime<Utc>) -> bool {
    match decode_payload(token) {
        Ok(payload) => payload.exp * 1000.0 > now.timestamp_millis() as f64,
        Err(e) => {
            tracing::debug!("Discarding undecodable token: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use serde_json::json;

    fn mint(payload: serde_json::Value) -> String {
        encode(
            &Header::default(),
            &payload,
            &EncodingKey::from_secret(b"your-secret-key"),
        )
        .unwrap()
    }

    fn segment(value: serde_json::Value) -> String {
        URL_SAFE_NO_PAD.encode(value.to_string())
    }

    #[test]
    fn future_exp_is_live() {
        let now = Utc::now();
        let token = mint(json!({
            "sub": "admin@hospital.test",
            "role": "admin",
            "user_id": 1,
            "exp": (now + Duration::minutes(30)).timestamp(),
        }));
        assert!(is_token_live(&token, now));
    }

    #[test]
    fn past_exp_is_not_live() {
        let now = Utc::now();
        let token = mint(json!({ "exp": (now - Duration::seconds(1)).timestamp() }));
        assert!(!is_token_live(&token, now));
    }

    #[test]
    fn exp_equal_to_now_is_expired() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let token = mint(json!({ "exp": 1_700_000_000 }));
        assert!(!is_token_live(&token, now));
    }

    #[test]
    fn only_the_payload_segment_matters() {
        let now = Utc::now();
        let exp = (now + Duration::hours(1)).timestamp();
        let payload = segment(json!({ "exp": exp }));

        let candidates = vec![
            // 头部不是合法 JWT 头
            format!("opaque.{payload}.sig"),
            // alg 为 none
            format!("{}.{payload}.", segment(json!({ "alg": "none" }))),
            // 非字符串 sub 等额外声明
            format!(
                "{}.{}.sig",
                segment(json!({ "alg": "HS256" })),
                segment(json!({ "sub": 42, "role": ["admin"], "exp": exp }))
            ),
            // 带填充的载荷
            format!("h.{}.s", base64::engine::general_purpose::URL_SAFE.encode(json!({ "exp": exp }).to_string())),
            // 小数 exp
            format!("h.{}.s", segment(json!({ "exp": exp as f64 + 0.5 }))),
        ];
        for token in &candidates {
            assert!(is_token_live(token, now), "token {token:?} should be live");
        }
    }

    #[test]
    fn signature_is_not_checked() {
        let now = Utc::now();
        let token = encode(
            &Header::default(),
            &json!({ "exp": (now + Duration::hours(1)).timestamp() }),
            &EncodingKey::from_secret(b"some-other-secret"),
        )
        .unwrap();
        assert!(is_token_live(&token, now));
    }

    #[test]
    fn malformed_tokens_are_not_live() {
        let now = Utc::now();
        let candidates = vec![
            String::new(),
            "not-a-token".to_string(),
            "a..c".to_string(),
            "a.b.c".to_string(),
            "h.!!!.sig".to_string(),
            format!("h.{}.sig", URL_SAFE_NO_PAD.encode("{\"not json")),
            format!("h.{}.sig", segment(json!({ "sub": "nobody" }))),
            format!("h.{}.sig", segment(json!({ "exp": "tomorrow" }))),
            format!("h.{}.sig", segment(json!([1, 2, 3]))),
            format!("h.{}", URL_SAFE_NO_PAD.encode([0xff, 0xfe, 0x00])),
        ];
        for token in &candidates {
            assert!(!is_token_live(token, now), "token {token:?} should be rejected");
        }
    }
}
