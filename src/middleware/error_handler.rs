use reqwest::{Response, StatusCode};
use tracing::error;

use crate::error::ApiError;
use crate::navigation::Navigator;
use crate::result::ErrorBody;
use crate::session::SessionStore;

/// 失败响应体最多读取的字节数，超出部分丢弃
pub const MAX_ERROR_BODY_BYTES: usize = 16 * 1024;

/// 检查响应状态。401 时先登出并跳转登录页，再读取响应体，最后仍把错误返回给调用方
pub async fn inspect_status(
    response: Response,
    session: &SessionStore,
    navigator: &dyn Navigator,
    login_route: &str,
) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // 响应体可能读不完整，登出不能依赖它
    if status == StatusCode::UNAUTHORIZED {
        if let Err(e) = session.logout().await {
            error!("Failed to persist cleared session: {}", e);
        }
        navigator.navigate(login_route);
    }

    let url = response.url().clone();
    let detail = match read_capped(response, MAX_ERROR_BODY_BYTES).await {
        Ok(bytes) => {
            error!(
                "API error - Status: {}, Url: {}, Body: {}",
                status,
                url,
                String::from_utf8_lossy(&bytes)
            );
            ErrorBody::detail_message(&bytes)
        }
        Err(e) => {
            error!(
                "API error - Status: {}, Url: {}, failed to read body: {}",
                status, url, e
            );
            None
        }
    };

    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized { detail });
    }
    Err(ApiError::Status { status, detail })
}

/// 按块读取，累计到 limit 字节即停止
async fn read_capped(mut response: Response, limit: usize) -> Result<Vec<u8>, reqwest::Error> {
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        let room = limit - body.len();
        if chunk.len() >= room {
            body.extend_from_slice(&chunk[..room]);
            break;
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}
