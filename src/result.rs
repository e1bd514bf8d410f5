use serde::Deserialize;

/// 后端错误响应体
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

/// detail 可能是字符串，也可能是校验错误数组
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Items(Vec<ErrorItem>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorItem {
    pub msg: String,
}

impl ErrorDetail {
    pub fn message(&self) -> String {
        match self {
            ErrorDetail::Message(msg) => msg.clone(),
            ErrorDetail::Items(items) => items
                .iter()
                .map(|item| item.msg.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl ErrorBody {
    /// 从响应体中提取 detail 文本，无法解析时返回 None
    pub fn detail_message(bytes: &[u8]) -> Option<String> {
        serde_json::from_slice::<ErrorBody>(bytes)
            .ok()
            .and_then(|body| body.detail)
            .map(|detail| detail.message())
            .filter(|msg| !msg.is_empty())
    }
}
