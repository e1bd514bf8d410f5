// 通用的数据结构定义

use serde::{Deserialize, Serialize};

/// 带数字 id 的实体
pub trait Identified {
    fn id(&self) -> i64;
}

/// 关联实体的摘要（预约中的患者、医生）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRef {
    pub id: i64,
    pub name: String,
}

/// 分页参数，未设置时由服务端决定
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Page {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
