use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Identified;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// ISO 日期，例如 1990-01-01
    pub dob: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Identified for Patient {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPatient {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub dob: String,
}

/// 后端要求字段齐全，未修改的字段传 null
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub dob: Option<String>,
}

/// 列表过滤，name/email 为包含匹配
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatientFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
