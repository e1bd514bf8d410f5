use serde::{Deserialize, Serialize};

use super::common::Identified;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalHistory {
    pub id: i64,
    pub patient_id: i64,
    pub diagnosis: String,
    #[serde(default)]
    pub treatment: Option<String>,
    pub date: String,
}

impl Identified for MedicalHistory {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMedicalHistory {
    pub patient_id: i64,
    pub diagnosis: String,
    pub treatment: Option<String>,
    pub date: String,
}

/// 三个字段都会发送，后端用请求值整体覆盖
#[derive(Debug, Clone, Default, Serialize)]
pub struct MedicalHistoryUpdate {
    pub diagnosis: Option<String>,
    pub treatment: Option<String>,
    pub date: Option<String>,
}
