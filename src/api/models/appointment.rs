use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Identified, PersonRef};

pub const DEFAULT_STATUS: &str = "Scheduled";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    #[serde(default)]
    pub patient_id: Option<i64>,
    #[serde(default)]
    pub doctor_id: Option<i64>,
    /// 关联数据缺失时为 None
    #[serde(default)]
    pub patient: Option<PersonRef>,
    #[serde(default)]
    pub doctor: Option<PersonRef>,
    pub date_time: DateTime<Utc>,
    pub status: String,
}

impl Appointment {
    pub fn patient_name(&self) -> &str {
        self.patient
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or("Unknown Patient")
    }

    pub fn doctor_name(&self) -> &str {
        self.doctor
            .as_ref()
            .map(|d| d.name.as_str())
            .unwrap_or("Unknown Doctor")
    }
}

impl Identified for Appointment {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub patient_id: i64,
    pub doctor_id: i64,
    pub date_time: DateTime<Utc>,
    pub status: String,
}

impl NewAppointment {
    pub fn scheduled(patient_id: i64, doctor_id: i64, date_time: DateTime<Utc>) -> Self {
        Self {
            patient_id,
            doctor_id,
            date_time,
            status: DEFAULT_STATUS.to_string(),
        }
    }
}

/// 部分更新，只发送设置了的字段
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// date 为 ISO 日期，匹配当天的预约
#[derive(Debug, Clone, Default, Serialize)]
pub struct AppointmentFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
