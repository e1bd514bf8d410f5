use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Identified;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Identified for Doctor {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewDoctor {
    pub name: String,
    pub specialty: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DoctorUpdate {
    pub name: Option<String>,
    pub specialty: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DoctorFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
