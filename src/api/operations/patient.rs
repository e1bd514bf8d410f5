use crate::api::client::ApiClient;
use crate::api::models::{NewPatient, Patient, PatientFilter, PatientUpdate};
use crate::error::ApiError;

/// 患者接口
pub struct PatientOperations;

impl PatientOperations {
    pub async fn list(client: &ApiClient, filter: &PatientFilter) -> Result<Vec<Patient>, ApiError> {
        client.get_query("/patients", filter).await
    }

    pub async fn get(client: &ApiClient, id: i64) -> Result<Patient, ApiError> {
        client.get(&format!("/patients/{}", id)).await
    }

    pub async fn create(client: &ApiClient, patient: &NewPatient) -> Result<Patient, ApiError> {
        client.post_json("/patients", patient).await
    }

    pub async fn update(
        client: &ApiClient,
        id: i64,
        update: &PatientUpdate,
    ) -> Result<Patient, ApiError> {
        client.put_json(&format!("/patients/{}", id), update).await
    }

    /// 返回被删除的记录
    pub async fn delete(client: &ApiClient, id: i64) -> Result<Patient, ApiError> {
        client.delete(&format!("/patients/{}", id)).await
    }
}
