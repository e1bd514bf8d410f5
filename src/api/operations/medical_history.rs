use crate::api::client::ApiClient;
use crate::api::models::{MedicalHistory, MedicalHistoryUpdate, NewMedicalHistory, Page};
use crate::error::ApiError;

/// 病历接口
pub struct MedicalHistoryOperations;

impl MedicalHistoryOperations {
    pub async fn create(
        client: &ApiClient,
        history: &NewMedicalHistory,
    ) -> Result<MedicalHistory, ApiError> {
        client.post_json("/medical-histories", history).await
    }

    pub async fn get(client: &ApiClient, id: i64) -> Result<MedicalHistory, ApiError> {
        client.get(&format!("/medical-histories/{}", id)).await
    }

    /// 按日期倒序
    pub async fn list_for_patient(
        client: &ApiClient,
        patient_id: i64,
        page: &Page,
    ) -> Result<Vec<MedicalHistory>, ApiError> {
        client
            .get_query(&format!("/medical-histories/patient/{}", patient_id), page)
            .await
    }

    pub async fn update(
        client: &ApiClient,
        id: i64,
        update: &MedicalHistoryUpdate,
    ) -> Result<MedicalHistory, ApiError> {
        client
            .put_json(&format!("/medical-histories/{}", id), update)
            .await
    }

    /// 返回被删除的记录
    pub async fn delete(client: &ApiClient, id: i64) -> Result<MedicalHistory, ApiError> {
        client.delete(&format!("/medical-histories/{}", id)).await
    }
}
