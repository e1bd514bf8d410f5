use crate::api::client::ApiClient;
use crate::api::models::{Doctor, DoctorFilter, DoctorUpdate, NewDoctor};
use crate::error::ApiError;

/// 医生接口
pub struct DoctorOperations;

impl DoctorOperations {
    pub async fn list(client: &ApiClient, filter: &DoctorFilter) -> Result<Vec<Doctor>, ApiError> {
        client.get_query("/doctors", filter).await
    }

    pub async fn get(client: &ApiClient, id: i64) -> Result<Doctor, ApiError> {
        client.get(&format!("/doctors/{}", id)).await
    }

    pub async fn create(client: &ApiClient, doctor: &NewDoctor) -> Result<Doctor, ApiError> {
        client.post_json("/doctors", doctor).await
    }

    pub async fn update(
        client: &ApiClient,
        id: i64,
        update: &DoctorUpdate,
    ) -> Result<Doctor, ApiError> {
        client.put_json(&format!("/doctors/{}", id), update).await
    }

    pub async fn delete(client: &ApiClient, id: i64) -> Result<Doctor, ApiError> {
        client.delete(&format!("/doctors/{}", id)).await
    }
}
