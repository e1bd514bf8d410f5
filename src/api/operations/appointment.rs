use crate::api::client::ApiClient;
use crate::api::models::{Appointment, AppointmentFilter, AppointmentUpdate, NewAppointment};
use crate::error::ApiError;

/// 预约接口
pub struct AppointmentOperations;

impl AppointmentOperations {
    pub async fn list(
        client: &ApiClient,
        filter: &AppointmentFilter,
    ) -> Result<Vec<Appointment>, ApiError> {
        client.get_query("/appointments", filter).await
    }

    pub async fn get(client: &ApiClient, id: i64) -> Result<Appointment, ApiError> {
        client.get(&format!("/appointments/{}", id)).await
    }

    pub async fn create(
        client: &ApiClient,
        appointment: &NewAppointment,
    ) -> Result<Appointment, ApiError> {
        tracing::debug!(
            "Creating appointment for patient {} with doctor {}",
            appointment.patient_id,
            appointment.doctor_id
        );
        client.post_json("/appointments", appointment).await
    }

    pub async fn update(
        client: &ApiClient,
        id: i64,
        update: &AppointmentUpdate,
    ) -> Result<Appointment, ApiError> {
        client.put_json(&format!("/appointments/{}", id), update).await
    }

    /// 取消预约
    pub async fn delete(client: &ApiClient, id: i64) -> Result<Appointment, ApiError> {
        client.delete(&format!("/appointments/{}", id)).await
    }
}
