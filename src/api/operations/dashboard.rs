use chrono::{DateTime, Utc};
use futures_util::future::try_join3;

use crate::api::client::ApiClient;
use crate::api::models::{Appointment, AppointmentFilter, Doctor, DoctorFilter, PatientFilter};
use crate::api::operations::{AppointmentOperations, DoctorOperations, PatientOperations};
use crate::error::ApiError;
use crate::metrics::{StatResult, derive_stats};

pub const RECENT_APPOINTMENT_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub stats: Vec<StatResult>,
    pub recent_appointments: Vec<Appointment>,
    pub doctors: Vec<Doctor>,
}

/// 仪表盘数据
pub struct DashboardOperations;

impl DashboardOperations {
    /// 并发拉取三类数据，任一失败则整体放弃
    pub async fn load(client: &ApiClient, now: DateTime<Utc>) -> Result<DashboardSummary, ApiError> {
        let patient_filter = PatientFilter::default();
        let appointment_filter = AppointmentFilter::default();
        let doctor_filter = DoctorFilter::default();

        let (patients, mut appointments, doctors) = try_join3(
            PatientOperations::list(client, &patient_filter),
            AppointmentOperations::list(client, &appointment_filter),
            DoctorOperations::list(client, &doctor_filter),
        )
        .await
        .inspect_err(|e| tracing::error!("Failed to fetch dashboard data: {}", e))?;

        let stats = derive_stats(now, &patients, &appointments, &doctors);
        tracing::debug!(
            "Dashboard loaded: {} patients, {} appointments, {} doctors",
            patients.len(),
            appointments.len(),
            doctors.len()
        );

        appointments.truncate(RECENT_APPOINTMENT_LIMIT);
        Ok(DashboardSummary {
            stats,
            recent_appointments: appointments,
            doctors,
        })
    }
}
