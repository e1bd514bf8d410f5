// 接口调用模块
// 每个实体一组操作，均经由 ApiClient 发送

pub mod appointment;
pub mod auth;
pub mod dashboard;
pub mod doctor;
pub mod medical_history;
pub mod patient;

// 重新导出常用操作
pub use appointment::AppointmentOperations;
pub use auth::AuthOperations;
pub use dashboard::{DashboardOperations, DashboardSummary};
pub use doctor::DoctorOperations;
pub use medical_history::MedicalHistoryOperations;
pub use patient::PatientOperations;
