// API 数据传输对象模块
// 与后端交互的实体和请求结构

pub mod appointment;
pub mod common;
pub mod doctor;
pub mod medical_history;
pub mod patient;
pub mod user;

// 重新导出常用类型
pub use appointment::*;
pub use common::*;
pub use doctor::*;
pub use medical_history::*;
pub use patient::*;
pub use user::*;
