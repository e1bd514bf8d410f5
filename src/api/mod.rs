// API 网关模块
// 请求封装、数据结构和各实体的接口调用

pub mod client;
pub mod models;
pub mod operations;

pub use client::ApiClient;
