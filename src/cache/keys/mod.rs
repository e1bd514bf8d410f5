/// 缓存键模块

// 会话缓存键
pub mod session_keys;

pub use session_keys::session_snapshot_key;
