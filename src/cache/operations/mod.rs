/// 缓存操作

// 会话快照
pub mod session;

pub use session::RedisSnapshotStore;
