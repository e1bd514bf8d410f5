// 缓存模块
// 会话快照的 Redis 实现

pub mod keys;
pub mod operations;

pub use operations::session::RedisSnapshotStore;
