use std::sync::Arc;

use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};

use crate::cache::keys::session_snapshot_key;
use crate::error::SessionError;
use crate::session::snapshot::SnapshotStore;

/// 会话快照写入 Redis，多个客户端进程可共享同一会话
#[derive(Clone)]
pub struct RedisSnapshotStore {
    redis: Arc<RedisClient>,
}

impl RedisSnapshotStore {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }

    pub fn open(url: &str) -> Result<Self, SessionError> {
        let client = RedisClient::open(url)?;
        Ok(Self::new(Arc::new(client)))
    }
}

#[async_trait]
impl SnapshotStore for RedisSnapshotStore {
    /// 读取会话快照
    async fn load(&self, key: &str) -> Result<Option<String>, SessionError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;
        let result: Option<String> = conn.get(session_snapshot_key(key)).await?;
        Ok(result)
    }

    /// 写入会话快照，不设过期时间，由令牌 exp 决定有效性
    async fn save(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;
        let _: () = conn.set(session_snapshot_key(key), value).await?;
        Ok(())
    }

    /// 删除会话快照
    async fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut conn = self.redis.get_multiplexed_async_connection().await?;
        let _: () = conn.del(session_snapshot_key(key)).await?;
        Ok(())
    }
}
