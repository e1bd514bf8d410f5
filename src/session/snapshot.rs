use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tokio::fs;

use crate::error::SessionError;

/// 持久化键值层，会话在每次变更后写入
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<String>, SessionError>;
    async fn save(&self, key: &str, value: &str) -> Result<(), SessionError>;
    async fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// 每个键一个 JSON 文件
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    dir: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn load(&self, key: &str) -> Result<Option<String>, SessionError> {
        match fs::read_to_string(self.path(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), SessionError> {
        fs::create_dir_all(&self.dir).await?;
        // 先写临时文件再改名，避免读到半截快照
        let tmp = self.dir.join(format!("{}.json.tmp", key));
        fs::write(&tmp, value).await?;
        fs::rename(&tmp, self.path(key)).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), SessionError> {
        match fs::remove_file(self.path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// 进程内存储，不跨进程保留
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn load(&self, key: &str) -> Result<Option<String>, SessionError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), SessionError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_store_round_trips_and_removes() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::new(dir.path().join("nested"));

        assert_eq!(store.load("auth-storage").await.unwrap(), None);
        store.save("auth-storage", r#"{"state":{}}"#).await.unwrap();
        assert_eq!(
            store.load("auth-storage").await.unwrap().as_deref(),
            Some(r#"{"state":{}}"#)
        );

        store.remove("auth-storage").await.unwrap();
        assert_eq!(store.load("auth-storage").await.unwrap(), None);
        // 删除不存在的键不报错
        store.remove("auth-storage").await.unwrap();
    }

    #[tokio::test]
    async fn memory_store_overwrites() {
        let store = MemorySnapshotStore::new();
        store.save("k", "1").await.unwrap();
        store.save("k", "2").await.unwrap();
        assert_eq!(store.load("k").await.unwrap().as_deref(), Some("2"));
    }
}
