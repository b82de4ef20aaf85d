//! JSON 파일 백엔드.
//!
//! 모든 항목을 하나의 JSON 객체 파일에 저장합니다. 쓰기마다 파일 전체를
//! 임시 파일에 기록한 뒤 rename 하므로 중간에 중단되어도 이전 내용이 남습니다.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

use appkit_core::StorageConfig;

use super::KeyValueBackend;
use crate::error::Result;

type Entries = BTreeMap<String, String>;

/// 단일 JSON 파일 기반 키-값 저장소.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    // 읽기-수정-쓰기 구간 직렬화
    lock: Mutex<()>,
}

impl FileBackend {
    /// 지정한 경로의 파일을 사용하는 백엔드를 생성합니다. 파일은 첫 쓰기 때 생성됩니다.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// 설정의 `storage.path`로 생성합니다.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.path)
    }

    /// 저장 파일 경로.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Entries> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) if text.trim().is_empty() => Ok(Entries::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!(path = %self.path.display(), entries = entries.len(), "Storage file written");
        Ok(())
    }
}

#[async_trait]
impl KeyValueBackend for FileBackend {
    fn name(&self) -> &str {
        "file"
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value);
        self.save(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        if entries.remove(key).is_none() {
            return Ok(false);
        }
        self.save(&entries).await?;
        Ok(true)
    }

    async fn clear(&self) -> Result<()> {
        let _guard = self.lock.lock().await;
        self.save(&Entries::new()).await
    }

    async fn keys(&self) -> Result<Vec<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.into_keys().collect())
    }

    async fn multi_get(&self, keys: &[String]) -> Result<Vec<(String, Option<String>)>> {
        let _guard = self.lock.lock().await;
        let entries = self.load().await?;
        Ok(keys
            .iter()
            .map(|k| (k.clone(), entries.get(k).cloned()))
            .collect())
    }

    async fn multi_set(&self, new_entries: Vec<(String, String)>) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        entries.extend(new_entries);
        self.save(&entries).await
    }

    async fn remove_many(&self, keys: &[String]) -> Result<usize> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        let removed = keys.iter().filter(|k| entries.remove(*k).is_some()).count();
        if removed > 0 {
            self.save(&entries).await?;
        }
        Ok(removed)
    }
}
