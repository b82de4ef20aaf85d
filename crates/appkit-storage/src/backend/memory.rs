use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::KeyValueBackend;
use crate::error::Result;

/// 프로세스 메모리 백엔드. 테스트와 헤드리스 실행용.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueBackend for MemoryBackend {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.data.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.data.write().await.remove(key).is_some())
    }

    async fn clear(&self) -> Result<()> {
        self.data.write().await.clear();
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>> {
        let mut keys: Vec<String> = self.data.read().await.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    async fn multi_set(&self, entries: Vec<(String, String)>) -> Result<()> {
        self.data.write().await.extend(entries);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend_basic() {
        let backend = MemoryBackend::new();
        backend.set("b", "2".to_string()).await.unwrap();
        backend.set("a", "1".to_string()).await.unwrap();

        assert_eq!(backend.get("a").await.unwrap(), Some("1".to_string()));
        assert_eq!(backend.keys().await.unwrap(), vec!["a", "b"]);
        assert!(backend.remove("a").await.unwrap());
        assert!(!backend.remove("a").await.unwrap());

        backend.clear().await.unwrap();
        assert!(backend.keys().await.unwrap().is_empty());
    }
}
