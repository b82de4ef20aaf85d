//! 타입 안전한 키-값 저장소 래퍼.
//!
//! 값은 JSON 텍스트로 저장되며 모든 키에 네임스페이스 접두사가 붙습니다.
//! 실패는 경계에서 `warn!`으로 기록한 뒤 `Result`로 돌려주므로, 호출자는
//! "데이터 없음"(`Ok(None)`)과 "작업 실패"(`Err`)를 구분할 수 있습니다.
//! 구분이 필요 없으면 `*_or_default` 메서드를 사용합니다.

use serde::{de::DeserializeOwned, Serialize};
use tracing::{instrument, warn};

use appkit_core::StorageConfig;

use crate::backend::KeyValueBackend;
use crate::error::{Result, StorageError};

/// 네임스페이스가 적용된 JSON 키-값 저장소.
#[derive(Debug)]
pub struct Storage<B> {
    backend: B,
    namespace: String,
}

impl<B: KeyValueBackend> Storage<B> {
    /// 주어진 네임스페이스로 저장소를 생성합니다. 빈 문자열이면 접두사 없이 동작합니다.
    pub fn new(backend: B, namespace: impl Into<String>) -> Self {
        Self {
            backend,
            namespace: namespace.into(),
        }
    }

    /// 설정의 `storage.namespace`를 사용합니다.
    pub fn with_config(backend: B, config: &StorageConfig) -> Self {
        Self::new(backend, config.namespace.clone())
    }

    /// 내부 백엔드.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// 네임스페이스 접두사.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    // =========================================================================
    // 단건 작업
    // =========================================================================

    /// 값을 조회합니다. 키가 없으면 `Ok(None)`.
    #[instrument(skip(self))]
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let result: Result<Option<T>> = async {
            let full = self.full_key(key)?;
            match self.backend.get(&full).await? {
                Some(json) => Ok(Some(decode(key, &json)?)),
                None => Ok(None),
            }
        }
        .await;
        self.logged("get", key, result)
    }

    /// 값을 조회하고 실패는 `None`으로 대체합니다.
    pub async fn get_or_default<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get(key).await.unwrap_or(None)
    }

    /// 값을 저장합니다.
    #[instrument(skip(self, value))]
    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let result: Result<()> = async {
            let full = self.full_key(key)?;
            let json = serde_json::to_string(value)?;
            self.backend.set(&full, json).await
        }
        .await;
        self.logged("set", key, result)
    }

    /// 키를 삭제합니다. 존재했으면 `true`.
    pub async fn remove(&self, key: &str) -> Result<bool> {
        let result: Result<bool> = async {
            let full = self.full_key(key)?;
            self.backend.remove(&full).await
        }
        .await;
        self.logged("remove", key, result)
    }

    // =========================================================================
    // 다건 작업
    // =========================================================================

    /// 네임스페이스 안의 모든 키를 접두사 없이 반환합니다.
    pub async fn get_all_keys(&self) -> Result<Vec<String>> {
        let result = self.backend.keys().await.map(|keys| {
            keys.into_iter()
                .filter_map(|k| k.strip_prefix(&self.namespace).map(str::to_string))
                .collect()
        });
        self.logged("get_all_keys", "*", result)
    }

    /// 키 목록을 조회하고 실패는 빈 목록으로 대체합니다.
    pub async fn get_all_keys_or_default(&self) -> Vec<String> {
        self.get_all_keys().await.unwrap_or_default()
    }

    /// 네임스페이스 안의 항목만 삭제하고 삭제된 수를 반환합니다.
    pub async fn clear(&self) -> Result<usize> {
        let result: Result<usize> = async {
            if self.namespace.is_empty() {
                let count = self.backend.keys().await?.len();
                self.backend.clear().await?;
                return Ok(count);
            }
            let keys: Vec<String> = self
                .backend
                .keys()
                .await?
                .into_iter()
                .filter(|k| k.starts_with(&self.namespace))
                .collect();
            self.backend.remove_many(&keys).await
        }
        .await;
        self.logged("clear", "*", result)
    }

    /// 여러 키를 한 번에 조회합니다. 결과는 입력 순서를 따르며 키는 접두사가 없습니다.
    pub async fn multi_get<T: DeserializeOwned>(
        &self,
        keys: &[&str],
    ) -> Result<Vec<(String, Option<T>)>> {
        let result: Result<Vec<(String, Option<T>)>> = async {
            let full_keys = keys
                .iter()
                .map(|k| self.full_key(k))
                .collect::<Result<Vec<_>>>()?;
            let raw = self.backend.multi_get(&full_keys).await?;

            keys.iter()
                .zip(raw)
                .map(|(key, (_, json))| {
                    let value = json.map(|j| decode(key, &j)).transpose()?;
                    Ok::<_, StorageError>((key.to_string(), value))
                })
                .collect()
        }
        .await;
        self.logged("multi_get", &keys.join(","), result)
    }

    /// 여러 항목을 한 번에 저장합니다.
    pub async fn multi_set<T: Serialize>(&self, entries: &[(&str, T)]) -> Result<()> {
        let result: Result<()> = async {
            let encoded = entries
                .iter()
                .map(|(key, value)| {
                    Ok::<_, StorageError>((self.full_key(key)?, serde_json::to_string(value)?))
                })
                .collect::<Result<Vec<_>>>()?;
            self.backend.multi_set(encoded).await
        }
        .await;
        let keys: Vec<&str> = entries.iter().map(|(k, _)| *k).collect();
        self.logged("multi_set", &keys.join(","), result)
    }

    fn logged<T>(&self, operation: &str, key: &str, result: Result<T>) -> Result<T> {
        if let Err(ref e) = result {
            warn!(
                backend = self.backend.name(),
                operation,
                key,
                error = %e,
                "Storage operation failed"
            );
        }
        result
    }

    fn full_key(&self, key: &str) -> Result<String> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey("key must not be empty".to_string()));
        }
        Ok(format!("{}{}", self.namespace, key))
    }
}

fn decode<T: DeserializeOwned>(key: &str, json: &str) -> Result<T> {
    serde_json::from_str(json)
        .map_err(|e| StorageError::Serialization(format!("key '{}': {}", key, e)))
}
