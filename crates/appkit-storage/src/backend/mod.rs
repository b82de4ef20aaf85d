//! 키-값 저장소 백엔드 추상화.
//!
//! 플랫폼 저장소(모바일 AsyncStorage, 파일, 메모리 등)를 문자열 키-값
//! 인터페이스로 통일합니다. 값의 직렬화는 [`Storage`](crate::Storage)가 담당합니다.

use async_trait::async_trait;

use crate::error::Result;

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

/// 문자열 키-값 저장소 trait.
///
/// `multi_get`/`multi_set`/`remove_many`는 기본적으로 단건 작업을 반복합니다.
/// 한 번의 I/O로 처리할 수 있는 백엔드는 재정의합니다.
#[async_trait]
pub trait KeyValueBackend: Send + Sync {
    /// 백엔드 이름 (로그용).
    fn name(&self) -> &str;

    /// 값을 조회합니다.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// 값을 저장합니다.
    async fn set(&self, key: &str, value: String) -> Result<()>;

    /// 키를 삭제합니다. 존재했으면 `true`.
    async fn remove(&self, key: &str) -> Result<bool>;

    /// 모든 키를 삭제합니다.
    async fn clear(&self) -> Result<()>;

    /// 저장된 모든 키를 반환합니다.
    async fn keys(&self) -> Result<Vec<String>>;

    /// 여러 키를 한 번에 조회합니다. 순서는 입력 순서를 따릅니다.
    async fn multi_get(&self, keys: &[String]) -> Result<Vec<(String, Option<String>)>> {
        let mut values = Vec::with_capacity(keys.len());
        for key in keys {
            values.push((key.clone(), self.get(key).await?));
        }
        Ok(values)
    }

    /// 여러 항목을 한 번에 저장합니다.
    async fn multi_set(&self, entries: Vec<(String, String)>) -> Result<()> {
        for (key, value) in entries {
            self.set(&key, value).await?;
        }
        Ok(())
    }

    /// 여러 키를 삭제하고 실제로 삭제된 수를 반환합니다.
    async fn remove_many(&self, keys: &[String]) -> Result<usize> {
        let mut removed = 0;
        for key in keys {
            if self.remove(key).await? {
                removed += 1;
            }
        }
        Ok(removed)
    }
}
