//! # Appkit Storage
//!
//! 플랫폼 키-값 저장소 위에 JSON 직렬화와 네임스페이스를 얹은 래퍼입니다.
//!
//! - [`KeyValueBackend`]: 문자열 키-값 저장소 추상화
//! - [`MemoryBackend`], [`FileBackend`]: 기본 제공 백엔드
//! - [`Storage`]: 타입 안전한 get/set, 실패 시 로그 후 `Result` 반환

pub mod backend;
pub mod error;
pub mod storage;

pub use backend::{FileBackend, KeyValueBackend, MemoryBackend};
pub use error::{Result, StorageError};
pub use storage::Storage;
