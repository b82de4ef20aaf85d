//! 저장소 모듈 오류 타입.

use thiserror::Error;

use appkit_core::AppError;

/// 저장소 관련 오류.
#[derive(Debug, Error)]
pub enum StorageError {
    /// 백엔드 접근 오류
    #[error("Backend error: {0}")]
    Backend(String),

    /// 파일 입출력 오류
    #[error("I/O error: {0}")]
    Io(String),

    /// 직렬화/역직렬화 오류
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// 잘못된 키
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

/// 저장소 작업 Result 타입.
pub type Result<T> = std::result::Result<T, StorageError>;

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Serialization(msg) => AppError::Serialization(msg),
            StorageError::InvalidKey(msg) => AppError::InvalidInput(msg),
            other => AppError::Storage(other.to_string()),
        }
    }
}
