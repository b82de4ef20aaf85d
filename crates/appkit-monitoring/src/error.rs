//! 모니터링 모듈 에러 타입.

use thiserror::Error;

use appkit_core::AppError;

/// 모니터링 관련 에러.
///
/// 에러 기록 자체는 실패하지 않으며, 진단 데이터를 내보낼 때만 사용됩니다.
#[derive(Debug, Error)]
pub enum MonitoringError {
    /// 직렬화 에러
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// 모니터링 Result 타입.
pub type MonitoringResult<T> = Result<T, MonitoringError>;

impl From<serde_json::Error> for MonitoringError {
    fn from(err: serde_json::Error) -> Self {
        MonitoringError::Serialization(err.to_string())
    }
}

impl From<MonitoringError> for AppError {
    fn from(err: MonitoringError) -> Self {
        match err {
            MonitoringError::Serialization(msg) => AppError::Serialization(msg),
        }
    }
}
