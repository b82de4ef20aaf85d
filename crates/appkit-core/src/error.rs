//! 공통 에러 타입.
//!
//! 크레이트 경계를 넘어 전달되는 에러를 정의합니다. 각 크레이트는
//! 자체 에러 타입을 갖고, 필요할 때 `AppError`로 변환합니다.

use thiserror::Error;

/// 애플리케이션 공통 에러.
#[derive(Debug, Error)]
pub enum AppError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 저장소 에러
    #[error("저장소 에러: {0}")]
    Storage(String),

    /// 접근성 서비스 에러
    #[error("접근성 에러: {0}")]
    Accessibility(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),
}

/// 공통 Result 타입.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// 플랫폼 서비스 장애로 인한 에러인지 확인합니다.
    ///
    /// 이 경우 호출자는 중립 값(빈 결과)으로 계속 진행할 수 있습니다.
    pub fn is_degradable(&self) -> bool {
        matches!(self, AppError::Storage(_) | AppError::Accessibility(_))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_degradable() {
        assert!(AppError::Storage("disk full".to_string()).is_degradable());
        assert!(AppError::Accessibility("no service".to_string()).is_degradable());
        assert!(!AppError::Config("bad".to_string()).is_degradable());
    }

    #[test]
    fn test_from_serde_json() {
        let err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let app: AppError = err.into();
        assert!(matches!(app, AppError::Serialization(_)));
    }
}
