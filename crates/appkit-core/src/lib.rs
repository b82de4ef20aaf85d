//! # Appkit Core
//!
//! 모바일 앱 지원 유틸리티 전반에서 공유하는 기반 타입을 제공합니다:
//! - 애플리케이션 설정 (파일 + 환경 변수)
//! - 공통 에러 타입
//! - 로깅 인프라

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
pub use logging::*;
