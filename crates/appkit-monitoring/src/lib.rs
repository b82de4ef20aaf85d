//! 에러 추적 모듈.
//!
//! 앱 어디서든 보고된 에러를 최근 N개까지 메모리에 보관하고
//! 진단용 조회/집계 기능을 제공합니다.
//!
//! # 주요 컴포넌트
//!
//! - [`ErrorTracker`]: 용량이 고정된 FIFO 에러 로그 (스레드 안전, 복제 가능한 핸들)
//! - [`ErrorReport`]: 기록할 에러 입력 (메시지, 스택, 유형, 컨텍스트)
//! - [`track_error!`]: 전역 추적기에 바로 기록하는 매크로
//!
//! # 사용 예시
//!
//! ```rust
//! use appkit_monitoring::{ErrorContext, ErrorReport, ErrorTracker, ErrorTrackerConfig};
//!
//! let tracker = ErrorTracker::new(ErrorTrackerConfig::default());
//!
//! let report = ErrorReport::new("프로필 로드 실패")
//!     .with_type("NetworkError")
//!     .with_context("screen", "profile");
//! tracker.record(report, ErrorContext::new());
//!
//! let stats = tracker.get_stats();
//! assert_eq!(stats.total, 1);
//! assert_eq!(stats.by_type["NetworkError"], 1);
//! ```

pub mod error;
pub mod error_tracker;
pub mod report;

pub use error::{MonitoringError, MonitoringResult};
pub use error_tracker::{
    global_tracker, init_global_tracker, install_global_tracker, ErrorContext, ErrorRecord,
    ErrorStats, ErrorTracker, ErrorTrackerConfig,
};
pub use report::ErrorReport;

#[doc(hidden)]
pub use serde_json as __serde_json;
