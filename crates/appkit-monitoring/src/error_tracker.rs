//! 에러 추적기.
//!
//! 앱 전역에서 보고된 에러를 용량이 고정된 FIFO 로그에 보관합니다.
//! - 최근 `max_errors`개만 유지 (가장 오래된 것부터 제거)
//! - 유형별 집계, 최근 N개 조회
//! - 기록은 어떤 입력에도 실패하지 않음

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, error};

use appkit_core::TrackerConfig;

use crate::error::MonitoringResult;
use crate::report::ErrorReport;

/// 호출자가 레코드에 첨부하는 부가 정보 (요청/UI 상태 등).
pub type ErrorContext = HashMap<String, serde_json::Value>;

/// 기록 시점에 생성되는 불변 에러 스냅샷.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// 캡처 시간 (ISO 8601)
    pub timestamp: DateTime<Utc>,
    /// 에러 메시지
    pub message: String,
    /// 스택 트레이스 (선택적)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    /// 상세 컨텍스트
    #[serde(default)]
    pub context: ErrorContext,
    /// 에러 유형
    #[serde(rename = "type")]
    pub error_type: String,
}

/// 에러 로그 요약.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorStats {
    /// 현재 로그 길이
    pub total: usize,
    /// 유형별 에러 수 (로그 전체 기준)
    pub by_type: HashMap<String, usize>,
    /// 최근 에러 (오래된 것 → 최신 순)
    pub recent: Vec<ErrorRecord>,
}

/// 에러 추적기 설정.
#[derive(Debug, Clone)]
pub struct ErrorTrackerConfig {
    /// 보관할 최대 에러 수
    pub max_errors: usize,
    /// 통계에 포함할 최근 에러 수
    pub recent_window: usize,
    /// [`ErrorTracker::get_recent_default`]의 조회 개수
    pub default_recent_limit: usize,
}

impl Default for ErrorTrackerConfig {
    fn default() -> Self {
        Self {
            max_errors: 1000,
            recent_window: 10,
            default_recent_limit: 50,
        }
    }
}

impl ErrorTrackerConfig {
    /// 용량만 지정해 생성합니다.
    pub fn with_max_errors(max_errors: usize) -> Self {
        Self {
            max_errors,
            ..Default::default()
        }
    }
}

impl From<&TrackerConfig> for ErrorTrackerConfig {
    fn from(config: &TrackerConfig) -> Self {
        Self {
            max_errors: config.max_errors,
            recent_window: config.recent_window,
            default_recent_limit: config.default_recent_limit,
        }
    }
}

/// 에러 추적기 (스레드 안전, 복제 시 같은 로그를 공유).
#[derive(Clone)]
pub struct ErrorTracker {
    log: Arc<RwLock<VecDeque<ErrorRecord>>>,
    config: ErrorTrackerConfig,
}

impl std::fmt::Debug for ErrorTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorTracker")
            .field("len", &self.len())
            .field("config", &self.config)
            .finish()
    }
}

impl Default for ErrorTracker {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ErrorTracker {
    /// 새 에러 추적기 생성.
    pub fn new(config: ErrorTrackerConfig) -> Self {
        Self {
            log: Arc::new(RwLock::new(VecDeque::with_capacity(
                config.max_errors.min(1024),
            ))),
            config,
        }
    }

    /// 기본 설정으로 생성.
    pub fn with_defaults() -> Self {
        Self::new(ErrorTrackerConfig::default())
    }

    /// 설정 조회.
    pub fn config(&self) -> &ErrorTrackerConfig {
        &self.config
    }

    /// 최대 보관 개수.
    pub fn capacity(&self) -> usize {
        self.config.max_errors
    }

    /// 현재 로그 길이.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// 로그가 비어 있는지 확인.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// 에러 기록.
    ///
    /// 어떤 입력에도 실패하지 않습니다. 용량을 넘으면 가장 오래된 레코드가 제거됩니다.
    pub fn record(&self, error: impl Into<ErrorReport>, context: ErrorContext) {
        let mut record = error.into().into_record(context);

        // 삽입 순서와 시간 순서를 맞추기 위해 잠금 안에서 시각을 찍음
        let mut log = self.write();
        record.timestamp = Utc::now();
        log_record(&record);
        log.push_back(record);
        trim_front(&mut log, self.config.max_errors);
    }

    /// 빈 컨텍스트로 에러 기록.
    pub fn record_error(&self, error: impl Into<ErrorReport>) {
        self.record(error, ErrorContext::new());
    }

    /// 여러 에러를 한 번의 잠금으로 기록.
    ///
    /// 추가 후 앞쪽을 잘라 최근 `max_errors`개만 남깁니다.
    pub fn record_batch<I, R>(&self, errors: I)
    where
        I: IntoIterator<Item = R>,
        R: Into<ErrorReport>,
    {
        let records: Vec<ErrorRecord> = errors
            .into_iter()
            .map(|e| e.into().into_record(ErrorContext::new()))
            .collect();
        if records.is_empty() {
            return;
        }
        let mut log = self.write();
        for mut record in records {
            record.timestamp = Utc::now();
            log_record(&record);
            log.push_back(record);
        }
        trim_front(&mut log, self.config.max_errors);
    }

    /// 최근 에러 조회 (오래된 것 → 최신 순).
    ///
    /// 마지막 `min(limit, len)`개를 반환합니다.
    pub fn get_recent(&self, limit: usize) -> Vec<ErrorRecord> {
        let log = self.read();
        let skip = log.len().saturating_sub(limit);
        log.iter().skip(skip).cloned().collect()
    }

    /// 기본 개수(설정의 `default_recent_limit`)로 최근 에러 조회.
    pub fn get_recent_default(&self) -> Vec<ErrorRecord> {
        self.get_recent(self.config.default_recent_limit)
    }

    /// 에러 통계 조회.
    pub fn get_stats(&self) -> ErrorStats {
        let log = self.read();

        let mut by_type: HashMap<String, usize> = HashMap::new();
        for record in log.iter() {
            *by_type.entry(record.error_type.clone()).or_insert(0) += 1;
        }

        let skip = log.len().saturating_sub(self.config.recent_window);
        ErrorStats {
            total: log.len(),
            by_type,
            recent: log.iter().skip(skip).cloned().collect(),
        }
    }

    /// 히스토리 전체 삭제 (용량은 유지).
    pub fn clear(&self) {
        let mut log = self.write();
        let cleared = log.len();
        log.clear();
        debug!(cleared, "ErrorTracker cleared");
    }

    /// 현재 로그를 JSON 배열로 직렬화.
    pub fn export_json(&self) -> MonitoringResult<String> {
        let log = self.read();
        Ok(serde_json::to_string_pretty(&*log)?)
    }

    fn read(&self) -> RwLockReadGuard<'_, VecDeque<ErrorRecord>> {
        match self.log.read() {
            Ok(guard) => guard,
            Err(poisoned) => {
                error!("ErrorTracker RwLock poisoned (read), recovering");
                poisoned.into_inner()
            }
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, VecDeque<ErrorRecord>> {
        match self.log.write() {
            Ok(guard) => guard,
            Err(poisoned) => {
                error!("ErrorTracker RwLock poisoned (write), recovering");
                poisoned.into_inner()
            }
        }
    }
}

/// 초과분을 앞쪽에서 한 번에 제거.
fn trim_front(log: &mut VecDeque<ErrorRecord>, max_errors: usize) {
    let excess = log.len().saturating_sub(max_errors);
    if excess > 0 {
        log.drain(..excess);
    }
}

fn log_record(record: &ErrorRecord) {
    error!(
        error_type = %record.error_type,
        message = %record.message,
        context = ?record.context,
        has_stack = record.stack.is_some(),
        "[ERROR]"
    );
}

/// 전역 에러 추적기 (싱글톤).
static GLOBAL_TRACKER: once_cell::sync::OnceCell<ErrorTracker> =
    once_cell::sync::OnceCell::new();

/// 전역 에러 추적기 초기화.
///
/// 이미 초기화되어 있으면 `false`를 반환하고 기존 인스턴스를 유지합니다.
pub fn init_global_tracker(config: ErrorTrackerConfig) -> bool {
    GLOBAL_TRACKER.set(ErrorTracker::new(config)).is_ok()
}

/// 직접 생성한 추적기를 전역으로 등록.
///
/// 주입받은 핸들과 [`track_error!`](crate::track_error) 매크로가 같은 로그를 쓰게 합니다.
/// 이미 등록되어 있으면 넘긴 추적기를 돌려줍니다.
pub fn install_global_tracker(tracker: ErrorTracker) -> Result<(), ErrorTracker> {
    GLOBAL_TRACKER.set(tracker)
}

/// 전역 에러 추적기 가져오기 (첫 사용 시 기본 설정으로 생성).
pub fn global_tracker() -> &'static ErrorTracker {
    GLOBAL_TRACKER.get_or_init(ErrorTracker::with_defaults)
}

/// 전역 추적기에 에러를 기록하는 매크로.
///
/// ```rust
/// use appkit_monitoring::{global_tracker, track_error};
///
/// track_error!("이미지 디코딩 실패");
/// track_error!("업로드 실패", screen = "gallery", attempt = 3);
/// assert!(global_tracker().len() >= 2);
/// ```
#[macro_export]
macro_rules! track_error {
    ($error:expr) => {
        $crate::error_tracker::global_tracker().record_error($error)
    };
    ($error:expr, $($key:ident = $value:expr),+ $(,)?) => {
        {
            let mut context = $crate::error_tracker::ErrorContext::new();
            $(
                context.insert(
                    stringify!($key).to_string(),
                    $crate::__serde_json::to_value(&$value)
                        .unwrap_or($crate::__serde_json::Value::Null),
                );
            )+
            $crate::error_tracker::global_tracker().record($error, context)
        }
    };
}
