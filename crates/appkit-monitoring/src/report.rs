//! 에러 보고 입력.
//!
//! [`ErrorReport`]는 추적기에 넘기는 "에러와 비슷한 값"입니다. 모든 필드가
//! 선택적이며, 누락된 필드는 기록 시점에 빈 값으로 정규화됩니다.

use serde_json::Value;

use crate::error_tracker::{ErrorContext, ErrorRecord};

/// 유형이 지정되지 않았을 때 사용하는 기본 에러 유형.
pub const DEFAULT_ERROR_TYPE: &str = "Error";

/// 추적기에 기록할 에러 정보 빌더.
#[derive(Debug, Clone, Default)]
pub struct ErrorReport {
    message: Option<String>,
    stack: Option<String>,
    error_type: Option<String>,
    context: ErrorContext,
}

impl ErrorReport {
    /// 메시지로 새 보고를 생성합니다.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// `std::error::Error` 값에서 보고를 생성합니다.
    ///
    /// 메시지는 `Display` 출력, 유형은 구체 타입의 짧은 이름,
    /// 스택은 `source()` 체인(한 줄에 원인 하나)입니다.
    pub fn from_error<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }

        Self {
            message: Some(err.to_string()),
            stack: join_causes(causes),
            error_type: Some(short_type_name(std::any::type_name::<E>())),
            context: ErrorContext::new(),
        }
    }

    /// 에러 유형(분류)을 설정합니다.
    pub fn with_type(mut self, error_type: impl Into<String>) -> Self {
        self.error_type = Some(error_type.into());
        self
    }

    /// 스택 트레이스 문자열을 설정합니다.
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// 현재 위치의 백트레이스를 캡처해 스택으로 사용합니다.
    pub fn capture_backtrace(mut self) -> Self {
        self.stack = Some(std::backtrace::Backtrace::force_capture().to_string());
        self
    }

    /// 컨텍스트 항목을 추가합니다.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// 기록 시점의 레코드로 변환합니다.
    ///
    /// 호출자가 넘긴 `context`가 보고에 포함된 같은 키를 덮어씁니다.
    pub(crate) fn into_record(self, context: ErrorContext) -> ErrorRecord {
        let mut merged = self.context;
        merged.extend(context);

        ErrorRecord {
            timestamp: chrono::Utc::now(),
            message: self.message.unwrap_or_default(),
            stack: self.stack.filter(|s| !s.trim().is_empty()),
            context: merged,
            error_type: self
                .error_type
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ERROR_TYPE.to_string()),
        }
    }
}

impl From<&str> for ErrorReport {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ErrorReport {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<anyhow::Error> for ErrorReport {
    fn from(err: anyhow::Error) -> Self {
        Self::from(&err)
    }
}

impl From<&anyhow::Error> for ErrorReport {
    fn from(err: &anyhow::Error) -> Self {
        let causes = err.chain().skip(1).map(|c| c.to_string()).collect();
        Self {
            message: Some(err.to_string()),
            stack: join_causes(causes),
            error_type: None,
            context: ErrorContext::new(),
        }
    }
}

fn join_causes(causes: Vec<String>) -> Option<String> {
    if causes.is_empty() {
        None
    } else {
        Some(causes.join("\n"))
    }
}

/// `std::any::type_name` 결과에서 경로와 제네릭을 제거합니다.
fn short_type_name(full: &str) -> String {
    if full.starts_with("dyn ") || full.starts_with('&') {
        return DEFAULT_ERROR_TYPE.to_string();
    }
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct StorageFailure {
        cause: std::io::Error,
    }

    impl fmt::Display for StorageFailure {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "failed to persist draft")
        }
    }

    impl std::error::Error for StorageFailure {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.cause)
        }
    }

    #[test]
    fn test_from_error_uses_type_name_and_chain() {
        let err = StorageFailure {
            cause: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        let record = ErrorReport::from_error(&err).into_record(ErrorContext::new());

        assert_eq!(record.message, "failed to persist draft");
        assert_eq!(record.error_type, "StorageFailure");
        assert_eq!(record.stack.as_deref(), Some("disk full"));
    }

    #[test]
    fn test_from_dyn_error_falls_back_to_default_type() {
        let err: Box<dyn std::error::Error> = "boom".into();
        let record = ErrorReport::from_error(err.as_ref()).into_record(ErrorContext::new());
        assert_eq!(record.message, "boom");
        assert_eq!(record.error_type, DEFAULT_ERROR_TYPE);
        assert!(record.stack.is_none());
    }

    #[test]
    fn test_missing_fields_are_normalized() {
        let record = ErrorReport::default().into_record(ErrorContext::new());
        assert_eq!(record.message, "");
        assert_eq!(record.error_type, DEFAULT_ERROR_TYPE);
        assert!(record.stack.is_none());
        assert!(record.context.is_empty());

        let blank = ErrorReport::new("x")
            .with_type("  ")
            .with_stack("")
            .into_record(ErrorContext::new());
        assert_eq!(blank.error_type, DEFAULT_ERROR_TYPE);
        assert!(blank.stack.is_none());
    }

    #[test]
    fn test_caller_context_overrides_report_context() {
        let mut context = ErrorContext::new();
        context.insert("screen".to_string(), Value::from("settings"));

        let record = ErrorReport::new("x")
            .with_context("screen", "home")
            .with_context("retry", 2)
            .into_record(context);

        assert_eq!(record.context["screen"], Value::from("settings"));
        assert_eq!(record.context["retry"], Value::from(2));
    }

    #[test]
    fn test_anyhow_chain() {
        let err = anyhow::anyhow!("socket closed").context("sync failed");
        let record = ErrorReport::from(err).into_record(ErrorContext::new());
        assert_eq!(record.message, "sync failed");
        assert_eq!(record.stack.as_deref(), Some("socket closed"));
        assert_eq!(record.error_type, DEFAULT_ERROR_TYPE);
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("std::io::error::Error"), "Error");
        assert_eq!(short_type_name("my_app::net::Timeout<u8>"), "Timeout");
        assert_eq!(short_type_name("dyn core::error::Error"), DEFAULT_ERROR_TYPE);
    }

    #[test]
    fn test_capture_backtrace_sets_stack() {
        let record = ErrorReport::new("render failed")
            .capture_backtrace()
            .into_record(ErrorContext::new());
        let stack = record.stack.expect("backtrace stack");
        assert!(!stack.trim().is_empty());
        assert_eq!(record.message, "render failed");
    }
}
