//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정을 정의하고 관리합니다.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AppError, AppResult};

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// 로깅 설정
    pub logging: LoggingConfig,
    /// 에러 추적기 설정
    pub tracker: TrackerConfig,
    /// 키-값 저장소 설정
    pub storage: StorageConfig,
    /// 반응형 레이아웃 breakpoint 설정
    pub breakpoints: BreakpointConfig,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 에러 추적기 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// 보관할 최대 에러 수
    pub max_errors: usize,
    /// 통계에 포함할 최근 에러 수
    pub recent_window: usize,
    /// `get_recent` 기본 조회 개수
    pub default_recent_limit: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_errors: 1000,
            recent_window: 10,
            default_recent_limit: 50,
        }
    }
}

/// 키-값 저장소 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// 파일 백엔드 경로
    pub path: String,
    /// 키 앞에 붙는 네임스페이스
    pub namespace: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "./appkit-storage.json".to_string(),
            namespace: "@appkit:".to_string(),
        }
    }
}

/// 반응형 breakpoint 설정 (논리 픽셀 단위).
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct BreakpointConfig {
    /// 태블릿으로 분류되는 최소 너비
    pub tablet: u32,
    /// 데스크톱으로 분류되는 최소 너비
    pub desktop: u32,
}

impl Default for BreakpointConfig {
    fn default() -> Self {
        Self {
            tablet: 768,
            desktop: 1024,
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(Self::env_source());

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 파일 없이 기본값과 환경 변수만으로 설정을 로드합니다.
    pub fn from_env() -> AppResult<Self> {
        let builder = config::Config::builder().add_source(Self::env_source());

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn env_source() -> config::Environment {
        config::Environment::with_prefix("APPKIT")
            .separator("__")
            .try_parsing(true)
    }

    /// 설정 값의 일관성을 검사합니다.
    pub fn validate(&self) -> AppResult<()> {
        if self.tracker.max_errors == 0 {
            return Err(AppError::Config(
                "tracker.max_errors must be greater than 0".to_string(),
            ));
        }
        if self.breakpoints.tablet >= self.breakpoints.desktop {
            return Err(AppError::Config(format!(
                "breakpoints.tablet ({}) must be below breakpoints.desktop ({})",
                self.breakpoints.tablet, self.breakpoints.desktop
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.tracker.max_errors, 1000);
        assert_eq!(config.tracker.recent_window, 10);
        assert_eq!(config.tracker.default_recent_limit, 50);
        assert_eq!(config.breakpoints.tablet, 768);
        assert_eq!(config.breakpoints.desktop, 1024);
        assert_eq!(config.storage.namespace, "@appkit:");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[tracker]\nmax_errors = 25\n\n[logging]\nformat = \"json\"").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.tracker.max_errors, 25);
        // 생략된 필드는 기본값 유지
        assert_eq!(config.tracker.recent_window, 10);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.breakpoints.tablet, 768);
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let mut config = AppConfig::default();
        config.tracker.max_errors = 0;
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_inverted_breakpoints() {
        let mut config = AppConfig::default();
        config.breakpoints.tablet = 1200;
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }
}
