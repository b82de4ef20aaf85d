//! 에러 추적기 진단 명령.

use appkit_monitoring::{ErrorContext, ErrorReport, ErrorStats, ErrorTracker};
use clap::Subcommand;
use serde_json::json;

#[derive(Debug, Subcommand)]
pub enum ErrorsCommand {
    /// 합성 에러를 기록하고 추적기 통계 출력
    Demo {
        /// 기록할 에러 수
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// 순환할 에러 유형 (쉼표 구분)
        #[arg(short, long)]
        types: Option<String>,

        /// 통계 대신 전체 로그를 JSON으로 출력
        #[arg(long, default_value = "false")]
        export: bool,
    },
}

/// 합성 에러를 `count`개 기록하고 통계를 반환합니다.
///
/// 유형은 `types`를 순환하며, 비어 있으면 기본 유형을 사용합니다.
pub fn demo(tracker: &ErrorTracker, count: usize, types: &[String]) -> ErrorStats {
    for i in 0..count {
        let mut report = ErrorReport::new(format!("synthetic error #{}", i));
        if let Some(error_type) = types.get(i % types.len().max(1)) {
            report = report.with_type(error_type.clone());
        }

        let mut context = ErrorContext::new();
        context.insert("index".to_string(), json!(i));
        context.insert("source".to_string(), json!("appkit-cli"));
        tracker.record(report, context);
    }
    tracker.get_stats()
}

/// 쉼표로 구분된 유형 목록을 파싱합니다.
pub fn parse_types(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
