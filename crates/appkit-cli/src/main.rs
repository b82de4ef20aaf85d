//! appkit 진단 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 너비 800 기기 분류 및 값 선택
//! appkit breakpoint --width 800 --values 10,20,30
//!
//! # 파일 저장소 조작
//! appkit storage set theme '"dark"'
//! appkit storage keys
//!
//! # 합성 에러 1005개 기록 후 통계 출력
//! appkit errors demo --count 1005 --types A,B
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use appkit_core::{init_logging, AppConfig, LogConfig};
use appkit_monitoring::{ErrorTracker, ErrorTrackerConfig};
use appkit_storage::{FileBackend, Storage};

mod commands;

use commands::errors::ErrorsCommand;
use commands::storage::StorageCommand;

#[derive(Parser)]
#[command(name = "appkit")]
#[command(about = "모바일 앱 지원 유틸리티 진단 도구", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 (TOML/JSON/YAML). 없으면 기본값 + APPKIT__* 환경 변수
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 화면 너비로 기기 분류 (mobile / tablet / desktop)
    Breakpoint {
        /// 뷰포트 너비 (논리 픽셀)
        #[arg(short, long)]
        width: f32,

        /// 뷰포트 높이 (논리 픽셀)
        #[arg(long, default_value = "800")]
        height: f32,

        /// 분류별 값 "mobile,tablet,desktop"
        #[arg(long)]
        values: Option<String>,
    },

    /// JSON 파일 키-값 저장소 조작
    Storage {
        /// 저장 파일 경로 (기본: 설정의 storage.path)
        #[arg(short, long)]
        file: Option<String>,

        #[command(subcommand)]
        action: StorageCommand,
    },

    /// 에러 추적기 진단
    Errors {
        #[command(subcommand)]
        action: ErrorsCommand,
    },
}

fn load_config(path: Option<&str>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => AppConfig::from_env().context("failed to load config from environment")?,
    };
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    if let Err(e) = init_logging(LogConfig::from(&config.logging)) {
        eprintln!("logging init failed: {}", e);
    }

    match cli.command {
        Commands::Breakpoint {
            width,
            height,
            values,
        } => {
            let report = commands::breakpoint::evaluate(
                width,
                height,
                values.as_deref(),
                config.breakpoints.into(),
            )?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Commands::Storage { file, action } => {
            let backend = match file {
                Some(path) => FileBackend::new(path),
                None => FileBackend::from_config(&config.storage),
            };
            info!(path = %backend.path().display(), "Using storage file");

            let storage = Storage::with_config(backend, &config.storage);
            let output = commands::storage::run(&storage, action).await?;
            println!("{}", output);
        }

        Commands::Errors {
            action:
                ErrorsCommand::Demo {
                    count,
                    types,
                    export,
                },
        } => {
            let tracker = ErrorTracker::new(ErrorTrackerConfig::from(&config.tracker));
            if count > tracker.capacity() {
                warn!(
                    count,
                    capacity = tracker.capacity(),
                    "Count exceeds capacity, oldest errors will be evicted"
                );
            }

            let types = commands::errors::parse_types(types.as_deref());
            let stats = commands::errors::demo(&tracker, count, &types);

            if export {
                println!("{}", tracker.export_json()?);
            } else {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_demo_arguments() {
        let cli = Cli::try_parse_from([
            "appkit", "errors", "demo", "--count", "1005", "--types", "A,B", "--export",
        ])
        .unwrap();

        match cli.command {
            Commands::Errors {
                action:
                    ErrorsCommand::Demo {
                        count,
                        types,
                        export,
                    },
            } => {
                assert_eq!(count, 1005);
                assert_eq!(types.as_deref(), Some("A,B"));
                assert!(export);
            }
            _ => panic!("expected errors demo"),
        }
    }

    #[test]
    fn test_errors_requires_subcommand() {
        assert!(Cli::try_parse_from(["appkit", "errors", "--count", "5"]).is_err());
    }
}
