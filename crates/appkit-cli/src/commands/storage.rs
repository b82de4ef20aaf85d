//! 키-값 저장소 명령.

use anyhow::Result;
use clap::Subcommand;
use serde_json::Value;

use appkit_storage::{KeyValueBackend, Storage};

#[derive(Debug, Subcommand)]
pub enum StorageCommand {
    /// 값 조회 (JSON 출력)
    Get {
        /// 키 (네임스페이스 제외)
        key: String,
    },

    /// 값 저장. JSON으로 해석되지 않으면 문자열로 저장
    Set {
        key: String,
        value: String,
    },

    /// 키 삭제
    Remove { key: String },

    /// 네임스페이스 안의 키 목록
    Keys,

    /// 네임스페이스 안의 항목 전체 삭제
    Clear,
}

/// 명령을 실행하고 출력할 텍스트를 반환합니다.
pub async fn run<B: KeyValueBackend>(
    storage: &Storage<B>,
    command: StorageCommand,
) -> Result<String> {
    let output = match command {
        StorageCommand::Get { key } => match storage.get::<Value>(&key).await? {
            Some(value) => serde_json::to_string_pretty(&value)?,
            None => "null".to_string(),
        },
        StorageCommand::Set { key, value } => {
            let parsed =
                serde_json::from_str::<Value>(&value).unwrap_or_else(|_| Value::String(value));
            storage.set(&key, &parsed).await?;
            format!("stored '{}'", key)
        }
        StorageCommand::Remove { key } => {
            if storage.remove(&key).await? {
                format!("removed '{}'", key)
            } else {
                format!("'{}' not found", key)
            }
        }
        StorageCommand::Keys => {
            let mut keys = storage.get_all_keys().await?;
            keys.sort();
            keys.join("\n")
        }
        StorageCommand::Clear => {
            let removed = storage.clear().await?;
            format!("cleared {} entries", removed)
        }
    };
    Ok(output)
}
