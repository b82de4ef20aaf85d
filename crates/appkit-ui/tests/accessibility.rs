//! 스크린 리더 래퍼 통합 테스트.

use async_trait::async_trait;
use std::sync::Mutex;

use appkit_ui::{AccessibilityError, AccessibilityProps, Announcer, ComponentKind, ScreenReader};

/// 알림을 기록하는 테스트용 스크린 리더.
#[derive(Default)]
struct RecordingReader {
    enabled: bool,
    spoken: Mutex<Vec<String>>,
}

#[async_trait]
impl ScreenReader for RecordingReader {
    async fn announce(&self, text: &str) -> Result<(), AccessibilityError> {
        self.spoken.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn is_enabled(&self) -> Result<bool, AccessibilityError> {
        Ok(self.enabled)
    }
}

/// 서비스가 없는 플랫폼.
struct MissingReader;

#[async_trait]
impl ScreenReader for MissingReader {
    async fn announce(&self, _text: &str) -> Result<(), AccessibilityError> {
        Err(AccessibilityError::AnnouncementFailed("no service".to_string()))
    }

    async fn is_enabled(&self) -> Result<bool, AccessibilityError> {
        Err(AccessibilityError::Unavailable("no service".to_string()))
    }
}

#[tokio::test]
async fn test_announcements_are_trimmed_and_recorded() {
    let announcer = Announcer::new(RecordingReader {
        enabled: true,
        ..Default::default()
    });

    assert!(announcer.announce("  Upload complete ").await.unwrap());
    assert!(!announcer.announce("").await.unwrap());

    let props = AccessibilityProps::for_component("Retry", ComponentKind::Button)
        .with_hint("Tries the upload again");
    assert!(announcer.announce_if_enabled(&props.spoken_text()).await.unwrap());
    assert!(announcer.announce_props(&AccessibilityProps::image("")).await.is_ok());

    let spoken = announcer.reader().spoken.lock().unwrap().clone();
    assert_eq!(
        spoken,
        vec![
            "Upload complete".to_string(),
            "Retry, button, Tries the upload again".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_missing_service_degrades() {
    let announcer = Announcer::new(MissingReader);

    assert!(matches!(
        announcer.announce("hello").await,
        Err(AccessibilityError::AnnouncementFailed(_))
    ));
    assert!(announcer.is_enabled().await.is_err());
    assert!(!announcer.is_enabled_or_false().await);
    assert!(announcer.announce_if_enabled("hello").await.is_err());
}

#[test]
fn test_props_serialize_with_platform_role_names() {
    let props = AccessibilityProps::for_component("Close", ComponentKind::IconButton);
    let json = serde_json::to_value(&props).unwrap();
    assert_eq!(json["role"], "imagebutton");
    assert!(json.get("hint").is_none());
    assert_eq!(json["state"], serde_json::json!({}));
}
