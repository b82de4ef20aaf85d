//! 전역 추적기 및 `track_error!` 매크로 테스트.
//!
//! 전역 상태를 사용하므로 하나의 테스트에서 순서대로 검증합니다.

use appkit_monitoring::{
    global_tracker, init_global_tracker, install_global_tracker, track_error, ErrorTracker,
    ErrorTrackerConfig,
};
use serde_json::json;

#[test]
fn test_global_tracker_lifecycle() {
    let injected = ErrorTracker::new(ErrorTrackerConfig::with_max_errors(5));
    assert!(install_global_tracker(injected.clone()).is_ok());

    // 이미 초기화되었으므로 교체되지 않음
    assert!(!init_global_tracker(ErrorTrackerConfig::default()));
    assert!(install_global_tracker(ErrorTracker::with_defaults()).is_err());
    assert_eq!(global_tracker().capacity(), 5);

    track_error!("plain");
    track_error!("with context", screen = "feed", attempt = 2, offline = true);

    // 주입된 핸들과 전역 핸들이 같은 로그를 공유
    let recent = injected.get_recent(10);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].message, "plain");
    assert_eq!(recent[1].context["screen"], json!("feed"));
    assert_eq!(recent[1].context["attempt"], json!(2));
    assert_eq!(recent[1].context["offline"], json!(true));

    for i in 0..10 {
        track_error!(format!("burst {}", i));
    }
    assert_eq!(global_tracker().len(), 5);

    global_tracker().clear();
    assert!(injected.is_empty());
}
