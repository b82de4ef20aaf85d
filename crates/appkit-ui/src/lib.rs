//! # Appkit UI
//!
//! 렌더링과 무관한 UI 보조 기능을 제공합니다:
//! - [`responsive`]: 화면 너비 기반 기기 분류와 breakpoint별 값 선택
//! - [`accessibility`]: 접근성 역할/라벨 헬퍼와 스크린 리더 알림

pub mod accessibility;
pub mod responsive;

pub use accessibility::{
    role_for, AccessibilityError, AccessibilityProps, AccessibilityRole, AccessibilityState,
    Announcer, ComponentKind, ScreenReader, TracingScreenReader,
};
pub use responsive::{
    Breakpoints, DeviceClass, DisplayMetrics, FixedDisplay, Orientation, Responsive, Viewport,
};
