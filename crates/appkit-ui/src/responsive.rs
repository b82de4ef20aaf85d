//! 반응형 레이아웃 breakpoint.
//!
//! 현재 뷰포트 너비로 기기를 mobile / tablet / desktop으로 분류하고,
//! 분류에 맞는 값을 고릅니다.
//!
//! | 분류    | 너비 (논리 픽셀)       |
//! |---------|------------------------|
//! | mobile  | `< tablet` (768)       |
//! | tablet  | `tablet ..< desktop`   |
//! | desktop | `>= desktop` (1024)    |

use serde::{Deserialize, Serialize};

use appkit_core::BreakpointConfig;

/// 기기 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mobile => write!(f, "mobile"),
            Self::Tablet => write!(f, "tablet"),
            Self::Desktop => write!(f, "desktop"),
        }
    }
}

/// 화면 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Portrait => write!(f, "portrait"),
            Self::Landscape => write!(f, "landscape"),
        }
    }
}

/// 분류 기준 너비.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    /// 태블릿 최소 너비
    pub tablet: u32,
    /// 데스크톱 최소 너비
    pub desktop: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            tablet: 768,
            desktop: 1024,
        }
    }
}

impl From<BreakpointConfig> for Breakpoints {
    fn from(config: BreakpointConfig) -> Self {
        Self {
            tablet: config.tablet,
            desktop: config.desktop,
        }
    }
}

impl Breakpoints {
    /// 너비로 기기를 분류합니다.
    pub fn classify(&self, width: f32) -> DeviceClass {
        if width >= self.desktop as f32 {
            DeviceClass::Desktop
        } else if width >= self.tablet as f32 {
            DeviceClass::Tablet
        } else {
            DeviceClass::Mobile
        }
    }
}

/// 뷰포트 크기 (논리 픽셀).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// 높이가 너비 이상이면 세로 방향.
    pub fn orientation(&self) -> Orientation {
        if self.height >= self.width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

/// 현재 화면 크기를 제공하는 플랫폼 서비스.
pub trait DisplayMetrics: Send + Sync {
    /// 현재 뷰포트.
    fn viewport(&self) -> Viewport;
}

/// 고정 크기 디스플레이. 헤드리스 실행과 테스트용.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedDisplay(pub Viewport);

impl FixedDisplay {
    pub fn new(width: f32, height: f32) -> Self {
        Self(Viewport::new(width, height))
    }
}

impl DisplayMetrics for FixedDisplay {
    fn viewport(&self) -> Viewport {
        self.0
    }
}

/// 디스플레이와 breakpoint를 묶은 반응형 헬퍼.
///
/// 화면 크기는 회전 등으로 바뀔 수 있으므로 매 호출마다 다시 조회합니다.
#[derive(Debug, Clone)]
pub struct Responsive<D> {
    display: D,
    breakpoints: Breakpoints,
}

impl<D: DisplayMetrics> Responsive<D> {
    pub fn new(display: D, breakpoints: Breakpoints) -> Self {
        Self {
            display,
            breakpoints,
        }
    }

    /// 기본 breakpoint(768 / 1024)로 생성합니다.
    pub fn with_default_breakpoints(display: D) -> Self {
        Self::new(display, Breakpoints::default())
    }

    pub fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }

    pub fn viewport(&self) -> Viewport {
        self.display.viewport()
    }

    pub fn device_class(&self) -> DeviceClass {
        self.breakpoints.classify(self.viewport().width)
    }

    pub fn orientation(&self) -> Orientation {
        self.viewport().orientation()
    }

    pub fn is_mobile(&self) -> bool {
        self.device_class() == DeviceClass::Mobile
    }

    pub fn is_tablet(&self) -> bool {
        self.device_class() == DeviceClass::Tablet
    }

    pub fn is_desktop(&self) -> bool {
        self.device_class() == DeviceClass::Desktop
    }

    /// 현재 기기 분류에 해당하는 값을 고릅니다.
    pub fn responsive_value<T>(&self, mobile: T, tablet: T, desktop: T) -> T {
        match self.device_class() {
            DeviceClass::Mobile => mobile,
            DeviceClass::Tablet => tablet,
            DeviceClass::Desktop => desktop,
        }
    }

    /// 뷰포트 너비의 `percent`% (0–100으로 제한).
    pub fn width_percent(&self, percent: f32) -> f32 {
        self.viewport().width * clamp_percent(percent) / 100.0
    }

    /// 뷰포트 높이의 `percent`% (0–100으로 제한).
    pub fn height_percent(&self, percent: f32) -> f32 {
        self.viewport().height * clamp_percent(percent) / 100.0
    }
}

fn clamp_percent(percent: f32) -> f32 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}
