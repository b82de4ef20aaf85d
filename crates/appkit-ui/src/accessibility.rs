//! 접근성 헬퍼.
//!
//! - 컴포넌트 종류 → 접근성 역할 정적 매핑
//! - 라벨/힌트/상태를 묶은 [`AccessibilityProps`] 생성자
//! - 스크린 리더 알림 ([`ScreenReader`], [`Announcer`])

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use appkit_core::AppError;

// =============================================================================
// 에러 타입
// =============================================================================

/// 스크린 리더 서비스 에러.
#[derive(Debug, Error)]
pub enum AccessibilityError {
    /// 서비스를 사용할 수 없음
    #[error("Screen reader unavailable: {0}")]
    Unavailable(String),

    /// 알림 전달 실패
    #[error("Announcement failed: {0}")]
    AnnouncementFailed(String),
}

impl From<AccessibilityError> for AppError {
    fn from(err: AccessibilityError) -> Self {
        AppError::Accessibility(err.to_string())
    }
}

// =============================================================================
// 역할 매핑
// =============================================================================

/// 플랫폼 접근성 역할.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessibilityRole {
    None,
    Button,
    Link,
    Search,
    Image,
    ImageButton,
    Text,
    Header,
    Adjustable,
    Checkbox,
    Switch,
    Radio,
    Tab,
    TabList,
    Menu,
    MenuItem,
    Alert,
    ProgressBar,
    Summary,
}

impl AccessibilityRole {
    /// 스크린 리더가 읽는 역할 이름. `None`과 `Text`는 읽지 않습니다.
    pub fn spoken_name(&self) -> Option<&'static str> {
        match self {
            Self::None | Self::Text | Self::Summary => None,
            Self::Button => Some("button"),
            Self::Link => Some("link"),
            Self::Search => Some("search field"),
            Self::Image => Some("image"),
            Self::ImageButton => Some("image button"),
            Self::Header => Some("heading"),
            Self::Adjustable => Some("adjustable"),
            Self::Checkbox => Some("checkbox"),
            Self::Switch => Some("switch"),
            Self::Radio => Some("radio button"),
            Self::Tab => Some("tab"),
            Self::TabList => Some("tab list"),
            Self::Menu => Some("menu"),
            Self::MenuItem => Some("menu item"),
            Self::Alert => Some("alert"),
            Self::ProgressBar => Some("progress bar"),
        }
    }
}

/// 앱에서 사용하는 컴포넌트 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Button,
    IconButton,
    Link,
    Heading,
    Image,
    DecorativeImage,
    Paragraph,
    SearchField,
    Checkbox,
    Toggle,
    RadioOption,
    Slider,
    Tab,
    TabBar,
    Menu,
    MenuItem,
    ErrorBanner,
    Spinner,
    AppSummary,
}

/// 컴포넌트 종류에 해당하는 접근성 역할.
pub fn role_for(kind: ComponentKind) -> AccessibilityRole {
    match kind {
        ComponentKind::Button => AccessibilityRole::Button,
        ComponentKind::IconButton => AccessibilityRole::ImageButton,
        ComponentKind::Link => AccessibilityRole::Link,
        ComponentKind::Heading => AccessibilityRole::Header,
        ComponentKind::Image => AccessibilityRole::Image,
        ComponentKind::DecorativeImage => AccessibilityRole::None,
        ComponentKind::Paragraph => AccessibilityRole::Text,
        ComponentKind::SearchField => AccessibilityRole::Search,
        ComponentKind::Checkbox => AccessibilityRole::Checkbox,
        ComponentKind::Toggle => AccessibilityRole::Switch,
        ComponentKind::RadioOption => AccessibilityRole::Radio,
        ComponentKind::Slider => AccessibilityRole::Adjustable,
        ComponentKind::Tab => AccessibilityRole::Tab,
        ComponentKind::TabBar => AccessibilityRole::TabList,
        ComponentKind::Menu => AccessibilityRole::Menu,
        ComponentKind::MenuItem => AccessibilityRole::MenuItem,
        ComponentKind::ErrorBanner => AccessibilityRole::Alert,
        ComponentKind::Spinner => AccessibilityRole::ProgressBar,
        ComponentKind::AppSummary => AccessibilityRole::Summary,
    }
}

// =============================================================================
// 접근성 속성
// =============================================================================

/// 접근성 상태 플래그.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityState {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub busy: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expanded: Option<bool>,
}

/// 컴포넌트에 붙일 접근성 속성 묶음.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityProps {
    /// 스크린 리더가 읽는 라벨
    pub label: String,
    /// 동작 결과 안내 (선택적)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// 역할
    pub role: AccessibilityRole,
    /// 조절 가능한 컴포넌트의 현재 값
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// 상태
    #[serde(default)]
    pub state: AccessibilityState,
}

impl AccessibilityProps {
    /// 임의의 역할로 생성합니다.
    pub fn new(label: impl Into<String>, role: AccessibilityRole) -> Self {
        Self {
            label: label.into(),
            hint: None,
            role,
            value: None,
            state: AccessibilityState::default(),
        }
    }

    /// 컴포넌트 종류로 역할을 정해 생성합니다.
    pub fn for_component(label: impl Into<String>, kind: ComponentKind) -> Self {
        Self::new(label, role_for(kind))
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::new(label, AccessibilityRole::Button)
    }

    pub fn link(label: impl Into<String>) -> Self {
        Self::new(label, AccessibilityRole::Link)
    }

    pub fn header(text: impl Into<String>) -> Self {
        Self::new(text, AccessibilityRole::Header)
    }

    /// 이미지 설명. 설명이 비어 있으면 장식용 이미지로 보고 역할을 `None`으로 둡니다.
    pub fn image(description: impl Into<String>) -> Self {
        let description = description.into();
        if description.trim().is_empty() {
            Self::new(String::new(), AccessibilityRole::None)
        } else {
            Self::new(description, AccessibilityRole::Image)
        }
    }

    pub fn checkbox(label: impl Into<String>, checked: bool) -> Self {
        let mut props = Self::new(label, AccessibilityRole::Checkbox);
        props.state.checked = Some(checked);
        props
    }

    pub fn switch(label: impl Into<String>, on: bool) -> Self {
        let mut props = Self::new(label, AccessibilityRole::Switch);
        props.state.checked = Some(on);
        props
    }

    pub fn adjustable(label: impl Into<String>, value: impl std::fmt::Display) -> Self {
        let mut props = Self::new(label, AccessibilityRole::Adjustable);
        props.value = Some(value.to_string());
        props
    }

    /// 힌트를 설정합니다. 빈 문자열은 무시합니다.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        let hint = hint.into();
        self.hint = (!hint.trim().is_empty()).then_some(hint);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.state.disabled = disabled;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.state.selected = selected;
        self
    }

    pub fn busy(mut self, busy: bool) -> Self {
        self.state.busy = busy;
        self
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.state.expanded = Some(expanded);
        self
    }

    /// 스크린 리더가 읽을 전체 문장.
    ///
    /// 순서: 라벨, 역할, 값, 상태, 힌트. 비어 있는 부분은 생략합니다.
    pub fn spoken_text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if !self.label.trim().is_empty() {
            parts.push(self.label.trim().to_string());
        }
        if let Some(role) = self.role.spoken_name() {
            parts.push(role.to_string());
        }
        if let Some(value) = &self.value {
            parts.push(value.clone());
        }

        let state = &self.state;
        if let Some(checked) = state.checked {
            let word = match (self.role, checked) {
                (AccessibilityRole::Switch, true) => "on",
                (AccessibilityRole::Switch, false) => "off",
                (_, true) => "checked",
                (_, false) => "not checked",
            };
            parts.push(word.to_string());
        }
        if state.selected {
            parts.push("selected".to_string());
        }
        if let Some(expanded) = state.expanded {
            parts.push(if expanded { "expanded" } else { "collapsed" }.to_string());
        }
        if state.busy {
            parts.push("busy".to_string());
        }
        if state.disabled {
            parts.push("disabled".to_string());
        }

        if let Some(hint) = &self.hint {
            parts.push(hint.trim().to_string());
        }

        parts.join(", ")
    }
}

// =============================================================================
// 스크린 리더
// =============================================================================

/// 플랫폼 스크린 리더 서비스.
#[async_trait]
pub trait ScreenReader: Send + Sync {
    /// 텍스트를 음성으로 알립니다.
    async fn announce(&self, text: &str) -> Result<(), AccessibilityError>;

    /// 스크린 리더가 켜져 있는지 확인합니다.
    async fn is_enabled(&self) -> Result<bool, AccessibilityError>;
}

/// 알림을 로그로만 남기는 스크린 리더. 플랫폼 서비스가 없는 환경용.
#[derive(Debug, Clone, Copy)]
pub struct TracingScreenReader {
    enabled: bool,
}

impl TracingScreenReader {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Default for TracingScreenReader {
    fn default() -> Self {
        Self::new(true)
    }
}

#[async_trait]
impl ScreenReader for TracingScreenReader {
    async fn announce(&self, text: &str) -> Result<(), AccessibilityError> {
        info!(text, "Screen reader announcement");
        Ok(())
    }

    async fn is_enabled(&self) -> Result<bool, AccessibilityError> {
        Ok(self.enabled)
    }
}

/// 스크린 리더 래퍼.
///
/// 실패는 `warn!`으로 남긴 뒤 `Result`로 돌려줍니다.
#[derive(Debug, Clone)]
pub struct Announcer<R> {
    reader: R,
}

impl<R: ScreenReader> Announcer<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// 텍스트를 알립니다. 빈 텍스트는 건너뛰고 `Ok(false)`를 반환합니다.
    pub async fn announce(&self, text: &str) -> Result<bool, AccessibilityError> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Skipping empty announcement");
            return Ok(false);
        }

        match self.reader.announce(text).await {
            Ok(()) => Ok(true),
            Err(e) => {
                warn!(error = %e, "Screen reader announcement failed");
                Err(e)
            }
        }
    }

    /// 속성의 전체 문장을 알립니다.
    pub async fn announce_props(
        &self,
        props: &AccessibilityProps,
    ) -> Result<bool, AccessibilityError> {
        self.announce(&props.spoken_text()).await
    }

    /// 스크린 리더가 켜져 있을 때만 알립니다.
    pub async fn announce_if_enabled(&self, text: &str) -> Result<bool, AccessibilityError> {
        if !self.is_enabled().await? {
            return Ok(false);
        }
        self.announce(text).await
    }

    /// 스크린 리더 활성 여부.
    pub async fn is_enabled(&self) -> Result<bool, AccessibilityError> {
        self.reader.is_enabled().await.map_err(|e| {
            warn!(error = %e, "Screen reader status query failed");
            e
        })
    }

    /// 활성 여부를 조회하고 실패는 `false`로 대체합니다.
    pub async fn is_enabled_or_false(&self) -> bool {
        self.is_enabled().await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_lookup() {
        assert_eq!(role_for(ComponentKind::Button), AccessibilityRole::Button);
        assert_eq!(role_for(ComponentKind::Toggle), AccessibilityRole::Switch);
        assert_eq!(role_for(ComponentKind::Slider), AccessibilityRole::Adjustable);
        assert_eq!(role_for(ComponentKind::DecorativeImage), AccessibilityRole::None);
    }

    #[test]
    fn test_spoken_text_order() {
        let props = AccessibilityProps::button("Save")
            .with_hint("Saves the draft")
            .disabled(true);
        assert_eq!(props.spoken_text(), "Save, button, disabled, Saves the draft");
    }

    #[test]
    fn test_checkbox_and_switch_states() {
        assert_eq!(
            AccessibilityProps::checkbox("Remember me", false).spoken_text(),
            "Remember me, checkbox, not checked"
        );
        assert_eq!(
            AccessibilityProps::switch("Dark mode", true).spoken_text(),
            "Dark mode, switch, on"
        );
    }

    #[test]
    fn test_adjustable_value_and_expanded() {
        let props = AccessibilityProps::adjustable("Volume", "40%");
        assert_eq!(props.spoken_text(), "Volume, adjustable, 40%");

        let menu = AccessibilityProps::for_component("Sort", ComponentKind::Menu).expanded(false);
        assert_eq!(menu.spoken_text(), "Sort, menu, collapsed");
    }

    #[test]
    fn test_decorative_image() {
        let props = AccessibilityProps::image("   ");
        assert_eq!(props.role, AccessibilityRole::None);
        assert_eq!(props.spoken_text(), "");

        let photo = AccessibilityProps::image("Profile photo");
        assert_eq!(photo.spoken_text(), "Profile photo, image");
    }

    #[test]
    fn test_blank_hint_is_ignored() {
        let props = AccessibilityProps::link("Terms").with_hint("  ");
        assert!(props.hint.is_none());
    }

    #[tokio::test]
    async fn test_tracing_reader() {
        let announcer = Announcer::new(TracingScreenReader::new(false));
        assert!(!announcer.is_enabled_or_false().await);
        assert!(!announcer.announce_if_enabled("hidden").await.unwrap());
        assert!(announcer.announce("visible").await.unwrap());
        assert!(!announcer.announce("   ").await.unwrap());
    }
}
