//! 화면 너비 분류 명령.

use anyhow::{bail, Result};
use serde::Serialize;

use appkit_ui::{Breakpoints, DeviceClass, FixedDisplay, Orientation, Responsive};

/// 분류 결과.
#[derive(Debug, Serialize)]
pub struct BreakpointReport {
    pub width: f32,
    pub height: f32,
    pub device_class: DeviceClass,
    pub orientation: Orientation,
    /// `--values`로 넘긴 세 값 중 선택된 값
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// "mobile,tablet,desktop" 형식의 값을 파싱합니다.
pub fn parse_values(raw: &str) -> Result<[String; 3]> {
    let parts: Vec<String> = raw.split(',').map(|s| s.trim().to_string()).collect();
    match <[String; 3]>::try_from(parts) {
        Ok(values) => Ok(values),
        Err(parts) => bail!(
            "--values expects exactly 3 comma-separated values (mobile,tablet,desktop), got {}",
            parts.len()
        ),
    }
}

/// 뷰포트를 분류하고 선택 값을 계산합니다.
pub fn evaluate(
    width: f32,
    height: f32,
    values: Option<&str>,
    breakpoints: Breakpoints,
) -> Result<BreakpointReport> {
    if !width.is_finite() || width < 0.0 || !height.is_finite() || height < 0.0 {
        bail!("width and height must be non-negative numbers");
    }

    let responsive = Responsive::new(FixedDisplay::new(width, height), breakpoints);
    let value = match values {
        Some(raw) => {
            let [mobile, tablet, desktop] = parse_values(raw)?;
            Some(responsive.responsive_value(mobile, tablet, desktop))
        }
        None => None,
    };

    Ok(BreakpointReport {
        width,
        height,
        device_class: responsive.device_class(),
        orientation: responsive.orientation(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_tablet() {
        let report = evaluate(800.0, 1200.0, Some("10,20,30"), Breakpoints::default()).unwrap();
        assert_eq!(report.device_class, DeviceClass::Tablet);
        assert_eq!(report.orientation, Orientation::Portrait);
        assert_eq!(report.value.as_deref(), Some("20"));
    }

    #[test]
    fn test_parse_values_requires_three() {
        assert!(parse_values("a,b").is_err());
        assert_eq!(parse_values(" a , b ,c").unwrap(), ["a", "b", "c"]);
    }

    #[test]
    fn test_rejects_negative_width() {
        assert!(evaluate(-1.0, 100.0, None, Breakpoints::default()).is_err());
    }
}
