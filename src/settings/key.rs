//! Setting keys and their declared defaults.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{FlipbookError, Result};
use crate::settings::page::{BackgroundStyle, PreferencePage};
use crate::settings::value::SettingValue;

/// Declared value type of a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKind {
    Int,
    Bool,
    Str,
}

impl fmt::Display for SettingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SettingKind::Int => "integer",
            SettingKind::Bool => "boolean",
            SettingKind::Str => "string",
        };
        f.write_str(name)
    }
}

/// Every persisted preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingKey {
    // General
    WindowOpacity,
    CurveSmoothing,
    Shadow,
    ToolCursor,
    Antialias,
    BlurryZoom,
    HighResolution,
    BackgroundStyle,
    // Files
    AutoSave,
    AutoSaveNumber,
    // Timeline
    DrawLabel,
    LabelFontSize,
    FrameSize,
    TimelineLength,
    ShortScrub,
    // Tools
    OnionMaxOpacity,
    OnionMinOpacity,
    OnionPrevFramesNum,
    OnionNextFramesNum,
}

/// Built-in fallback used when nothing is stored for a key.
#[derive(Debug, Clone, Copy)]
enum Fallback {
    Int(i32),
    Bool(bool),
    Str(&'static str),
}

#[derive(Debug, Clone, Copy)]
struct KeySpec {
    name: &'static str,
    fallback: Fallback,
    range: Option<(i32, i32)>,
    page: PreferencePage,
}

const fn int(name: &'static str, default: i32, min: i32, max: i32, page: PreferencePage) -> KeySpec {
    KeySpec {
        name,
        fallback: Fallback::Int(default),
        range: Some((min, max)),
        page,
    }
}

const fn flag(name: &'static str, default: bool, page: PreferencePage) -> KeySpec {
    KeySpec {
        name,
        fallback: Fallback::Bool(default),
        range: None,
        page,
    }
}

impl SettingKey {
    /// All keys in preference-page display order.
    pub const ALL: [SettingKey; 19] = [
        SettingKey::WindowOpacity,
        SettingKey::CurveSmoothing,
        SettingKey::Shadow,
        SettingKey::ToolCursor,
        SettingKey::Antialias,
        SettingKey::BlurryZoom,
        SettingKey::HighResolution,
        SettingKey::BackgroundStyle,
        SettingKey::AutoSave,
        SettingKey::AutoSaveNumber,
        SettingKey::DrawLabel,
        SettingKey::LabelFontSize,
        SettingKey::FrameSize,
        SettingKey::TimelineLength,
        SettingKey::ShortScrub,
        SettingKey::OnionMaxOpacity,
        SettingKey::OnionMinOpacity,
        SettingKey::OnionPrevFramesNum,
        SettingKey::OnionNextFramesNum,
    ];

    fn spec(self) -> KeySpec {
        use PreferencePage::*;

        match self {
            // Stored as transparency, the slider shows 100 - value (30..=100).
            SettingKey::WindowOpacity => int("windowOpacity", 0, 0, 70, General),
            SettingKey::CurveSmoothing => int("curveSmoothing", 20, 1, 100, General),
            SettingKey::Shadow => flag("shadows", false, General),
            SettingKey::ToolCursor => flag("toolCursors", true, General),
            SettingKey::Antialias => flag("antialiasing", true, General),
            SettingKey::BlurryZoom => flag("blurryZoom", false, General),
            SettingKey::HighResolution => flag("highResPosition", true, General),
            SettingKey::BackgroundStyle => KeySpec {
                name: "background",
                fallback: Fallback::Str(BackgroundStyle::White.as_str()),
                range: None,
                page: General,
            },
            SettingKey::AutoSave => flag("autoSave", true, Files),
            SettingKey::AutoSaveNumber => int("autoSaveNumber", 20, 5, 200, Files),
            SettingKey::DrawLabel => flag("drawLabel", true, Timeline),
            SettingKey::LabelFontSize => int("labelFontSize", 12, 4, 20, Timeline),
            SettingKey::FrameSize => int("frameSize", 6, 4, 20, Timeline),
            SettingKey::TimelineLength => int("length", 240, 1, 9999, Timeline),
            SettingKey::ShortScrub => flag("shortScrub", false, Timeline),
            SettingKey::OnionMaxOpacity => int("onionMaxOpacity", 50, 0, 100, Tools),
            SettingKey::OnionMinOpacity => int("onionMinOpacity", 20, 0, 100, Tools),
            SettingKey::OnionPrevFramesNum => int("onionPrevFramesNum", 5, 1, 60, Tools),
            SettingKey::OnionNextFramesNum => int("onionNextFramesNum", 5, 1, 60, Tools),
        }
    }

    /// Stable name used in the settings file and on the command line.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Look a key up by its persisted name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    pub fn kind(self) -> SettingKind {
        match self.spec().fallback {
            Fallback::Int(_) => SettingKind::Int,
            Fallback::Bool(_) => SettingKind::Bool,
            Fallback::Str(_) => SettingKind::Str,
        }
    }

    pub fn default_value(self) -> SettingValue {
        match self.spec().fallback {
            Fallback::Int(v) => SettingValue::Int(v),
            Fallback::Bool(v) => SettingValue::Bool(v),
            Fallback::Str(v) => SettingValue::Str(v.to_string()),
        }
    }

    /// Inclusive bounds for integer settings.
    pub fn range(self) -> Option<RangeInclusive<i32>> {
        self.spec().range.map(|(min, max)| min..=max)
    }

    /// The preference page this setting is shown on.
    pub fn page(self) -> PreferencePage {
        self.spec().page
    }

    /// Check that `value` has this key's kind and lies within its bounds.
    pub fn validate(self, value: &SettingValue) -> Result<()> {
        let expected = self.kind();
        if value.kind() != expected {
            return Err(FlipbookError::SettingTypeMismatch {
                key: self,
                expected,
                found: value.kind(),
            });
        }

        if let (SettingValue::Int(v), Some((min, max))) = (value, self.spec().range) {
            if *v < min || *v > max {
                return Err(FlipbookError::SettingOutOfRange {
                    key: self,
                    value: *v,
                    min,
                    max,
                });
            }
        }

        if self == SettingKey::BackgroundStyle {
            if let SettingValue::Str(name) = value {
                if BackgroundStyle::from_name(name).is_none() {
                    return Err(FlipbookError::InvalidSettingValue {
                        key: self,
                        raw: name.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SettingKey {
    type Err = FlipbookError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| FlipbookError::UnknownSetting {
            name: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_names_are_unique_and_round_trip() {
        for key in SettingKey::ALL {
            assert_eq!(SettingKey::from_name(key.name()), Some(key));
        }
        let mut names: Vec<_> = SettingKey::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SettingKey::ALL.len());
    }

    #[test]
    fn test_defaults_pass_validation() {
        for key in SettingKey::ALL {
            assert!(key.validate(&key.default_value()).is_ok(), "{key}");
        }
    }

    #[test_case(SettingKey::WindowOpacity, 0, 70)]
    #[test_case(SettingKey::FrameSize, 4, 20)]
    #[test_case(SettingKey::LabelFontSize, 4, 20)]
    #[test_case(SettingKey::AutoSaveNumber, 5, 200)]
    #[test_case(SettingKey::OnionMaxOpacity, 0, 100)]
    #[test_case(SettingKey::OnionPrevFramesNum, 1, 60)]
    #[test_case(SettingKey::OnionNextFramesNum, 1, 60)]
    fn test_declared_ranges(key: SettingKey, min: i32, max: i32) {
        assert_eq!(key.range(), Some(min..=max));
        assert!(key.validate(&SettingValue::Int(min)).is_ok());
        assert!(key.validate(&SettingValue::Int(max)).is_ok());
        assert!(matches!(
            key.validate(&SettingValue::Int(max + 1)),
            Err(FlipbookError::SettingOutOfRange { .. })
        ));
        assert!(matches!(
            key.validate(&SettingValue::Int(min - 1)),
            Err(FlipbookError::SettingOutOfRange { .. })
        ));
    }

    #[test]
    fn test_kind_mismatch_is_rejected() {
        let err = SettingKey::Shadow.validate(&SettingValue::Int(1)).unwrap_err();
        assert!(matches!(
            err,
            FlipbookError::SettingTypeMismatch {
                expected: SettingKind::Bool,
                found: SettingKind::Int,
                ..
            }
        ));
    }

    #[test]
    fn test_background_must_be_a_known_style() {
        let key = SettingKey::BackgroundStyle;
        assert!(key.validate(&SettingValue::from("dots")).is_ok());
        assert!(matches!(
            key.validate(&SettingValue::from("plaid")),
            Err(FlipbookError::InvalidSettingValue { .. })
        ));
    }

    #[test]
    fn test_unknown_name_parse() {
        let err = "frameSizes".parse::<SettingKey>().unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_SETTING");
    }
}
