//! Preference pages and the conversions their widgets need.

use std::fmt;
use std::str::FromStr;

use crate::settings::key::SettingKey;

/// Lowest window opacity the preferences slider offers.
pub const MIN_WINDOW_OPACITY: i32 = 30;

/// A tab of the preferences dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferencePage {
    General,
    Files,
    Timeline,
    Tools,
}

impl PreferencePage {
    pub const ALL: [PreferencePage; 4] = [
        PreferencePage::General,
        PreferencePage::Files,
        PreferencePage::Timeline,
        PreferencePage::Tools,
    ];

    pub fn title(self) -> &'static str {
        match self {
            PreferencePage::General => "General",
            PreferencePage::Files => "Files",
            PreferencePage::Timeline => "Timeline",
            PreferencePage::Tools => "Tools",
        }
    }

    /// Keys shown on this page, in display order.
    pub fn keys(self) -> Vec<SettingKey> {
        SettingKey::ALL
            .into_iter()
            .filter(|key| key.page() == self)
            .collect()
    }
}

impl fmt::Display for PreferencePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for PreferencePage {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.title().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown preference page '{}'", s))
    }
}

/// Canvas background shown behind the drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackgroundStyle {
    Checkerboard,
    #[default]
    White,
    Grey,
    Dots,
    Weave,
}

impl BackgroundStyle {
    pub const ALL: [BackgroundStyle; 5] = [
        BackgroundStyle::Checkerboard,
        BackgroundStyle::White,
        BackgroundStyle::Grey,
        BackgroundStyle::Dots,
        BackgroundStyle::Weave,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            BackgroundStyle::Checkerboard => "checkerboard",
            BackgroundStyle::White => "white",
            BackgroundStyle::Grey => "grey",
            BackgroundStyle::Dots => "dots",
            BackgroundStyle::Weave => "weave",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.as_str() == name)
    }

    /// Id of the radio button selecting this style (1-based).
    pub fn button_id(self) -> i32 {
        match self {
            BackgroundStyle::Checkerboard => 1,
            BackgroundStyle::White => 2,
            BackgroundStyle::Grey => 3,
            BackgroundStyle::Dots => 4,
            BackgroundStyle::Weave => 5,
        }
    }

    /// Unknown ids fall back to white.
    pub fn from_button_id(id: i32) -> Self {
        Self::ALL
            .into_iter()
            .find(|style| style.button_id() == id)
            .unwrap_or_default()
    }
}

/// Slider position for a stored window transparency.
pub fn window_opacity_to_slider(stored: i32) -> i32 {
    100i32.saturating_sub(stored).clamp(MIN_WINDOW_OPACITY, 100)
}

/// Stored transparency for a slider position.
pub fn slider_to_window_opacity(slider: i32) -> i32 {
    100 - slider.clamp(MIN_WINDOW_OPACITY, 100)
}
