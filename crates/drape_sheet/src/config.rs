//! Sheet configuration (drape.toml)

use std::fs;
use std::path::Path;

use drape_core::{PresentationDirection, Result, SheetError};
use serde::{Deserialize, Serialize};

use crate::transition::TransitionSpec;

/// How the sheet sits on screen once presented
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationStyle {
    /// Edge-anchored sheet with collapsed and expanded resting heights
    #[default]
    Sheet,
    /// Inset card centred in the container, dismissed by flinging it away
    PopUp,
}

/// Top-level sheet configuration
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SheetConfig {
    #[serde(default)]
    pub style: PresentationStyle,
    #[serde(default)]
    pub direction: PresentationDirection,
    /// Dismiss when a touch lands outside the content container
    #[serde(default = "default_true")]
    pub dismiss_on_touch_outside: bool,
    #[serde(default = "default_true")]
    pub enable_pan_gesture: bool,
    #[serde(default = "default_true")]
    pub show_default_header: bool,
    /// Grow the sheet while the software keyboard is up
    #[serde(default)]
    pub handle_keyboard: bool,
    /// Blurred backgrounds stay opaque while dismissing
    #[serde(default)]
    pub blur_background: bool,
    /// Fraction of the container used when content gives no collapsed height
    #[serde(default = "default_collapsed_height_ratio")]
    pub collapsed_height_ratio: f32,
    /// Present/dismiss transition duration in seconds
    #[serde(default = "default_transition_duration")]
    pub transition_duration: f64,
    /// Horizontal inset of pop-up cards
    #[serde(default = "default_pop_up_inset")]
    pub pop_up_inset: f32,
    #[serde(default = "default_header_min_height")]
    pub header_min_height: f32,
    #[serde(default)]
    pub settle: SettleConfig,
}

fn default_true() -> bool {
    true
}

fn default_collapsed_height_ratio() -> f32 {
    drape_core::DEFAULT_COLLAPSED_RATIO
}

fn default_transition_duration() -> f64 {
    0.5
}

fn default_pop_up_inset() -> f32 {
    10.0
}

fn default_header_min_height() -> f32 {
    44.0
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            style: PresentationStyle::default(),
            direction: PresentationDirection::default(),
            dismiss_on_touch_outside: true,
            enable_pan_gesture: true,
            show_default_header: true,
            handle_keyboard: false,
            blur_background: false,
            collapsed_height_ratio: default_collapsed_height_ratio(),
            transition_duration: default_transition_duration(),
            pop_up_inset: default_pop_up_inset(),
            header_min_height: default_header_min_height(),
            settle: SettleConfig::default(),
        }
    }
}

/// Drag release animation settings
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct SettleConfig {
    /// Duration of a settle that covers the whole distance
    #[serde(default = "default_base_duration")]
    pub base_duration: f64,
    /// Duration of explicit and keyboard-driven resizes
    #[serde(default = "default_resize_duration")]
    pub resize_duration: f64,
    #[serde(default = "default_damping_ratio")]
    pub damping_ratio: f32,
    /// Fraction of the distance per second
    #[serde(default = "default_initial_velocity")]
    pub initial_velocity: f32,
}

fn default_base_duration() -> f64 {
    0.5
}

fn default_resize_duration() -> f64 {
    0.2
}

fn default_damping_ratio() -> f32 {
    0.75
}

fn default_initial_velocity() -> f32 {
    0.8
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            base_duration: default_base_duration(),
            resize_duration: default_resize_duration(),
            damping_ratio: default_damping_ratio(),
            initial_velocity: default_initial_velocity(),
        }
    }
}

impl SheetConfig {
    /// Pop-up card entering from `direction`
    pub fn pop_up(direction: PresentationDirection) -> Self {
        Self {
            style: PresentationStyle::PopUp,
            direction,
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SheetConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| SheetError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("loaded sheet config from {}", path.display());
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values no sheet can work with
    pub fn validate(&self) -> Result<()> {
        if !(self.collapsed_height_ratio > 0.0 && self.collapsed_height_ratio <= 1.0) {
            return Err(SheetError::InvalidConfig(format!(
                "collapsed_height_ratio must be in (0, 1], got {}",
                self.collapsed_height_ratio
            )));
        }
        if !(self.settle.damping_ratio > 0.0 && self.settle.damping_ratio <= 1.0) {
            return Err(SheetError::InvalidConfig(format!(
                "settle.damping_ratio must be in (0, 1], got {}",
                self.settle.damping_ratio
            )));
        }
        for (name, value) in [
            ("transition_duration", self.transition_duration),
            ("settle.base_duration", self.settle.base_duration),
            ("settle.resize_duration", self.settle.resize_duration),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(SheetError::InvalidConfig(format!(
                    "{name} must be a non-negative number of seconds, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("pop_up_inset", self.pop_up_inset),
            ("header_min_height", self.header_min_height),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(SheetError::InvalidConfig(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Transition parameters derived from this configuration
    pub fn transition(&self) -> TransitionSpec {
        TransitionSpec::new()
            .with_duration(self.transition_duration)
            .with_blur_background(self.blur_background)
            .with_spring(self.settle.damping_ratio, self.settle.initial_velocity)
    }
}
