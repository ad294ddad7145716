//! Game settings
//!
//! Supplied by the embedder as JSON; every field has a default so partial
//! documents are fine. Nothing is read from disk or the environment.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::sim::JumpKind;

/// How real frame time is turned into simulation steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TimestepMode {
    /// Whole `fixed_dt` steps from an accumulator (deterministic)
    #[default]
    Fixed,
    /// One step per frame using the real frame delta
    Variable,
}

impl TimestepMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimestepMode::Fixed => "Fixed",
            TimestepMode::Variable => "Variable",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fixed" => Some(TimestepMode::Fixed),
            "variable" | "var" => Some(TimestepMode::Variable),
            _ => None,
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for the obstacle scale RNG
    pub seed: u64,

    // === Input ===
    /// Jump used for a pointer tap
    pub tap_jump: JumpKind,
    /// Max gap between space presses that counts as a double press
    pub double_press_window_ms: u64,

    // === Timing ===
    pub timestep: TimestepMode,
    /// Step size in Fixed mode (seconds)
    pub fixed_dt: f32,
    /// Step cap per frame in Fixed mode
    pub max_substeps: u32,
    /// Longest frame delta accepted before clamping (seconds)
    pub max_frame_dt: f32,

    // === Leaderboard ===
    pub leaderboard_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0,

            tap_jump: JumpKind::Short,
            double_press_window_ms: DOUBLE_PRESS_WINDOW_MS,

            timestep: TimestepMode::Fixed,
            fixed_dt: SIM_DT,
            max_substeps: MAX_SUBSTEPS,
            max_frame_dt: MAX_FRAME_DT,

            leaderboard_size: crate::highscores::MAX_HIGH_SCORES,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!(
            "Loaded settings ({} timestep, tap jump {:?})",
            settings.timestep.as_str(),
            settings.tap_jump
        );
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the clock or simulation can't work with
    pub fn validate(&self) -> Result<()> {
        if !(self.fixed_dt.is_finite() && self.fixed_dt > 0.0 && self.fixed_dt <= MAX_STEP_DT) {
            return Err(Error::InvalidSettings(format!(
                "fixed_dt must be in (0, {MAX_STEP_DT}], got {}",
                self.fixed_dt
            )));
        }
        if self.max_substeps == 0 {
            return Err(Error::InvalidSettings(
                "max_substeps must be at least 1".into(),
            ));
        }
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0) {
            return Err(Error::InvalidSettings(format!(
                "max_frame_dt must be positive, got {}",
                self.max_frame_dt
            )));
        }
        if self.leaderboard_size == 0 {
            return Err(Error::InvalidSettings(
                "leaderboard_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.tap_jump, JumpKind::Short);
        assert_eq!(settings.timestep, TimestepMode::Fixed);
        assert_eq!(settings.double_press_window_ms, 250);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "tap_jump": "High", "seed": 7 }"#).unwrap();
        assert_eq!(settings.tap_jump, JumpKind::High);
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.fixed_dt, SIM_DT);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings {
            timestep: TimestepMode::Variable,
            leaderboard_size: 3,
            ..Settings::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Settings::from_json(r#"{ "fixed_dt": 0.0 }"#),
            Err(Error::InvalidSettings(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "max_substeps": 0 }"#),
            Err(Error::InvalidSettings(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "timestep": "Sideways" }"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_timestep_from_str() {
        assert_eq!(TimestepMode::from_str("FIXED"), Some(TimestepMode::Fixed));
        assert_eq!(TimestepMode::from_str("var"), Some(TimestepMode::Variable));
        assert_eq!(TimestepMode::from_str("nope"), None);
    }
}
