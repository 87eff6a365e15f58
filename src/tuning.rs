//! Motion tuning and presets
//!
//! Loaded from JSON when the host supplies a file, otherwise one of the
//! built-in presets. Missing fields fall back to the bounce preset.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::BorderPolicy;

/// Built-in tuning presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Damped bounce off the borders, sprite turns toward its heading
    #[default]
    Bounce,
    /// Hard stop at the borders, sprite never turns
    Clamp,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Bounce => "bounce",
            Preset::Clamp => "clamp",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bounce" => Some(Preset::Bounce),
            "clamp" => Some(Preset::Clamp),
            _ => None,
        }
    }

    pub fn tuning(&self) -> Tuning {
        match self {
            Preset::Bounce => Tuning::bounce(),
            Preset::Clamp => Tuning::clamp(),
        }
    }
}

/// Heading smoothing parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationTuning {
    /// Weight of the target heading each frame (0, 1]
    pub blend: f32,
    /// Speed the actor must exceed before it turns
    pub threshold: f32,
}

impl Default for RotationTuning {
    fn default() -> Self {
        Self {
            blend: ROTATION_BLEND_FACTOR,
            threshold: ROTATION_THRESHOLD,
        }
    }
}

/// Errors raised while loading or validating tuning
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed tuning JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error("unknown preset `{0}` (expected `bounce` or `clamp`)")]
    UnknownPreset(String),
}

impl TuningError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        TuningError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Fixed motion configuration for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Acceleration at full tilt
    pub max_accel: f32,
    /// Per-axis velocity cap
    pub max_speed: f32,
    /// Weight of the newest accelerometer sample (0, 1]
    pub filter_factor: f32,
    pub border: BorderPolicy,
    /// Heading smoothing; `None` disables rotation entirely
    pub rotation: Option<RotationTuning>,
    /// Floor applied to every step
    pub min_dt: f32,
    /// Cap applied by the frame clock; `None` leaves frame steps unbounded
    pub max_dt: Option<f32>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::bounce()
    }
}

impl Tuning {
    /// Damped bounce with heading smoothing
    pub fn bounce() -> Self {
        Self {
            max_accel: MAX_PLAYER_ACCELERATION,
            max_speed: MAX_PLAYER_SPEED,
            filter_factor: ACCELEROMETER_FILTER_FACTOR,
            border: BorderPolicy::Bounce {
                damping: BORDER_COLLISION_DAMPING,
            },
            rotation: Some(RotationTuning::default()),
            min_dt: MIN_FRAME_DT,
            max_dt: Some(MAX_FRAME_DT),
        }
    }

    /// Hard clamp at the borders, no rotation
    pub fn clamp() -> Self {
        Self {
            border: BorderPolicy::Clamp,
            rotation: None,
            ..Self::bounce()
        }
    }

    /// Look up a preset by name
    pub fn preset(name: &str) -> Result<Self, TuningError> {
        Preset::parse(name)
            .map(|p| p.tuning())
            .ok_or_else(|| TuningError::UnknownPreset(name.to_string()))
    }

    /// Parse and validate tuning from JSON
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every value is in range
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("max_accel", self.max_accel)?;
        positive("max_speed", self.max_speed)?;
        positive("min_dt", self.min_dt)?;
        unit_interval("filter_factor", self.filter_factor)?;

        if let BorderPolicy::Bounce { damping } = self.border {
            if !(damping > 0.0 && damping < 1.0) {
                return Err(TuningError::invalid(
                    "border.damping",
                    format!("{damping} is outside (0, 1)"),
                ));
            }
        }

        if let Some(rotation) = &self.rotation {
            unit_interval("rotation.blend", rotation.blend)?;
            if !rotation.threshold.is_finite() || rotation.threshold < 0.0 {
                return Err(TuningError::invalid(
                    "rotation.threshold",
                    format!("{} must be finite and non-negative", rotation.threshold),
                ));
            }
        }

        if let Some(max_dt) = self.max_dt {
            positive("max_dt", max_dt)?;
            if max_dt < self.min_dt {
                return Err(TuningError::invalid(
                    "max_dt",
                    format!("{max_dt} is below min_dt {}", self.min_dt),
                ));
            }
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::invalid(field, format!("{value} must be finite and positive")))
    }
}

fn unit_interval(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(TuningError::invalid(field, format!("{value} is outside (0, 1]")))
    }
}
