//! Scene configuration.
//!
//! A [`SceneConfig`] describes everything tunable about the cauldron scene and
//! can be serialized to JSON. Loading validates the spawn periods and lifetime
//! so that an invalid file is rejected before any scene is built.

use crate::error::ConfigError;
use crate::particle::{BubbleProfile, ParticleKind, SmokeProfile};
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

/// Valid bubble spawn periods in seconds.
pub const BUBBLE_PERIOD_RANGE: RangeInclusive<f32> = 0.05..=2.0;

/// Valid smoke spawn periods in seconds.
pub const SMOKE_PERIOD_RANGE: RangeInclusive<f32> = 0.01..=0.5;

/// Default age after which particles are evicted.
pub const DEFAULT_MAX_LIFETIME: f32 = 3.0;

fn default_max_lifetime() -> f32 {
    DEFAULT_MAX_LIFETIME
}

fn default_seed() -> u64 {
    0x5eed
}

/// Allowed period range for a particle kind.
pub fn period_range(kind: ParticleKind) -> RangeInclusive<f32> {
    match kind {
        ParticleKind::Bubble => BUBBLE_PERIOD_RANGE,
        ParticleKind::Smoke => SMOKE_PERIOD_RANGE,
    }
}

/// Clamp `period` into the allowed range for `kind`.
///
/// NaN maps to the lower bound.
pub fn clamp_period(kind: ParticleKind, period: f32) -> f32 {
    let range = period_range(kind);
    if period.is_nan() {
        return *range.start();
    }
    period.clamp(*range.start(), *range.end())
}

/// Seconds between two spawns, per particle kind.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpawnPeriods {
    pub bubble: f32,
    pub smoke: f32,
}

impl Default for SpawnPeriods {
    fn default() -> Self {
        Self {
            bubble: 0.2,
            smoke: 0.05,
        }
    }
}

impl SpawnPeriods {
    /// Period configured for `kind`.
    pub fn get(&self, kind: ParticleKind) -> f32 {
        match kind {
            ParticleKind::Bubble => self.bubble,
            ParticleKind::Smoke => self.smoke,
        }
    }

    fn check(kind: ParticleKind, value: f32) -> Result<(), ConfigError> {
        let range = period_range(kind);
        if range.contains(&value) {
            Ok(())
        } else {
            Err(ConfigError::PeriodOutOfRange {
                kind,
                value,
                min: *range.start(),
                max: *range.end(),
            })
        }
    }
}

/// Display toggles of the scene.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayFlags {
    /// Draw the world axes.
    pub frame: bool,
    /// Overlay wireframes on the liquid surface and billboards.
    pub wireframe: bool,
    /// Alpha-blend smoke billboards. When off they are drawn opaque.
    pub transparent_billboards: bool,
    /// Draw bubbles.
    pub display_bubbles: bool,
    /// Draw smoke billboards.
    pub display_billboards: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            frame: false,
            wireframe: false,
            transparent_billboards: true,
            display_bubbles: true,
            display_billboards: true,
        }
    }
}

/// Complete scene configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SceneConfig {
    #[serde(default)]
    pub spawn: SpawnPeriods,
    /// Age in seconds after which particles are evicted.
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime: f32,
    /// Seed for spawn-time sampling. The same seed replays the same scene.
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub bubble: BubbleProfile,
    #[serde(default)]
    pub smoke: SmokeProfile,
    #[serde(default)]
    pub display: DisplayFlags,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            spawn: SpawnPeriods::default(),
            max_lifetime: DEFAULT_MAX_LIFETIME,
            seed: default_seed(),
            bubble: BubbleProfile::default(),
            smoke: SmokeProfile::default(),
            display: DisplayFlags::default(),
        }
    }
}

impl SceneConfig {
    /// Check spawn periods and lifetime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        SpawnPeriods::check(ParticleKind::Bubble, self.spawn.bubble)?;
        SpawnPeriods::check(ParticleKind::Smoke, self.spawn.smoke)?;
        if !(self.max_lifetime.is_finite() && self.max_lifetime > 0.0) {
            return Err(ConfigError::InvalidLifetime(self.max_lifetime));
        }
        Ok(())
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
