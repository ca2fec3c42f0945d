//! Error types for cauldron.
//!
//! The particle store and timers cannot fail. Errors only arise where a scene
//! configuration enters the crate, either from disk or from a caller.

use crate::particle::ParticleKind;
use std::fmt;

/// Errors that can occur while loading or validating a scene configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read or write the configuration file.
    Io(std::io::Error),
    /// The configuration file is not valid JSON for a scene.
    Json(serde_json::Error),
    /// A spawn period lies outside the range the scene accepts.
    PeriodOutOfRange {
        kind: ParticleKind,
        value: f32,
        min: f32,
        max: f32,
    },
    /// The maximum particle lifetime must be positive and finite.
    InvalidLifetime(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to access scene config: {}", e),
            ConfigError::Json(e) => write!(f, "Failed to parse scene config: {}", e),
            ConfigError::PeriodOutOfRange { kind, value, min, max } => write!(
                f,
                "{} spawn period {} is outside the allowed range [{}, {}]",
                kind, value, min, max
            ),
            ConfigError::InvalidLifetime(v) => {
                write!(f, "Particle lifetime must be positive, got {}", v)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}
