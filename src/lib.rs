//! # cauldron
//!
//! The particle side of a bubbling cauldron demo: bubbles rising out of the
//! liquid and smoke puffs drifting above the pot.
//!
//! Rendering stays with the host application. This crate decides when
//! particles are born, where they are at any moment and when they die, and
//! hands the evaluated particles to a renderer through [`DrawSink`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use cauldron::prelude::*;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let mut scene = Scene::new(SceneConfig::default())?;
//!     let mut batch = InstanceBatch::new();
//!
//!     for _ in 0..600 {
//!         scene.update(1.0 / 60.0);
//!         scene.draw(&mut batch);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Particles
//!
//! A particle stores its spawn time and a few trajectory constants. Position,
//! bubble radius and smoke opacity are closed-form functions of age, so they
//! are recomputed every frame instead of being integrated.
//!
//! ### Spawning
//!
//! Each particle kind has a [`PeriodicTimer`]. Every frame the timers see the
//! frame's delta and fire at most once; a fired timer spawns one particle.
//!
//! ### Eviction
//!
//! [`ParticleStore::remove_expired`] drops particles older than the maximum
//! lifetime, keeping the survivors in spawn order.
//!
//! ## Feature Overview
//!
//! | Feature | Adds |
//! |---------|------|
//! | `egui` | [`ui::settings_panel`] with display toggles and period sliders |

pub mod config;
pub mod error;
pub mod particle;
pub mod render;
pub mod scene;
pub mod store;
pub mod time;
pub mod timer;
#[cfg(feature = "egui")]
pub mod ui;

pub use bytemuck;
pub use config::{DisplayFlags, SceneConfig, SpawnPeriods};
pub use error::ConfigError;
pub use glam::Vec3;
pub use particle::{Billboard, Bubble, BubbleProfile, Particle, ParticleKind, SmokeProfile};
pub use render::{BillboardInstance, BubbleInstance, DrawSink, InstanceBatch};
pub use scene::{FrameStats, Scene};
pub use store::ParticleStore;
pub use time::Clock;
pub use timer::PeriodicTimer;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use cauldron::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{DisplayFlags, SceneConfig, SpawnPeriods};
    pub use crate::error::ConfigError;
    pub use crate::particle::{Billboard, Bubble, Particle, ParticleKind};
    pub use crate::render::{BillboardInstance, BubbleInstance, DrawSink, InstanceBatch};
    pub use crate::scene::{FrameStats, Scene};
    pub use crate::store::ParticleStore;
    pub use crate::time::Clock;
    pub use crate::timer::PeriodicTimer;
    pub use crate::Vec3;
    #[cfg(feature = "egui")]
    pub use crate::ui::settings_panel;
    #[cfg(feature = "egui")]
    pub use egui;
}
