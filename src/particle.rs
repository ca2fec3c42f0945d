//! Bubble and smoke particles.
//!
//! Particles never store their current position. Each one keeps the time it
//! was spawned plus a handful of trajectory constants sampled at spawn, and
//! every visual attribute is a closed-form function of the particle's age.
//!
//! # Particle Kinds
//!
//! | Kind | Trajectory | Derived attributes |
//! |------|------------|--------------------|
//! | [`Bubble`] | Rises from the liquid, wobbling on a small circle | radius, color |
//! | [`Billboard`] | Drifts sideways and accelerates upward | size, alpha |
//!
//! # Example
//!
//! ```ignore
//! use cauldron::particle::{Bubble, BubbleProfile, Particle};
//!
//! let mut rng = rand::thread_rng();
//! let bubble = Bubble::sample(1.0, &BubbleProfile::default(), &mut rng);
//!
//! let p = bubble.evaluate_position(1.5); // half a second after spawn
//! let r = bubble.radius(1.5);
//! ```

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;
use std::fmt;

/// Which of the two particle collections a particle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    /// Rising bubbles.
    Bubble,
    /// Smoke puffs drawn as camera-facing billboards.
    Smoke,
}

impl fmt::Display for ParticleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticleKind::Bubble => write!(f, "bubble"),
            ParticleKind::Smoke => write!(f, "smoke"),
        }
    }
}

/// Shared trajectory interface for every particle kind.
pub trait Particle {
    /// Simulation time at which the particle was created.
    fn spawn_time(&self) -> f32;

    /// Time elapsed since spawn, never negative.
    ///
    /// Querying a time earlier than the spawn time yields age 0 so the
    /// particle is evaluated at its spawn point.
    #[inline]
    fn age(&self, current_time: f32) -> f32 {
        (current_time - self.spawn_time()).max(0.0)
    }

    /// Position of the particle at `current_time`.
    ///
    /// Pure: depends only on the particle's constants and its age.
    fn evaluate_position(&self, current_time: f32) -> Vec3;
}

/// Sample uniformly in `[lo, hi]` without panicking on a degenerate range.
fn sample_between<R: Rng + ?Sized>(rng: &mut R, [lo, hi]: [f32; 2]) -> f32 {
    lo + (hi - lo) * rng.gen::<f32>()
}

/// Uniform point on a horizontal disc centred on the y axis.
fn sample_disc<R: Rng + ?Sized>(rng: &mut R, radius: f32, height: f32) -> Vec3 {
    let r = radius * rng.gen::<f32>().sqrt();
    let theta = TAU * rng.gen::<f32>();
    Vec3::new(r * theta.cos(), height, r * theta.sin())
}

// =========================================================================
// BUBBLES
// =========================================================================

/// Spawn-time distribution of bubble trajectory constants.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BubbleProfile {
    /// Radius of the liquid disc bubbles spawn on.
    pub spawn_radius: f32,
    /// Height of the liquid surface.
    pub surface_height: f32,
    /// Vertical speed in units per second.
    pub rise_speed: f32,
    /// Radius of the horizontal wobble circle.
    pub wobble_amplitude: f32,
    /// Angular frequency of the wobble in radians per second.
    pub wobble_frequency: f32,
    /// Range the radius at spawn is drawn from.
    pub radius_range: [f32; 2],
    /// Radius increase per second of age.
    pub radius_growth: f32,
    /// Lower corner of the RGB color box.
    pub color_min: [f32; 3],
    /// Upper corner of the RGB color box.
    pub color_max: [f32; 3],
}

impl Default for BubbleProfile {
    fn default() -> Self {
        Self {
            spawn_radius: 0.6,
            surface_height: 0.0,
            rise_speed: 0.4,
            wobble_amplitude: 0.05,
            wobble_frequency: 5.0,
            radius_range: [0.03, 0.06],
            radius_growth: 0.01,
            color_min: [0.4, 0.7, 0.9],  // Around the pot liquid tint
            color_max: [0.6, 0.9, 1.0],
        }
    }
}

/// A bubble rising out of the liquid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bubble {
    spawn_time: f32,
    origin: Vec3,
    rise_speed: f32,
    wobble_amplitude: f32,
    wobble_frequency: f32,
    phase: f32,
    base_radius: f32,
    radius_growth: f32,
    color: Vec3,
}

impl Bubble {
    /// Draw a new bubble's constants from `profile`.
    pub fn sample<R: Rng + ?Sized>(spawn_time: f32, profile: &BubbleProfile, rng: &mut R) -> Self {
        let [r0, g0, b0] = profile.color_min;
        let [r1, g1, b1] = profile.color_max;
        Self {
            spawn_time,
            origin: sample_disc(rng, profile.spawn_radius, profile.surface_height),
            rise_speed: profile.rise_speed,
            wobble_amplitude: profile.wobble_amplitude,
            wobble_frequency: profile.wobble_frequency,
            phase: TAU * rng.gen::<f32>(),
            base_radius: sample_between(rng, profile.radius_range),
            radius_growth: profile.radius_growth,
            color: Vec3::new(
                sample_between(rng, [r0, r1]),
                sample_between(rng, [g0, g1]),
                sample_between(rng, [b0, b1]),
            ),
        }
    }

    /// Point on the liquid surface the bubble starts from.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Bubble radius at `current_time`.
    pub fn radius(&self, current_time: f32) -> f32 {
        self.base_radius + self.radius_growth * self.age(current_time)
    }

    /// RGB color, fixed for the bubble's whole life.
    pub fn color(&self) -> Vec3 {
        self.color
    }
}

impl Particle for Bubble {
    fn spawn_time(&self) -> f32 {
        self.spawn_time
    }

    fn evaluate_position(&self, current_time: f32) -> Vec3 {
        let age = self.age(current_time);
        let angle = self.phase + self.wobble_frequency * age;
        // Offset the wobble circle so age 0 lands exactly on the origin
        let wobble = Vec3::new(
            angle.cos() - self.phase.cos(),
            0.0,
            angle.sin() - self.phase.sin(),
        ) * self.wobble_amplitude;
        self.origin + wobble + Vec3::Y * (self.rise_speed * age)
    }
}

// =========================================================================
// SMOKE BILLBOARDS
// =========================================================================

/// Spawn-time distribution of smoke billboard trajectory constants.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SmokeProfile {
    /// Radius of the disc above the pot center smoke spawns on.
    pub spawn_radius: f32,
    /// Height smoke spawns at.
    pub surface_height: f32,
    /// Maximum horizontal drift speed.
    pub drift_speed: f32,
    /// Initial vertical speed.
    pub rise_speed: f32,
    /// Upward acceleration.
    pub buoyancy: f32,
    /// Half-size of the quad at spawn.
    pub base_size: f32,
    /// Relative size growth per second.
    pub expansion: f32,
    /// Seconds to fade in from transparent.
    pub fade_in: f32,
    /// Age at which the puff is fully transparent again.
    pub fade_out: f32,
}

impl Default for SmokeProfile {
    fn default() -> Self {
        Self {
            spawn_radius: 0.15,
            surface_height: 0.1,
            drift_speed: 0.15,
            rise_speed: 0.3,
            buoyancy: 0.2,
            base_size: 0.35,
            expansion: 0.5,
            fade_in: 0.3,
            fade_out: 3.0,
        }
    }
}

/// A smoke puff drawn as a textured quad facing the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Billboard {
    spawn_time: f32,
    origin: Vec3,
    drift: Vec3,
    rise_speed: f32,
    buoyancy: f32,
    base_size: f32,
    expansion: f32,
    fade_in: f32,
    fade_out: f32,
}

impl Billboard {
    /// Draw a new billboard's constants from `profile`.
    pub fn sample<R: Rng + ?Sized>(spawn_time: f32, profile: &SmokeProfile, rng: &mut R) -> Self {
        let heading = TAU * rng.gen::<f32>();
        let speed = profile.drift_speed * rng.gen::<f32>();
        Self {
            spawn_time,
            origin: sample_disc(rng, profile.spawn_radius, profile.surface_height),
            drift: Vec3::new(heading.cos(), 0.0, heading.sin()) * speed,
            rise_speed: profile.rise_speed,
            buoyancy: profile.buoyancy,
            base_size: profile.base_size,
            expansion: profile.expansion,
            fade_in: profile.fade_in,
            fade_out: profile.fade_out,
        }
    }

    /// Half-size of the quad at `current_time`.
    pub fn size(&self, current_time: f32) -> f32 {
        self.base_size * (1.0 + self.expansion * self.age(current_time))
    }

    /// Opacity at `current_time`, always within `[0, 1]`.
    pub fn alpha(&self, current_time: f32) -> f32 {
        let age = self.age(current_time);
        let fade_in = if self.fade_in > 0.0 {
            (age / self.fade_in).min(1.0)
        } else {
            1.0
        };
        let fade_out = if self.fade_out > 0.0 {
            1.0 - age / self.fade_out
        } else {
            0.0
        };
        (fade_in * fade_out).clamp(0.0, 1.0)
    }
}

impl Particle for Billboard {
    fn spawn_time(&self) -> f32 {
        self.spawn_time
    }

    fn evaluate_position(&self, current_time: f32) -> Vec3 {
        let age = self.age(current_time);
        let lift = self.rise_speed * age + 0.5 * self.buoyancy * age * age;
        self.origin + self.drift * age + Vec3::Y * lift
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_bubble_starts_at_origin() {
        let bubble = Bubble::sample(2.0, &BubbleProfile::default(), &mut rng());
        let p = bubble.evaluate_position(2.0);
        assert!((p - bubble.origin()).length() < 1e-5);
    }

    #[test]
    fn test_bubble_rises() {
        let bubble = Bubble::sample(0.0, &BubbleProfile::default(), &mut rng());
        let low = bubble.evaluate_position(0.5).y;
        let high = bubble.evaluate_position(1.5).y;
        assert!(high > low);
    }

    #[test]
    fn test_bubble_spawns_inside_disc() {
        let profile = BubbleProfile::default();
        let mut rng = rng();
        for _ in 0..200 {
            let bubble = Bubble::sample(0.0, &profile, &mut rng);
            let o = bubble.origin();
            assert!(Vec3::new(o.x, 0.0, o.z).length() <= profile.spawn_radius + 1e-6);
            assert_eq!(o.y, profile.surface_height);
        }
    }

    #[test]
    fn test_bubble_radius_grows() {
        let bubble = Bubble::sample(0.0, &BubbleProfile::default(), &mut rng());
        assert!(bubble.radius(2.0) > bubble.radius(0.0));
        let [lo, hi] = BubbleProfile::default().radius_range;
        assert!(bubble.radius(0.0) >= lo && bubble.radius(0.0) <= hi);
    }

    #[test]
    fn test_evaluate_before_spawn_clamps_age() {
        let bubble = Bubble::sample(5.0, &BubbleProfile::default(), &mut rng());
        assert_eq!(bubble.age(4.0), 0.0);
        assert_eq!(bubble.evaluate_position(4.0), bubble.evaluate_position(5.0));
    }

    #[test]
    fn test_degenerate_ranges_do_not_panic() {
        let profile = BubbleProfile {
            radius_range: [0.05, 0.05],
            color_min: [0.5, 0.8, 1.0],
            color_max: [0.5, 0.8, 1.0],
            ..Default::default()
        };
        let bubble = Bubble::sample(0.0, &profile, &mut rng());
        assert_eq!(bubble.radius(0.0), 0.05);
        assert_eq!(bubble.color(), Vec3::new(0.5, 0.8, 1.0));
    }

    #[test]
    fn test_billboard_alpha_bounds() {
        let smoke = Billboard::sample(0.0, &SmokeProfile::default(), &mut rng());
        assert_eq!(smoke.alpha(0.0), 0.0);
        assert_eq!(smoke.alpha(10.0), 0.0);
        for i in 0..100 {
            let a = smoke.alpha(i as f32 * 0.05);
            assert!((0.0..=1.0).contains(&a));
        }
    }

    #[test]
    fn test_billboard_without_fade_in_is_opaque_at_spawn() {
        let profile = SmokeProfile {
            fade_in: 0.0,
            ..Default::default()
        };
        let smoke = Billboard::sample(1.0, &profile, &mut rng());
        assert_eq!(smoke.alpha(1.0), 1.0);
    }

    #[test]
    fn test_billboard_drifts_and_expands() {
        let smoke = Billboard::sample(0.0, &SmokeProfile::default(), &mut rng());
        let start = smoke.evaluate_position(0.0);
        let later = smoke.evaluate_position(1.0);
        assert!(later.y > start.y);
        assert!(smoke.size(1.0) > smoke.size(0.0));
        assert_eq!(smoke.size(0.0), 0.35);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ParticleKind::Bubble.to_string(), "bubble");
        assert_eq!(ParticleKind::Smoke.to_string(), "smoke");
    }
}
