//! Particle lifecycle store.
//!
//! The store owns the live bubbles and smoke billboards, each kept in spawn
//! order (oldest first). Particles are appended when a spawn event fires and
//! dropped once they outlive the maximum lifetime. Nothing is ever updated in
//! place: positions and visual attributes are evaluated from age on demand.
//!
//! # Example
//!
//! ```ignore
//! let mut store = ParticleStore::new(3.0);
//! store.spawn_bubble(0.0);
//! store.spawn_billboard(0.0);
//!
//! let p = ParticleStore::evaluate(&store.bubbles()[0], 1.0);
//!
//! store.remove_expired(3.1);
//! assert!(store.is_empty());
//! ```

use crate::particle::{Billboard, Bubble, BubbleProfile, Particle, SmokeProfile};
use glam::Vec3;
use log::trace;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Owner of every live particle.
#[derive(Debug, Clone)]
pub struct ParticleStore {
    bubbles: Vec<Bubble>,
    billboards: Vec<Billboard>,
    bubble_profile: BubbleProfile,
    smoke_profile: SmokeProfile,
    max_lifetime: f32,
    /// Only consulted when spawning.
    rng: StdRng,
}

impl ParticleStore {
    /// Create an empty store with default trajectory profiles.
    pub fn new(max_lifetime: f32) -> Self {
        Self::with_profiles(max_lifetime, BubbleProfile::default(), SmokeProfile::default(), 0)
    }

    /// Create an empty store sampling new particles from the given profiles.
    ///
    /// Two stores built with the same arguments spawn identical particles.
    pub fn with_profiles(
        max_lifetime: f32,
        bubble_profile: BubbleProfile,
        smoke_profile: SmokeProfile,
        seed: u64,
    ) -> Self {
        Self {
            bubbles: Vec::new(),
            billboards: Vec::new(),
            bubble_profile,
            smoke_profile,
            max_lifetime: max_lifetime.max(0.0),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Append a bubble born at `current_time`.
    pub fn spawn_bubble(&mut self, current_time: f32) {
        let bubble = Bubble::sample(current_time, &self.bubble_profile, &mut self.rng);
        self.bubbles.push(bubble);
        trace!("Spawned bubble at t={:.3} ({} live)", current_time, self.bubbles.len());
    }

    /// Append a smoke billboard born at `current_time`.
    pub fn spawn_billboard(&mut self, current_time: f32) {
        let billboard = Billboard::sample(current_time, &self.smoke_profile, &mut self.rng);
        self.billboards.push(billboard);
        trace!("Spawned billboard at t={:.3} ({} live)", current_time, self.billboards.len());
    }

    /// Position of `particle` at `current_time`.
    #[inline]
    pub fn evaluate<P: Particle>(particle: &P, current_time: f32) -> Vec3 {
        particle.evaluate_position(current_time)
    }

    /// Drop every particle older than the maximum lifetime.
    ///
    /// Both collections are filtered independently and survivors keep their
    /// relative order. Calling this again with the same time removes nothing.
    /// Returns the number of particles removed.
    pub fn remove_expired(&mut self, current_time: f32) -> usize {
        let removed = retain_alive(&mut self.bubbles, current_time, self.max_lifetime)
            + retain_alive(&mut self.billboards, current_time, self.max_lifetime);
        if removed > 0 {
            trace!("Evicted {} particles at t={:.3}", removed, current_time);
        }
        removed
    }

    /// Live bubbles, oldest first.
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    /// Live smoke billboards, oldest first.
    pub fn billboards(&self) -> &[Billboard] {
        &self.billboards
    }

    /// Total number of live particles.
    pub fn len(&self) -> usize {
        self.bubbles.len() + self.billboards.len()
    }

    /// Whether no particle of either kind is alive.
    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty() && self.billboards.is_empty()
    }

    /// Remove every particle without touching the RNG state.
    pub fn clear(&mut self) {
        self.bubbles.clear();
        self.billboards.clear();
    }

    /// Age in seconds after which a particle is evicted.
    pub fn max_lifetime(&self) -> f32 {
        self.max_lifetime
    }

    /// Change the eviction age. Takes effect on the next `remove_expired`.
    pub fn set_max_lifetime(&mut self, max_lifetime: f32) {
        self.max_lifetime = max_lifetime.max(0.0);
    }
}

/// Keep particles whose age does not exceed `max_lifetime`.
///
/// Tests every particle rather than stopping at the first survivor, so an
/// unsorted collection is handled correctly.
fn retain_alive<P: Particle>(particles: &mut Vec<P>, current_time: f32, max_lifetime: f32) -> usize {
    let before = particles.len();
    particles.retain(|p| current_time - p.spawn_time() <= max_lifetime);
    before - particles.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_appends_in_order() {
        let mut store = ParticleStore::new(3.0);
        store.spawn_bubble(0.0);
        store.spawn_bubble(0.5);
        store.spawn_billboard(0.25);

        assert_eq!(store.len(), 3);
        assert_eq!(store.bubbles()[0].spawn_time(), 0.0);
        assert_eq!(store.bubbles()[1].spawn_time(), 0.5);
        assert_eq!(store.billboards()[0].spawn_time(), 0.25);
    }

    #[test]
    fn test_lifetime_boundary() {
        let mut store = ParticleStore::new(3.0);
        store.spawn_bubble(0.0);

        assert_eq!(store.remove_expired(2.9), 0);
        assert_eq!(store.bubbles().len(), 1);

        assert_eq!(store.remove_expired(3.1), 1);
        assert!(store.bubbles().is_empty());
    }

    #[test]
    fn test_collections_filtered_independently() {
        let mut store = ParticleStore::new(1.0);
        store.spawn_bubble(0.0);
        store.spawn_billboard(1.0);

        store.remove_expired(1.5);
        assert!(store.bubbles().is_empty());
        assert_eq!(store.billboards().len(), 1);
    }

    #[test]
    fn test_remove_expired_idempotent() {
        let mut store = ParticleStore::new(1.0);
        for i in 0..10 {
            store.spawn_bubble(i as f32 * 0.25);
        }
        let first = store.remove_expired(2.0);
        let after_first: Vec<f32> = store.bubbles().iter().map(|b| b.spawn_time()).collect();
        assert_eq!(store.remove_expired(2.0), 0);
        let after_second: Vec<f32> = store.bubbles().iter().map(|b| b.spawn_time()).collect();

        assert_eq!(first, 4);
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn test_eviction_does_not_assume_sorted_order() {
        let mut store = ParticleStore::new(1.0);
        // Spawn times out of order on purpose
        store.spawn_bubble(2.0);
        store.spawn_bubble(0.0);
        store.spawn_bubble(1.8);
        store.spawn_bubble(0.5);

        store.remove_expired(2.2);
        let times: Vec<f32> = store.bubbles().iter().map(|b| b.spawn_time()).collect();
        assert_eq!(times, vec![2.0, 1.8]);
    }

    #[test]
    fn test_same_seed_same_particles() {
        let mut a = ParticleStore::with_profiles(3.0, Default::default(), Default::default(), 9);
        let mut b = ParticleStore::with_profiles(3.0, Default::default(), Default::default(), 9);
        for i in 0..5 {
            a.spawn_bubble(i as f32);
            b.spawn_bubble(i as f32);
            a.spawn_billboard(i as f32);
            b.spawn_billboard(i as f32);
        }
        assert_eq!(a.bubbles(), b.bubbles());
        assert_eq!(a.billboards(), b.billboards());
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let mut store = ParticleStore::new(3.0);
        store.spawn_bubble(0.0);
        store.spawn_billboard(0.0);

        let bubble = &store.bubbles()[0];
        assert_eq!(ParticleStore::evaluate(bubble, 1.3), ParticleStore::evaluate(bubble, 1.3));
        let smoke = &store.billboards()[0];
        assert_eq!(ParticleStore::evaluate(smoke, 0.7), ParticleStore::evaluate(smoke, 0.7));
    }

    #[test]
    fn test_clear_and_lifetime_setter() {
        let mut store = ParticleStore::new(3.0);
        store.spawn_bubble(0.0);
        store.spawn_billboard(0.0);
        store.clear();
        assert!(store.is_empty());

        store.set_max_lifetime(-2.0);
        assert_eq!(store.max_lifetime(), 0.0);
    }
}
