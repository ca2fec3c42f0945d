//! The cauldron scene.
//!
//! Ties the clock, one spawn timer per particle kind and the particle store
//! into a per-frame update, then fans the live particles out to a renderer.
//!
//! # Frame Order
//!
//! 1. Advance the clock
//! 2. Update both spawn timers with the frame's delta
//! 3. Spawn one particle per fired timer at the current simulation time
//! 4. Evict particles older than the maximum lifetime
//! 5. [`Scene::draw`] evaluates what is left
//!
//! # Example
//!
//! ```ignore
//! let mut scene = Scene::new(SceneConfig::default())?;
//! let mut batch = InstanceBatch::new();
//!
//! loop {
//!     scene.tick();
//!     scene.draw(&mut batch);
//!     // upload batch.bubble_bytes() / batch.billboard_bytes()
//! }
//! ```

use crate::config::{clamp_period, DisplayFlags, SceneConfig};
use crate::error::ConfigError;
use crate::particle::ParticleKind;
use crate::render::{BillboardInstance, BubbleInstance, DrawSink};
use crate::store::ParticleStore;
use crate::time::Clock;
use crate::timer::PeriodicTimer;
use log::{debug, warn};

/// What happened during one [`Scene::update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub spawned_bubbles: usize,
    pub spawned_billboards: usize,
    pub evicted: usize,
}

/// Interactive cauldron scene state.
#[derive(Debug, Clone)]
pub struct Scene {
    config: SceneConfig,
    clock: Clock,
    bubble_timer: PeriodicTimer,
    smoke_timer: PeriodicTimer,
    store: ParticleStore,
}

impl Scene {
    /// Build a scene from a configuration, rejecting invalid values.
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!("Building scene: {:?}", config);

        let store = ParticleStore::with_profiles(
            config.max_lifetime,
            config.bubble.clone(),
            config.smoke.clone(),
            config.seed,
        );

        Ok(Self {
            clock: Clock::new(),
            bubble_timer: PeriodicTimer::new(config.spawn.bubble),
            smoke_timer: PeriodicTimer::new(config.spawn.smoke),
            store,
            config,
        })
    }

    /// Run one frame covering `delta` seconds.
    pub fn update(&mut self, delta: f32) -> FrameStats {
        self.clock.advance(delta);
        self.step()
    }

    /// Run one frame covering the wall-clock time since the previous tick.
    pub fn tick(&mut self) -> FrameStats {
        self.clock.tick();
        self.step()
    }

    fn step(&mut self) -> FrameStats {
        let delta = self.clock.delta();
        let now = self.clock.elapsed();
        let mut stats = FrameStats::default();

        if self.bubble_timer.update(delta) {
            self.store.spawn_bubble(now);
            stats.spawned_bubbles += 1;
        }
        if self.smoke_timer.update(delta) {
            self.store.spawn_billboard(now);
            stats.spawned_billboards += 1;
        }

        stats.evicted = self.store.remove_expired(now);
        stats
    }

    /// Hand every visible particle to `sink`.
    pub fn draw<S: DrawSink + ?Sized>(&self, sink: &mut S) {
        let now = self.clock.elapsed();
        let display = &self.config.display;
        sink.begin_frame(display);

        if display.display_bubbles {
            for bubble in self.store.bubbles() {
                sink.draw_bubble(&BubbleInstance::evaluate(bubble, now));
            }
        }

        if display.display_billboards {
            for billboard in self.store.billboards() {
                let mut instance = BillboardInstance::evaluate(billboard, now);
                if !display.transparent_billboards {
                    instance.alpha = 1.0;
                }
                sink.draw_billboard(&instance);
            }
        }
    }

    /// Change the spawn period of `kind`, clamped to its allowed range.
    ///
    /// Returns the period actually applied.
    pub fn set_spawn_period(&mut self, kind: ParticleKind, period: f32) -> f32 {
        let clamped = clamp_period(kind, period);
        if clamped != period {
            warn!("{} spawn period {} clamped to {}", kind, period, clamped);
        }
        match kind {
            ParticleKind::Bubble => {
                self.config.spawn.bubble = clamped;
                self.bubble_timer.set_period(clamped);
            }
            ParticleKind::Smoke => {
                self.config.spawn.smoke = clamped;
                self.smoke_timer.set_period(clamped);
            }
        }
        clamped
    }

    /// Current spawn period of `kind`.
    pub fn spawn_period(&self, kind: ParticleKind) -> f32 {
        self.config.spawn.get(kind)
    }

    /// Forget all particles and restart time from zero.
    ///
    /// The RNG is not reseeded, so new particles differ from the first run.
    pub fn reset(&mut self) {
        self.clock.reset();
        self.bubble_timer.reset();
        self.smoke_timer.reset();
        self.store.clear();
    }

    /// Current display toggles.
    pub fn display(&self) -> &DisplayFlags {
        &self.config.display
    }

    /// Mutable display toggles, as edited by a settings panel.
    pub fn display_mut(&mut self) -> &mut DisplayFlags {
        &mut self.config.display
    }

    /// Configuration including runtime period changes.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Live particles.
    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    /// Simulation clock.
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Mutable clock access for pausing or scaling time.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }
}
