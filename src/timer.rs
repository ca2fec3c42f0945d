//! Periodic spawn events.
//!
//! A [`PeriodicTimer`] turns the elapsed time of each frame into discrete
//! events. It is ticked once per frame and fires at most once per tick, so the
//! spawn cadence follows simulation time rather than the frame rate.
//!
//! ```ignore
//! let mut timer = PeriodicTimer::new(0.2);
//! for _ in 0..20 {
//!     if timer.update(0.05) {
//!         store.spawn_bubble(clock.elapsed());
//!     }
//! }
//! assert_eq!(timer.events(), 5);
//! ```

/// Smallest period a timer accepts.
pub const MIN_PERIOD: f32 = 1e-3;

/// Slack absorbed when comparing accumulated time against the period, so that
/// frames like `4 x 0.05` land on a `0.2` boundary despite f32 rounding.
const TOLERANCE: f32 = 1e-5;

/// Fires one event every `period` seconds of accumulated frame time.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicTimer {
    period: f32,
    /// Time accumulated since the last event.
    accumulated: f32,
    /// Whether the last update fired.
    event: bool,
    /// Events fired since creation or the last reset.
    events: u64,
}

impl PeriodicTimer {
    /// Create a timer firing every `period` seconds.
    pub fn new(period: f32) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            accumulated: 0.0,
            event: false,
            events: 0,
        }
    }

    /// Advance by `delta` seconds and report whether an event fired.
    ///
    /// When one frame spans several periods only a single event fires and the
    /// surplus periods are dropped rather than replayed on later frames.
    pub fn update(&mut self, delta: f32) -> bool {
        self.accumulated += delta.max(0.0);
        self.event = self.accumulated + TOLERANCE >= self.period;

        if self.event {
            self.accumulated -= self.period;
            if self.accumulated + TOLERANCE >= self.period {
                self.accumulated = 0.0;
            }
            self.accumulated = self.accumulated.max(0.0);
            self.events += 1;
        }

        self.event
    }

    /// Whether the most recent [`update`](Self::update) fired.
    #[inline]
    pub fn event(&self) -> bool {
        self.event
    }

    /// Number of events fired so far.
    #[inline]
    pub fn events(&self) -> u64 {
        self.events
    }

    /// Seconds between two events.
    #[inline]
    pub fn period(&self) -> f32 {
        self.period
    }

    /// Change the period. Time already accumulated carries over.
    ///
    /// Only the [`MIN_PERIOD`] floor is enforced here; callers clamp to the
    /// range their particle kind allows.
    pub fn set_period(&mut self, period: f32) {
        self.period = period.max(MIN_PERIOD);
    }

    /// Forget accumulated time and fired events.
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
        self.event = false;
        self.events = 0;
    }
}
