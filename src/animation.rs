//! Settle animation: a single restartable progress source
//!
//! Progress is recomputed from elapsed time on every tick rather than
//! incremented, so a stalled host catches up instead of drifting. Time comes
//! from an injected [`FrameClock`], which lets tests feed synthetic instants.

use std::cell::Cell;
use std::f64::consts::PI;
use std::rc::Rc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

// ============================================================================
// Time Source
// ============================================================================

/// Source of the current frame time
pub trait FrameClock {
    fn now(&self) -> Instant;
}

impl<C: FrameClock + ?Sized> FrameClock for Rc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

/// Wall clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl FrameClock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<Instant>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Instant::now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl FrameClock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

// ============================================================================
// Easing
// ============================================================================

/// Easing curves for the settle animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseOut,
    FastOutSlowIn,
    /// Overshoots past 1.0 and oscillates back, period 0.4
    #[default]
    ElasticOut,
}

const ELASTIC_PERIOD: f64 = 0.4;

impl Easing {
    /// Map a linear fraction in [0, 1] onto the curve
    pub fn transform(&self, fraction: f64) -> f64 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            Easing::ElasticOut => elastic_out(t),
        }
    }
}

fn elastic_out(t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let s = ELASTIC_PERIOD / 4.0;
    2f64.powf(-10.0 * t) * ((t - s) * (2.0 * PI) / ELASTIC_PERIOD).sin() + 1.0
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, fraction: f64) -> f64 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f64, b: f64, c: f64, t: f64| ((a * t + b) * t + c) * t;
    let derivative = |a: f64, b: f64, c: f64, t: f64| (3.0 * a * t + 2.0 * b) * t + c;

    // Newton-Raphson for the parametric t matching x = fraction
    let mut t = fraction;
    for _ in 0..8 {
        let x = sample(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            break;
        }
        let d = derivative(ax, bx, cx, t);
        if d.abs() < 1e-6 {
            break;
        }
        t = (t - x / d).clamp(0.0, 1.0);
    }

    sample(ay, by, cy, t)
}

// ============================================================================
// Bounce Animation
// ============================================================================

pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);
pub const DEFAULT_AMPLITUDE: f64 = 8.0;

/// Restartable 0 → 1 run producing a vertical bounce offset
#[derive(Debug, Clone)]
pub struct BounceAnimation {
    duration: Duration,
    amplitude: f64,
    easing: Easing,
    started_at: Option<Instant>,
    progress: f64,
}

impl Default for BounceAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION, DEFAULT_AMPLITUDE, Easing::default())
    }
}

impl BounceAnimation {
    pub fn new(duration: Duration, amplitude: f64, easing: Easing) -> Self {
        Self {
            duration,
            amplitude,
            easing,
            started_at: None,
            // Settled: a fresh dock shows no offset
            progress: 1.0,
        }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Drop any in-flight run and start over from 0
    pub fn restart(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.progress = 0.0;
    }

    /// Recompute progress for `now`. Returns true while the run continues.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(start) = self.started_at else {
            return false;
        };
        let elapsed = now.saturating_duration_since(start);
        if self.duration.is_zero() || elapsed >= self.duration {
            self.progress = 1.0;
            self.started_at = None;
            return false;
        }
        self.progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        true
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Progress after easing; may overshoot 1.0 for elastic curves
    pub fn eased(&self) -> f64 {
        self.easing.transform(self.progress)
    }

    /// Vertical bounce applied uniformly to every item
    pub fn offset(&self) -> f64 {
        // sin(π) is not exactly zero
        if self.progress <= 0.0 || self.progress >= 1.0 {
            return 0.0;
        }
        self.amplitude * (self.eased() * PI).sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::EaseOut,
            Easing::FastOutSlowIn,
            Easing::ElasticOut,
        ] {
            assert_eq!(easing.transform(0.0), 0.0, "{:?} at 0", easing);
            assert_eq!(easing.transform(1.0), 1.0, "{:?} at 1", easing);
        }
    }

    #[test]
    fn test_elastic_out_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::ElasticOut.transform(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0, "elastic curve should overshoot, peak = {}", peak);
    }

    #[test]
    fn test_cubic_bezier_is_monotonic() {
        let mut last = 0.0;
        for i in 0..=50 {
            let v = Easing::FastOutSlowIn.transform(i as f64 / 50.0);
            assert!(v + 1e-9 >= last);
            last = v;
        }
    }

    #[test]
    fn test_fraction_is_clamped() {
        assert_eq!(Easing::Linear.transform(-0.5), 0.0);
        assert_eq!(Easing::Linear.transform(3.0), 1.0);
    }
}
