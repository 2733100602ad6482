//! Spring animation primitives for widget motion.
//!
//! A small damped-spring integrator drives continuous values (like the sheet
//! height) toward their targets instead of snapping. Retargeting an in-flight
//! animation simply supersedes it — last write wins.

use std::time::{Duration, Instant};

/// Largest step fed to the integrator; longer frame gaps are subdivided
/// so the simulation stays stable when ticks arrive late.
const MAX_STEP: f32 = 1.0 / 120.0;

/// Largest frame gap honored as real time. Anything beyond this (first tick
/// after an idle period, a stalled event loop) is treated as a single frame.
const MAX_FRAME: f32 = 1.0 / 30.0;

/// Below these thresholds the value snaps to its target and motion stops.
const SETTLE_DISTANCE: f32 = 0.05;
const SETTLE_VELOCITY: f32 = 0.5;

/// Physical parameters of a damped spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    /// Restoring force per unit of displacement.
    pub stiffness: f32,
    /// Velocity-proportional friction.
    pub damping: f32,
    /// Attached mass.
    pub mass: f32,
}

impl Spring {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Build a spring from a response duration (seconds per undamped period)
    /// and a damping fraction (1.0 = critically damped, below 1.0 bounces).
    pub fn with_duration(response: f32, damping_fraction: f32) -> Self {
        let omega = std::f32::consts::TAU / response.max(1e-3);
        Self {
            stiffness: omega * omega,
            damping: 2.0 * damping_fraction * omega,
            mass: 1.0,
        }
    }
}

impl Default for Spring {
    /// Smooth, lightly-bouncy spring suitable for panel entrances.
    fn default() -> Self {
        Self::with_duration(0.55, 0.825)
    }
}

/// A spring-animated scalar: a current value trailing a target.
///
/// Drive it from a frame tick (`tick`) and retarget it from event handlers
/// (`animate_to`, `animate_to_delayed`). The value is purely presentational;
/// reducers should keep their own committed state and treat this as the
/// rendered interpolation of it.
#[derive(Debug, Clone)]
pub struct Animated {
    value: f32,
    velocity: f32,
    target: f32,
    /// Delayed retarget not yet due: (target, due time).
    pending: Option<(f32, Instant)>,
    spring: Spring,
    delay: Duration,
    last_tick: Option<Instant>,
}

impl Animated {
    /// Create a settled value.
    pub fn new(value: f32, spring: Spring) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            pending: None,
            spring,
            delay: Duration::ZERO,
            last_tick: None,
        }
    }

    /// Apply a fixed delay to every delayed retarget.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The current (rendered) value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// The value the spring is heading toward, including a pending retarget.
    pub fn target(&self) -> f32 {
        self.pending.map_or(self.target, |(target, _)| target)
    }

    /// Swap the spring driving the motion. Value and velocity carry over.
    pub fn set_spring(&mut self, spring: Spring) {
        self.spring = spring;
    }

    /// Jump to a value with no motion.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.pending = None;
    }

    /// Retarget immediately. Current value and velocity carry over, so an
    /// in-flight animation bends toward the new target instead of restarting.
    pub fn animate_to(&mut self, target: f32) {
        self.target = target;
        self.pending = None;
    }

    /// Retarget after the configured delay.
    ///
    /// If a retarget is already armed, only its target moves; the due time
    /// stays. A stream of commits arriving faster than the delay would
    /// otherwise re-arm it forever and the value would never start moving.
    pub fn animate_to_delayed(&mut self, target: f32, now: Instant) {
        if self.delay.is_zero() {
            self.animate_to(target);
        } else if let Some((pending_target, _due)) = self.pending.as_mut() {
            *pending_target = target;
        } else {
            self.pending = Some((target, now + self.delay));
        }
    }

    /// Whether the spring still has work to do.
    pub fn is_animating(&self) -> bool {
        self.pending.is_some() || self.value != self.target || self.velocity != 0.0
    }

    /// Advance the simulation to `now`. Returns true while still in motion.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some((target, due)) = self.pending {
            if now >= due {
                self.target = target;
                self.pending = None;
            }
        }

        let dt = match self.last_tick {
            Some(previous) => now.saturating_duration_since(previous).as_secs_f32(),
            None => 0.0,
        };
        self.last_tick = Some(now);

        let mut remaining = dt.min(MAX_FRAME);
        while remaining > 0.0 && (self.value != self.target || self.velocity != 0.0) {
            let step = remaining.min(MAX_STEP);
            let displacement = self.target - self.value;
            let force = self.spring.stiffness * displacement - self.spring.damping * self.velocity;
            self.velocity += force / self.spring.mass * step;
            self.value += self.velocity * step;
            remaining -= step;
        }

        if (self.target - self.value).abs() < SETTLE_DISTANCE
            && self.velocity.abs() < SETTLE_VELOCITY
        {
            self.value = self.target;
            self.velocity = 0.0;
        }

        self.is_animating()
    }
}
