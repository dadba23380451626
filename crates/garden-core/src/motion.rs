//! Time-driven oscillations shared by every animated entity.
//!
//! All functions here are pure in `t`: the driver threads the current time
//! through render calls, nothing reads a global clock.

use crate::constants::*;
use glam::DVec2;

/// Per-entity sinusoidal motion: `amplitude * sin(t * speed + phase)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Oscillator {
    pub phase: f64,
    pub amplitude: f64,
    pub speed: f64,
}

impl Oscillator {
    pub fn new(phase: f64, amplitude: f64, speed: f64) -> Self {
        Self {
            phase,
            amplitude,
            speed,
        }
    }

    #[inline]
    pub fn offset(&self, t: f64) -> f64 {
        self.amplitude * (t * self.speed + self.phase).sin()
    }
}

/// Slow pulse applied to petal control points and the cavity radius.
#[inline]
pub fn breath(t: f64) -> f64 {
    BREATH_AMPLITUDE * t.sin()
}

/// Whole-flower drift used by the bloom scene.
#[inline]
pub fn bloom_sway(t: f64) -> DVec2 {
    DVec2::new(
        BLOOM_SWAY_AMPLITUDE[0] * (t * BLOOM_SWAY_SPEED[0]).sin(),
        BLOOM_SWAY_AMPLITUDE[1] * (t * BLOOM_SWAY_SPEED[1]).cos(),
    )
}
