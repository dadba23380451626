//! Animation driver.
//!
//! [`Animator`] owns the logical clock and hands the current time to a
//! [`Scene`] once per frame. Platforms decide *when* to tick (requestAnimationFrame
//! on the web, a plain loop natively); the driver decides *what* time it is.

use crate::constants::DEFAULT_TIME_STEP;
use crate::error::GardenError;
use crate::surface::Surface;
use std::fmt;
use std::str::FromStr;

/// Something that can redraw itself from scratch for a given time.
pub trait Scene {
    fn name(&self) -> &'static str;

    /// Number of animated entities; fixed for the scene's lifetime.
    fn entity_count(&self) -> usize;

    fn render<S: Surface + ?Sized>(&mut self, surface: &mut S, t: f64);
}

/// Which animation to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SceneKind {
    #[default]
    Bloom,
    Garden,
}

impl FromStr for SceneKind {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bloom" | "flower" => Ok(SceneKind::Bloom),
            "garden" => Ok(SceneKind::Garden),
            other => Err(GardenError::UnknownScene(other.to_string())),
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneKind::Bloom => f.write_str("bloom"),
            SceneKind::Garden => f.write_str("garden"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
}

pub struct Animator<Sc> {
    scene: Sc,
    step: f64,
    frames: u64,
    state: DriverState,
}

impl<Sc: Scene> Animator<Sc> {
    pub fn new(scene: Sc, step: f64) -> Result<Self, GardenError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(GardenError::InvalidTimeStep(step));
        }
        Ok(Self {
            scene,
            step,
            frames: 0,
            state: DriverState::Idle,
        })
    }

    pub fn with_default_step(scene: Sc) -> Self {
        Self {
            scene,
            step: DEFAULT_TIME_STEP,
            frames: 0,
            state: DriverState::Idle,
        }
    }

    /// Logical time of the next frame. Derived from the frame counter so it
    /// never drifts and never resets.
    #[inline]
    pub fn time(&self) -> f64 {
        self.frames as f64 * self.step
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn scene(&self) -> &Sc {
        &self.scene
    }

    /// Draw one frame at the current time, then advance the clock.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if self.state == DriverState::Idle {
            log::debug!(
                "[driver] {} running: entities={} step={}",
                self.scene.name(),
                self.scene.entity_count(),
                self.step
            );
            self.state = DriverState::Running;
        }
        let t = self.time();
        self.scene.render(surface, t);
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_kind_parses_names() {
        assert_eq!("garden".parse::<SceneKind>(), Ok(SceneKind::Garden));
        assert_eq!(" Bloom ".parse::<SceneKind>(), Ok(SceneKind::Bloom));
        assert!(matches!(
            "meadow".parse::<SceneKind>(),
            Err(GardenError::UnknownScene(_))
        ));
    }

    #[test]
    fn scene_kind_display_roundtrips() {
        for kind in [SceneKind::Bloom, SceneKind::Garden] {
            assert_eq!(kind.to_string().parse::<SceneKind>(), Ok(kind));
        }
    }
}
