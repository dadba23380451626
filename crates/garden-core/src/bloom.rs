//! Single-flower scene: seven breathing petals around a dark cavity, with a
//! handful of water droplets resting on top.

use crate::constants::*;
use crate::driver::Scene;
use crate::motion::{bloom_sway, breath};
use crate::shapes;
use crate::surface::Surface;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

#[derive(Clone, Debug, PartialEq)]
pub struct Droplet {
    pub base: DVec2,
    pub radius: f64,
    pub phase: f64,
    /// Base position plus this frame's jitter. Refreshed by [`Droplet::update`].
    pub position: DVec2,
}

impl Droplet {
    pub fn new(base: DVec2, radius: f64, phase: f64) -> Self {
        Self {
            base,
            radius,
            phase,
            position: base,
        }
    }

    /// Surface-tension vibration around the base position.
    pub fn jitter(&self, t: f64) -> DVec2 {
        DVec2::new(
            (t * DROPLET_JITTER_SPEED[0] + self.phase).sin() * DROPLET_JITTER[0],
            (t * DROPLET_JITTER_SPEED[1] + self.phase).cos() * DROPLET_JITTER[1],
        )
    }

    /// Horizontal highlight offset in pixels.
    pub fn shimmer(&self, t: f64) -> f64 {
        (t * DROPLET_SHIMMER_SPEED + self.phase).sin() * self.radius * DROPLET_SHIMMER_SHIFT
    }

    pub fn update(&mut self, t: f64) {
        self.position = self.base + self.jitter(t);
    }
}

pub struct BloomScene {
    size: DVec2,
    center: DVec2,
    droplets: Vec<Droplet>,
}

impl BloomScene {
    /// Lay out the flower for a `width` x `height` surface. Only the droplet
    /// phases are random.
    pub fn new<R: Rng + ?Sized>(width: f64, height: f64, rng: &mut R) -> Self {
        let size = DVec2::new(width, height);
        let center = DVec2::new(width / 2.0, height / 2.0 + BLOOM_CENTER_DROP);
        let droplets = DROPLET_LAYOUT
            .iter()
            .map(|&[dx, dy, r]| {
                Droplet::new(center + DVec2::new(dx, dy), r, rng.gen::<f64>() * TAU)
            })
            .collect();
        Self {
            size,
            center,
            droplets,
        }
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn droplets(&self) -> &[Droplet] {
        &self.droplets
    }

    pub fn petal_rotation(index: usize) -> f64 {
        index as f64 / PETAL_COUNT as f64 * TAU + PETAL_ROTATION_OFFSET
    }
}

impl Scene for BloomScene {
    fn name(&self) -> &'static str {
        "bloom"
    }

    fn entity_count(&self) -> usize {
        self.droplets.len()
    }

    fn render<S: Surface + ?Sized>(&mut self, surface: &mut S, t: f64) {
        surface.clear_rect(DVec2::ZERO, self.size);

        let b = breath(t);
        surface.save();
        surface.translate(bloom_sway(t));

        // petals first so the cavity and droplets sit on top
        for i in 0..PETAL_COUNT {
            shapes::petal(surface, self.center, Self::petal_rotation(i), b);
        }
        shapes::cavity(surface, self.center, b);

        for d in &mut self.droplets {
            d.update(t);
            shapes::droplet(surface, d.position, d.radius, d.shimmer(t));
        }

        surface.restore();
    }
}
