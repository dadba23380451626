//! Garden scene: a field of swaying flowers over a bed of leaves.

use crate::color::Rgba;
use crate::constants::*;
use crate::driver::Scene;
use crate::motion::Oscillator;
use crate::shapes;
use crate::surface::Surface;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;
use std::ops::Range;

#[derive(Clone, Debug, PartialEq)]
pub struct Flower {
    /// Where the stem meets the ground.
    pub position: DVec2,
    pub scale: f64,
    /// Gradient stops from the petal base outwards.
    pub colors: [Rgba; 4],
    /// Horizontal head offset in pixels.
    pub sway: Oscillator,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Leaf {
    pub position: DVec2,
    pub scale: f64,
    pub rotation: f64,
    /// Extra rotation in radians.
    pub sway: Oscillator,
}

/// Generation ranges. Depth bands are fractions of the surface height.
#[derive(Clone, Debug)]
pub struct GardenConfig {
    pub flower_count: usize,
    pub leaf_count: usize,
    pub flower_band: Range<f64>,
    pub leaf_band: Range<f64>,
    pub flower_scale: Range<f64>,
    pub flower_sway_amplitude: Range<f64>,
    pub flower_sway_speed: Range<f64>,
    pub leaf_scale: Range<f64>,
    pub leaf_rotation: Range<f64>,
    pub leaf_sway_amplitude: Range<f64>,
    pub leaf_sway_speed: Range<f64>,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            flower_count: FLOWER_COUNT,
            leaf_count: LEAF_COUNT,
            flower_band: FLOWER_DEPTH_BAND[0]..FLOWER_DEPTH_BAND[1],
            leaf_band: LEAF_DEPTH_BAND[0]..LEAF_DEPTH_BAND[1],
            flower_scale: 0.4..1.2,
            flower_sway_amplitude: 2.0..8.0,
            flower_sway_speed: 0.5..1.5,
            leaf_scale: 0.5..1.3,
            leaf_rotation: -0.8..0.8,
            leaf_sway_amplitude: 0.05..0.2,
            leaf_sway_speed: 0.6..1.6,
        }
    }
}

/// `range.start + u * len` for one uniform `u` in [0, 1). A constant
/// random source therefore maps to a constant point in every range.
#[inline]
fn sample<R: Rng + ?Sized>(rng: &mut R, range: &Range<f64>) -> f64 {
    range.start + rng.gen::<f64>() * (range.end - range.start)
}

/// Four petal gradient stops derived from a single hue.
pub fn flower_palette(hue_deg: f64) -> [Rgba; 4] {
    FLOWER_STOP_SL.map(|(s, l)| Rgba::from_hsl(hue_deg, s, l))
}

pub struct GardenScene {
    size: DVec2,
    flowers: Vec<Flower>,
    leaves: Vec<Leaf>,
}

impl GardenScene {
    pub fn generate<R: Rng + ?Sized>(
        width: f64,
        height: f64,
        config: &GardenConfig,
        rng: &mut R,
    ) -> Self {
        let flowers = (0..config.flower_count)
            .map(|_| {
                let x = sample(rng, &(0.0..width));
                let y = height * sample(rng, &config.flower_band);
                let scale = sample(rng, &config.flower_scale);
                let colors = flower_palette(sample(rng, &(0.0..360.0)));
                let sway = Oscillator::new(
                    sample(rng, &(0.0..TAU)),
                    sample(rng, &config.flower_sway_amplitude),
                    sample(rng, &config.flower_sway_speed),
                );
                Flower {
                    position: DVec2::new(x, y),
                    scale,
                    colors,
                    sway,
                }
            })
            .collect();
        let leaves = (0..config.leaf_count)
            .map(|_| {
                let x = sample(rng, &(0.0..width));
                let y = height * sample(rng, &config.leaf_band);
                Leaf {
                    position: DVec2::new(x, y),
                    scale: sample(rng, &config.leaf_scale),
                    rotation: sample(rng, &config.leaf_rotation),
                    sway: Oscillator::new(
                        sample(rng, &(0.0..TAU)),
                        sample(rng, &config.leaf_sway_amplitude),
                        sample(rng, &config.leaf_sway_speed),
                    ),
                }
            })
            .collect();
        Self {
            size: DVec2::new(width, height),
            flowers,
            leaves,
        }
    }

    pub fn flowers(&self) -> &[Flower] {
        &self.flowers
    }

    pub fn leaves(&self) -> &[Leaf] {
        &self.leaves
    }

    /// Flowers back to front: ascending ground y, ties kept in generation order.
    pub fn draw_order(&self) -> Vec<&Flower> {
        let mut order: Vec<&Flower> = self.flowers.iter().collect();
        order.sort_by(|a, b| a.position.y.total_cmp(&b.position.y));
        order
    }
}

impl Scene for GardenScene {
    fn name(&self) -> &'static str {
        "garden"
    }

    fn entity_count(&self) -> usize {
        self.flowers.len() + self.leaves.len()
    }

    fn render<S: Surface + ?Sized>(&mut self, surface: &mut S, t: f64) {
        shapes::garden_background(surface, self.size);
        for leaf in &self.leaves {
            shapes::leaf(surface, leaf.position, leaf.scale, leaf.rotation + leaf.sway.offset(t));
        }
        for flower in self.draw_order() {
            shapes::flower(
                surface,
                flower.position,
                flower.scale,
                &flower.colors,
                flower.sway.offset(t),
            );
        }
    }
}
