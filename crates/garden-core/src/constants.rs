use crate::color::Rgba;

// Shared animation tuning constants used by both web and native frontends.

// Driver
pub const DEFAULT_TIME_STEP: f64 = 0.01; // logical time advanced per frame

// ---------------- Bloom ----------------

// Layout
pub const BLOOM_CENTER_DROP: f64 = 100.0; // flower center sits below the surface middle
pub const PETAL_COUNT: usize = 7;
pub const PETAL_ROTATION_OFFSET: f64 = 0.15; // radians added to every petal
pub const PETAL_BREATH_ROTATION: f64 = 0.02; // radians of rotation per unit of breath

// Motion
pub const BREATH_AMPLITUDE: f64 = 1.5;
pub const BLOOM_SWAY_AMPLITUDE: [f64; 2] = [3.0, 2.0];
pub const BLOOM_SWAY_SPEED: [f64; 2] = [0.4, 0.3];

// Cavity
pub const CAVITY_OFFSET_Y: f64 = -40.0;
pub const CAVITY_RADIUS: f64 = 55.0;
pub const CAVITY_BREATH_GROWTH: f64 = 0.4;

// Droplets: (dx, dy, radius) relative to the flower center
pub const DROPLET_LAYOUT: [[f64; 3]; 6] = [
    [-40.0, -210.0, 6.0],
    [20.0, -250.0, 4.0],
    [45.0, -190.0, 5.0],
    [-10.0, -300.0, 3.0],
    [70.0, -310.0, 4.0],
    [-65.0, -260.0, 5.0],
];
pub const DROPLET_JITTER: [f64; 2] = [0.6, 0.4]; // surface tension vibration (px)
pub const DROPLET_JITTER_SPEED: [f64; 2] = [2.0, 1.6];
pub const DROPLET_SHIMMER_SPEED: f64 = 3.0;
pub const DROPLET_SHIMMER_SHIFT: f64 = 0.2; // fraction of the radius
pub const DROPLET_SHADOW_ALPHA: f64 = 0.18;

// Palette
pub const PETAL_STOPS: [(f64, Rgba); 4] = [
    (0.0, Rgba::rgb(0x5a, 0x00, 0x2b)),
    (0.25, Rgba::rgb(0xa0, 0x00, 0x50)),
    (0.6, Rgba::rgb(0xff, 0x4f, 0xa3)),
    (1.0, Rgba::rgb(0xff, 0xd1, 0xea)),
];
pub const PETAL_OUTLINE: Rgba = Rgba::rgb(0x3a, 0x00, 0x1c);
pub const PETAL_RIB_ALPHA: f64 = 0.15;
pub const CAVITY_INNER: Rgba = Rgba::rgb(0x1a, 0x00, 0x0c);
pub const CAVITY_OUTER: Rgba = Rgba::rgb(0x4a, 0x00, 0x25);
pub const DROPLET_STOPS: [(f64, Rgba); 3] = [
    (0.0, Rgba::rgba(255, 255, 255, 0.95)),
    (0.4, Rgba::rgba(255, 255, 255, 0.45)),
    (1.0, Rgba::rgba(255, 255, 255, 0.05)),
];

// ---------------- Garden ----------------

pub const FLOWER_COUNT: usize = 100;
pub const LEAF_COUNT: usize = 300;

// Depth bands as fractions of the surface height
pub const FLOWER_DEPTH_BAND: [f64; 2] = [0.55, 1.0];
pub const LEAF_DEPTH_BAND: [f64; 2] = [0.5, 1.0];
pub const HORIZON: f64 = 0.55; // sky above, ground below

// Flower geometry (scaled per flower)
pub const FLOWER_PETALS: usize = 5;
pub const STEM_HEIGHT: f64 = 60.0;
pub const FLOWER_PETAL_LENGTH: f64 = 18.0;
pub const FLOWER_PETAL_WIDTH: f64 = 8.0;
pub const FLOWER_HEART_RADIUS: f64 = 4.0;

// Leaf geometry (scaled per leaf)
pub const LEAF_LENGTH: f64 = 40.0;
pub const LEAF_WIDTH: f64 = 10.0;

pub const SKY_TOP: Rgba = Rgba::rgb(0x8e, 0xc5, 0xfc);
pub const SKY_HORIZON: Rgba = Rgba::rgb(0xe0, 0xf2, 0xff);
pub const GROUND_NEAR: Rgba = Rgba::rgb(0x2e, 0x5e, 0x1e);
pub const GROUND_FAR: Rgba = Rgba::rgb(0x7c, 0xb3, 0x42);
pub const STEM_COLOR: Rgba = Rgba::rgb(0x3b, 0x7a, 0x2a);
pub const LEAF_BASE: Rgba = Rgba::rgb(0x1f, 0x4d, 0x14);
pub const LEAF_TIP: Rgba = Rgba::rgb(0x8b, 0xc3, 0x4a);
pub const LEAF_VEIN: Rgba = Rgba::rgba(255, 255, 255, 0.25);
pub const FLOWER_HEART: Rgba = Rgba::rgb(0xf5, 0xc0, 0x1b);

// (saturation, lightness) per flower gradient stop, center outwards
pub const FLOWER_STOP_SL: [(f64, f64); 4] = [(0.9, 0.85), (0.85, 0.6), (0.8, 0.4), (0.75, 0.2)];
pub const FLOWER_STOP_OFFSETS: [f64; 4] = [0.0, 0.35, 0.7, 1.0];
