// Host-side tests for tuning constants and their relationships.

use garden_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_positive() {
    assert!(DEFAULT_TIME_STEP > 0.0);
    assert!(BREATH_AMPLITUDE > 0.0);
    assert!(BLOOM_SWAY_AMPLITUDE.iter().all(|a| *a > 0.0));
    assert!(DROPLET_JITTER.iter().all(|a| *a > 0.0));
    assert!(DROPLET_SHIMMER_SHIFT > 0.0 && DROPLET_SHIMMER_SHIFT < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn entity_counts_match_the_scenes() {
    assert_eq!(PETAL_COUNT, 7);
    assert_eq!(DROPLET_LAYOUT.len(), 6);
    assert_eq!(FLOWER_COUNT, 100);
    assert_eq!(LEAF_COUNT, 300);
}

#[test]
fn gradient_stops_are_ordered_within_unit_range() {
    let petal: Vec<f64> = PETAL_STOPS.iter().map(|(o, _)| *o).collect();
    let droplet: Vec<f64> = DROPLET_STOPS.iter().map(|(o, _)| *o).collect();
    for offsets in [petal, droplet, FLOWER_STOP_OFFSETS.to_vec()] {
        assert_eq!(offsets.first(), Some(&0.0));
        assert_eq!(offsets.last(), Some(&1.0));
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn depth_bands_sit_below_the_horizon() {
    for band in [FLOWER_DEPTH_BAND, LEAF_DEPTH_BAND] {
        assert!(band[0] < band[1]);
        assert!(band[0] >= 0.0 && band[1] <= 1.0);
        assert!(band[0] >= HORIZON - 0.1);
    }
}

#[test]
fn droplets_rest_on_the_petals() {
    // every droplet sits above the center, inside the petal reach
    for [dx, dy, r] in DROPLET_LAYOUT {
        assert!(dy < CAVITY_OFFSET_Y);
        assert!(dy > -450.0);
        assert!(dx.abs() < 120.0);
        assert!(r > 0.0);
    }
}

#[test]
fn flower_palette_darkens_outwards() {
    for hue in [0.0, 90.0, 200.0, 330.0] {
        let lum: Vec<u32> = flower_palette(hue)
            .iter()
            .map(|c| c.r as u32 + c.g as u32 + c.b as u32)
            .collect();
        assert!(lum.windows(2).all(|w| w[0] > w[1]), "hue {hue}: {lum:?}");
    }
}
