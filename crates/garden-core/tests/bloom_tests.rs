// Host-side integration tests for the single-flower scene.

use garden_core::*;
use glam::DVec2;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_scene() -> BloomScene {
    let mut rng = StdRng::seed_from_u64(7);
    BloomScene::new(800.0, 600.0, &mut rng)
}

#[test]
fn center_sits_below_the_middle() {
    let scene = make_scene();
    assert_eq!(scene.center(), DVec2::new(400.0, 300.0 + BLOOM_CENTER_DROP));
}

#[test]
fn droplets_follow_the_fixed_layout() {
    let scene = make_scene();
    assert_eq!(scene.droplets().len(), 6);
    for (d, [dx, dy, r]) in scene.droplets().iter().zip(DROPLET_LAYOUT) {
        assert_eq!(d.base, scene.center() + DVec2::new(dx, dy));
        assert_eq!(d.radius, r);
        assert!((0.0..std::f64::consts::TAU).contains(&d.phase));
    }
}

#[test]
fn constant_random_source_gives_zero_phases() {
    let mut rng = StepRng::new(0, 0);
    let scene = BloomScene::new(800.0, 600.0, &mut rng);
    assert!(scene.droplets().iter().all(|d| d.phase == 0.0));
}

#[test]
fn droplet_cache_is_base_plus_bounded_jitter() {
    let mut d = Droplet::new(DVec2::new(100.0, 50.0), 5.0, 1.2);
    assert_eq!(d.position, d.base);
    for i in 0..5_000 {
        let t = i as f64 * 0.013;
        d.update(t);
        let off = d.position - d.base;
        assert!(off.x.abs() <= DROPLET_JITTER[0] + 1e-12);
        assert!(off.y.abs() <= DROPLET_JITTER[1] + 1e-12);
        assert!(d.shimmer(t).abs() <= d.radius * DROPLET_SHIMMER_SHIFT + 1e-12);
    }
}

#[test]
fn breath_and_sway_stay_within_amplitude() {
    for i in 0..20_000 {
        let t = i as f64 * 0.005;
        assert!(breath(t).abs() <= BREATH_AMPLITUDE + 1e-12);
        let s = bloom_sway(t);
        assert!(s.x.abs() <= BLOOM_SWAY_AMPLITUDE[0] + 1e-12);
        assert!(s.y.abs() <= BLOOM_SWAY_AMPLITUDE[1] + 1e-12);
    }
}

#[test]
fn frame_starts_with_full_clear_and_draws_seven_petals() {
    let mut scene = make_scene();
    let mut r = Recorder::new(800.0, 600.0);
    scene.render(&mut r, 0.5);
    assert_eq!(
        r.commands()[0],
        DrawCommand::ClearRect(DVec2::ZERO, DVec2::new(800.0, 600.0))
    );
    assert_eq!(r.count(|c| matches!(c, DrawCommand::Rotate(_))), PETAL_COUNT);
    // one contact shadow per droplet
    assert_eq!(r.count(|c| matches!(c, DrawCommand::Ellipse { .. })), 6);
    let saves = r.count(|c| matches!(c, DrawCommand::Save));
    let restores = r.count(|c| matches!(c, DrawCommand::Restore));
    assert_eq!(saves, restores);
}

#[test]
fn frame_layers_petals_then_cavity_then_droplets() {
    let t = 0.5;
    let mut scene = make_scene();
    let mut r = Recorder::new(800.0, 600.0);
    scene.render(&mut r, t);
    let cmds = r.commands();
    assert!(matches!(cmds[0], DrawCommand::ClearRect(..)));
    assert_eq!(cmds[1], DrawCommand::Save);
    assert_eq!(cmds[2], DrawCommand::Translate(bloom_sway(t)));

    let cavity_radius = CAVITY_RADIUS + breath(t) * CAVITY_BREATH_GROWTH;
    let last_petal = cmds
        .iter()
        .rposition(|c| matches!(c, DrawCommand::Rotate(_)))
        .unwrap();
    let cavity = cmds
        .iter()
        .position(|c| matches!(c, DrawCommand::Arc { radius, .. } if *radius == cavity_radius))
        .unwrap();
    let first_shadow = cmds
        .iter()
        .position(|c| matches!(c, DrawCommand::Ellipse { .. }))
        .unwrap();
    assert!(last_petal < cavity);
    assert!(cavity < first_shadow);
    assert_eq!(cmds.last(), Some(&DrawCommand::Restore));
}

#[test]
fn same_time_gives_identical_frames() {
    let mut scene = make_scene();
    let mut r = Recorder::new(800.0, 600.0);
    scene.render(&mut r, 3.21);
    let first = r.take();
    scene.render(&mut r, 9.0);
    let other = r.take();
    scene.render(&mut r, 3.21);
    let again = r.take();
    assert_eq!(first, again);
    assert_ne!(first, other);
}

#[test]
fn rendering_updates_droplet_positions() {
    let mut scene = make_scene();
    let mut r = Recorder::new(800.0, 600.0);
    scene.render(&mut r, 2.0);
    for d in scene.droplets() {
        assert_eq!(d.position, d.base + d.jitter(2.0));
    }
}

#[test]
fn zero_sized_surface_still_draws() {
    let mut rng = StepRng::new(0, 0);
    let mut animator = Animator::with_default_step(BloomScene::new(0.0, 0.0, &mut rng));
    let mut r = Recorder::new(0.0, 0.0);
    for _ in 0..3 {
        animator.tick(&mut r);
    }
    assert!(!r.is_empty());
    assert_eq!(animator.scene().entity_count(), 6);
}
