// Host-side integration tests for the animation driver.

use garden_core::*;

#[derive(Default)]
struct ProbeScene {
    times: Vec<f64>,
}

impl Scene for ProbeScene {
    fn name(&self) -> &'static str {
        "probe"
    }

    fn entity_count(&self) -> usize {
        1
    }

    fn render<S: Surface + ?Sized>(&mut self, surface: &mut S, t: f64) {
        self.times.push(t);
        surface.fill();
    }
}

#[test]
fn rejects_non_positive_or_non_finite_steps() {
    for step in [0.0, -0.01, f64::NAN, f64::INFINITY] {
        let res = Animator::new(ProbeScene::default(), step);
        assert!(
            matches!(res, Err(GardenError::InvalidTimeStep(_))),
            "step {step} should be rejected"
        );
    }
}

#[test]
fn idle_until_first_tick_then_running() {
    let mut animator = Animator::with_default_step(ProbeScene::default());
    assert_eq!(animator.state(), DriverState::Idle);
    assert_eq!(animator.frames(), 0);
    assert_eq!(animator.time(), 0.0);

    let mut surface = Recorder::new(10.0, 10.0);
    animator.tick(&mut surface);
    assert_eq!(animator.state(), DriverState::Running);
    assert_eq!(animator.frames(), 1);
    assert_eq!(surface.commands(), &[DrawCommand::Fill]);
}

#[test]
fn time_advances_by_a_constant_step_and_never_resets() {
    let step = 0.01;
    let mut animator = Animator::new(ProbeScene::default(), step).unwrap();
    let mut surface = Recorder::new(10.0, 10.0);
    for _ in 0..10_000 {
        animator.tick(&mut surface);
    }
    let times = &animator.scene().times;
    assert_eq!(times.len(), 10_000);
    assert_eq!(times[0], 0.0);
    for pair in times.windows(2) {
        assert!(pair[1] > pair[0], "time went backwards: {pair:?}");
        assert!((pair[1] - pair[0] - step).abs() < 1e-9);
    }
    assert!((animator.time() - 100.0).abs() < 1e-9);
}

#[test]
fn default_step_matches_constant() {
    let animator = Animator::with_default_step(ProbeScene::default());
    assert_eq!(animator.step(), DEFAULT_TIME_STEP);
}
