//! Shape routines: pure mappings from entity parameters plus a motion value
//! to surface calls. Nothing is validated; odd inputs give odd drawings.

use crate::color::Rgba;
use crate::constants::*;
use crate::surface::{Gradient, Paint, Surface};
use glam::DVec2;
use std::f64::consts::TAU;

#[inline]
fn v(x: f64, y: f64) -> DVec2 {
    DVec2::new(x, y)
}

// ---------------- Bloom ----------------

fn petal_outline<S: Surface + ?Sized>(s: &mut S, breath: f64) {
    s.begin_path();
    s.move_to(v(0.0, 0.0));
    s.bezier_curve_to(
        v(-60.0 - breath * 6.0, -40.0),
        v(-120.0 - breath * 8.0, -200.0),
        v(-70.0, -380.0),
    );
    s.bezier_curve_to(v(-20.0, -450.0), v(20.0, -450.0), v(70.0, -380.0));
    s.bezier_curve_to(
        v(120.0 + breath * 8.0, -200.0),
        v(60.0 + breath * 6.0, -40.0),
        v(0.0, 0.0),
    );
    s.close_path();
}

/// One large petal anchored at `center`, pointing up before `rotation`.
pub fn petal<S: Surface + ?Sized>(s: &mut S, center: DVec2, rotation: f64, breath: f64) {
    s.save();
    s.translate(center);
    s.rotate(rotation + breath * PETAL_BREATH_ROTATION);

    petal_outline(s, breath);
    s.set_fill(&Gradient::linear(v(0.0, 0.0), v(0.0, -420.0), PETAL_STOPS).into());
    s.fill();

    // ribs drift with the breath at their tips
    s.set_global_alpha(PETAL_RIB_ALPHA);
    s.set_stroke(&Paint::Solid(Rgba::WHITE));
    for i in (-40..=40).step_by(10) {
        let x = i as f64;
        s.begin_path();
        s.move_to(v(x, -10.0));
        s.bezier_curve_to(
            v(x * 1.4, -150.0),
            v(x * 0.8, -270.0),
            v(x * 0.4 + breath * 2.0, -380.0),
        );
        s.stroke();
    }
    s.set_global_alpha(1.0);

    // the dark pass goes over the current path, which is the outermost rib
    s.set_stroke(&Paint::Solid(PETAL_OUTLINE));
    s.set_line_width(2.0);
    s.stroke();

    s.restore();
}

/// Dark heart of the bloom; grows slightly with the breath.
pub fn cavity<S: Surface + ?Sized>(s: &mut S, center: DVec2, breath: f64) {
    let heart = v(0.0, CAVITY_OFFSET_Y);
    s.save();
    s.translate(center);
    s.begin_path();
    s.arc(heart, CAVITY_RADIUS + breath * CAVITY_BREATH_GROWTH, 0.0, TAU);
    s.set_fill(
        &Gradient::radial(
            heart,
            10.0,
            heart,
            60.0,
            [(0.0, CAVITY_INNER), (1.0, CAVITY_OUTER)],
        )
        .into(),
    );
    s.fill();
    s.restore();
}

/// Water droplet with a shifting highlight and a soft contact shadow.
/// `shimmer` is the horizontal highlight offset in pixels.
pub fn droplet<S: Surface + ?Sized>(s: &mut S, pos: DVec2, radius: f64, shimmer: f64) {
    s.save();

    let highlight = v(pos.x - radius * 0.3 + shimmer, pos.y - radius * 0.3);
    s.set_fill(&Gradient::radial(highlight, radius * 0.2, pos, radius, DROPLET_STOPS).into());
    s.begin_path();
    s.arc(pos, radius, 0.0, TAU);
    s.fill();

    s.set_global_alpha(DROPLET_SHADOW_ALPHA);
    s.set_fill(&Paint::Solid(Rgba::BLACK));
    s.begin_path();
    s.ellipse(
        v(pos.x, pos.y + radius * 0.6),
        v(radius * 0.9, radius * 0.4),
        0.0,
        0.0,
        TAU,
    );
    s.fill();

    s.restore();
}

// ---------------- Garden ----------------

/// Sky above the horizon, ground below. Repaints the whole surface.
pub fn garden_background<S: Surface + ?Sized>(s: &mut S, size: DVec2) {
    let horizon = size.y * HORIZON;
    let sky = Gradient::linear(
        v(0.0, 0.0),
        v(0.0, horizon),
        [(0.0, SKY_TOP), (1.0, SKY_HORIZON)],
    );
    s.set_fill(&sky.into());
    s.fill_rect(v(0.0, 0.0), v(size.x, horizon));
    let ground = Gradient::linear(
        v(0.0, horizon),
        v(0.0, size.y),
        [(0.0, GROUND_FAR), (1.0, GROUND_NEAR)],
    );
    s.set_fill(&ground.into());
    s.fill_rect(v(0.0, horizon), v(size.x, size.y - horizon));
}

/// Blade-shaped leaf rooted at `base`.
pub fn leaf<S: Surface + ?Sized>(s: &mut S, base: DVec2, scale: f64, rotation: f64) {
    let len = LEAF_LENGTH * scale;
    let w = LEAF_WIDTH * scale;
    s.save();
    s.translate(base);
    s.rotate(rotation);

    s.begin_path();
    s.move_to(v(0.0, 0.0));
    s.bezier_curve_to(v(-w, -len * 0.3), v(-w * 0.8, -len * 0.75), v(0.0, -len));
    s.bezier_curve_to(v(w * 0.8, -len * 0.75), v(w, -len * 0.3), v(0.0, 0.0));
    s.close_path();
    let blade = Gradient::linear(v(0.0, 0.0), v(0.0, -len), [(0.0, LEAF_BASE), (1.0, LEAF_TIP)]);
    s.set_fill(&blade.into());
    s.fill();

    s.begin_path();
    s.move_to(v(0.0, 0.0));
    s.quadratic_curve_to(v(w * 0.15, -len * 0.5), v(0.0, -len * 0.9));
    s.set_stroke(&Paint::Solid(LEAF_VEIN));
    s.set_line_width(scale.max(0.0));
    s.stroke();

    s.restore();
}

/// Stemmed flower rooted at `base`. `sway` shifts the head sideways in
/// pixels; the stem bends to follow it.
pub fn flower<S: Surface + ?Sized>(
    s: &mut S,
    base: DVec2,
    scale: f64,
    colors: &[Rgba; 4],
    sway: f64,
) {
    let head = v(base.x + sway, base.y - STEM_HEIGHT * scale);

    s.begin_path();
    s.move_to(base);
    s.quadratic_curve_to(v(base.x + sway * 0.3, base.y - STEM_HEIGHT * scale * 0.5), head);
    s.set_stroke(&Paint::Solid(STEM_COLOR));
    s.set_line_width(2.0 * scale);
    s.stroke();

    let len = FLOWER_PETAL_LENGTH * scale;
    let w = FLOWER_PETAL_WIDTH * scale;
    let petal_paint: Paint = Gradient::radial(
        v(0.0, 0.0),
        0.0,
        v(0.0, 0.0),
        len,
        FLOWER_STOP_OFFSETS.into_iter().zip(colors.iter().copied()),
    )
    .into();

    s.save();
    s.translate(head);
    s.set_fill(&petal_paint);
    for _ in 0..FLOWER_PETALS {
        s.begin_path();
        s.move_to(v(0.0, 0.0));
        s.quadratic_curve_to(v(-w, -len * 0.55), v(0.0, -len));
        s.quadratic_curve_to(v(w, -len * 0.55), v(0.0, 0.0));
        s.close_path();
        s.fill();
        s.rotate(TAU / FLOWER_PETALS as f64);
    }
    s.begin_path();
    s.arc(v(0.0, 0.0), FLOWER_HEART_RADIUS * scale, 0.0, TAU);
    s.set_fill(&Paint::Solid(FLOWER_HEART));
    s.fill();
    s.restore();
}
