//! Drawing surface abstraction.
//!
//! Shape routines talk to a [`Surface`] with canvas-2D-shaped operations.
//! The web frontend backs it with `CanvasRenderingContext2d`; tests and the
//! native runner use [`Recorder`], which keeps every call as a
//! [`DrawCommand`] so frames can be compared and counted.

use crate::color::Rgba;
use glam::DVec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba,
}

pub type ColorStops = SmallVec<[ColorStop; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub enum Gradient {
    Linear {
        from: DVec2,
        to: DVec2,
        stops: ColorStops,
    },
    Radial {
        inner: DVec2,
        inner_radius: f64,
        outer: DVec2,
        outer_radius: f64,
        stops: ColorStops,
    },
}

impl Gradient {
    pub fn linear(from: DVec2, to: DVec2, stops: impl IntoIterator<Item = (f64, Rgba)>) -> Self {
        Self::Linear {
            from,
            to,
            stops: collect_stops(stops),
        }
    }

    pub fn radial(
        inner: DVec2,
        inner_radius: f64,
        outer: DVec2,
        outer_radius: f64,
        stops: impl IntoIterator<Item = (f64, Rgba)>,
    ) -> Self {
        Self::Radial {
            inner,
            inner_radius,
            outer,
            outer_radius,
            stops: collect_stops(stops),
        }
    }

    pub fn stops(&self) -> &[ColorStop] {
        match self {
            Gradient::Linear { stops, .. } | Gradient::Radial { stops, .. } => stops,
        }
    }
}

fn collect_stops(stops: impl IntoIterator<Item = (f64, Rgba)>) -> ColorStops {
    stops
        .into_iter()
        .map(|(offset, color)| ColorStop { offset, color })
        .collect()
}

/// Fill or stroke style.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Gradient(Gradient),
}

impl From<Rgba> for Paint {
    fn from(c: Rgba) -> Self {
        Paint::Solid(c)
    }
}

impl From<Gradient> for Paint {
    fn from(g: Gradient) -> Self {
        Paint::Gradient(g)
    }
}

/// Vector drawing target. Angles are radians, coordinates are surface
/// pixels in the current transform.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: DVec2);
    fn rotate(&mut self, angle: f64);

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, p: DVec2);
    fn bezier_curve_to(&mut self, c1: DVec2, c2: DVec2, p: DVec2);
    fn quadratic_curve_to(&mut self, c: DVec2, p: DVec2);
    fn arc(&mut self, center: DVec2, radius: f64, start: f64, end: f64);
    fn ellipse(&mut self, center: DVec2, radii: DVec2, rotation: f64, start: f64, end: f64);

    fn clear_rect(&mut self, origin: DVec2, size: DVec2);
    fn fill_rect(&mut self, origin: DVec2, size: DVec2);
    fn fill(&mut self);
    fn stroke(&mut self);

    fn set_fill(&mut self, paint: &Paint);
    fn set_stroke(&mut self, paint: &Paint);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_line_width(&mut self, width: f64);
}

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate(DVec2),
    Rotate(f64),
    BeginPath,
    ClosePath,
    MoveTo(DVec2),
    BezierCurveTo(DVec2, DVec2, DVec2),
    QuadraticCurveTo(DVec2, DVec2),
    Arc {
        center: DVec2,
        radius: f64,
        start: f64,
        end: f64,
    },
    Ellipse {
        center: DVec2,
        radii: DVec2,
        rotation: f64,
        start: f64,
        end: f64,
    },
    ClearRect(DVec2, DVec2),
    FillRect(DVec2, DVec2),
    Fill,
    Stroke,
    SetFill(Paint),
    SetStroke(Paint),
    SetGlobalAlpha(f64),
    SetLineWidth(f64),
}

/// Headless surface that records every call in order.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Hand back the recorded frame and start a fresh one.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(*c)).count()
    }

    #[inline]
    fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }
}

impl Surface for Recorder {
    fn width(&self) -> f64 {
        self.width
    }
    fn height(&self) -> f64 {
        self.height
    }

    fn save(&mut self) {
        self.push(DrawCommand::Save);
    }
    fn restore(&mut self) {
        self.push(DrawCommand::Restore);
    }
    fn translate(&mut self, offset: DVec2) {
        self.push(DrawCommand::Translate(offset));
    }
    fn rotate(&mut self, angle: f64) {
        self.push(DrawCommand::Rotate(angle));
    }

    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }
    fn close_path(&mut self) {
        self.push(DrawCommand::ClosePath);
    }
    fn move_to(&mut self, p: DVec2) {
        self.push(DrawCommand::MoveTo(p));
    }
    fn bezier_curve_to(&mut self, c1: DVec2, c2: DVec2, p: DVec2) {
        self.push(DrawCommand::BezierCurveTo(c1, c2, p));
    }
    fn quadratic_curve_to(&mut self, c: DVec2, p: DVec2) {
        self.push(DrawCommand::QuadraticCurveTo(c, p));
    }
    fn arc(&mut self, center: DVec2, radius: f64, start: f64, end: f64) {
        self.push(DrawCommand::Arc {
            center,
            radius,
            start,
            end,
        });
    }
    fn ellipse(&mut self, center: DVec2, radii: DVec2, rotation: f64, start: f64, end: f64) {
        self.push(DrawCommand::Ellipse {
            center,
            radii,
            rotation,
            start,
            end,
        });
    }

    fn clear_rect(&mut self, origin: DVec2, size: DVec2) {
        self.push(DrawCommand::ClearRect(origin, size));
    }
    fn fill_rect(&mut self, origin: DVec2, size: DVec2) {
        self.push(DrawCommand::FillRect(origin, size));
    }
    fn fill(&mut self) {
        self.push(DrawCommand::Fill);
    }
    fn stroke(&mut self) {
        self.push(DrawCommand::Stroke);
    }

    fn set_fill(&mut self, paint: &Paint) {
        self.push(DrawCommand::SetFill(paint.clone()));
    }
    fn set_stroke(&mut self, paint: &Paint) {
        self.push(DrawCommand::SetStroke(paint.clone()));
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        self.push(DrawCommand::SetGlobalAlpha(alpha));
    }
    fn set_line_width(&mut self, width: f64) {
        self.push(DrawCommand::SetLineWidth(width));
    }
}
