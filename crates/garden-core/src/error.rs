use thiserror::Error;

/// Failures the animations can report. Everything else (zero-sized surfaces,
/// odd entity parameters) just draws degenerate shapes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GardenError {
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
    #[error("time step must be finite and positive, got {0}")]
    InvalidTimeStep(f64),
    #[error("unknown scene `{0}` (expected `bloom` or `garden`)")]
    UnknownScene(String),
}
