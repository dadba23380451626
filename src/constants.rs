// Web front-end constants.

// DOM
pub const CANVAS_ID: &str = "c"; // <canvas id="c"> hosts either animation
pub const SCENE_ATTRIBUTE: &str = "data-scene"; // "bloom" (default) or "garden"
pub const CONTEXT_KIND: &str = "2d";

// Logging
pub const LOG_LEVEL: log::Level = log::Level::Info;
