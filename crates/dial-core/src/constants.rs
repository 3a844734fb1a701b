// Construction defaults for a dial when an option is left out.

// Arc layout (degrees)
pub const DEFAULT_SPAN_ANGLE: f64 = 270.0; // total sweep of the active arc
pub const DEFAULT_OFFSET_ANGLE: f64 = 135.0; // arc start, clockwise from east

// Stroke and placement (surface pixels)
pub const DEFAULT_STROKE_WIDTH: f64 = 10.0;
pub const DEFAULT_RADIUS: f64 = 30.0;
pub const DEFAULT_OFFSET_TOP: f64 = 50.0;
pub const DEFAULT_OFFSET_LEFT: f64 = 50.0;

// Surface size
pub const DEFAULT_SURFACE_WIDTH: u32 = 100;
pub const DEFAULT_SURFACE_HEIGHT: u32 = 100;

// Palette
pub const DEFAULT_COLOR_ARC: &str = "#DDD"; // remaining track
pub const DEFAULT_COLOR_FILL: &str = "#000"; // filled portion
pub const DEFAULT_COLOR_TEXT: &str = "#000";
pub const DEFAULT_FONT: &str = "16px Arial";

// Largest sweep a single arc may cover without wrapping onto itself
pub const MAX_SPAN_ANGLE: f64 = 360.0;

// Cross-context reconciliation period (milliseconds)
pub const SYNC_PERIOD_MS: i32 = 100;
