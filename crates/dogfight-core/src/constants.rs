//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 50;

/// Nominal milliseconds per tick.
pub const TICK_INTERVAL_MS: u64 = 1000 / TICK_RATE as u64;

/// Granularity of plane headings: direction values run 0..ROTATION_DIRECTIONS.
/// A left-facing runway spawns a plane already rotated half the circle.
pub const ROTATION_DIRECTIONS: u16 = 256;

// --- Takeoff ---

/// Lateral spawn offset from the runway position, negated when the
/// runway faces right.
pub const TAKEOFF_OFFSET_X: f64 = 100.0;

/// Spawn altitude above the runway.
pub const TAKEOFF_ALTITUDE: f64 = 10.0;

/// Initial speed margin over the plane's minimum flight speed.
pub const TAKEOFF_SPEED_MARGIN: f64 = 1.1;

// --- Health ---

/// Runway health when freshly placed. Health at or below zero makes a
/// runway unusable for takeoffs without removing it from the world.
pub const RUNWAY_HEALTH_MAX: i32 = 255;

/// Plane health at spawn.
pub const PLANE_HEALTH_MAX: i32 = 255;

/// Trooper health at spawn.
pub const TROOPER_HEALTH_MAX: i32 = 1;
