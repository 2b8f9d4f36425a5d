//! Model constants and default tuning.

/// Tick duration. Derivative and guidance functions take `dt`
/// explicitly; the engine always passes this value.
pub const DT: f64 = 1.0;

/// Default navigation gain N for the proportional laws
/// (dimensionless, conventionally 3-5).
pub const NAV_GAIN_DEFAULT: f64 = 3.0;

// --- Body defaults ---

/// Default declared speed cap (world units per tick). Advisory only:
/// no core operation enforces it.
pub const DEFAULT_MAX_SPEED: f64 = 10.0;

/// Default per-tick turn rate limit (degrees).
pub const DEFAULT_TURN_RATE_DEG: f64 = 1.0;

/// Default collision/drawing radius (world units). Inert to the
/// guidance math.
pub const DEFAULT_RADIUS: f64 = 2.0;

// --- Prey evasion defaults ---

/// Ticks a drawn jink command is held before redrawing.
pub const EVASION_HOLD_TICKS: u32 = 50;

/// Maximum jink magnitude per tick (degrees).
pub const EVASION_MAX_TURN_DEG: f64 = 1.0;
