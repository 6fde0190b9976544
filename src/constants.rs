//! Sizing and default-value constants for the picker.

/// Half-width of a slider handle in logical pixels. 1D tracks inset their
/// usable range by this much on both ends.
pub const HANDLE_RADIUS: f64 = 7.0;

/// Handle offset reported by inverse mappings while layout is unmeasured.
pub const DEFAULT_HANDLE_OFFSET: f64 = 7.0;

/// Default gradient angle in degrees.
pub const DEFAULT_ANGLE: u16 = 90;

/// Default z-index for the popup variant.
pub const DEFAULT_Z_INDEX: u32 = 10_000;
