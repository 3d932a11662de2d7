//! Default gesture thresholds in logical pixels.

/// Horizontal travel required before a pan activates, in either direction.
///
/// Shorter movements stay with the surrounding list so vertical scrolling is
/// not hijacked by small sideways jitter.
pub const DEFAULT_ACTIVE_OFFSET_X: f32 = 20.0;

/// Number of simultaneous pointers a pan tolerates before it fails.
pub const DEFAULT_MAX_POINTERS: usize = 1;

/// Extra touch area beyond each horizontal edge that still starts a pan.
pub const DEFAULT_EDGE_HIT_SLOP: f32 = 20.0;
