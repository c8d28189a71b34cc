//! Animation module
//!
//! Time-based interpolation of displayed values. Nothing here owns a timer:
//! the render loop samples every animated value once per frame with the
//! current `Instant`.

pub mod animated;
pub mod easing;

pub use animated::{interpolate, Animated, Lerp, Tween};
pub use easing::Easing;

/// Default tween length for screen decorations
pub const DEFAULT_DURATION_MS: u64 = 500;
