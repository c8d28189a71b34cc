//! Presentation building blocks
//!
//! Theme tokens, icon resources and the small widget kit the screens are
//! composed from.

pub mod resources;
pub mod theme;
pub mod widgets;

pub use resources::{resolve, Icon, IconId};
pub use theme::{Rgb, Theme, ThemeKind};
pub use widgets::{Button, FocusRing, HitAreas};
