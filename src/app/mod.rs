//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! and navigation state handling.

pub mod app;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::App;
pub use screens::{EditProfileScreen, ProfileScreen, Screen, StartScreen};
pub use state::{NavigationAction, Router, ScreenId};
pub use tui::Tui;
