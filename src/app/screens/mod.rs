//! TUI screen components
//!
//! Contains individual screen implementations and the [`Screen`] enum the
//! application mounts one of at a time.

pub mod edit_profile;
pub mod profile;
pub mod start;

pub use edit_profile::EditProfileScreen;
pub use profile::ProfileScreen;
pub use start::{LikeValues, StartScreen};

use crate::animation::Tween;
use crate::app::state::{NavigationAction, ScreenId};
use crate::ui::theme::Theme;
use ratatui::Frame;
use std::time::Instant;

/// The mounted screen with its screen-scoped state
#[derive(Debug)]
pub enum Screen {
    Start(StartScreen),
    Profile(ProfileScreen),
    EditProfile(EditProfileScreen),
}

impl Screen {
    /// Build fresh state for `id`
    pub fn mount(id: ScreenId, tween: Tween, theme: &Theme, now: Instant) -> Self {
        match id {
            ScreenId::Start => Screen::Start(StartScreen::new(tween, theme, now)),
            ScreenId::Profile => Screen::Profile(ProfileScreen::new()),
            ScreenId::EditProfile => Screen::EditProfile(EditProfileScreen::new()),
        }
    }

    pub fn id(&self) -> ScreenId {
        match self {
            Screen::Start(_) => ScreenId::Start,
            Screen::Profile(_) => ScreenId::Profile,
            Screen::EditProfile(_) => ScreenId::EditProfile,
        }
    }

    pub fn handle_action(&mut self, action: NavigationAction, now: Instant) -> Option<ScreenId> {
        match self {
            Screen::Start(screen) => screen.handle_action(action, now),
            Screen::Profile(screen) => screen.handle_action(action),
            Screen::EditProfile(screen) => screen.handle_action(action),
        }
    }

    pub fn render(&mut self, f: &mut Frame, theme: &Theme, now: Instant) {
        match self {
            Screen::Start(screen) => screen.render(f, theme, now),
            Screen::Profile(screen) => screen.render(f, theme),
            Screen::EditProfile(screen) => screen.render(f, theme),
        }
    }

    /// Whether the next frame differs from this one without any input
    pub fn is_animating(&self, now: Instant) -> bool {
        match self {
            Screen::Start(screen) => screen.is_animating(now),
            _ => false,
        }
    }
}
