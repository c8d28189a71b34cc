//! Edit profile screen implementation
//!
//! Placeholder only: nothing here is editable yet.

use crate::app::state::{NavigationAction, ScreenId};
use crate::ui::{
    theme::Theme,
    widgets::{self, text_line, Button, FocusRing, HitAreas, BUTTON_HEIGHT},
};
use ratatui::{widgets::Block, Frame};

pub const HEADING: &str = "Editing profile";
pub const PLACEHOLDER: &str = "Editing will be added later.";
pub const BACK_TO_PROFILE: &str = "Back to profile";

const BACK_BUTTON: usize = 0;

/// Edit profile screen component
#[derive(Debug)]
pub struct EditProfileScreen {
    focus: FocusRing,
    hit_areas: HitAreas,
}

impl EditProfileScreen {
    pub fn new() -> Self {
        Self {
            focus: FocusRing::new(1, BACK_BUTTON),
            hit_areas: HitAreas::new(),
        }
    }

    /// Handle input. "Back to profile" navigates forward to a new profile
    /// entry; it does not pop the stack.
    pub fn handle_action(&mut self, action: NavigationAction) -> Option<ScreenId> {
        let pressed = match action {
            NavigationAction::Activate => self.focus.is_focused(BACK_BUTTON),
            NavigationAction::Click { column, row } => {
                self.hit_areas.hit(column, row) == Some(BACK_BUTTON)
            }
            _ => false,
        };
        pressed.then_some(ScreenId::Profile)
    }

    /// Render the edit profile screen
    pub fn render(&mut self, f: &mut Frame, theme: &Theme) {
        let size = f.size();
        f.render_widget(Block::default().style(theme.surface()), size);

        let rows = widgets::column(size, &[1, 1, 1, 1, BUTTON_HEIGHT]);
        self.hit_areas.clear();

        f.render_widget(text_line(HEADING, theme.headline()), rows[0]);
        f.render_widget(
            text_line(PLACEHOLDER, theme.body().fg(theme.muted.to_color())),
            rows[2],
        );

        let button = Button::new(BACK_TO_PROFILE, theme).focused(self.focus.is_focused(BACK_BUTTON));
        self.hit_areas.record(button.footprint(rows[4]), BACK_BUTTON);
        f.render_widget(button, rows[4]);
    }
}

impl Default for EditProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}
