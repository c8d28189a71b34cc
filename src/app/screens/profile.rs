//! Profile screen implementation
//!
//! Read-only profile card: heading, round avatar, name and presence status.

use crate::app::state::{NavigationAction, ScreenId};
use crate::ui::{
    resources::{resolve, Icon, IconId},
    theme::Theme,
    widgets::{self, text_line, Button, FocusRing, HitAreas, BUTTON_HEIGHT},
};
use ratatui::{style::Style, widgets::Block, Frame};

pub const HEADING: &str = "User profile";
pub const NAME: &str = "Elena Karpilenko";
pub const STATUS: &str = "Online";
pub const EDIT_PROFILE: &str = "Edit profile";

const EDIT_BUTTON: usize = 0;

/// Profile screen component
#[derive(Debug)]
pub struct ProfileScreen {
    avatar: Icon,
    focus: FocusRing,
    hit_areas: HitAreas,
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self {
            avatar: resolve(IconId::Avatar),
            focus: FocusRing::new(1, EDIT_BUTTON),
            hit_areas: HitAreas::new(),
        }
    }

    /// Handle input. Returns the screen to navigate to, if any.
    pub fn handle_action(&mut self, action: NavigationAction) -> Option<ScreenId> {
        let pressed = match action {
            NavigationAction::Activate => self.focus.is_focused(EDIT_BUTTON),
            NavigationAction::Click { column, row } => {
                self.hit_areas.hit(column, row) == Some(EDIT_BUTTON)
            }
            _ => false,
        };
        pressed.then_some(ScreenId::EditProfile)
    }

    /// Render the profile screen
    pub fn render(&mut self, f: &mut Frame, theme: &Theme) {
        let size = f.size();
        f.render_widget(Block::default().style(theme.surface()), size);

        let (_, avatar_height) = self.avatar.size_at(1.0);
        let rows = widgets::column(
            size,
            &[
                1,             // Heading
                1,             // Gap
                avatar_height, // Avatar
                1,             // Gap
                1,             // Name
                1,             // Gap
                1,             // Status
                1,             // Gap
                BUTTON_HEIGHT, // Edit button
            ],
        );
        self.hit_areas.clear();

        f.render_widget(text_line(HEADING, theme.headline()), rows[0]);
        f.render_widget(
            self.avatar.view(
                1.0,
                Style::default()
                    .fg(theme.primary.to_color())
                    .bg(theme.background.to_color()),
            ),
            rows[2],
        );
        f.render_widget(text_line(NAME, theme.title()), rows[4]);
        f.render_widget(
            text_line(STATUS, theme.body().fg(theme.positive.to_color())),
            rows[6],
        );

        let button = Button::new(EDIT_PROFILE, theme).focused(self.focus.is_focused(EDIT_BUTTON));
        self.hit_areas.record(button.footprint(rows[8]), EDIT_BUTTON);
        f.render_widget(button, rows[8]);
    }
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}
