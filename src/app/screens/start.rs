//! Start screen implementation
//!
//! Welcome heading, a heart icon that toggles a "liked" flag when tapped,
//! and a button to the profile. Every toggle retargets three animations:
//! icon scale, icon tint and heading opacity.

use crate::animation::{Animated, Tween};
use crate::app::state::{NavigationAction, ScreenId};
use crate::ui::{
    resources::{centered, resolve, Icon, IconId},
    theme::{Rgb, Theme},
    widgets::{self, text_line, Button, FocusRing, HitAreas, BUTTON_HEIGHT},
};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::Block,
    Frame,
};
use std::time::Instant;

pub const WELCOME: &str = "Welcome!";
pub const GO_TO_PROFILE: &str = "Go to profile";
/// Accessibility label of the icon when not liked
pub const LIKE: &str = "Like";
/// Accessibility label of the icon when liked
pub const LIKED: &str = "Liked";

pub const IDLE_SCALE: f32 = 1.0;
pub const LIKED_SCALE: f32 = 1.5;
pub const IDLE_TEXT_ALPHA: f32 = 0.6;
pub const LIKED_TEXT_ALPHA: f32 = 1.0;

/// Focusable widgets, in focus order
const ICON: usize = 0;
const PROFILE_BUTTON: usize = 1;
const WIDGET_COUNT: usize = 2;

/// Rows reserved for the icon: its height at the largest scale
const ICON_SLOT_HEIGHT: u16 = 11;

/// Padding around the unscaled icon that still counts as a tap on it
const ICON_PADDING_X: u16 = 2;
const ICON_PADDING_Y: u16 = 1;

/// Sampled values of the like animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LikeValues {
    pub scale: f32,
    pub tint: Rgb,
    pub text_alpha: f32,
}

/// Start screen component
#[derive(Debug)]
pub struct StartScreen {
    liked: bool,
    scale: Animated<f32>,
    tint: Animated<Rgb>,
    text_alpha: Animated<f32>,
    /// Tint at rest for (not liked, liked)
    palette: (Rgb, Rgb),
    icon: Icon,
    focus: FocusRing,
    hit_areas: HitAreas,
}

impl StartScreen {
    /// Create a new start screen, not liked and at rest
    pub fn new(tween: Tween, theme: &Theme, now: Instant) -> Self {
        let palette = (theme.like_inactive, theme.like_active);
        Self {
            liked: false,
            scale: Animated::new(IDLE_SCALE, tween, now),
            tint: Animated::new(palette.0, tween, now),
            text_alpha: Animated::new(IDLE_TEXT_ALPHA, tween, now),
            palette,
            icon: resolve(IconId::Heart),
            focus: FocusRing::new(WIDGET_COUNT, ICON),
            hit_areas: HitAreas::new(),
        }
    }

    pub fn is_liked(&self) -> bool {
        self.liked
    }

    /// Label announced for the icon
    pub fn content_description(&self) -> &'static str {
        if self.liked {
            LIKED
        } else {
            LIKE
        }
    }

    /// Values the animations settle on for a given flag
    pub fn rest_values(&self, liked: bool) -> LikeValues {
        if liked {
            LikeValues {
                scale: LIKED_SCALE,
                tint: self.palette.1,
                text_alpha: LIKED_TEXT_ALPHA,
            }
        } else {
            LikeValues {
                scale: IDLE_SCALE,
                tint: self.palette.0,
                text_alpha: IDLE_TEXT_ALPHA,
            }
        }
    }

    /// Flip the flag and send every animation toward its new target
    pub fn toggle_like(&mut self, now: Instant) {
        self.liked = !self.liked;
        let target = self.rest_values(self.liked);
        self.scale.animate_to(target.scale, now);
        self.tint.animate_to(target.tint, now);
        self.text_alpha.animate_to(target.text_alpha, now);
        tracing::info!(liked = self.liked, "like toggled");
    }

    /// Displayed values at `now`
    pub fn values_at(&self, now: Instant) -> LikeValues {
        LikeValues {
            scale: self.scale.value_at(now),
            tint: self.tint.value_at(now),
            text_alpha: self.text_alpha.value_at(now),
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.scale.is_running(now) || self.tint.is_running(now) || self.text_alpha.is_running(now)
    }

    pub fn focused_widget(&self) -> usize {
        self.focus.index()
    }

    /// Handle input. Returns the screen to navigate to, if any.
    pub fn handle_action(&mut self, action: NavigationAction, now: Instant) -> Option<ScreenId> {
        match action {
            NavigationAction::FocusNext => self.focus.next(),
            NavigationAction::FocusPrevious => self.focus.previous(),
            NavigationAction::Activate => return self.activate(self.focus.index(), now),
            NavigationAction::Click { column, row } => {
                if let Some(widget) = self.hit_areas.hit(column, row) {
                    self.focus.focus(widget);
                    return self.activate(widget, now);
                }
            }
            _ => {}
        }
        None
    }

    fn activate(&mut self, widget: usize, now: Instant) -> Option<ScreenId> {
        match widget {
            ICON => {
                self.toggle_like(now);
                None
            }
            PROFILE_BUTTON => Some(ScreenId::Profile),
            _ => None,
        }
    }

    /// Tappable area of the icon within `slot`. Scaling only changes how the
    /// heart is drawn; the target stays the padded unscaled footprint.
    fn icon_touch_target(&self, slot: Rect) -> Rect {
        let (width, height) = self.icon.size_at(IDLE_SCALE);
        let base = centered(slot, width, height);
        Rect {
            x: base.x.saturating_sub(ICON_PADDING_X),
            y: base.y.saturating_sub(ICON_PADDING_Y),
            width: base.width + 2 * ICON_PADDING_X,
            height: base.height + 2 * ICON_PADDING_Y,
        }
        .intersection(slot)
    }

    /// Render the start screen
    pub fn render(&mut self, f: &mut Frame, theme: &Theme, now: Instant) {
        let size = f.size();
        f.render_widget(Block::default().style(theme.surface()), size);

        let rows = widgets::column(
            size,
            &[
                1,                // Heading
                1,                // Gap
                ICON_SLOT_HEIGHT, // Icon
                1,                // Icon label
                2,                // Gap
                BUTTON_HEIGHT,    // Profile button
            ],
        );
        self.hit_areas.clear();
        let values = self.values_at(now);

        // Heading fades by blending into the background
        let heading = theme.on_background.over(theme.background, values.text_alpha);
        f.render_widget(
            text_line(WELCOME, theme.headline().fg(heading.to_color())),
            rows[0],
        );

        let icon = self.icon.view(
            values.scale,
            Style::default()
                .fg(values.tint.to_color())
                .bg(theme.background.to_color()),
        );
        self.hit_areas.record(self.icon_touch_target(rows[2]), ICON);
        f.render_widget(icon, rows[2]);

        let label_style = if self.focus.is_focused(ICON) {
            theme
                .body()
                .fg(theme.focus.to_color())
                .add_modifier(Modifier::UNDERLINED)
        } else {
            theme.body().fg(theme.muted.to_color())
        };
        f.render_widget(text_line(self.content_description(), label_style), rows[3]);

        let button = Button::new(GO_TO_PROFILE, theme).focused(self.focus.is_focused(PROFILE_BUTTON));
        self.hit_areas.record(button.footprint(rows[5]), PROFILE_BUTTON);
        f.render_widget(button, rows[5]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Easing;
    use crate::app::screens::test_support::{draw, screen_text};
    use std::time::Duration;

    fn tween() -> Tween {
        Tween::new(Duration::from_millis(500), Easing::FastOutSlowIn)
    }

    fn settled(now: Instant) -> Instant {
        now + Duration::from_millis(500)
    }

    #[test]
    fn test_start_screen_creation() {
        let now = Instant::now();
        let screen = StartScreen::new(tween(), &Theme::dark(), now);
        assert!(!screen.is_liked());
        assert_eq!(screen.focused_widget(), ICON);
        assert_eq!(screen.content_description(), LIKE);

        let values = screen.values_at(now);
        assert_eq!(values.scale, 1.0);
        assert_eq!(values.tint, Rgb::GRAY);
        assert_eq!(values.text_alpha, 0.6);
        assert!(!screen.is_animating(now));
    }

    #[test]
    fn test_toggle_parity() {
        let now = Instant::now();
        let mut screen = StartScreen::new(tween(), &Theme::dark(), now);
        for taps in 1..=9 {
            screen.toggle_like(now);
            assert_eq!(screen.is_liked(), taps % 2 == 1, "after {} taps", taps);
        }
    }

    #[test]
    fn test_single_tap_settles_liked() {
        let now = Instant::now();
        let mut screen = StartScreen::new(tween(), &Theme::dark(), now);
        screen.toggle_like(now);

        assert!(screen.is_animating(now + Duration::from_millis(100)));
        let values = screen.values_at(settled(now));
        assert_eq!(values.scale, 1.5);
        assert_eq!(values.tint, Rgb::RED);
        assert_eq!(values.text_alpha, 1.0);
        assert_eq!(screen.content_description(), LIKED);
        assert!(!screen.is_animating(settled(now)));
    }

    #[test]
    fn test_double_tap_returns_to_rest() {
        let now = Instant::now();
        let mut screen = StartScreen::new(tween(), &Theme::dark(), now);
        screen.toggle_like(now);
        let second = now + Duration::from_millis(50);
        screen.toggle_like(second);

        assert!(!screen.is_liked());
        assert_eq!(screen.values_at(settled(second)), screen.rest_values(false));
    }

    #[test]
    fn test_values_in_motion_stay_between_targets() {
        let now = Instant::now();
        let mut screen = StartScreen::new(tween(), &Theme::dark(), now);
        screen.toggle_like(now);

        for ms in [1u64, 100, 250, 400, 499] {
            let v = screen.values_at(now + Duration::from_millis(ms));
            assert!(v.scale >= 1.0 && v.scale <= 1.5, "scale {} at {}ms", v.scale, ms);
            assert!(v.text_alpha >= 0.6 && v.text_alpha <= 1.0);
            assert!(v.tint.0 >= 0x88);
            assert!(v.tint.1 <= 0x88 && v.tint.2 <= 0x88);
        }
    }

    #[test]
    fn test_keyboard_activation() {
        let now = Instant::now();
        let mut screen = StartScreen::new(tween(), &Theme::dark(), now);

        // Icon has focus first
        assert_eq!(screen.handle_action(NavigationAction::Activate, now), None);
        assert!(screen.is_liked());

        screen.handle_action(NavigationAction::FocusNext, now);
        assert_eq!(
            screen.handle_action(NavigationAction::Activate, now),
            Some(ScreenId::Profile)
        );
        // Pressing the button leaves the flag alone
        assert!(screen.is_liked());
    }

    #[test]
    fn test_render_shows_texts() {
        let now = Instant::now();
        let theme = Theme::dark();
        let mut screen = StartScreen::new(tween(), &theme, now);
        let buffer = draw(60, 30, |f| screen.render(f, &theme, now));
        let text = screen_text(&buffer);

        assert!(text.contains(WELCOME));
        assert!(text.contains(LIKE));
        assert!(text.contains(GO_TO_PROFILE));
        assert!(text.contains('█'));
    }

    #[test]
    fn test_click_on_icon_and_button() {
        let now = Instant::now();
        let theme = Theme::dark();
        let mut screen = StartScreen::new(tween(), &theme, now);
        draw(60, 30, |f| screen.render(f, &theme, now));

        let icon = screen.hit_areas.area_of(ICON).expect("icon rendered");
        let tap = NavigationAction::Click {
            column: icon.x + icon.width / 2,
            row: icon.y + icon.height / 2,
        };
        assert_eq!(screen.handle_action(tap, now), None);
        assert!(screen.is_liked());

        let button = screen.hit_areas.area_of(PROFILE_BUTTON).expect("button rendered");
        let press = NavigationAction::Click {
            column: button.x + 1,
            row: button.y + 1,
        };
        assert_eq!(screen.handle_action(press, now), Some(ScreenId::Profile));
        assert_eq!(screen.focused_widget(), PROFILE_BUTTON);

        // Empty space does nothing
        let miss = NavigationAction::Click { column: 0, row: 0 };
        assert_eq!(screen.handle_action(miss, now), None);
        assert!(screen.is_liked());
    }

    /// Rows of the buffer with at least one heart cell
    fn heart_rows(buffer: &ratatui::buffer::Buffer) -> usize {
        screen_text(buffer)
            .lines()
            .filter(|line| line.contains('█'))
            .count()
    }

    #[test]
    fn test_icon_grows_on_screen() {
        let now = Instant::now();
        let theme = Theme::dark();
        let mut screen = StartScreen::new(tween(), &theme, now);
        let small = heart_rows(&draw(60, 30, |f| screen.render(f, &theme, now)));

        screen.toggle_like(now);
        let later = settled(now);
        let large = heart_rows(&draw(60, 30, |f| screen.render(f, &theme, later)));

        assert!(small > 0 && small <= 7, "{} rows", small);
        assert!(large > small && large <= 11, "{} rows", large);
    }

    #[test]
    fn test_touch_target_ignores_scale() {
        let now = Instant::now();
        let theme = Theme::dark();
        let mut screen = StartScreen::new(tween(), &theme, now);
        draw(60, 30, |f| screen.render(f, &theme, now));
        let idle = screen.hit_areas.area_of(ICON).expect("icon rendered");
        // 14x7 heart plus padding
        assert_eq!((idle.width, idle.height), (18, 9));

        // The padding corner is part of the target
        let corner = NavigationAction::Click {
            column: idle.x,
            row: idle.y,
        };
        assert_eq!(screen.handle_action(corner, now), None);
        assert!(screen.is_liked());

        let later = settled(now);
        draw(60, 30, |f| screen.render(f, &theme, later));
        let liked = screen.hit_areas.area_of(ICON).expect("icon rendered");
        assert_eq!(liked, idle);

        // The enlarged heart overhangs its target; taps there miss
        assert!(screen.icon.size_at(LIKED_SCALE).0 > liked.width);
        let overhang = NavigationAction::Click {
            column: liked.x - 1,
            row: liked.y,
        };
        assert_eq!(screen.handle_action(overhang, later), None);
        assert!(screen.is_liked());
    }
}
