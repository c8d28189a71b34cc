//! Application state management
//!
//! Holds the navigation back-stack and turns terminal input into
//! navigation actions for the TUI application.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::fmt;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    /// Welcome screen with the like icon
    Start,
    /// Read-only user profile
    Profile,
    /// Profile editing placeholder
    EditProfile,
}

impl Default for ScreenId {
    fn default() -> Self {
        Self::Start
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScreenId::Start => "start",
            ScreenId::Profile => "userProfile",
            ScreenId::EditProfile => "editProfile",
        };
        f.write_str(name)
    }
}

/// Navigation actions that can be triggered by keyboard or mouse input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Press the focused widget (Enter, Space)
    Activate,
    /// Focus the next widget (Tab, arrow down, j)
    FocusNext,
    /// Focus the previous widget (Shift+Tab, arrow up, k)
    FocusPrevious,
    /// Platform back (Esc, Backspace)
    Back,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// Left mouse button pressed on a cell
    Click { column: u16, row: u16 },
    /// No action
    None,
}

/// Stack-based router. The top of the stack is the current screen and the
/// stack is never empty.
#[derive(Debug)]
pub struct Router {
    stack: Vec<ScreenId>,
    should_quit: bool,
}

impl Router {
    /// Create a router on the start screen
    pub fn new() -> Self {
        Self::with_root(ScreenId::Start)
    }

    pub fn with_root(root: ScreenId) -> Self {
        Self {
            stack: vec![root],
            should_quit: false,
        }
    }

    /// Get the current screen
    pub fn current(&self) -> ScreenId {
        self.stack.last().copied().unwrap_or_default()
    }

    /// Screens from the root to the current one
    pub fn entries(&self) -> &[ScreenId] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Push a screen. Always pushes, even when `target` is already current.
    pub fn navigate(&mut self, target: ScreenId) {
        tracing::debug!(from = %self.current(), to = %target, depth = self.stack.len() + 1, "navigate");
        self.stack.push(target);
    }

    /// Pop the current screen. Returns false at the root, where nothing is popped.
    pub fn back(&mut self) -> bool {
        if self.can_go_back() {
            let left = self.stack.pop();
            tracing::debug!(left = ?left, to = %self.current(), "back");
            true
        } else {
            false
        }
    }

    /// Platform back: pop, or quit when already at the root
    pub fn handle_back(&mut self) {
        if !self.back() {
            tracing::info!("back pressed at root, quitting");
            self.quit();
        }
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            // Quit keys
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            // Focus movement
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::FocusNext,
            KeyCode::Up | KeyCode::Char('k') => NavigationAction::FocusPrevious,
            KeyCode::BackTab => NavigationAction::FocusPrevious,
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    NavigationAction::FocusPrevious
                } else {
                    NavigationAction::FocusNext
                }
            }

            // Activation
            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Activate,

            // Back
            KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

            _ => NavigationAction::None,
        }
    }

    /// Convert mouse event to navigation action
    pub fn mouse_to_navigation(mouse: MouseEvent) -> NavigationAction {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => NavigationAction::Click {
                column: mouse.column,
                row: mouse.row,
            },
            _ => NavigationAction::None,
        }
    }

    /// Convert any terminal event; only key presses count, not releases
    pub fn event_to_navigation(event: &Event) -> NavigationAction {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Self::key_to_navigation(*key),
            Event::Mouse(mouse) => Self::mouse_to_navigation(*mouse),
            _ => NavigationAction::None,
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_router_creation() {
        let router = Router::new();
        assert_eq!(router.current(), ScreenId::Start);
        assert_eq!(router.depth(), 1);
        assert!(!router.can_go_back());
        assert!(!router.should_quit());
    }

    #[test]
    fn test_navigate_pushes() {
        let mut router = Router::new();

        router.navigate(ScreenId::Profile);
        assert_eq!(router.current(), ScreenId::Profile);

        router.navigate(ScreenId::EditProfile);
        assert_eq!(router.current(), ScreenId::EditProfile);
        assert_eq!(
            router.entries(),
            &[ScreenId::Start, ScreenId::Profile, ScreenId::EditProfile]
        );
    }

    #[test]
    fn test_navigate_to_current_still_pushes() {
        let mut router = Router::new();
        router.navigate(ScreenId::Profile);
        router.navigate(ScreenId::Profile);
        assert_eq!(router.depth(), 3);
    }

    #[test]
    fn test_back() {
        let mut router = Router::new();
        router.navigate(ScreenId::Profile);

        assert!(router.back());
        assert_eq!(router.current(), ScreenId::Start);

        // Root is never popped
        assert!(!router.back());
        assert_eq!(router.current(), ScreenId::Start);
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_handle_back_quits_at_root() {
        let mut router = Router::new();
        router.navigate(ScreenId::Profile);

        router.handle_back();
        assert!(!router.should_quit());

        router.handle_back();
        assert!(router.should_quit());
        assert_eq!(router.current(), ScreenId::Start);
    }

    #[test]
    fn test_screen_id_display() {
        assert_eq!(ScreenId::Start.to_string(), "start");
        assert_eq!(ScreenId::Profile.to_string(), "userProfile");
        assert_eq!(ScreenId::EditProfile.to_string(), "editProfile");
    }

    #[test]
    fn test_key_to_navigation() {
        // Quit keys
        assert_eq!(Router::key_to_navigation(key(KeyCode::Char('q'))), NavigationAction::Quit);
        assert_eq!(Router::key_to_navigation(key(KeyCode::Char('Q'))), NavigationAction::Quit);
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            NavigationAction::Quit
        );
        assert_eq!(Router::key_to_navigation(key(KeyCode::Char('c'))), NavigationAction::None);

        // Focus keys
        assert_eq!(Router::key_to_navigation(key(KeyCode::Down)), NavigationAction::FocusNext);
        assert_eq!(Router::key_to_navigation(key(KeyCode::Char('j'))), NavigationAction::FocusNext);
        assert_eq!(Router::key_to_navigation(key(KeyCode::Tab)), NavigationAction::FocusNext);
        assert_eq!(Router::key_to_navigation(key(KeyCode::Up)), NavigationAction::FocusPrevious);
        assert_eq!(Router::key_to_navigation(key(KeyCode::BackTab)), NavigationAction::FocusPrevious);
        assert_eq!(
            Router::key_to_navigation(KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)),
            NavigationAction::FocusPrevious
        );

        // Activation and back
        assert_eq!(Router::key_to_navigation(key(KeyCode::Enter)), NavigationAction::Activate);
        assert_eq!(Router::key_to_navigation(key(KeyCode::Char(' '))), NavigationAction::Activate);
        assert_eq!(Router::key_to_navigation(key(KeyCode::Esc)), NavigationAction::Back);
        assert_eq!(Router::key_to_navigation(key(KeyCode::Backspace)), NavigationAction::Back);
    }

    #[test]
    fn test_mouse_to_navigation() {
        let down = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            Router::mouse_to_navigation(down),
            NavigationAction::Click { column: 12, row: 7 }
        );

        let right = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..down
        };
        assert_eq!(Router::mouse_to_navigation(right), NavigationAction::None);

        let moved = MouseEvent {
            kind: MouseEventKind::Moved,
            ..down
        };
        assert_eq!(Router::mouse_to_navigation(moved), NavigationAction::None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(
            Router::event_to_navigation(&Event::Key(release)),
            NavigationAction::None
        );
        assert_eq!(
            Router::event_to_navigation(&Event::Key(key(KeyCode::Enter))),
            NavigationAction::Activate
        );
        assert_eq!(
            Router::event_to_navigation(&Event::Resize(80, 24)),
            NavigationAction::None
        );
    }
}
