//! Main application controller
//!
//! Root composition: owns the router and the mounted screen, feeds input
//! to the screen, applies the navigation it asks for, and drives the
//! render loop.

use crate::{
    animation::Tween,
    app::{
        screens::{Screen, StartScreen},
        state::{NavigationAction, Router, ScreenId},
        tui::Tui,
    },
    config::AppConfig,
    ui::theme::Theme,
    MyHardError, Result,
};
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::Frame;
use std::time::Instant;
use tokio::time::{self, MissedTickBehavior};

/// TUI application controller
pub struct App {
    /// Application config
    config: AppConfig,
    theme: Theme,
    tween: Tween,
    /// Navigation back-stack
    router: Router,
    /// State of the screen on top of the stack
    screen: Screen,
    /// The last frame drawn may show a value still in motion
    stale_frame: bool,
}

impl App {
    /// Create a new application instance on the start screen
    pub fn new(config: AppConfig) -> Self {
        let theme = Theme::new(config.theme);
        let tween = config.animation.tween();
        let router = Router::new();
        let screen = Screen::mount(router.current(), tween, &theme, Instant::now());
        Self {
            config,
            theme,
            tween,
            router,
            screen,
            stale_frame: false,
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn current_screen(&self) -> ScreenId {
        self.router.current()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The start screen's state, when it is mounted
    pub fn start_screen(&self) -> Option<&StartScreen> {
        match &self.screen {
            Screen::Start(screen) => Some(screen),
            _ => None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.router.should_quit()
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.screen.is_animating(now)
    }

    /// Apply one input action
    pub fn handle_action(&mut self, action: NavigationAction, now: Instant) {
        match action {
            NavigationAction::None => {}
            NavigationAction::Quit => self.router.quit(),
            NavigationAction::Back => {
                self.router.handle_back();
                self.remount(now);
            }
            other => {
                if let Some(target) = self.screen.handle_action(other, now) {
                    self.router.navigate(target);
                    self.remount(now);
                }
            }
        }
        self.stale_frame = self.is_animating(now);
    }

    /// Frame tick. Returns whether to redraw: every tick while something
    /// moves, plus the first tick after it settles so the rest values land
    /// on screen.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let animating = self.is_animating(now);
        let redraw = animating || self.stale_frame;
        self.stale_frame = animating;
        redraw
    }

    /// Every stack change shows a new entry, so screen state starts fresh
    fn remount(&mut self, now: Instant) {
        if self.router.should_quit() {
            return;
        }
        self.screen = Screen::mount(self.router.current(), self.tween, &self.theme, now);
        tracing::debug!(screen = %self.router.current(), depth = self.router.depth(), "mounted");
    }

    /// Draw the current screen
    pub fn render(&mut self, f: &mut Frame, now: Instant) {
        self.screen.render(f, &self.theme, now);
    }

    /// Run the main application loop until quit
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        // A zero frame interval would panic in the ticker
        self.config.validate()?;
        let mut events = EventStream::new();
        let mut frames = time::interval(self.config.frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tracing::info!(screen = %self.router.current(), "application started");
        tui.draw(|f| self.render(f, Instant::now()))?;

        while !self.should_quit() {
            let redraw = tokio::select! {
                biased;

                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => {
                        let action = Router::event_to_navigation(&event);
                        self.handle_action(action, Instant::now());
                        true
                    }
                    Some(Err(err)) => {
                        return Err(MyHardError::TuiError(format!("Failed to read input: {}", err)));
                    }
                    None => {
                        tracing::warn!("input stream closed");
                        self.router.quit();
                        false
                    }
                },

                _ = frames.tick() => self.on_tick(Instant::now()),
            };

            if redraw && !self.should_quit() {
                tui.draw(|f| self.render(f, Instant::now()))?;
            }
        }

        tracing::info!(depth = self.router.depth(), "application exiting");
        Ok(())
    }
}
