use myhard::app::{App, NavigationAction};
use myhard::config::AppConfig;
use ratatui::{backend::TestBackend, Terminal};
use std::time::{Duration, Instant};

#[test]
fn test_app_startup_time() {
    let start = Instant::now();
    let app = App::new(AppConfig::default());
    assert!(app.start_screen().is_some());
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[test]
fn test_animation_frame_render_cost() {
    // Generous bound so unoptimised test builds pass too
    let budget = Duration::from_millis(50);
    let mut app = App::new(AppConfig::default());
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("test backend");

    let now = Instant::now();
    app.handle_action(NavigationAction::Activate, now);

    // Render a whole tween's worth of frames and check the average cost
    let frames = 31u32;
    let started = Instant::now();
    for frame in 0..frames {
        let at = now + Duration::from_millis(frame as u64 * 16);
        terminal.draw(|f| app.render(f, at)).expect("draw");
    }
    let per_frame = started.elapsed() / frames;
    assert!(per_frame < budget, "frame took {:?}", per_frame);
}
