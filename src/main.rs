use myhard::app::{tui, App, Tui};
use myhard::config::AppConfig;
use myhard::{error, logging, Result};
use std::io::IsTerminal;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let result = run().await;
    if let Err(err) = &result {
        tracing::error!("{}", err);
        eprintln!("{}", error::user_friendly_message(err));
    }
    result
}

async fn run() -> Result<()> {
    let config = AppConfig::load()?;
    logging::init(&config.log_file_path())?;

    if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
        return Err(myhard::MyHardError::TuiError(
            "myhard requires an interactive terminal (TTY)".to_string(),
        ));
    }

    tui::install_panic_hook();
    let mut tui = Tui::new()?;
    tui.init(config.mouse)?;

    let mut app = App::new(config);
    let outcome = app.run(&mut tui).await;
    tui.restore()?;
    outcome
}
