//! Sence - A terminal coupon builder for yes/no prediction questions.

use sence::{App, Config, Result, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load_or_default()?;

    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init(&config.logging)?;

    // Run the application
    let mut app = App::new(config)?;
    app.run().await?;

    Ok(())
}
