use std::env;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins when set; otherwise `LOG_LEVEL` applies to the bot and
/// dependencies only log warnings.
pub fn init_logging() {
    let level = env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = match env::var("RUST_LOG") {
        Ok(rust_log) => EnvFilter::new(rust_log),
        Err(_) => EnvFilter::new(format!("warn,homework_bot={level}")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
