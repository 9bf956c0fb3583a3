mod config;
mod error;
mod logger;
mod models;
mod poller;
mod practicum;
mod response;
mod status;
mod telegram;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::config::Config;
use crate::poller::{Poller, STARTUP_MESSAGE};
use crate::practicum::PracticumClient;
use crate::telegram::TelegramNotifier;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logger::init_logging();

    let config = Config::from_env()?;

    let client = PracticumClient::new(&config).context("Failed to initialize Practicum client")?;
    let notifier = TelegramNotifier::new(&config).context("Failed to initialize Telegram notifier")?;

    tracing::info!(endpoint = %config.endpoint, "Starting homework status bot");
    notifier.notify(STARTUP_MESSAGE).await;

    let from_date = Utc::now().timestamp();
    Poller::new(client, notifier, &config, from_date).run().await;
    Ok(())
}
