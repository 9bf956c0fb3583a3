use std::time::Duration;

use crate::config::Config;
use crate::error::Result;
use crate::practicum::PracticumClient;
use crate::response::{check_response, latest, EmptyPolicy};
use crate::status::parse_status;
use crate::telegram::TelegramNotifier;

pub const STARTUP_MESSAGE: &str = "Бот включен";

/// Last message sent for each kind. Only consecutive repeats are suppressed.
#[derive(Debug, Default)]
pub struct DedupState {
    last_status: String,
    last_error: String,
}

impl DedupState {
    /// Returns true and remembers `message` if it differs from the previous status.
    pub fn status_changed(&mut self, message: &str) -> bool {
        Self::replace_if_new(&mut self.last_status, message)
    }

    pub fn error_changed(&mut self, message: &str) -> bool {
        Self::replace_if_new(&mut self.last_error, message)
    }

    pub fn clear_error(&mut self) {
        self.last_error.clear();
    }

    fn replace_if_new(slot: &mut String, message: &str) -> bool {
        if slot.as_str() == message {
            return false;
        }
        message.clone_into(slot);
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    StatusSent,
    StatusRepeated,
    NothingNew,
    ErrorSent,
    ErrorRepeated,
}

pub struct Poller {
    client: PracticumClient,
    notifier: TelegramNotifier,
    empty_policy: EmptyPolicy,
    retry_period: Duration,
    from_date: i64,
    dedup: DedupState,
}

impl Poller {
    pub fn new(
        client: PracticumClient,
        notifier: TelegramNotifier,
        config: &Config,
        from_date: i64,
    ) -> Self {
        Self {
            client,
            notifier,
            empty_policy: config.empty_policy,
            retry_period: config.retry_period,
            from_date,
            dedup: DedupState::default(),
        }
    }

    /// Polls forever. Every cycle is followed by the retry period, whatever it produced.
    pub async fn run(mut self) {
        tracing::info!(
            retry_period_secs = self.retry_period.as_secs(),
            from_date = self.from_date,
            "Polling homework statuses"
        );
        loop {
            let outcome = self.run_cycle().await;
            tracing::debug!(?outcome, "Cycle finished");
            tokio::time::sleep(self.retry_period).await;
        }
    }

    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.check_homework().await {
            Ok(Some(message)) => {
                self.dedup.clear_error();
                if self.dedup.status_changed(&message) {
                    self.notifier.notify(&message).await;
                    CycleOutcome::StatusSent
                } else {
                    tracing::debug!(message = %message, "Status unchanged, not notifying");
                    CycleOutcome::StatusRepeated
                }
            }
            Ok(None) => {
                self.dedup.clear_error();
                tracing::debug!("No new statuses");
                CycleOutcome::NothingNew
            }
            Err(err) => {
                tracing::error!(error = %err, "Polling cycle failed");
                let message = format!("Сбой в работе программы: {err}");
                if self.dedup.error_changed(&message) {
                    self.notifier.notify(&message).await;
                    CycleOutcome::ErrorSent
                } else {
                    tracing::debug!(message = %message, "Same failure as last cycle, not notifying");
                    CycleOutcome::ErrorRepeated
                }
            }
        }
    }

    async fn check_homework(&mut self) -> Result<Option<String>> {
        let response = self.client.homework_statuses(self.from_date).await?;
        let homeworks = check_response(&response)?;
        let message = match latest(homeworks, self.empty_policy)? {
            Some(homework) => Some(parse_status(homework)?),
            None => None,
        };

        if let Some(current_date) = response.current_date() {
            self.from_date = current_date;
        }
        Ok(message)
    }
}
