use std::path::PathBuf;
use thiserror::Error;

/// Resolved run configuration for the headless driver.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub rounds: usize,
    pub seed: u64,
    pub turn_seconds: u8,
    pub bot_delay_ticks: u8,
    pub telemetry_path: Option<PathBuf>,
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.rounds == 0 {
            return Err(ValidationError::NoRounds);
        }
        if self.turn_seconds == 0 {
            return Err(ValidationError::ZeroTurnSeconds);
        }
        if self.bot_delay_ticks >= self.turn_seconds {
            return Err(ValidationError::BotDelayExceedsTurn {
                delay: self.bot_delay_ticks,
                turn: self.turn_seconds,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("rounds must be at least 1")]
    NoRounds,
    #[error("turn length must be at least 1 time unit")]
    ZeroTurnSeconds,
    #[error("bot delay of {delay} ticks would outlast the {turn}-unit turn countdown")]
    BotDelayExceedsTurn { delay: u8, turn: u8 },
}
