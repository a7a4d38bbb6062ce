use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, Validate};
use std::time::Duration;

#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Spawning more tasks than this is a configuration mistake, not a scenario.
const MAX_TASKS: usize = 1_000_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "gadget-points"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Concurrent loyalty-points accumulation demo")
)]
pub struct CliConfig {
    /// Number of concurrent accumulate tasks to dispatch.
    #[cfg_attr(feature = "cli", arg(long, default_value = "20"))]
    pub accumulate_tasks: usize,

    /// Number of concurrent redeem tasks to dispatch.
    #[cfg_attr(feature = "cli", arg(long, default_value = "2"))]
    pub redeem_tasks: usize,

    /// Bound the wait for the task batch, in seconds. Unset waits forever.
    #[cfg_attr(feature = "cli", arg(long))]
    pub timeout_secs: Option<u64>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    #[serde(default)]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        // The default demo scenario: 20 accumulates, 2 redeems.
        Self {
            accumulate_tasks: 20,
            redeem_tasks: 2,
            timeout_secs: None,
            verbose: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn accumulate_tasks(&self) -> usize {
        self.accumulate_tasks
    }

    fn redeem_tasks(&self) -> usize {
        self.redeem_tasks
    }

    fn barrier_timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_range("accumulate_tasks", self.accumulate_tasks, 0, MAX_TASKS)?;
        validate_range("redeem_tasks", self.redeem_tasks, 0, MAX_TASKS)?;
        if let Some(secs) = self.timeout_secs {
            validate_positive_number("timeout_secs", secs, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_original_scenario() {
        let config = CliConfig::default();
        assert_eq!(config.accumulate_tasks, 20);
        assert_eq!(config.redeem_tasks, 2);
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_validate_rejects_excessive_task_counts() {
        let config = CliConfig {
            accumulate_tasks: MAX_TASKS + 1,
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = CliConfig {
            timeout_secs: Some(0),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(CliConfig::default().validate().is_ok());
    }
}
