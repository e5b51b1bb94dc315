//! Client configuration types.

use std::time::Duration;

/// Default delay between two polls of the same job
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Default ceiling on polls per job (ten minutes at the default interval)
pub const DEFAULT_MAX_POLLS: u32 = 120;

/// Polling policy for requests the API answers with `incomplete`
///
/// The interval is fixed: no backoff and no jitter. `max_attempts` bounds how
/// long a single request may wait; `None` polls until the job finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Delay before each poll
    pub interval: Duration,

    /// Maximum number of polls per job
    pub max_attempts: Option<u32>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PollConfig {
    /// Create a poll configuration with the default interval and ceiling
    #[must_use]
    pub const fn new() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: Some(DEFAULT_MAX_POLLS),
        }
    }

    /// Set the delay between polls
    #[must_use]
    pub const fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the poll ceiling
    #[must_use]
    pub const fn max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = Some(max);
        self
    }

    /// Poll until the job reaches a terminal state, however long that takes
    #[must_use]
    pub const fn unbounded(mut self) -> Self {
        self.max_attempts = None;
        self
    }

    /// Whether another poll is allowed after `attempts` polls
    #[must_use]
    pub const fn allows(&self, attempts: u32) -> bool {
        match self.max_attempts {
            Some(max) => attempts < max,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_bounded() {
        let config = PollConfig::default();
        assert_eq!(config.interval, Duration::from_secs(5));
        assert_eq!(config.max_attempts, Some(120));
        assert!(config.allows(119));
        assert!(!config.allows(120));
    }

    #[test]
    fn test_unbounded_policy() {
        let config = PollConfig::new().max_attempts(1).unbounded();
        assert!(config.allows(u32::MAX - 1));
    }

    #[test]
    fn test_zero_attempts_never_polls() {
        assert!(!PollConfig::new().max_attempts(0).allows(0));
    }
}
