//! Domain logic for client-side operations.
//!
//! Pure functions without side effects, making them easy to test.

use crate::error::ClientError;

/// Check if the error is caused by the connection (and may go away on reconnect).
pub fn is_connection_error(error: &ClientError) -> bool {
    matches!(
        error,
        ClientError::ConnectionError(_) | ClientError::ConnectionClosed
    )
}

/// Check if the client should attempt to reconnect.
///
/// # Arguments
///
/// * `error` - The client error that occurred
/// * `failures` - Consecutive failed sessions so far, including this one
/// * `max_retries` - The maximum number of reconnection attempts allowed
///
/// # Returns
///
/// `true` if reconnection should be attempted, `false` otherwise
pub fn should_attempt_reconnect(error: &ClientError, failures: u32, max_retries: u32) -> bool {
    if !is_connection_error(error) {
        return false;
    }

    failures <= max_retries
}

/// Counts consecutive connection losses.
///
/// The count starts over whenever a session reaches the server, so the limit
/// applies to each outage rather than to the lifetime of the process.
#[derive(Debug, Clone)]
pub struct ReconnectBudget {
    failures: u32,
    max_retries: u32,
}

impl ReconnectBudget {
    pub fn new(max_retries: u32) -> Self {
        Self {
            failures: 0,
            max_retries,
        }
    }

    /// A session connected successfully
    pub fn on_connected(&mut self) {
        self.failures = 0;
    }

    /// Record a failed or lost session; returns whether to retry
    pub fn on_failure(&mut self, error: &ClientError) -> bool {
        self.failures += 1;
        should_attempt_reconnect(error, self.failures, self.max_retries)
    }

    /// Number of the retry about to be made (1-indexed)
    pub fn retry_number(&self) -> u32 {
        self.failures
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }
}
