//! HTTP API response DTOs.

use serde::Serialize;

use crate::usecase::HubStats;
use hiroba_shared::time::millis_to_rfc3339;

/// Response of `GET /api/stats`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsDto {
    /// Current session count
    pub connected: i64,
    /// Number of entries in the message log
    pub messages: usize,
    /// Server start time (RFC 3339)
    pub started_at: String,
}

impl From<HubStats> for StatsDto {
    fn from(stats: HubStats) -> Self {
        Self {
            connected: stats.session_count,
            messages: stats.message_count,
            started_at: millis_to_rfc3339(stats.started_at),
        }
    }
}
