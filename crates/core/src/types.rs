//! Core types shared across RayDB crates
//!
//! - [`Timestamp`]: creation/modification time of a stored item

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Microseconds since the Unix epoch
///
/// Ordered, so the engine can clamp refreshed timestamps to never move
/// backwards relative to the value they replace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Epoch, used as the "unset" sentinel in tests and defaults
    pub const EPOCH: Timestamp = Timestamp(0);

    /// Current wall-clock time
    pub fn now() -> Self {
        // A clock before 1970 reads as the epoch rather than failing
        let micros = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_micros() as u64)
            .unwrap_or(0);
        Timestamp(micros)
    }

    /// Current time, but never earlier than `previous`
    ///
    /// Used when refreshing `updated_at` so that the new value is always
    /// `>=` the old one even if the wall clock stepped back.
    pub fn now_after(previous: Timestamp) -> Self {
        Self::now().max(previous)
    }

    /// Construct from microseconds since the Unix epoch
    pub fn from_micros(micros: u64) -> Self {
        Timestamp(micros)
    }

    /// Microseconds since the Unix epoch
    pub fn as_micros(&self) -> u64 {
        self.0
    }

    /// Convert to a `chrono` UTC datetime
    pub fn to_datetime(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_micros(self.0 as i64).unwrap_or_default()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_datetime().to_rfc3339())
    }
}
