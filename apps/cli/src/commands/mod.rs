//! Subcommand implementations.
//!
//! Each command returns a serializable output; `run` prints it as JSON.

pub mod check;
pub mod review;
pub mod score;

use chrono::{DateTime, Utc};
use ksrs_core::CardSchedulingState;

use crate::error::{CliError, Result};

/// Parse an RFC 3339 instant, falling back to the wall clock.
pub(crate) fn parse_now(value: Option<&str>) -> Result<DateTime<Utc>> {
    match value {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|source| CliError::InvalidTimestamp {
                value: raw.to_string(),
                source,
            }),
        None => Ok(Utc::now()),
    }
}

/// Parse a JSON scheduling state; a missing state means a first review.
pub(crate) fn parse_state(value: Option<&str>, now: DateTime<Utc>) -> Result<CardSchedulingState> {
    match value {
        Some(raw) => serde_json::from_str(raw).map_err(CliError::InvalidState),
        None => Ok(CardSchedulingState::new(now)),
    }
}
