//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! mock holds no mutable state: only the read-only account table and the time
//! source used to mint registration ids and response timestamps.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use time::OffsetDateTime;
use time::macros::format_description;

use crate::services::accounts::AccountTable;

// =============================================================================
// CLOCK
// =============================================================================

/// Time source for minted ids and timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Format an instant as ISO-8601 UTC with millisecond precision,
/// e.g. `2024-01-01T00:00:00.000Z`.
///
/// # Errors
///
/// Returns an error if the instant cannot be rendered (year outside 0..=9999).
pub fn iso_millis(at: OffsetDateTime) -> Result<String, time::error::Format> {
    at.to_offset(time::UtcOffset::UTC)
        .format(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"))
}

/// Milliseconds since the Unix epoch.
#[must_use]
pub fn epoch_millis(at: OffsetDateTime) -> i128 {
    at.unix_timestamp_nanos() / 1_000_000
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountTable>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// State backed by the fixed test accounts and the wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { accounts: Arc::new(AccountTable::fixture()), clock }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
