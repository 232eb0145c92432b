//! Shared helper utilities for factory methods.

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Returns a fixed base timestamp offset by `minutes`.
///
/// Tests that depend on ordering by timestamp use this instead of `Utc::now()` so that
/// rows inserted in quick succession still have distinct, predictable times.
///
/// # Arguments
/// - `minutes` - Offset in minutes from 2024-01-01T00:00:00Z
///
/// # Returns
/// - `DateTime<Utc>` - The offset timestamp
pub fn at_minute(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
        + Duration::minutes(minutes)
}
