//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use chrono::{DateTime, Utc};

/// Trait for a client-local key-value store
///
/// Implemented by the infrastructure layer (jobwork-store). All operations
/// are synchronous from the caller's point of view.
pub trait KeyValueStore {
    /// Error type for store operations
    type Error: std::fmt::Display;

    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove `key`; removing an absent key is not an error
    fn delete(&mut self, key: &str) -> Result<(), Self::Error>;
}

/// Source of the current time
///
/// Lets callers substitute a deterministic clock in tests.
pub trait Clock {
    /// Current UTC time
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time from the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc>,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_closure_clock() {
        let fixed = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let clock = move || fixed;
        assert_eq!(clock.now(), fixed);
    }

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
