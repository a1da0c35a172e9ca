//! Named monotonic counters for sequential identity assignment.
//!
//! Each counter name owns an independent sequence starting at 1. The write
//! path draws `products` and `products:my_sociolla_sql_id` from here.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

use vitrine_core::DomainError;

#[derive(Debug, Error)]
pub enum CounterError {
    /// The counter backend cannot be reached right now; the caller may retry.
    #[error("counter backend unavailable: {0}")]
    Unavailable(String),
}

impl From<CounterError> for DomainError {
    fn from(err: CounterError) -> Self {
        match err {
            CounterError::Unavailable(msg) => DomainError::unavailable(msg),
        }
    }
}

/// Sequence source. `next` must never hand out the same value twice for one
/// name, even under concurrent callers.
pub trait Counter {
    fn next(&self, name: &str) -> Result<i64, CounterError>;
}

/// In-memory counter set. Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCounter {
    sequences: RwLock<HashMap<String, i64>>,
}

impl InMemoryCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a counter so the next draw returns `value + 1`.
    pub fn seed(&self, name: &str, value: i64) -> Result<(), CounterError> {
        let mut sequences = self
            .sequences
            .write()
            .map_err(|_| CounterError::Unavailable("lock poisoned".to_string()))?;
        sequences.insert(name.to_string(), value);
        Ok(())
    }
}

impl Counter for InMemoryCounter {
    fn next(&self, name: &str) -> Result<i64, CounterError> {
        let mut sequences = self
            .sequences
            .write()
            .map_err(|_| CounterError::Unavailable("lock poisoned".to_string()))?;
        let entry = sequences.entry(name.to_string()).or_insert(0);
        *entry += 1;
        Ok(*entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_one_and_are_independent() {
        let counter = InMemoryCounter::new();
        assert_eq!(counter.next("products").unwrap(), 1);
        assert_eq!(counter.next("products").unwrap(), 2);
        assert_eq!(counter.next("products:my_sociolla_sql_id").unwrap(), 1);
    }

    #[test]
    fn seeding_moves_the_sequence_forward() {
        let counter = InMemoryCounter::new();
        counter.seed("products", 500).unwrap();
        assert_eq!(counter.next("products").unwrap(), 501);
    }
}
