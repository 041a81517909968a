// src/engine/clock.rs

use std::fmt::Debug;

use chrono::Local;

/// Timestamp layout used for `updated_at` and change log entries.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Source of "now" for transitions.
pub trait Clock: Debug + Send + Sync {
    fn now(&self) -> String;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }
}
