//! Clock capability for construction-time values.
//!
//! The copyright line embeds the calendar year at the moment the
//! configuration is constructed. The year is injected through this trait
//! instead of read ambiently, so tests can pin it to a fixed value.

use chrono::Datelike;

/// Source of the current calendar year.
pub trait Clock: Send + Sync {
    /// Current year, e.g. 2026.
    fn year(&self) -> i32;
}

/// Clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn year(&self) -> i32 {
        chrono::Local::now().year()
    }
}
