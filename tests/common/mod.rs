//! Shared utilities for integration testing.

use site_config::config::{Clock, SiteConfig};

/// Clock pinned to a fixed year, so tests are independent of the wall clock.
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn year(&self) -> i32 {
        self.0
    }
}

/// Built-in profile stamped with a fixed test year.
pub fn fixed_profile(year: i32) -> SiteConfig {
    SiteConfig::builtin(&FixedClock(year))
}
