//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in profile ──────────┐
//! config file (TOML) ────────┤
//!     → loader.rs (parse & deserialize)
//!     → clock.rs (stamp copyright year, once)
//!     → validation.rs (semantic checks)
//!     → SiteConfig (validated, immutable)
//!     → shared read-only (e.g. via Arc) by every consumer
//! ```
//!
//! # Design Decisions
//! - Config is immutable once constructed; there is no reload path
//! - All sections have defaults, so a minimal file resolves against the
//!   built-in profile
//! - Validation separates syntactic (serde) from semantic checks
//! - The current year is a `Clock` capability injected at construction,
//!   not an ambient read

pub mod clock;
pub mod loader;
pub mod schema;
pub mod validation;

pub use clock::{Clock, SystemClock};
pub use loader::{load_config, ConfigError};
pub use schema::{
    ColorRole, ExperienceEntry, FooterConfig, GithubConfig, NavLink, SiteConfig, Skill,
    SkillCategory, SocialLink, Stat, ThemeColors,
};
pub use validation::{validate_config, ValidationError};
