//! Portfolio Site Configuration Library

pub mod config;

pub use config::schema::SiteConfig;
pub use config::{Clock, SystemClock};
pub use config::loader::load_config;
