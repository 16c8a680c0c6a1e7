//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check field invariants (hex colors, absolute social URLs, skill levels)
//! - Check cross-field consistency (footer links behind enabled flags)
//! - Detect duplicate social names and skill categories
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;
use url::Url;

use crate::config::schema::{ColorRole, SiteConfig};

/// A single violated configuration invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is empty.
    #[error("{field} must not be empty")]
    EmptyField { field: String },

    /// The contact email is not syntactically valid.
    #[error("email {value:?} is not a valid address")]
    InvalidEmail { value: String },

    /// A theme color is not a `#RRGGBB` hex string.
    #[error("color {role} is {value:?}, expected #RRGGBB")]
    InvalidColor { role: ColorRole, value: String },

    /// A social link URL does not parse as an absolute URL.
    #[error("social link {name:?}: {value:?} is not an absolute URL")]
    InvalidSocialUrl { name: String, value: String },

    /// Two social links share the same name.
    #[error("duplicate social link {name:?}")]
    DuplicateSocial { name: String },

    /// A navigation href is neither an anchor nor a path.
    #[error("navigation entry {name:?}: {value:?} is not an anchor or path")]
    InvalidHref { name: String, value: String },

    /// A footer link is enabled but its target is empty.
    #[error("footer: {link} is required when {flag} is enabled")]
    MissingFooterLink {
        flag: &'static str,
        link: &'static str,
    },

    /// A skill level exceeds the 0-100 scale.
    #[error("skill {name:?} in {category:?}: level {level} exceeds 100")]
    SkillLevelOutOfRange {
        category: String,
        name: String,
        level: u8,
    },

    /// Two skill categories share the same heading.
    #[error("duplicate skill category {category:?}")]
    DuplicateCategory { category: String },

    /// The repository widget is enabled without an account to fetch from.
    #[error("github.username is required when github.show_repos is enabled")]
    MissingGithubUsername,

    /// The repository cap would fetch nothing.
    #[error("github.max_repos must be greater than zero")]
    NonPositiveRepoCap,
}

/// Validate semantic invariants of a configuration.
///
/// Collects every violation instead of stopping at the first, so a broken
/// config file can be fixed in one pass.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("name", &config.name),
        ("title", &config.title),
        ("email", &config.email),
        ("domain", &config.domain),
        ("bio", &config.bio),
        ("avatar", &config.avatar),
        ("favicon", &config.favicon),
        ("footer.copyright", &config.footer.copyright),
    ] {
        if value.trim().is_empty() {
            errors.push(ValidationError::EmptyField {
                field: field.to_string(),
            });
        }
    }

    if !config.email.trim().is_empty() && !is_valid_email(&config.email) {
        errors.push(ValidationError::InvalidEmail {
            value: config.email.clone(),
        });
    }

    for (role, value) in config.colors.iter() {
        if !is_hex_color(value) {
            errors.push(ValidationError::InvalidColor {
                role,
                value: value.to_string(),
            });
        }
    }

    let mut social_names = HashSet::new();
    for social in &config.socials {
        if !social_names.insert(social.name.as_str()) {
            errors.push(ValidationError::DuplicateSocial {
                name: social.name.clone(),
            });
        }
        if Url::parse(&social.url).is_err() {
            errors.push(ValidationError::InvalidSocialUrl {
                name: social.name.clone(),
                value: social.url.clone(),
            });
        }
    }

    for entry in &config.navigation {
        // Anchors ("/#section") are a special case of paths, so a single
        // leading-slash check covers both.
        if !entry.href.starts_with('/') {
            errors.push(ValidationError::InvalidHref {
                name: entry.name.clone(),
                value: entry.href.clone(),
            });
        }
    }

    let footer = &config.footer;
    for (enabled, flag, link, value) in [
        (
            footer.show_imprint,
            "show_imprint",
            "imprint_link",
            &footer.imprint_link,
        ),
        (
            footer.show_privacy,
            "show_privacy",
            "privacy_link",
            &footer.privacy_link,
        ),
        (
            footer.show_terms,
            "show_terms",
            "terms_link",
            &footer.terms_link,
        ),
    ] {
        if enabled && value.trim().is_empty() {
            errors.push(ValidationError::MissingFooterLink { flag, link });
        }
    }

    let mut categories = HashSet::new();
    for group in &config.skills {
        if group.category.trim().is_empty() {
            errors.push(ValidationError::EmptyField {
                field: "skills.category".to_string(),
            });
        }
        if !categories.insert(group.category.as_str()) {
            errors.push(ValidationError::DuplicateCategory {
                category: group.category.clone(),
            });
        }
        for item in &group.items {
            if item.level > 100 {
                errors.push(ValidationError::SkillLevelOutOfRange {
                    category: group.category.clone(),
                    name: item.name.clone(),
                    level: item.level,
                });
            }
        }
    }

    for (index, stat) in config.stats.iter().enumerate() {
        for (field, value) in [("label", &stat.label), ("value", &stat.value)] {
            if value.trim().is_empty() {
                errors.push(ValidationError::EmptyField {
                    field: format!("stats[{index}].{field}"),
                });
            }
        }
    }

    if config.github.show_repos && config.github.username.trim().is_empty() {
        errors.push(ValidationError::MissingGithubUsername);
    }
    if config.github.max_repos == 0 {
        errors.push(ValidationError::NonPositiveRepoCap);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// `#RRGGBB`, hex digits in either case.
fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Syntactic email check: one `@` separating a non-empty local part from a
/// dotted domain. Deliverability is not this crate's concern.
fn is_valid_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.contains(char::is_whitespace)
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
