//! End-to-end properties of the resolved site configuration.

use std::fs;
use std::path::PathBuf;

use site_config::config::{load_config, validate_config, ColorRole, ConfigError, SiteConfig};
use url::Url;

mod common;
use common::{fixed_profile, FixedClock};

/// Write a config file under the system temp dir with a unique name.
fn write_temp(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("site-config-{}-{}.toml", std::process::id(), name));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn builtin_profile_passes_validation() {
    let config = fixed_profile(2026);
    assert_eq!(validate_config(&config), Ok(()));
}

#[test]
fn primary_color_is_exact() {
    let config = fixed_profile(2026);
    // Renderers apply this value verbatim, so compare strings exactly.
    assert_eq!(config.colors.primary, "#6366f1");
    assert_eq!(config.colors.get(ColorRole::Primary), "#6366f1");
}

#[test]
fn all_colors_are_six_digit_hex() {
    let config = fixed_profile(2026);
    for (role, value) in config.colors.iter() {
        let hex = value.strip_prefix('#').unwrap_or_else(|| panic!("{role} missing '#'"));
        assert_eq!(hex.len(), 6, "{role} is {value:?}");
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()), "{role} is {value:?}");
    }
}

#[test]
fn frontend_category_shape() {
    let config = fixed_profile(2026);
    let frontend = config
        .skills
        .iter()
        .find(|group| group.category == "Frontend")
        .expect("Frontend category present");

    assert_eq!(frontend.items.len(), 4);
    assert_eq!(frontend.items[0].name, "HTML");
    assert_eq!(frontend.items[0].level, 100);
}

#[test]
fn skill_levels_are_bounded() {
    let config = fixed_profile(2026);
    for group in &config.skills {
        for item in &group.items {
            assert!(item.level <= 100, "{}: {}", group.category, item.name);
        }
    }
}

#[test]
fn social_urls_parse_as_absolute() {
    let config = fixed_profile(2026);
    assert!(!config.socials.is_empty());
    for social in &config.socials {
        let url = Url::parse(&social.url).unwrap_or_else(|e| panic!("{}: {e}", social.name));
        assert!(!url.scheme().is_empty());
    }
}

#[test]
fn navigation_hrefs_are_paths() {
    let config = fixed_profile(2026);
    assert!(!config.navigation.is_empty());
    for entry in &config.navigation {
        assert!(entry.href.starts_with('/'), "{}: {}", entry.name, entry.href);
    }
}

#[test]
fn repo_cap_is_positive() {
    let config = fixed_profile(2026);
    assert!(config.github.max_repos > 0);
}

#[test]
fn copyright_is_stamped_once() {
    let config = fixed_profile(2026);
    assert_eq!(config.footer.copyright, "© 2026 Mackenzie. All rights reserved.");
    assert!(!config.footer.copyright.contains("{year}"));
}

#[test]
fn same_year_constructions_are_identical() {
    // Two loads within the same calendar year agree on every field,
    // including the copyright line.
    assert_eq!(fixed_profile(2025), fixed_profile(2025));
}

#[test]
fn year_boundary_changes_only_copyright() {
    let before = fixed_profile(2025);
    let after = fixed_profile(2026);

    assert_ne!(before.footer.copyright, after.footer.copyright);

    // Substituting the copyright line back makes the values equal, so no
    // other field depends on the clock.
    let mut after = after;
    after.footer.copyright = before.footer.copyright.clone();
    assert_eq!(before, after);
}

#[test]
fn empty_file_resolves_to_builtin() {
    let path = write_temp("empty", "");
    let config = load_config(&path, &FixedClock(2026)).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config, fixed_profile(2026));
}

#[test]
fn partial_file_overrides_only_named_fields() {
    let path = write_temp(
        "partial",
        r#"
name = "Someone Else"

[github]
username = "someone-else"
max_repos = 3
"#,
    );
    let config = load_config(&path, &FixedClock(2026)).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.name, "Someone Else");
    assert_eq!(config.github.username, "someone-else");
    assert_eq!(config.github.max_repos, 3);
    // Fields missing from the partial github table keep their defaults.
    assert!(config.github.show_repos);

    let builtin = fixed_profile(2026);
    assert_eq!(config.colors, builtin.colors);
    assert_eq!(config.skills, builtin.skills);
    assert_eq!(config.footer, builtin.footer);
}

#[test]
fn starter_file_roundtrips() {
    let starter = toml::to_string_pretty(&SiteConfig::default()).unwrap();
    let path = write_temp("starter", &starter);
    let config = load_config(&path, &FixedClock(2031)).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config, fixed_profile(2031));
    assert!(config.footer.copyright.contains("2031"));
}

#[test]
fn load_rejects_invalid_file() {
    let path = write_temp(
        "invalid",
        r#"
[github]
max_repos = 0
"#,
    );
    let err = load_config(&path, &FixedClock(2026)).unwrap_err();
    fs::remove_file(&path).unwrap();

    match err {
        ConfigError::Validation(errors) => assert_eq!(errors.len(), 1),
        other => panic!("expected validation failure, got {other}"),
    }
}

#[test]
fn load_rejects_malformed_toml() {
    let path = write_temp("malformed", "name = ");
    let err = load_config(&path, &FixedClock(2026)).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert!(matches!(err, ConfigError::Parse(_)));
}
