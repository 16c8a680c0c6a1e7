//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the site.
//! All types derive Serde traits for (de)serialization from config files.
//! The `Default` impls carry the built-in profile, so a minimal or missing
//! config file still resolves to a fully-populated value.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::clock::Clock;

/// Root configuration for the portfolio site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Display name of the site owner.
    pub name: String,

    /// Headline shown under the name.
    pub title: String,

    /// Contact email address.
    pub email: String,

    /// Canonical domain of the site.
    pub domain: String,

    /// Short biography paragraph.
    pub bio: String,

    /// Path or URL of the profile image.
    pub avatar: String,

    /// Path or URL of the favicon.
    pub favicon: String,

    /// Theme color palette.
    pub colors: ThemeColors,

    /// Social media links, in display order.
    pub socials: Vec<SocialLink>,

    /// Navigation menu entries, in display order.
    pub navigation: Vec<NavLink>,

    /// Footer links and copyright line.
    pub footer: FooterConfig,

    /// Skill categories, in display order.
    pub skills: Vec<SkillCategory>,

    /// Headline statistics, in display order.
    pub stats: Vec<Stat>,

    /// Work and education history. The built-in profile lists newest first;
    /// consumers render in the order given.
    pub experience: Vec<ExperienceEntry>,

    /// GitHub repository widget settings.
    pub github: GithubConfig,
}

impl SiteConfig {
    /// Built-in profile with the copyright year stamped from `clock`.
    ///
    /// The year is captured exactly once here. A process that crosses a
    /// year boundary keeps the year it started with.
    pub fn builtin(clock: &dyn Clock) -> Self {
        let mut config = Self::default();
        config.footer.stamp_year(clock.year());
        config
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Mackenzie".to_string(),
            title: "Full-stack Developer (With a Love-Hate Relationship to JavaScript)"
                .to_string(),
            email: "hello@mackenziedev.site".to_string(),
            domain: "mackenziedev.site".to_string(),
            bio: "Building fast, clean, and occasionally over-engineered things since the \
                  post-COVID boredom era. Fluent in HTML, Android Studio, and chaos."
                .to_string(),
            avatar: "/images/profile.jpg".to_string(),
            favicon: "/favicon.svg".to_string(),
            colors: ThemeColors::default(),
            socials: default_socials(),
            navigation: default_navigation(),
            footer: FooterConfig::default(),
            skills: default_skills(),
            stats: default_stats(),
            experience: default_experience(),
            github: GithubConfig::default(),
        }
    }
}

/// Fixed theme color roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
    Success,
    Warning,
}

impl ColorRole {
    pub fn all() -> [Self; 5] {
        [
            Self::Primary,
            Self::Secondary,
            Self::Accent,
            Self::Success,
            Self::Warning,
        ]
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Warning => "warning",
        })
    }
}

/// Theme color palette, one `#RRGGBB` value per role.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub success: String,
    pub warning: String,
}

impl ThemeColors {
    /// Color value for the given role.
    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Primary => &self.primary,
            ColorRole::Secondary => &self.secondary,
            ColorRole::Accent => &self.accent,
            ColorRole::Success => &self.success,
            ColorRole::Warning => &self.warning,
        }
    }

    /// Iterate all (role, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, &str)> {
        ColorRole::all()
            .into_iter()
            .map(move |role| (role, self.get(role)))
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#6366f1".to_string(),   // indigo
            secondary: "#8b5cf6".to_string(), // purple
            accent: "#ec4899".to_string(),    // pink
            success: "#10b981".to_string(),   // green
            warning: "#f59e0b".to_string(),   // amber
        }
    }
}

/// A social media link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SocialLink {
    /// Platform name, unique across the list.
    pub name: String,

    /// Absolute URL of the profile.
    pub url: String,

    /// Icon class rendered next to the link.
    pub icon: String,
}

/// A navigation menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NavLink {
    /// Label shown in the menu.
    pub name: String,

    /// In-page anchor (`/#section`) or path target.
    pub href: String,
}

/// Footer links and copyright line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Show the imprint link.
    pub show_imprint: bool,

    /// Show the privacy policy link.
    pub show_privacy: bool,

    /// Show the terms of service link.
    pub show_terms: bool,

    /// Imprint page path. Required when `show_imprint` is set.
    pub imprint_link: String,

    /// Privacy policy path. Required when `show_privacy` is set.
    pub privacy_link: String,

    /// Terms of service path. Required when `show_terms` is set.
    pub terms_link: String,

    /// Copyright line. A `{year}` placeholder is replaced with the
    /// construction-time year, exactly once.
    pub copyright: String,
}

impl FooterConfig {
    /// Replace the `{year}` placeholder with the given year.
    ///
    /// No-op when the line carries no placeholder, so stamping an already
    /// resolved line leaves it unchanged.
    pub(crate) fn stamp_year(&mut self, year: i32) {
        self.copyright = self.copyright.replace("{year}", &year.to_string());
    }
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            show_imprint: true,
            show_privacy: true,
            show_terms: true,
            imprint_link: "/imprint".to_string(),
            privacy_link: "/privacy".to_string(),
            terms_link: "/terms".to_string(),
            copyright: "© {year} Mackenzie. All rights reserved.".to_string(),
        }
    }
}

/// A named group of skills.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SkillCategory {
    /// Category heading, unique across the list.
    pub category: String,

    /// Skills in display order.
    pub items: Vec<Skill>,
}

/// A single skill with a proficiency level.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Skill {
    /// Skill name.
    pub name: String,

    /// Proficiency from 0 to 100.
    pub level: u8,

    /// Icon class rendered next to the name.
    pub icon: String,
}

/// A headline statistic.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Stat {
    /// Statistic label.
    pub label: String,

    /// Display text. Not guaranteed numeric, may be symbolic (e.g. "∞").
    pub value: String,

    /// Icon class rendered next to the value.
    pub icon: String,
}

/// One entry in the work/education history.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExperienceEntry {
    /// Single year or range, e.g. "2023 – 2024".
    pub year: String,

    /// Role or project title.
    pub title: String,

    /// Employer or context.
    pub company: String,

    /// Free-form description.
    pub description: String,

    /// Technologies used, in display order.
    pub technologies: Vec<String>,
}

/// GitHub repository widget settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Account to list repositories from.
    pub username: String,

    /// Render the repository widget at all.
    pub show_repos: bool,

    /// Upper bound on repositories the widget fetches. The fetch itself is
    /// performed by an external consumer, not by this crate.
    pub max_repos: u32,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            username: "mackenziedev".to_string(),
            show_repos: true,
            max_repos: 6,
        }
    }
}

fn default_socials() -> Vec<SocialLink> {
    vec![
        SocialLink {
            name: "GitHub".to_string(),
            url: "https://github.com/mackenziedev".to_string(),
            icon: "fa-brands fa-github".to_string(),
        },
        SocialLink {
            name: "Bluesky".to_string(),
            url: "https://bsky.app/profile/mackenziedev.bsky.social".to_string(),
            // fallback since no Bluesky icon
            icon: "fa-solid fa-cloud".to_string(),
        },
    ]
}

fn default_navigation() -> Vec<NavLink> {
    [
        ("About", "/#about"),
        ("Skills", "/#skills"),
        ("Experience", "/#experience"),
        ("Projects", "/#projects"),
        ("Articles", "/#articles"),
        ("Contact", "/#contact"),
    ]
    .into_iter()
    .map(|(name, href)| NavLink {
        name: name.to_string(),
        href: href.to_string(),
    })
    .collect()
}

fn default_skills() -> Vec<SkillCategory> {
    fn skill(name: &str, level: u8, icon: &str) -> Skill {
        Skill {
            name: name.to_string(),
            level,
            icon: icon.to_string(),
        }
    }

    vec![
        SkillCategory {
            category: "Frontend".to_string(),
            items: vec![
                skill("HTML", 100, "fa-brands fa-html5"),
                skill("CSS", 95, "fa-brands fa-css3-alt"),
                skill("JavaScript", 70, "fa-brands fa-js"),
                skill("Tailwind CSS", 90, "fa-solid fa-palette"),
            ],
        },
        SkillCategory {
            category: "Backend".to_string(),
            items: vec![
                skill("Node.js", 75, "fa-brands fa-node"),
                skill("Java", 95, "fa-brands fa-java"),
                skill("Android Studio", 98, "fa-solid fa-robot"),
                skill("MongoDB", 80, "fa-solid fa-leaf"),
            ],
        },
        SkillCategory {
            category: "DevOps".to_string(),
            items: vec![
                skill("Docker", 60, "fa-brands fa-docker"),
                skill("Git", 85, "fa-brands fa-git-alt"),
                skill("CI/CD", 75, "fa-solid fa-gears"),
                skill("Linux", 80, "fa-brands fa-linux"),
            ],
        },
    ]
}

fn default_stats() -> Vec<Stat> {
    fn stat(label: &str, value: &str, icon: &str) -> Stat {
        Stat {
            label: label.to_string(),
            value: value.to_string(),
            icon: icon.to_string(),
        }
    }

    vec![
        stat("Years Coding", "5+", "fa-solid fa-code"),
        stat("Projects Completed", "40+", "fa-solid fa-rocket"),
        stat("Brain Cells Left", "3", "fa-solid fa-brain"),
        stat("Commits That Fixed Nothing", "∞", "fa-solid fa-bug"),
    ]
}

fn default_experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            year: "2025".to_string(),
            title: "Abi & Code".to_string(),
            company: "Still at Gymnasium".to_string(),
            description: "Balancing final exams with debugging Android apps like a champ. \
                          Learned that caffeine and Java exceptions pair better than most wines."
                .to_string(),
            technologies: vec![
                "Java".to_string(),
                "Android Studio".to_string(),
                "HTML".to_string(),
                "CSS".to_string(),
            ],
        },
        ExperienceEntry {
            year: "2023 – 2024".to_string(),
            title: "Android Magician".to_string(),
            company: "Freelance & Personal Projects".to_string(),
            description: "Turned coffee into Android apps. Built a few passion projects that \
                          actually worked, which was a nice surprise. Experimented with Kotlin, \
                          got bored, crawled back to Java."
                .to_string(),
            technologies: vec![
                "Android".to_string(),
                "Java".to_string(),
                "Kotlin".to_string(),
                "Firebase".to_string(),
            ],
        },
        ExperienceEntry {
            year: "2020 – 2022".to_string(),
            title: "Self-Taught Chaos Developer".to_string(),
            company: "Post-COVID Coding Arc".to_string(),
            description: "Started learning coding during lockdown out of boredom. Accidentally \
                          discovered a genuine passion. Wrote some HTML that still haunts my \
                          dreams."
                .to_string(),
            technologies: vec![
                "HTML".to_string(),
                "CSS".to_string(),
                "JS".to_string(),
                "Node.js".to_string(),
            ],
        },
    ]
}
