//! Static personal content for the home and about pages.

use crate::error::{PortfolioError, Result};
use serde::Serialize;

pub const DEFAULT_EMAIL: &str = "halil_aydin24@trabzon.edu.tr";

/// Links shown next to GitHub unless `--social` replaces them.
pub const DEFAULT_SOCIALS: [&str; 3] = [
    "Instagram=https://instagram.com/halilayd_n",
    "TikTok=https://tiktok.com/@halilayd_n",
    "LinkedIn=https://www.linkedin.com/in/halil-ayd%C4%B1n-097690331/",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

impl SocialLink {
    /// Parse `LABEL=URL`.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.split_once('=') {
            Some((label, url)) if !label.trim().is_empty() && !url.trim().is_empty() => {
                Ok(SocialLink {
                    label: label.trim().to_string(),
                    url: url.trim().to_string(),
                })
            }
            _ => Err(PortfolioError::ConfigError(format!(
                "Social link must look like LABEL=URL, got: {}",
                raw
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub email: Option<String>,
    pub socials: Vec<SocialLink>,
}

impl Profile {
    /// The GitHub link always comes first and points at the shown account.
    pub fn new(
        name: impl Into<String>,
        tagline: impl Into<String>,
        handle: &str,
        email: Option<String>,
        extra_socials: Vec<SocialLink>,
    ) -> Self {
        let mut socials = vec![SocialLink {
            label: "GitHub".to_string(),
            url: format!("https://github.com/{}", handle),
        }];
        socials.extend(extra_socials);

        Self {
            name: name.into(),
            tagline: tagline.into(),
            email,
            socials,
        }
    }

    pub fn mailto(&self) -> Option<String> {
        self.email.as_ref().map(|email| format!("mailto:{}", email))
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillGroup {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        name: "Frontend",
        items: &["HTML", "CSS", "JavaScript", "PHP"],
    },
    SkillGroup {
        name: "Backend",
        items: &["Python", "MySQL", "SQL", "C#"],
    },
    SkillGroup {
        name: "Tools",
        items: &["GitHub", "VS Code", "Android Studio", "CapCut"],
    },
    SkillGroup {
        name: "Social-Media",
        items: &["Instagram", "YouTube", "TikTok", "Photography"],
    },
];

pub const ABOUT_INTRO: &str = "I work on web technologies, modern interfaces and solid backend \
     systems. I turn ideas into code, and code into living projects.";
