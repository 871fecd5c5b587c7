use crate::cli::SiteArgs;
use crate::error::{PortfolioError, Result};
use crate::github::DEFAULT_API_BASE_URL;
use crate::profile::{Profile, SocialLink, DEFAULT_EMAIL, DEFAULT_SOCIALS};
use crate::types::RepositoryQuery;
use chrono::Locale;
use std::time::Duration;
use url::Url;

/// GitHub refuses `per_page` above this.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Everything a mount needs to know, resolved once at startup
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub handle: String,
    pub api_base_url: String,
    pub preview_limit: u32,
    pub projects_limit: u32,
    pub locale: Locale,
    pub request_timeout: Duration,
    pub profile: Profile,
}

impl SiteConfig {
    /// Defaults matching the CLI for the given account and API.
    pub fn new(handle: impl Into<String>, api_base_url: impl Into<String>) -> Self {
        let handle = handle.into();
        let socials = DEFAULT_SOCIALS
            .iter()
            .filter_map(|raw| SocialLink::parse(raw).ok())
            .collect();
        let profile = Profile::new(
            "Halil Aydin",
            "Full Stack Web Developer",
            &handle,
            Some(DEFAULT_EMAIL.to_string()),
            socials,
        );
        Self {
            handle,
            api_base_url: api_base_url.into(),
            preview_limit: 2,
            projects_limit: 15,
            locale: Locale::en_US,
            request_timeout: Duration::from_secs(30),
            profile,
        }
    }

    pub fn from_args(args: &SiteArgs) -> Result<Self> {
        let handle = args.handle.trim();
        if handle.is_empty() {
            return Err(PortfolioError::ConfigError(
                "GitHub handle must not be empty".to_string(),
            ));
        }

        Url::parse(&args.api_url)?;
        let preview_limit = validate_limit("preview", args.preview_limit)?;
        let projects_limit = validate_limit("projects", args.projects_limit)?;
        let locale = parse_locale(&args.locale)?;

        let socials = args
            .socials
            .iter()
            .map(|raw| SocialLink::parse(raw))
            .collect::<Result<Vec<_>>>()?;
        let profile = Profile::new(
            args.name.clone(),
            args.tagline.clone(),
            handle,
            args.email.clone().filter(|e| !e.trim().is_empty()),
            socials,
        );

        Ok(SiteConfig {
            handle: handle.to_string(),
            api_base_url: args.api_url.clone(),
            preview_limit,
            projects_limit,
            locale,
            request_timeout: Duration::from_secs(args.timeout.max(1)),
            profile,
        })
    }

    pub fn preview_query(&self) -> RepositoryQuery {
        RepositoryQuery::new(self.handle.clone(), self.preview_limit)
    }

    pub fn projects_query(&self) -> RepositoryQuery {
        RepositoryQuery::new(self.handle.clone(), self.projects_limit)
    }

    /// How long a page render waits for its grid before showing the
    /// loading state.
    pub fn render_timeout(&self) -> Duration {
        self.request_timeout + Duration::from_secs(2)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new("halilaydin-tru", DEFAULT_API_BASE_URL)
    }
}

fn validate_limit(which: &str, limit: u32) -> Result<u32> {
    if limit == 0 || limit > MAX_PAGE_SIZE {
        return Err(PortfolioError::ConfigError(format!(
            "{} limit must be between 1 and {}, got {}",
            which, MAX_PAGE_SIZE, limit
        )));
    }
    Ok(limit)
}

/// Locales offered for date formatting. Accepts `tr_TR` or `tr-TR`.
pub fn parse_locale(name: &str) -> Result<Locale> {
    match name.trim().replace('-', "_").as_str() {
        "en_US" => Ok(Locale::en_US),
        "en_GB" => Ok(Locale::en_GB),
        "tr_TR" => Ok(Locale::tr_TR),
        "de_DE" => Ok(Locale::de_DE),
        "fr_FR" => Ok(Locale::fr_FR),
        "es_ES" => Ok(Locale::es_ES),
        other => Err(PortfolioError::ConfigError(format!(
            "Unsupported locale: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_defaults_from_cli() {
        let cli = Cli::parse_from(["portfolio-site", "list"]);
        let config = SiteConfig::from_args(&cli.site).unwrap();
        assert_eq!(config.handle, "halilaydin-tru");
        assert_eq!(config.preview_query().limit, 2);
        assert_eq!(config.projects_query().limit, 15);
        assert_eq!(config.locale, Locale::en_US);

        let labels: Vec<_> = config.profile.socials.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["GitHub", "Instagram", "TikTok", "LinkedIn"]);
        assert_eq!(
            config.profile.mailto().as_deref(),
            Some("mailto:halil_aydin24@trabzon.edu.tr")
        );
    }

    #[test]
    fn test_blank_email_hides_contact() {
        let cli = Cli::parse_from(["portfolio-site", "list", "--email", ""]);
        let config = SiteConfig::from_args(&cli.site).unwrap();
        assert!(config.profile.mailto().is_none());
    }

    #[test]
    fn test_overrides_from_cli() {
        let cli = Cli::parse_from([
            "portfolio-site",
            "list",
            "--handle",
            "octocat",
            "--locale",
            "tr-TR",
            "--projects-limit",
            "3",
            "--social",
            "LinkedIn=https://linkedin.com/in/octocat",
        ]);
        let config = SiteConfig::from_args(&cli.site).unwrap();
        assert_eq!(config.projects_query(), RepositoryQuery::new("octocat", 3));
        assert_eq!(config.locale, Locale::tr_TR);
        assert_eq!(config.profile.socials.len(), 2);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut args = Cli::parse_from(["portfolio-site", "list"]).site;
        args.projects_limit = 0;
        assert!(SiteConfig::from_args(&args).is_err());

        args.projects_limit = 101;
        assert!(SiteConfig::from_args(&args).is_err());

        args.projects_limit = 15;
        args.locale = "xx_XX".to_string();
        assert!(SiteConfig::from_args(&args).is_err());

        args.locale = "en_US".to_string();
        args.api_url = "not a url".to_string();
        assert!(matches!(
            SiteConfig::from_args(&args),
            Err(PortfolioError::UrlError(_))
        ));
    }
}
