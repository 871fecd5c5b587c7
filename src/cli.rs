use crate::github::DEFAULT_API_BASE_URL;
use crate::profile::{DEFAULT_EMAIL, DEFAULT_SOCIALS};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "portfolio-site")]
#[command(about = "Portfolio site - Showcases a GitHub account's public repositories")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub site: SiteArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the site over HTTP
    Serve {
        /// Address to bind to
        #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0")]
        bind: String,

        /// Port to listen on
        #[arg(long, short, env = "PORT", default_value_t = 8080)]
        port: u16,
    },
    /// Print the projects grid to the terminal
    List {
        /// Only the latest few, as on the home page
        #[arg(long)]
        preview: bool,
    },
    /// Print the detail view of one repository
    Show {
        /// Repository id as reported by GitHub
        id: u64,
    },
}

#[derive(Args, Debug, Clone)]
pub struct SiteArgs {
    /// GitHub account whose repositories are shown
    #[arg(long, env = "PORTFOLIO_HANDLE", default_value = "halilaydin-tru", global = true)]
    pub handle: String,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_BASE_URL, global = true)]
    pub api_url: String,

    /// Repositories shown on the home page
    #[arg(long, env = "PORTFOLIO_PREVIEW_LIMIT", default_value_t = 2, global = true)]
    pub preview_limit: u32,

    /// Repositories shown on the projects page
    #[arg(long, env = "PORTFOLIO_PROJECTS_LIMIT", default_value_t = 15, global = true)]
    pub projects_limit: u32,

    /// Locale for long dates (en_US, tr_TR, de_DE, fr_FR, es_ES)
    #[arg(long, env = "PORTFOLIO_LOCALE", default_value = "en_US", global = true)]
    pub locale: String,

    /// GitHub request timeout in seconds
    #[arg(long, env = "GITHUB_TIMEOUT", default_value_t = 30, global = true)]
    pub timeout: u64,

    /// Name shown in the header
    #[arg(long, env = "PORTFOLIO_NAME", default_value = "Halil Aydin", global = true)]
    pub name: String,

    /// One-line role under the name
    #[arg(long, env = "PORTFOLIO_TAGLINE", default_value = "Full Stack Web Developer", global = true)]
    pub tagline: String,

    /// Contact address for the "work together" panel
    #[arg(long, env = "PORTFOLIO_EMAIL", default_value = DEFAULT_EMAIL, global = true)]
    pub email: Option<String>,

    /// Extra social links as LABEL=URL, repeatable
    #[arg(
        long = "social",
        env = "PORTFOLIO_SOCIALS",
        value_delimiter = ',',
        default_values = DEFAULT_SOCIALS,
        global = true
    )]
    pub socials: Vec<String>,
}
