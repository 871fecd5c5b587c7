use clap::Parser;
use colored::*;
use portfolio_site::actors::MountedGrid;
use portfolio_site::cli::{Cli, Command};
use portfolio_site::config::SiteConfig;
use portfolio_site::detail::RepositoryDetail;
use portfolio_site::error::{PortfolioError, Result};
use portfolio_site::github::{GitHubClient, RepositorySource};
use portfolio_site::site::{self, AppState};
use portfolio_site::terminal;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SiteConfig::from_args(&cli.site)?;
    let source: Arc<dyn RepositorySource> = Arc::new(GitHubClient::new(
        &config.api_base_url,
        config.request_timeout,
    )?);

    match cli.command {
        Command::Serve { bind, port } => {
            let addr = format!("{}:{}", bind, port).parse::<SocketAddr>().map_err(|e| {
                PortfolioError::ConfigError(format!("Invalid bind address {}:{}: {}", bind, port, e))
            })?;

            println!("{}", "Portfolio Site".bold().green());
            println!("{}\n", "=".repeat(50).dimmed());
            println!("Showing repositories of {}", config.handle.cyan());
            println!("Serving on http://{}", addr);
            println!("\nPress Ctrl+C to stop the server\n");

            let state = AppState::new(config, source)?;
            site::serve(state, addr).await?;
            println!("✅ Server stopped");
        }
        Command::List { preview } => {
            let query = if preview {
                config.preview_query()
            } else {
                config.projects_query()
            };

            let grid = MountedGrid::mount(source, query).await?;
            let view = grid.settled(Some(config.render_timeout())).await?;
            grid.unmount().await;

            print!("{}", terminal::render_grid(&view));
        }
        Command::Show { id } => {
            let grid = MountedGrid::mount(source, config.projects_query()).await?;
            grid.settled(Some(config.render_timeout())).await?;
            grid.select_repository(id)?;
            let view = grid.view().await?;
            grid.unmount().await;

            match view.selected_repository() {
                Some(repo) => {
                    let detail = RepositoryDetail::derive(repo, config.locale);
                    print!("{}", terminal::render_detail(&detail));
                }
                None => {
                    return Err(PortfolioError::NotFound(format!(
                        "Repository {} is not among the latest {} of {}",
                        id, config.projects_limit, config.handle
                    )));
                }
            }
        }
    }

    Ok(())
}
