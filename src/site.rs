use crate::actors::MountedGrid;
use crate::config::SiteConfig;
use crate::detail::RepositoryDetail;
use crate::error::Result;
use crate::github::RepositorySource;
use crate::grid::GridView;
use crate::health;
use crate::profile::{ABOUT_INTRO, SKILLS};
use crate::types::{RepoId, RepositoryQuery};
use axum::{
    extract::{RawQuery, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use minijinja::{context, Environment, Value};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

const STYLESHEET: &str = include_str!("../static/site.css");

/// Shared state for page handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub source: Arc<dyn RepositorySource>,
    pub templates: Arc<Environment<'static>>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: SiteConfig, source: Arc<dyn RepositorySource>) -> Result<Self> {
        Ok(AppState {
            config: Arc::new(config),
            source,
            templates: Arc::new(templates()?),
            start_time: Instant::now(),
        })
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        path: "/",
    },
    NavLink {
        label: "Projects",
        path: "/projects",
    },
    NavLink {
        label: "About",
        path: "/about",
    },
];

/// Query parameters for the projects page
#[derive(Debug, Default)]
pub struct ProjectsParams {
    pub selected: Option<String>,
}

impl ProjectsParams {
    /// Lenient parse of the raw query string. The first `selected` wins
    /// and everything else is ignored.
    pub fn from_query(query: Option<&str>) -> Self {
        let selected = query.and_then(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == "selected")
                .map(|(_, value)| value.into_owned())
        });
        Self { selected }
    }

    /// Anything that is not a repository id means "nothing selected".
    pub fn selected_id(&self) -> Option<RepoId> {
        self.selected.as_deref().and_then(|s| s.trim().parse().ok())
    }
}

pub fn templates() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.add_template("layout.html", include_str!("../templates/layout.html"))?;
    env.add_template("home.html", include_str!("../templates/home.html"))?;
    env.add_template("projects.html", include_str!("../templates/projects.html"))?;
    env.add_template("about.html", include_str!("../templates/about.html"))?;
    env.add_template("not_found.html", include_str!("../templates/not_found.html"))?;
    Ok(env)
}

/// Create the site router: pages, stylesheet and health probes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/projects", get(projects))
        .route("/about", get(about))
        .route("/static/site.css", get(stylesheet))
        .merge(health::health_routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the site until Ctrl+C
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Portfolio listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for Ctrl+C: {}", e);
            }
            info!("Shutting down");
        })
        .await?;

    Ok(())
}

/// Mount a grid for one render, optionally select a card, and unmount.
///
/// A fetch that outlives the render timeout leaves the page in its
/// loading state.
pub async fn load_grid(
    state: &AppState,
    query: RepositoryQuery,
    selected: Option<RepoId>,
) -> Result<GridView> {
    let grid = MountedGrid::mount(Arc::clone(&state.source), query).await?;

    let view = match grid.settled(Some(state.config.render_timeout())).await {
        Ok(settled) => match selected {
            Some(id) => {
                grid.select_repository(id)?;
                grid.view().await?
            }
            None => settled,
        },
        Err(e) => {
            warn!("Rendering grid while still loading: {}", e);
            GridView::loading()
        }
    };

    grid.unmount().await;
    Ok(view)
}

fn render(state: &AppState, name: &str, ctx: Value) -> Result<Html<String>> {
    let template = state.templates.get_template(name)?;
    Ok(Html(template.render(ctx)?))
}

async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    let view = load_grid(&state, state.config.preview_query(), None).await?;

    render(
        &state,
        "home.html",
        context! {
            active => "/",
            nav => NAV_LINKS,
            profile => &state.config.profile,
            mailto => state.config.profile.mailto(),
            loading => view.is_loading(),
            cards => view.cards(),
        },
    )
}

async fn projects(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Html<String>> {
    let params = ProjectsParams::from_query(query.as_deref());
    let view = load_grid(&state, state.config.projects_query(), params.selected_id()).await?;
    let detail = view
        .selected_repository()
        .map(|repo| RepositoryDetail::derive(repo, state.config.locale));

    render(
        &state,
        "projects.html",
        context! {
            active => "/projects",
            nav => NAV_LINKS,
            profile => &state.config.profile,
            loading => view.is_loading(),
            cards => view.cards(),
            detail => detail,
        },
    )
}

async fn about(State(state): State<AppState>) -> Result<Html<String>> {
    render(
        &state,
        "about.html",
        context! {
            active => "/about",
            nav => NAV_LINKS,
            profile => &state.config.profile,
            intro => ABOUT_INTRO,
            skills => SKILLS,
        },
    )
}

async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

async fn not_found(State(state): State<AppState>, uri: Uri) -> Result<impl IntoResponse> {
    let page = render(
        &state,
        "not_found.html",
        context! {
            active => "",
            nav => NAV_LINKS,
            profile => &state.config.profile,
            path => uri.path(),
        },
    )?;
    Ok((StatusCode::NOT_FOUND, page))
}
