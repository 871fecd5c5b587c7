use crate::error::{PortfolioError, Result};
use crate::github::{fetch_repositories, RepositorySource};
use crate::grid::{GridView, ProjectGrid};
use crate::types::{RepoId, RepositoryQuery, RepositorySummary};
use ractor::rpc::CallResult;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Owns one grid for the lifetime of a mount
pub struct ProjectGridActor;

/// Arguments for mounting a grid
pub struct ProjectGridArgs {
    pub source: Arc<dyn RepositorySource>,
    pub query: RepositoryQuery,
}

/// State for the grid actor
pub struct ProjectGridState {
    grid: ProjectGrid,
    fetch: Option<JoinHandle<()>>,
    waiters: Vec<RpcReplyPort<GridView>>,
}

/// Messages the grid actor can handle
#[derive(Debug)]
pub enum ProjectGridMessage {
    /// The one fetch for this mount has finished
    FetchSettled(Vec<RepositorySummary>),
    SelectRepository(RepoId),
    ClearSelection,
    /// Current snapshot, loading or not
    GetView(RpcReplyPort<GridView>),
    /// Snapshot as soon as the fetch has settled
    AwaitSettled(RpcReplyPort<GridView>),
}

#[ractor::async_trait]
impl Actor for ProjectGridActor {
    type Msg = ProjectGridMessage;
    type State = ProjectGridState;
    type Arguments = ProjectGridArgs;

    async fn pre_start(
        &self,
        myself: ActorRef<Self::Msg>,
        args: ProjectGridArgs,
    ) -> std::result::Result<Self::State, ActorProcessingErr> {
        debug!(handle = %args.query.handle, limit = args.query.limit, "Mounting project grid");

        let ProjectGridArgs { source, query } = args;
        let fetch = tokio::spawn(async move {
            let repositories = fetch_repositories(source.as_ref(), &query).await;
            if myself
                .send_message(ProjectGridMessage::FetchSettled(repositories))
                .is_err()
            {
                debug!("Grid unmounted before the fetch settled, dropping result");
            }
        });

        Ok(ProjectGridState {
            grid: ProjectGrid::new(),
            fetch: Some(fetch),
            waiters: Vec::new(),
        })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> std::result::Result<(), ActorProcessingErr> {
        match message {
            ProjectGridMessage::FetchSettled(repositories) => {
                if !state.grid.is_loading() {
                    warn!("Ignoring a second fetch result for the same mount");
                    return Ok(());
                }

                info!(count = repositories.len(), "Project grid settled");
                state.grid.settle(repositories);
                state.fetch = None;

                let view = state.grid.view();
                for waiter in state.waiters.drain(..) {
                    if waiter.send(view.clone()).is_err() {
                        debug!("Settle waiter went away");
                    }
                }
            }
            ProjectGridMessage::SelectRepository(id) => {
                state.grid.select_repository(id);
            }
            ProjectGridMessage::ClearSelection => {
                state.grid.clear_selection();
            }
            ProjectGridMessage::GetView(reply) => {
                if reply.send(state.grid.view()).is_err() {
                    debug!("View requester went away");
                }
            }
            ProjectGridMessage::AwaitSettled(reply) => {
                if state.grid.is_loading() {
                    state.waiters.push(reply);
                } else if reply.send(state.grid.view()).is_err() {
                    debug!("Settle waiter went away");
                }
            }
        }
        Ok(())
    }

    async fn post_stop(
        &self,
        _myself: ActorRef<Self::Msg>,
        state: &mut Self::State,
    ) -> std::result::Result<(), ActorProcessingErr> {
        if let Some(fetch) = state.fetch.take() {
            debug!("Unmounting while loading, aborting fetch");
            fetch.abort();
        }
        state.waiters.clear();
        Ok(())
    }
}

/// A mounted grid. Dropping it unmounts the grid.
pub struct MountedGrid {
    actor: ActorRef<ProjectGridMessage>,
    handle: Option<JoinHandle<()>>,
}

impl MountedGrid {
    /// Spawn the grid actor, which immediately starts its single fetch.
    pub async fn mount(source: Arc<dyn RepositorySource>, query: RepositoryQuery) -> Result<Self> {
        let (actor, handle) = Actor::spawn(None, ProjectGridActor, ProjectGridArgs { source, query })
            .await
            .map_err(|e| PortfolioError::GridUnavailable(format!("Failed to mount grid: {}", e)))?;

        Ok(MountedGrid {
            actor,
            handle: Some(handle),
        })
    }

    pub fn select_repository(&self, id: RepoId) -> Result<()> {
        self.send(ProjectGridMessage::SelectRepository(id))
    }

    pub fn clear_selection(&self) -> Result<()> {
        self.send(ProjectGridMessage::ClearSelection)
    }

    pub async fn view(&self) -> Result<GridView> {
        self.request(ProjectGridMessage::GetView, None).await
    }

    /// Wait for the fetch to settle, or give up after `timeout`.
    pub async fn settled(&self, timeout: Option<Duration>) -> Result<GridView> {
        self.request(ProjectGridMessage::AwaitSettled, timeout).await
    }

    /// Stop the actor and wait for it to tear down.
    pub async fn unmount(mut self) {
        self.actor.stop(None);
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                warn!("Grid actor did not shut down cleanly: {}", e);
            }
        }
    }

    fn send(&self, message: ProjectGridMessage) -> Result<()> {
        self.actor
            .send_message(message)
            .map_err(|e| PortfolioError::GridUnavailable(format!("{:?}", e)))
    }

    async fn request(
        &self,
        build: fn(RpcReplyPort<GridView>) -> ProjectGridMessage,
        timeout: Option<Duration>,
    ) -> Result<GridView> {
        match self.actor.call(build, timeout).await {
            Ok(CallResult::Success(view)) => Ok(view),
            Ok(CallResult::Timeout) => Err(PortfolioError::GridUnavailable(
                "timed out waiting for the grid".to_string(),
            )),
            Ok(CallResult::SenderError) => Err(PortfolioError::GridUnavailable(
                "grid dropped the request".to_string(),
            )),
            Err(e) => Err(PortfolioError::GridUnavailable(e.to_string())),
        }
    }
}

impl Drop for MountedGrid {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.actor.stop(None);
        }
    }
}
