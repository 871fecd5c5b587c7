pub mod project_grid;

pub use project_grid::{MountedGrid, ProjectGridActor, ProjectGridMessage};
