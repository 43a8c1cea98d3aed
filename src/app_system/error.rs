use thiserror::Error;
use crate::actor_framework::FrameworkError;
use crate::config::ConfigError;
use crate::fixtures::FixtureError;
use crate::session::SessionError;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Fixture(#[from] FixtureError),
    #[error("Actor startup failed: {0}")]
    Startup(#[from] FrameworkError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("Actor task failed: {0}")]
    ActorTask(String),
}
