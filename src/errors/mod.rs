pub mod codes;
pub mod docker;
pub mod render;

use thiserror::Error;

use crate::errors::docker::DockerError;
use crate::errors::render::RenderError;

pub type DocklsResult<T> = Result<T, DocklsError>;

pub trait HasErrorCode {
    fn error_code(&self) -> &'static str;
}

#[derive(Debug, Error)]
pub enum DocklsError {
    #[error(transparent)]
    Docker(#[from] DockerError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl HasErrorCode for DocklsError {
    fn error_code(&self) -> &'static str {
        match self {
            DocklsError::Docker(e) => e.error_code(),
            DocklsError::Render(e) => e.error_code(),
        }
    }
}
