use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write container list: {0}")]
    Output(#[from] std::io::Error),
}

impl RenderError {
    pub fn error_code(&self) -> &'static str {
        use crate::errors::codes::ErrorCode;

        match self {
            RenderError::Output(_) => ErrorCode::RENDER_OUTPUT_FAILED,
        }
    }
}
