use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("could not open a window: {0}")]
    WindowUnavailable(String),
    #[error("could not draw plot: {0}")]
    Plot(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
