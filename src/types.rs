//! Types specific to bempp-options

/// Error raised while setting up evaluation options
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A value outside the range accepted by a setter
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A parameter list that could not be interpreted
    #[error("Invalid parameters: {0}")]
    InvalidParameters(#[from] serde_json::Error),
    /// A thread pool that could not be built
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
