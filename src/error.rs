use thiserror::Error;

/// Errors returned by the fallible filter constructors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The window must cover at least one sample
    #[error("window width must be greater than zero")]
    ZeroWindowWidth,
}
