use thiserror::Error;

/// Errors raised while constructing a [`Time`](crate::Time).
#[derive(Error, Debug)]
pub enum Error {
    /// The timestamp lies outside the range `time` can represent.
    #[error("invalid instant: {0} ms since the unix epoch")]
    InvalidInstant(i64),

    #[error("invalid calendar components: {0}")]
    InvalidComponents(#[from] time::error::ComponentRange),

    #[error("invalid utc offset `{0}`")]
    InvalidOffset(String),
}

pub type Result<T> = std::result::Result<T, Error>;
