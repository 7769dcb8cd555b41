use thiserror::Error;

pub use crate::core::CollectionError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Collection error: {0}")]
    Collection(#[from] CollectionError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Self-test failed: {failed} of {total} checks did not pass")]
    SelfTestFailed { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
