use crate::{config::ConfigError, value::ValueError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Crate-level error for the fallible edges of the library.
/// Compiling an expression never fails; only decoding dynamic input and
/// parsing configuration can.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("{0}")]
    Value(#[from] ValueError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("invalid filter json: {0}")]
    Json(#[from] serde_json::Error),
}

///
/// TESTS
///
