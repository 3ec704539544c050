use std::{fmt, path::PathBuf};

use crate::{domain::environment::Environment, errors};

/// Config failures abort the attempt before any deployment happens.
#[derive(thiserror::Error)]
pub enum ConfigError {
    #[error("No configuration found for environment `{0}` at {1}")]
    NotFound(Environment, PathBuf),
    #[error("Configuration at {0} could not be read or parsed")]
    ParseFailure(PathBuf, #[source] anyhow::Error),
    #[error("Configuration at {0} is missing required field `{1}`")]
    MissingRequiredField(PathBuf, &'static str),
}

impl fmt::Debug for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        errors::error_chain_fmt(self, f)
    }
}
