use std::fmt;

use crate::errors;

#[derive(thiserror::Error)]
pub enum DeployError {
    #[error("Refusing to deploy `{0}` with zero instances")]
    NoInstances(String),
    #[error("Work unit `{0}` rejected the deployment")]
    Rejected(String, #[source] anyhow::Error),
}

impl fmt::Debug for DeployError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        errors::error_chain_fmt(self, f)
    }
}
