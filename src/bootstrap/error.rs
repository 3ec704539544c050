use std::fmt;

use crate::{
    config::error::ConfigError, deployment::error::DeployError, domain::environment::Environment,
    errors, membership::error::JoinError,
};

/// First failure wins: whichever stage fails first is captured here,
/// wrapped with the context needed to tell the phases apart.
#[derive(thiserror::Error)]
pub enum BootstrapError {
    #[error("Failed to join the cluster")]
    Join(#[source] JoinError),
    #[error("Failed to load configuration for environment `{0}`")]
    Config(Environment, #[source] ConfigError),
    #[error("Failed to deploy work unit `{0}`")]
    Deploy(String, #[source] DeployError),
}

impl fmt::Debug for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        errors::error_chain_fmt(self, f)
    }
}
