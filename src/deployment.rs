pub mod error;
pub mod guard;
pub mod task;

use crate::{
    config::AppConfig,
    domain::deployment_id::DeploymentId,
    membership::ClusterHandle,
};

use error::DeployError;

/// DeploymentRequest carries everything the work unit needs to start.
/// Built from the loaded config and handed over exactly once per
/// attempt; the instance count is whatever the guard granted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest {
    pub verticle_name: String,
    pub instances: u32,
    pub ha_enabled: bool,
}

impl DeploymentRequest {
    pub fn from_config(config: &AppConfig, granted_instances: u32) -> Self {
        Self {
            verticle_name: config.verticle.name.clone(),
            instances: granted_instances,
            ha_enabled: config.verticle.ha,
        }
    }
}

/// WorkUnit is the capability that launches the deployable unit of
/// application logic once the cluster session is up.
pub trait WorkUnit {
    fn deploy(
        &self,
        handle: &ClusterHandle,
        request: DeploymentRequest,
    ) -> impl Future<Output = Result<DeploymentId, DeployError>> + Send;
}
