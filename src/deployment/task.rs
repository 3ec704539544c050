use std::sync::Arc;

use crate::{domain::deployment_id::DeploymentId, membership::ClusterHandle, naive_logging};

use super::{DeploymentRequest, WorkUnit, error::DeployError};

/// TaskWorkUnit deploys a verticle as a set of runtime tasks, one per
/// requested instance. The factory produces the future each instance
/// runs. With ha enabled, an instance that panics is respawned in
/// place; a clean exit ends its supervision.
pub struct TaskWorkUnit<F> {
    factory: Arc<F>,
}

impl<F, Fut> TaskWorkUnit<F>
where
    F: Fn(u32) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    pub fn new(factory: F) -> Self {
        Self {
            factory: Arc::new(factory),
        }
    }
}

impl<F, Fut> WorkUnit for TaskWorkUnit<F>
where
    F: Fn(u32) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn deploy(
        &self,
        handle: &ClusterHandle,
        request: DeploymentRequest,
    ) -> Result<DeploymentId, DeployError> {
        if request.instances == 0 {
            return Err(DeployError::NoInstances(request.verticle_name));
        }

        let deployment_id = DeploymentId::new();

        for instance in 0..request.instances {
            let factory = Arc::clone(&self.factory);

            if request.ha_enabled {
                tokio::spawn(supervise(deployment_id, instance, factory));
            } else {
                tokio::spawn(factory(instance));
            }
        }

        naive_logging::log(
            handle,
            &format!(
                "deployed `{}` with {} instance(s), ha={}",
                request.verticle_name, request.instances, request.ha_enabled
            ),
        );

        Ok(deployment_id)
    }
}

async fn supervise<F, Fut>(deployment_id: DeploymentId, instance: u32, factory: Arc<F>)
where
    F: Fn(u32) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    loop {
        let worker = tokio::spawn(factory(instance));

        match worker.await {
            Ok(()) => break,
            Err(err) if err.is_panic() => {
                naive_logging::log(
                    &deployment_id,
                    &format!("instance {instance} panicked; respawning"),
                );
            }
            // Cancelled during shutdown; nothing left to supervise.
            Err(_) => break,
        }
    }
}
