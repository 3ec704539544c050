pub mod context;
pub mod error;

use context::{BootstrapContext, Phase};
use error::BootstrapError;

use crate::{
    config::ConfigLoader,
    deployment::{DeploymentRequest, WorkUnit, guard::DeploymentGuard},
    domain::{deployment_id::DeploymentId, environment::Environment},
    membership::{ClusterHandle, ClusterMembership, ClusterMembershipConfig},
    naive_logging,
};

/// Outcome is the terminal result of one bootstrap attempt. There is
/// no partial success: either the work unit is deployed or the attempt
/// failed in a known phase with a captured cause.
#[derive(Debug)]
pub enum Outcome {
    Deployed(DeploymentId),
    Failed { phase: Phase, cause: BootstrapError },
}

impl Outcome {
    pub fn is_deployed(&self) -> bool {
        matches!(self, Outcome::Deployed(_))
    }
}

type DeployFailureHook = Box<dyn FnOnce(ClusterHandle) + Send>;

/// Bootstrap drives one attempt through join -> load config -> deploy,
/// strictly in that order, each stage starting only after the previous
/// one succeeded. The first failure ends the attempt: later stages are
/// skipped and nothing already established is rolled back.
pub struct Bootstrap<M, C, W> {
    membership: M,
    config_loader: C,
    work_unit: W,
    membership_config: ClusterMembershipConfig,
    environment: Environment,
    guard: DeploymentGuard,
    on_deploy_failure: Option<DeployFailureHook>,
}

impl<M, C, W> Bootstrap<M, C, W>
where
    M: ClusterMembership,
    C: ConfigLoader,
    W: WorkUnit,
{
    pub fn new(
        membership: M,
        config_loader: C,
        work_unit: W,
        membership_config: ClusterMembershipConfig,
        environment: Environment,
    ) -> Self {
        Self {
            membership,
            config_loader,
            work_unit,
            membership_config,
            environment,
            guard: DeploymentGuard::new(),
            on_deploy_failure: None,
        }
    }

    /// Installs the hook the host wants invoked with the live cluster
    /// handle if the deploy stage fails. Join and config failures do
    /// not trigger it; the session simply stays open.
    pub fn on_deploy_failure(mut self, hook: impl FnOnce(ClusterHandle) + Send + 'static) -> Self {
        self.on_deploy_failure = Some(Box::new(hook));
        self
    }

    /// Runs the attempt to a terminal phase. Consuming the
    /// orchestrator means a second start on the same context is
    /// unrepresentable; a fresh attempt needs a fresh `Bootstrap`.
    pub async fn start(mut self) -> Outcome {
        let mut context = BootstrapContext::new();
        let attempt = context.attempt_id();

        naive_logging::log(
            &attempt,
            &format!(
                "starting bootstrap attempt for environment `{}`",
                self.environment
            ),
        );

        context.advance(Phase::Joining);
        let handle = match self.membership.join(self.membership_config.clone()).await {
            Ok(handle) => handle,
            Err(err) => return fail(context, BootstrapError::Join(err)),
        };
        naive_logging::log(
            &attempt,
            &format!("joined cluster {handle}: clustered={}", handle.is_clustered()),
        );
        context.record_cluster_handle(handle.clone());
        context.advance(Phase::Joined);

        context.advance(Phase::LoadingConfig);
        let app_config = match self.config_loader.load(&self.environment).await {
            Ok(config) => config,
            Err(err) => {
                return fail(
                    context,
                    BootstrapError::Config(self.environment.clone(), err),
                );
            }
        };
        naive_logging::log(
            &attempt,
            &format!(
                "loaded configuration for `{} {}`",
                app_config.app.name, app_config.app.version
            ),
        );
        context.record_app_config(app_config.clone());
        context.advance(Phase::ConfigLoaded);

        let granted_instances = self.guard.claim(app_config.verticle.instances);
        let request = DeploymentRequest::from_config(&app_config, granted_instances);
        let verticle_name = request.verticle_name.clone();

        context.advance(Phase::Deploying);
        let deployment_id = match self.work_unit.deploy(&handle, request).await {
            Ok(deployment_id) => deployment_id,
            Err(err) => {
                if let Some(hook) = self.on_deploy_failure.take() {
                    if let Some(handle) = context.take_cluster_handle() {
                        hook(handle);
                    }
                }

                return fail(context, BootstrapError::Deploy(verticle_name, err));
            }
        };

        naive_logging::log(&attempt, &format!("deployment complete: {deployment_id}"));
        context.record_deployment_id(deployment_id);
        context.advance(Phase::Deployed);

        Outcome::Deployed(deployment_id)
    }
}

fn fail(mut context: BootstrapContext, cause: BootstrapError) -> Outcome {
    let phase = context.phase();
    context.advance(Phase::Failed);
    naive_logging::error(
        &context.attempt_id(),
        &format!("bootstrap failed during {phase}: {cause:?}"),
    );

    Outcome::Failed { phase, cause }
}
