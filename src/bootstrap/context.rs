use std::fmt;

use crate::{
    config::AppConfig,
    domain::{attempt_id::AttemptId, deployment_id::DeploymentId},
    membership::ClusterHandle,
    naive_logging,
};

/// A bootstrap attempt moves through these phases strictly forward.
/// `Deployed` and `Failed` are terminal; `Failed` is reachable from any
/// non-terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    NotStarted,
    Joining,
    Joined,
    LoadingConfig,
    ConfigLoaded,
    Deploying,
    Deployed,
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Phase::NotStarted => "not-started",
                Phase::Joining => "joining",
                Phase::Joined => "joined",
                Phase::LoadingConfig => "loading-config",
                Phase::ConfigLoaded => "config-loaded",
                Phase::Deploying => "deploying",
                Phase::Deployed => "deployed",
                Phase::Failed => "failed",
            }
        )
    }
}

/// BootstrapContext records the progress of a single attempt. It is
/// owned exclusively by the orchestrator and discarded once a terminal
/// phase is reached; a fresh attempt gets a fresh context.
#[derive(Debug)]
pub struct BootstrapContext {
    attempt_id: AttemptId,
    phase: Phase,
    cluster_handle: Option<ClusterHandle>,
    app_config: Option<AppConfig>,
    deployment_id: Option<DeploymentId>,
}

impl BootstrapContext {
    pub fn new() -> Self {
        Self {
            attempt_id: AttemptId::new(),
            phase: Phase::NotStarted,
            cluster_handle: None,
            app_config: None,
            deployment_id: None,
        }
    }

    pub fn attempt_id(&self) -> AttemptId {
        self.attempt_id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Phases never move backwards; a stale transition is a bug in the
    /// orchestrator, not a recoverable condition.
    pub fn advance(&mut self, next: Phase) {
        assert!(
            next > self.phase,
            "phase may not move backwards: {} -> {next}",
            self.phase,
        );

        self.phase = next;
        naive_logging::log(&self.attempt_id, &format!("entered phase: {next}"));
    }

    // Context fields populate strictly in phase order; each setter
    // insists its predecessor is already in place.

    pub fn record_cluster_handle(&mut self, handle: ClusterHandle) {
        self.cluster_handle = Some(handle);
    }

    pub fn record_app_config(&mut self, config: AppConfig) {
        debug_assert!(
            self.cluster_handle.is_some(),
            "config recorded before the cluster handle"
        );
        self.app_config = Some(config);
    }

    pub fn record_deployment_id(&mut self, deployment_id: DeploymentId) {
        debug_assert!(
            self.app_config.is_some(),
            "deployment id recorded before the config"
        );
        self.deployment_id = Some(deployment_id);
    }

    pub fn cluster_handle(&self) -> Option<&ClusterHandle> {
        self.cluster_handle.as_ref()
    }

    pub fn app_config(&self) -> Option<&AppConfig> {
        self.app_config.as_ref()
    }

    pub fn deployment_id(&self) -> Option<DeploymentId> {
        self.deployment_id
    }

    /// Hands the live session to the caller, e.g. for a shutdown hook.
    pub fn take_cluster_handle(&mut self) -> Option<ClusterHandle> {
        self.cluster_handle.take()
    }
}

impl Default for BootstrapContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::{AppInfo, VerticleConfig},
        domain::environment::Environment,
    };

    use super::*;

    #[test]
    fn phases_are_totally_ordered_by_progression() {
        let order = [
            Phase::NotStarted,
            Phase::Joining,
            Phase::Joined,
            Phase::LoadingConfig,
            Phase::ConfigLoaded,
            Phase::Deploying,
            Phase::Deployed,
            Phase::Failed,
        ];

        for pair in order.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn advances_through_the_happy_path() {
        let mut context = BootstrapContext::new();

        for phase in [
            Phase::Joining,
            Phase::Joined,
            Phase::LoadingConfig,
            Phase::ConfigLoaded,
            Phase::Deploying,
            Phase::Deployed,
        ] {
            context.advance(phase);
            assert_eq!(context.phase(), phase);
        }
    }

    #[test]
    fn failed_is_reachable_from_any_earlier_phase() {
        let mut context = BootstrapContext::new();
        context.advance(Phase::Joining);
        context.advance(Phase::Failed);

        assert_eq!(context.phase(), Phase::Failed);
    }

    #[test]
    fn fields_populate_in_phase_order() {
        let mut context = BootstrapContext::new();

        context.record_cluster_handle(ClusterHandle::establish(vec![]));
        assert!(context.cluster_handle().is_some());

        context.record_app_config(AppConfig {
            app: AppInfo {
                name: "example-service".to_owned(),
                version: String::new(),
            },
            verticle: VerticleConfig {
                name: "main-verticle".to_owned(),
                instances: 1,
                ha: false,
            },
            active: Environment::dev(),
        });
        assert!(context.app_config().is_some());

        context.record_deployment_id(DeploymentId::new());
        assert!(context.deployment_id().is_some());

        // The shutdown-hook path takes the session out of the context.
        assert!(context.take_cluster_handle().is_some());
        assert!(context.cluster_handle().is_none());
    }

    #[test]
    #[should_panic(expected = "phase may not move backwards")]
    fn refuses_to_move_backwards() {
        let mut context = BootstrapContext::new();
        context.advance(Phase::LoadingConfig);
        context.advance(Phase::Joining);
    }

    #[test]
    #[should_panic(expected = "phase may not move backwards")]
    fn refuses_to_stay_in_place() {
        let mut context = BootstrapContext::new();
        context.advance(Phase::Joining);
        context.advance(Phase::Joining);
    }
}
