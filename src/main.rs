use std::{env, net::SocketAddr, process::ExitCode};

use cluster_boot_rs::{
    bootstrap::{Bootstrap, Outcome},
    config::{file::FileConfigLoader, resolve_active_environment},
    deployment::task::TaskWorkUnit,
    domain::environment::Environment,
    membership::{ClusterMembershipConfig, local::LoopbackMembership},
    naive_logging,
};

/// Seed used when no external membership is wired up: the local node
/// discovers only itself, so nothing broadcasts across network
/// segments.
const LOCAL_SEED: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
    5701,
);

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    // Packaged processes run against prod unless `-active=<name>` says
    // otherwise.
    let environment = resolve_active_environment(&args, Environment::prod());

    let membership_config = ClusterMembershipConfig::tcp_ip(vec![LOCAL_SEED]);
    let config_loader = FileConfigLoader::new("conf");
    let work_unit = TaskWorkUnit::new(|instance| async move {
        naive_logging::log(&format!("worker-{instance}"), "instance started");
    });

    let outcome = Bootstrap::new(
        LoopbackMembership::new(),
        config_loader,
        work_unit,
        membership_config,
        environment,
    )
    .on_deploy_failure(|handle| handle.release())
    .start()
    .await;

    match outcome {
        Outcome::Deployed(_) => ExitCode::SUCCESS,
        Outcome::Failed { .. } => ExitCode::FAILURE,
    }
}
