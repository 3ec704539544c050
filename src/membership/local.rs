use crate::naive_logging;

use super::{ClusterHandle, ClusterMembership, ClusterMembershipConfig, DiscoveryMode, error};

/// LoopbackMembership is the in-process membership used for local
/// development and the default binary: it validates the config and
/// establishes a session whose only member is the local node, so no
/// traffic ever leaves the machine.
#[derive(Debug, Default)]
pub struct LoopbackMembership;

impl LoopbackMembership {
    pub fn new() -> Self {
        Self
    }
}

impl ClusterMembership for LoopbackMembership {
    async fn join(
        &self,
        config: ClusterMembershipConfig,
    ) -> Result<ClusterHandle, error::JoinError> {
        config.validate()?;

        let members = match config.discovery() {
            DiscoveryMode::TcpIp { seed_members } => seed_members.clone(),
            DiscoveryMode::Multicast => vec![],
        };

        let handle = ClusterHandle::establish(members);
        naive_logging::log(
            &handle,
            &format!(
                "established loopback session with {} seed member(s)",
                handle.member_count()
            ),
        );

        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use super::*;

    #[tokio::test]
    async fn joins_with_a_valid_tcp_ip_config() -> anyhow::Result<()> {
        let seeds = vec![SocketAddr::from(([127, 0, 0, 1], 5701))];
        let config = ClusterMembershipConfig::tcp_ip(seeds);

        let handle = LoopbackMembership::new().join(config).await?;

        assert!(handle.is_clustered());
        assert_eq!(handle.member_count(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn refuses_an_invalid_config() {
        let config = ClusterMembershipConfig::tcp_ip(vec![]);

        let result = LoopbackMembership::new().join(config).await;

        assert!(matches!(result, Err(error::JoinError::ConfigInvalid(_))));
    }
}
