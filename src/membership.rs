pub mod error;
pub mod local;

use std::{fmt, net::SocketAddr, sync::Arc, time::Duration};

use error::JoinError;

/// DiscoveryMode selects how a joining node finds the rest of the
/// cluster. The two mechanisms are mutually exclusive; picking one is
/// what disables the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryMode {
    /// Static seed list. The list must not be empty.
    TcpIp { seed_members: Vec<SocketAddr> },
    Multicast,
}

/// ClusterMembershipConfig carries everything a membership
/// implementation needs to establish a session: the discovery
/// mechanism and the connect/ping/ping-reply timeouts.
#[derive(Debug, Clone)]
pub struct ClusterMembershipConfig {
    discovery: DiscoveryMode,
    connect_timeout: Duration,
    ping_interval: Duration,
    ping_reply_interval: Duration,
}

impl ClusterMembershipConfig {
    const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
    const DEFAULT_PING_INTERVAL: Duration = Duration::from_secs(10);
    const DEFAULT_PING_REPLY_INTERVAL: Duration = Duration::from_secs(10);

    pub fn tcp_ip(seed_members: Vec<SocketAddr>) -> Self {
        Self::with_discovery(DiscoveryMode::TcpIp { seed_members })
    }

    pub fn multicast() -> Self {
        Self::with_discovery(DiscoveryMode::Multicast)
    }

    fn with_discovery(discovery: DiscoveryMode) -> Self {
        Self {
            discovery,
            connect_timeout: Self::DEFAULT_CONNECT_TIMEOUT,
            ping_interval: Self::DEFAULT_PING_INTERVAL,
            ping_reply_interval: Self::DEFAULT_PING_REPLY_INTERVAL,
        }
    }

    pub fn with_timeouts(
        mut self,
        connect_timeout: Duration,
        ping_interval: Duration,
        ping_reply_interval: Duration,
    ) -> Self {
        self.connect_timeout = connect_timeout;
        self.ping_interval = ping_interval;
        self.ping_reply_interval = ping_reply_interval;
        self
    }

    pub fn discovery(&self) -> &DiscoveryMode {
        &self.discovery
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn ping_interval(&self) -> Duration {
        self.ping_interval
    }

    pub fn ping_reply_interval(&self) -> Duration {
        self.ping_reply_interval
    }

    /// All timeouts must be positive, and TCP/IP discovery needs at
    /// least one seed member to dial.
    pub fn validate(&self) -> Result<(), JoinError> {
        if let DiscoveryMode::TcpIp { seed_members } = &self.discovery {
            if seed_members.is_empty() {
                return Err(JoinError::ConfigInvalid(
                    "TCP/IP discovery requires at least one seed member".to_owned(),
                ));
            }
        }

        let timeouts = [
            self.connect_timeout,
            self.ping_interval,
            self.ping_reply_interval,
        ];
        if timeouts.iter().any(Duration::is_zero) {
            return Err(JoinError::ConfigInvalid(
                "connect/ping/ping-reply timeouts must be positive".to_owned(),
            ));
        }

        Ok(())
    }
}

/// ClusterMembership is the capability that turns a config into a live
/// cluster session. Implementations own the transport; callers only
/// ever see the handle.
pub trait ClusterMembership {
    fn join(
        &self,
        config: ClusterMembershipConfig,
    ) -> impl Future<Output = Result<ClusterHandle, JoinError>> + Send;
}

/// ClusterHandle is the token proving a session was established. It is
/// cheap to clone; all clones refer to the same session, which spans
/// the process until released.
#[derive(Debug, Clone)]
pub struct ClusterHandle {
    session: Arc<Session>,
}

#[derive(Debug)]
struct Session {
    id: uuid::Uuid,
    members: Vec<SocketAddr>,
}

impl ClusterHandle {
    /// Only membership implementations establish sessions; the
    /// orchestrator never constructs a handle itself.
    pub(crate) fn establish(members: Vec<SocketAddr>) -> Self {
        Self {
            session: Arc::new(Session {
                id: uuid::Uuid::new_v4(),
                members,
            }),
        }
    }

    pub fn is_clustered(&self) -> bool {
        true
    }

    pub fn session_id(&self) -> uuid::Uuid {
        self.session.id
    }

    pub fn member_count(&self) -> usize {
        self.session.members.len()
    }

    /// Shutdown-hook surface: drops this reference to the session.
    /// The session itself ends when the last clone is gone.
    pub fn release(self) {
        crate::naive_logging::log(&self, "releasing cluster session");
    }
}

impl fmt::Display for ClusterHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let id = self.session.id.to_string();
        write!(f, "[ session {}... ]", &id[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], 5701))
    }

    #[test]
    fn accepts_tcp_ip_discovery_with_seeds() -> anyhow::Result<()> {
        ClusterMembershipConfig::tcp_ip(vec![seed()])
            .validate()
            .map_err(Into::into)
    }

    #[test]
    fn rejects_tcp_ip_discovery_without_seeds() {
        let result = ClusterMembershipConfig::tcp_ip(vec![]).validate();

        assert!(matches!(result, Err(JoinError::ConfigInvalid(_))));
    }

    #[test]
    fn rejects_zero_timeouts() {
        let config = ClusterMembershipConfig::tcp_ip(vec![seed()]).with_timeouts(
            Duration::ZERO,
            Duration::from_secs(10),
            Duration::from_secs(10),
        );

        assert!(matches!(config.validate(), Err(JoinError::ConfigInvalid(_))));
    }

    #[test]
    fn multicast_needs_no_seeds() -> anyhow::Result<()> {
        ClusterMembershipConfig::multicast()
            .validate()
            .map_err(Into::into)
    }

    #[test]
    fn handle_clones_share_one_session() {
        let handle = ClusterHandle::establish(vec![seed()]);
        let clone = handle.clone();

        assert_eq!(handle.session_id(), clone.session_id());
        assert_eq!(handle.member_count(), 1);
        assert!(handle.is_clustered());
    }
}
