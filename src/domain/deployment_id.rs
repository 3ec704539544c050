use std::fmt;

/// DeploymentId is handed back by a work unit once its deployment has
/// been accepted. One is issued per successful bootstrap attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeploymentId(uuid::Uuid);

impl DeploymentId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl fmt::Display for DeploymentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for DeploymentId {
    fn default() -> Self {
        Self::new()
    }
}
