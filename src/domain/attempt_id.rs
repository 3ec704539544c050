use std::fmt;

/// AttemptId identifies a single bootstrap attempt. It is the
/// correlation id on every log line the attempt produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttemptId(uuid::Uuid);

impl AttemptId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let id = self.0.to_string();
        write!(f, "[ boot {}... ]", &id[..8])
    }
}

impl Default for AttemptId {
    fn default() -> Self {
        Self::new()
    }
}
