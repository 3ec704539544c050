use std::fmt;

/// Environment names the configuration set a process boots with.
/// A name is never blank; blank selector values fall back to the
/// caller's default instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Environment(String);

impl Environment {
    pub fn dev() -> Self {
        Self("dev".to_owned())
    }

    pub fn test() -> Self {
        Self("test".to_owned())
    }

    pub fn prod() -> Self {
        Self("prod".to_owned())
    }

    /// Returns None for a blank name.
    pub fn named(name: impl AsRef<str>) -> Option<Self> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return None;
        }

        Some(Self(name.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::dev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_names() {
        assert_eq!(Environment::named(""), None);
        assert_eq!(Environment::named("   "), None);
    }

    #[test]
    fn trims_surrounding_whitespace() -> anyhow::Result<()> {
        let env = Environment::named(" staging ").ok_or_else(|| anyhow::anyhow!("blank"))?;
        assert_eq!(env.as_str(), "staging");

        Ok(())
    }
}
