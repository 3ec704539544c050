pub mod error;
pub mod file;

use serde::Deserialize;

use crate::domain::environment::Environment;

use error::ConfigError;

/// CLI token selecting the active environment, e.g. `-active=prod`.
const ACTIVE_FLAG: &str = "-active=";

/// Scans CLI arguments for the environment selector. The first
/// selector token wins if its value is non-blank; otherwise the
/// default applies. The result is threaded through the loader and
/// stored once per attempt; there is no ambient global.
pub fn resolve_active_environment<I, S>(args: I, default: Environment) -> Environment
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .find_map(|arg| {
            arg.as_ref()
                .strip_prefix(ACTIVE_FLAG)
                .map(str::to_owned)
        })
        .and_then(Environment::named)
        .unwrap_or(default)
}

/// ConfigLoader is the capability that turns an environment name into
/// an application config snapshot.
pub trait ConfigLoader {
    fn load(
        &self,
        environment: &Environment,
    ) -> impl Future<Output = Result<AppConfig, ConfigError>> + Send;
}

/// AppConfig is the read-only snapshot a process boots with. Loaded
/// once per attempt and shared by reference afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppInfo,
    pub verticle: VerticleConfig,
    /// Stamped by the loader, never read from the file itself.
    #[serde(skip)]
    pub active: Environment,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppInfo {
    pub name: String,
    #[serde(default)]
    pub version: String,
}

/// The unit of work to deploy once the cluster session is up.
#[derive(Debug, Clone, Deserialize)]
pub struct VerticleConfig {
    pub name: String,
    pub instances: u32,
    #[serde(default)]
    pub ha: bool,
}
