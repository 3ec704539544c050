use std::{io, path::PathBuf};

use crate::{domain::environment::Environment, naive_logging};

use super::{AppConfig, ConfigLoader, error::ConfigError};

/// FileConfigLoader reads one yaml file per environment from a config
/// directory: `<dir>/config.<environment>.yaml`.
#[derive(Debug, Clone)]
pub struct FileConfigLoader {
    dir: PathBuf,
}

impl FileConfigLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, environment: &Environment) -> PathBuf {
        self.dir.join(format!("config.{environment}.yaml"))
    }
}

impl ConfigLoader for FileConfigLoader {
    async fn load(&self, environment: &Environment) -> Result<AppConfig, ConfigError> {
        let path = self.path_for(environment);
        naive_logging::log(environment, &format!("loading configuration from {}", path.display()));

        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound(environment.clone(), path));
            }
            Err(err) => return Err(ConfigError::ParseFailure(path, err.into())),
        };

        let mut config: AppConfig = serde_yaml_ng::from_str(&raw)
            .map_err(|err| ConfigError::ParseFailure(path.clone(), err.into()))?;

        if config.verticle.name.trim().is_empty() {
            return Err(ConfigError::MissingRequiredField(path, "verticle.name"));
        }

        config.active = environment.clone();

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    // ---------------------------------------------
    fn write_config(dir: &tempfile::TempDir, environment: &str, body: &str) -> anyhow::Result<()> {
        fs::write(dir.path().join(format!("config.{environment}.yaml")), body)?;

        Ok(())
    }

    const VALID: &str = "\
app:
  name: example-service
  version: 0.1.0
verticle:
  name: main-verticle
  instances: 2
  ha: true
";

    // ---------------------------------------------

    #[tokio::test]
    async fn loads_and_stamps_the_environment() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        write_config(&dir, "dev", VALID)?;

        let config = FileConfigLoader::new(dir.path())
            .load(&Environment::dev())
            .await?;

        assert_eq!(config.app.name, "example-service");
        assert_eq!(config.verticle.name, "main-verticle");
        assert_eq!(config.verticle.instances, 2);
        assert!(config.verticle.ha);
        assert_eq!(config.active, Environment::dev());

        Ok(())
    }

    #[tokio::test]
    async fn missing_file_is_not_found() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let result = FileConfigLoader::new(dir.path())
            .load(&Environment::prod())
            .await;

        assert!(matches!(result, Err(ConfigError::NotFound(_, _))));

        Ok(())
    }

    #[tokio::test]
    async fn unparseable_yaml_is_a_parse_failure() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        write_config(&dir, "dev", ": not yaml : [")?;

        let result = FileConfigLoader::new(dir.path())
            .load(&Environment::dev())
            .await;

        assert!(matches!(result, Err(ConfigError::ParseFailure(_, _))));

        Ok(())
    }

    #[tokio::test]
    async fn blank_verticle_name_is_rejected() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        write_config(
            &dir,
            "dev",
            "\
app:
  name: example-service
verticle:
  name: \"  \"
  instances: 1
",
        )?;

        let result = FileConfigLoader::new(dir.path())
            .load(&Environment::dev())
            .await;

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField(_, "verticle.name"))
        ));

        Ok(())
    }
}
