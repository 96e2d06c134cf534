//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::SiteConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::routing::Preset;

/// Environment variable carrying the deployment base path.
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Command-line overrides, applied after the file and the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub preset: Option<Preset>,
    pub base: Option<String>,
    pub views_dir: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(self, config: &mut SiteConfig) {
        if let Some(preset) = self.preset {
            config.router.preset = preset;
        }
        if let Some(base) = self.base {
            config.router.base = base;
        }
        if let Some(dir) = self.views_dir {
            config.views.dir = Some(dir);
        }
    }
}

/// Load and validate configuration from a TOML file.
///
/// `BASE_URL` from the environment overrides `router.base`.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Read a TOML file and apply the `BASE_URL` override, without validating.
pub fn read_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config = parse_config(&content)?;
    apply_base_override(&mut config, std::env::var(BASE_URL_ENV).ok());
    Ok(config)
}

/// Parse configuration text without validating it.
pub fn parse_config(content: &str) -> Result<SiteConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Replace the configured base with an environment-provided one, if set.
pub fn apply_base_override(config: &mut SiteConfig, base: Option<String>) {
    if let Some(base) = base.filter(|b| !b.trim().is_empty()) {
        tracing::debug!(base = %base, "Base path overridden from environment");
        config.router.base = base;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogFormat;
    use crate::routing::Preset;
    use std::io::Write;

    const SAMPLE: &str = r#"
[router]
base = "/site/"
preset = "legacy"

[[routes]]
path = "/"
name = "root"
redirect = "/home"

[[routes]]
path = "/home"
name = "home"
component = "Home"

[views]
dir = "views"

[observability]
log_level = "debug"
log_format = "json"
"#;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config.router.base, "/site/");
        assert_eq!(config.router.preset, Preset::Legacy);
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[0].redirect.as_deref(), Some("/home"));
        assert_eq!(config.views.dir.as_deref(), Some("views"));
        assert_eq!(config.views.extension, "html");
        assert_eq!(config.observability.log_format, LogFormat::Json);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.router.base, "/");
        assert_eq!(config.router.preset, Preset::Current);
        assert!(config.routes.is_empty());
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_config("[router]\npreset = \"future\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            parse_config("[[routes]]\npath = \"/\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_base_override() {
        let mut config = SiteConfig::default();
        apply_base_override(&mut config, None);
        assert_eq!(config.router.base, "/");

        apply_base_override(&mut config, Some("".into()));
        assert_eq!(config.router.base, "/");

        apply_base_override(&mut config, Some("/blog-site/".into()));
        assert_eq!(config.router.base, "/blog-site/");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.routes[1].name, "home");
    }

    #[test]
    fn test_load_rejects_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[views]\nextension = \"\"\n").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: views.extension must not be empty"
        );
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let mut config = parse_config(SAMPLE).unwrap();
        ConfigOverrides {
            preset: Some(Preset::Current),
            base: Some("/other/".into()),
            views_dir: None,
        }
        .apply(&mut config);

        assert_eq!(config.router.preset, Preset::Current);
        assert_eq!(config.router.base, "/other/");
        assert_eq!(config.views.dir.as_deref(), Some("views"));
    }

    #[test]
    fn test_read_skips_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[views]\nextension = \"\"\n").unwrap();

        let config = read_config(file.path()).unwrap();
        assert_eq!(config.views.extension, "");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_config(&dir.path().join("absent.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
