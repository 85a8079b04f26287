use config::{Config, Environment, File, Map, Value, ValueKind};
use preface_domain::config::ConfigAccessor;
use std::borrow::Cow;
use std::path::PathBuf;
use tracing::{debug, info};

/// Base name of the configuration file looked up in the working directory
/// (`.preface.toml`, `.preface.yaml`, ...).
pub const DEFAULT_CONFIG_NAME: &str = ".preface";

/// Prefix of environment overrides (`PREFACE__LICENSE__TEXT` maps to `license.text`).
pub const ENV_PREFIX: &str = "PREFACE";

/// Custom error type for config loading.
#[preface_derive::preface_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Describes the layers [`Settings::load`] stacks, lowest precedence first.
#[derive(Debug, Default, Clone)]
pub struct SettingsSource {
    file: Option<PathBuf>,
    env: Option<Map<String, String>>,
    overrides: Vec<(String, String)>,
}

impl SettingsSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads this file instead of the optional [`DEFAULT_CONFIG_NAME`]; it must exist.
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Uses `vars` in place of the process environment.
    #[must_use]
    pub fn env(mut self, vars: Map<String, String>) -> Self {
        self.env = Some(vars);
        self
    }

    /// Overrides a dotted key; overrides win over file and environment.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// Like [`SettingsSource::set`], skipping `None`.
    #[must_use]
    pub fn set_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }
}

/// Loaded configuration, readable through [`ConfigAccessor`].
#[derive(Debug, Clone)]
pub struct Settings {
    config: Config,
}

impl Settings {
    /// Loads layered configuration.
    ///
    /// This function implements a layered configuration strategy:
    /// 1. **File**: the explicit file from [`SettingsSource::file`], or else an optional
    ///    `.preface.{toml,yaml,json,...}` in the working directory.
    /// 2. **Environment Overrides**: variables prefixed with `PREFACE__`. Nested keys are
    ///    separated by double underscores (`PREFACE__LICENSE__HEADER` maps to `license.header`).
    /// 3. **Explicit Overrides**: values registered with [`SettingsSource::set`].
    ///
    /// # Errors
    /// This function will return an error if:
    /// * The explicitly named configuration file cannot be found or parsed.
    /// * An override key is malformed.
    ///
    /// # Example
    /// ```rust
    /// use preface_kernel::config::{Settings, SettingsSource};
    /// use preface_kernel::domain::ConfigAccessor;
    ///
    /// let settings = Settings::load(SettingsSource::new().set("author", "Jane Doe")).unwrap();
    /// assert_eq!(settings.get_string("author").as_deref(), Some("Jane Doe"));
    /// ```
    pub fn load(source: SettingsSource) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        builder = match &source.file {
            Some(path) => {
                info!("Loading config from {}", path.display());
                builder.add_source(File::from(path.as_path()).required(true))
            },
            None => {
                debug!("Looking for optional {DEFAULT_CONFIG_NAME} config");
                builder.add_source(File::with_name(DEFAULT_CONFIG_NAME).required(false))
            },
        };

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX).separator("__").source(source.env),
        );

        for (key, value) in source.overrides {
            let context = format!("Invalid override for '{key}'");
            builder = builder.set_override(key, value).context(context)?;
        }

        let config = builder.build().context("Failed to build config")?;

        Ok(Self { config })
    }
}

impl ConfigAccessor for Settings {
    fn get_string(&self, key: &str) -> Option<String> {
        self.config.get_string(key).ok()
    }

    /// A key explicitly set to null (`license: ~`) counts as unset.
    fn is_set(&self, key: &str) -> bool {
        self.config.get::<Value>(key).is_ok_and(|value| !matches!(value.kind, ValueKind::Nil))
    }
}
