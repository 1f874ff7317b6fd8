use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub service: ServiceSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default = "default_debug")]
    pub debug: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSettings {
    #[serde(default = "default_service_name")]
    pub name: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: default_service_name(),
        }
    }
}

fn default_service_name() -> String {
    "FitHub ML Service".to_string()
}

fn default_debug() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: Option<String>,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: None,
            format: default_log_format(),
        }
    }
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Effective log filter: explicit level wins, otherwise `debug` in debug mode
    pub fn log_level(&self) -> &str {
        match &self.logging.level {
            Some(level) => level.as_str(),
            None if self.debug => "debug",
            None => "info",
        }
    }
}

/// The bare process variables honoured on top of the layered config
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub port: Option<String>,
    pub host: Option<String>,
    pub debug: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT").ok(),
            host: std::env::var("HOST").ok(),
            debug: std::env::var("DEBUG").ok(),
        }
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults (0.0.0.0:8000, debug on)
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables prefixed with FITHUB__
    /// 5. PORT, HOST and DEBUG
    pub fn load() -> Result<Self, ConfigError> {
        let builder = defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(prefixed_env());

        apply_overrides(builder, &EnvOverrides::from_env())?
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(
        path: P,
        overrides: &EnvOverrides,
    ) -> Result<Self, ConfigError> {
        let builder = defaults()?
            .add_source(File::from(path.as_ref()))
            .add_source(prefixed_env());

        apply_overrides(builder, overrides)?
            .build()?
            .try_deserialize()
    }

    /// Built-in defaults plus the given overrides, without touching files or the environment
    pub fn with_overrides(overrides: &EnvOverrides) -> Result<Self, ConfigError> {
        apply_overrides(defaults()?, overrides)?
            .build()?
            .try_deserialize()
    }
}

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

fn defaults() -> Result<Builder, ConfigError> {
    Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000_i64)?
        .set_default("debug", true)
}

// e.g., FITHUB__SERVER__WORKERS -> server.workers
fn prefixed_env() -> Environment {
    Environment::with_prefix("FITHUB")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn apply_overrides(
    mut builder: Builder,
    overrides: &EnvOverrides,
) -> Result<Builder, ConfigError> {
    if let Some(port) = &overrides.port {
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|e| ConfigError::Message(format!("invalid PORT {:?}: {}", port, e)))?;
        builder = builder.set_override("server.port", i64::from(port))?;
    }
    if let Some(host) = &overrides.host {
        builder = builder.set_override("server.host", host.as_str())?;
    }
    // Only the exact string "True" turns debug on
    if let Some(debug) = &overrides.debug {
        builder = builder.set_override("debug", debug == "True")?;
    }
    Ok(builder)
}
