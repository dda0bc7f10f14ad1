// Standard library
use std::env;
use std::path::{Path, PathBuf};

// 3rd party crates
use config::{Config, ConfigError, Environment, File, FileFormat};

// Current module imports
use super::constants::{CONFIG_PATH_ENV, DEFAULT_CONFIG, ENV_PREFIX, MAX_TIMEOUT};
use super::errors::{SettingsError, ValidationError};
use super::functions::{parse_duration, parse_listen};
use super::types::{Cli, ConfigManager, Settings, ValidatedSettings};

impl Settings {
    /// Effective log level; `debug = true` wins over `log_level`.
    pub fn get_log_level(&self) -> String {
        if self.debug {
            "debug".to_string()
        } else {
            self.log_level.to_lowercase()
        }
    }

    pub fn validate(&self) -> Result<ValidatedSettings, ValidationError> {
        let log_level = self.get_log_level();
        match log_level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(ValidationError::InvalidLogLevel(self.log_level.clone())),
        }

        let interval = parse_duration(&self.interval).ok_or_else(|| {
            ValidationError::InvalidDuration {
                field: "interval",
                value: self.interval.clone(),
            }
        })?;
        if interval.is_zero() {
            return Err(ValidationError::ZeroDuration("interval"));
        }

        let timeout = parse_duration(&self.timeout).ok_or_else(|| {
            ValidationError::InvalidDuration {
                field: "timeout",
                value: self.timeout.clone(),
            }
        })?;
        if timeout.is_zero() {
            return Err(ValidationError::ZeroDuration("timeout"));
        }
        if timeout > MAX_TIMEOUT {
            return Err(ValidationError::DurationTooLarge {
                field: "timeout",
                value: self.timeout.clone(),
                max: MAX_TIMEOUT,
            });
        }

        let listen = parse_listen(&self.listen)
            .ok_or_else(|| ValidationError::InvalidListen(self.listen.clone()))?;

        if self.hosts.split(',').all(|host| host.trim().is_empty()) {
            return Err(ValidationError::NoHosts);
        }

        Ok(ValidatedSettings {
            interval,
            timeout,
            listen,
            hosts: self.hosts.clone(),
            dns_servers: self.dns_servers.clone(),
            log_level,
        })
    }
}

impl ConfigManager {
    /// Loads and validates the configuration from all sources.
    pub fn new(cli: &Cli) -> Result<Self, SettingsError> {
        let config_path: Option<PathBuf> = Self::get_config_path(cli);
        let settings: Settings = Self::load_settings(config_path.as_deref(), cli)?;
        let settings: ValidatedSettings = settings.validate()?;

        Ok(ConfigManager {
            settings,
            config_path,
        })
    }

    /// Determines the configuration file path, if any.
    fn get_config_path(cli: &Cli) -> Option<PathBuf> {
        if let Some(path) = &cli.config {
            Some(path.clone())
        } else if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            Some(PathBuf::from(path))
        } else {
            dirs::config_dir().map(|dir| dir.join("hostlookuper").join("config.toml"))
        }
    }

    /// Loads the settings from the built-in defaults, the optional
    /// configuration file, environment variables and command-line flags, in
    /// that order.
    fn load_settings(config_path: Option<&Path>, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(false));
        }

        let settings: Config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .set_override_option("debug", cli.debug)?
            .set_override_option("interval", cli.interval.clone())?
            .set_override_option("timeout", cli.timeout.clone())?
            .set_override_option("listen", cli.listen.clone())?
            .set_override_option("hosts", cli.hosts.clone())?
            .set_override_option("dns_servers", cli.dns_servers.clone())?
            .set_override_option("log_level", cli.log_level.clone())?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_log_level(&self) -> &str {
        &self.settings.log_level
    }
}
