//! Audit configuration structs
//!
//! Defaults are merged with user overrides from an optional config file and
//! `AUDIT_*` environment variables.

use config::{Config, Environment, File};
use serde::Deserialize;

use audit_core::AccessEventKind;

/// Main audit configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    pub logging: LoggingConfig,
    pub target: TargetConfig,
    pub syslog: SyslogSettings,
}

/// Which event categories are recorded
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub check: CheckFlags,
    pub login: LoginFlags,
    pub logout: LogoutFlags,
    pub reset: ResetFlags,
}

/// Access-check event flags
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CheckFlags {
    pub request: bool,
    pub success: bool,
    pub failure: bool,
}

impl Default for CheckFlags {
    fn default() -> Self {
        Self {
            request: false,
            success: true,
            failure: true,
        }
    }
}

/// Login event flags
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoginFlags {
    pub success: bool,
    pub failure: bool,
}

impl Default for LoginFlags {
    fn default() -> Self {
        Self {
            success: true,
            failure: true,
        }
    }
}

/// Logout event flags.
///
/// `failure` gates nothing: the host emits no logout-failure event. It is
/// declared for compatibility with existing host config files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogoutFlags {
    pub success: bool,
    pub failure: bool,
}

impl Default for LogoutFlags {
    fn default() -> Self {
        Self {
            success: true,
            failure: true,
        }
    }
}

/// Password-reset event flags.
///
/// Declared for compatibility with existing host config files; no reset
/// events exist yet, so these flags gate nothing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResetFlags {
    pub request: bool,
    pub success: bool,
    pub failure: bool,
}

impl Default for ResetFlags {
    fn default() -> Self {
        Self {
            request: true,
            success: true,
            failure: true,
        }
    }
}

/// Which output sinks receive audit records
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    pub database: bool,
    pub syslog: bool,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            database: true,
            syslog: true,
        }
    }
}

/// Syslog sink settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SyslogSettings {
    /// Application-branded ident string prepended to each syslog line
    pub ident: String,
}

impl Default for SyslogSettings {
    fn default() -> Self {
        Self {
            ident: default_ident(),
        }
    }
}

fn default_ident() -> String {
    "audit".to_string()
}

impl AuditConfig {
    /// Load configuration: defaults, merged with an optional `audit` config
    /// file in the working directory, merged with `AUDIT_*` environment
    /// variables (`__` separates nesting, e.g. `AUDIT_TARGET__SYSLOG=false`).
    ///
    /// # Errors
    /// Returns an error if a source fails to parse or a value has the wrong
    /// type.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_file(None)
    }

    /// Load configuration from an explicit config file path (plus defaults
    /// and environment overrides)
    pub fn from_file(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        builder = match path {
            Some(path) => builder.add_source(File::with_name(path)),
            None => builder.add_source(File::with_name("audit").required(false)),
        };

        let merged = builder
            .add_source(
                // Env values arrive as strings; parse them into booleans
                Environment::with_prefix("AUDIT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(merged.try_deserialize()?)
    }

    /// Whether events of this kind are recorded at all
    pub fn enabled(&self, kind: AccessEventKind) -> bool {
        match kind {
            AccessEventKind::LoginSuccess => self.logging.login.success,
            AccessEventKind::LoginFailure => self.logging.login.failure,
            AccessEventKind::LogoutSuccess => self.logging.logout.success,
            AccessEventKind::CheckRequest => self.logging.check.request,
            AccessEventKind::CheckSuccess => self.logging.check.success,
            AccessEventKind::CheckFailure => self.logging.check.failure,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),
}
