//! Configuration loading

mod audit_config;

pub use audit_config::{
    AuditConfig, CheckFlags, ConfigError, LoggingConfig, LoginFlags, LogoutFlags, ResetFlags,
    SyslogSettings, TargetConfig,
};
