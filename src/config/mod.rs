//! Configuration module for the dashboard API.
//!
//! There is no configuration file: every setting is a compiled-in constant
//! collected into [`ApiConfig`]. The only runtime input is the project root,
//! which decides where the autostart script lives and where it runs.
//!
//! # Examples
//!
//! ```
//! use dashboard_api::config::{ApiConfig, DEFAULT_PORT, validate_config};
//!
//! let config = ApiConfig::for_project_root("/srv/project");
//! assert_eq!(config.port, DEFAULT_PORT);
//! assert!(config.script.script_path.ends_with("scripts/autostart-service.sh"));
//! validate_config(&config).unwrap();
//! ```
mod settings;
pub mod validator;

pub use settings::{
    ApiConfig, DEFAULT_ADDRESS, DEFAULT_INTERPRETER, DEFAULT_PORT, DEFAULT_SCRIPT,
    DEFAULT_SHUTDOWN_TIMEOUT_SECS, DEFAULT_WORKERS, START_ACTION, ScriptConfig,
};
pub use validator::validate_config;
