use crate::config::{ApiConfig, ScriptConfig};
use crate::error::{Error, Result};
use std::net::IpAddr;

/// Validates the listener settings
pub fn validate_listener(config: &ApiConfig) -> Result<()> {
    let ip: IpAddr = config.address.parse().map_err(|_| {
        Error::ConfigInvalid(format!("'{}' is not an IP address", config.address))
    })?;

    // Only loopback binds are allowed
    if !ip.is_loopback() {
        return Err(Error::ConfigInvalid(format!(
            "Address '{}' is not a loopback address",
            config.address
        )));
    }

    if config.workers == 0 {
        return Err(Error::ConfigInvalid(
            "At least one worker is required".to_string(),
        ));
    }

    Ok(())
}

/// Validates the script invocation
pub fn validate_script(config: &ScriptConfig) -> Result<()> {
    if config.interpreter.trim().is_empty() {
        return Err(Error::ConfigInvalid("Interpreter is empty".to_string()));
    }

    if config.script_path.as_os_str().is_empty() {
        return Err(Error::ConfigInvalid("Script path is empty".to_string()));
    }

    // Whether the script exists is checked per invocation: a missing script
    // is a process failure, not a configuration error.

    Ok(())
}

/// Full configuration validation
pub fn validate_config(config: &ApiConfig) -> Result<()> {
    validate_listener(config)?;
    validate_script(&config.script)?;

    Ok(())
}
