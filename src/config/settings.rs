use std::net::IpAddr;
use std::path::{Path, PathBuf};

/// Loopback address the API binds to.
pub const DEFAULT_ADDRESS: &str = "127.0.0.1";
/// Port the API listens on.
pub const DEFAULT_PORT: u16 = 3998;
/// One worker gives a single cooperative event loop for request handling.
pub const DEFAULT_WORKERS: usize = 1;
/// Seconds in-flight requests get to finish once shutdown starts.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;
/// Interpreter used to run the autostart script.
pub const DEFAULT_INTERPRETER: &str = "bash";
/// Autostart script, relative to the project root.
pub const DEFAULT_SCRIPT: &str = "scripts/autostart-service.sh";
/// Action tag passed to the script before the service and url.
pub const START_ACTION: &str = "start";

/// How the autostart script is invoked.
///
/// The resulting command line is
/// `<interpreter> <script_path> start <service> <url>`, run with
/// `project_root` as its working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptConfig {
    /// Interpreter or executable to spawn.
    pub interpreter: String,
    /// Script handed to the interpreter as its first argument.
    pub script_path: PathBuf,
    /// Working directory of the spawned process.
    pub project_root: PathBuf,
}

impl ScriptConfig {
    /// Build the default script invocation for a project root.
    pub fn for_project_root(project_root: impl AsRef<Path>) -> Self {
        let project_root = project_root.as_ref().to_path_buf();
        Self {
            interpreter: DEFAULT_INTERPRETER.to_string(),
            script_path: project_root.join(DEFAULT_SCRIPT),
            project_root,
        }
    }
}

/// Settings for the HTTP listener and the script it triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address to bind; must be a loopback address.
    pub address: String,
    /// Port to bind; 0 picks a free port.
    pub port: u16,
    /// Number of HTTP worker event loops.
    pub workers: usize,
    /// Grace period for in-flight requests on shutdown.
    pub shutdown_timeout_secs: u64,
    /// Autostart script invocation.
    pub script: ScriptConfig,
}

impl ApiConfig {
    /// Build the compiled-in configuration for a project root.
    pub fn for_project_root(project_root: impl AsRef<Path>) -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            workers: DEFAULT_WORKERS,
            shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
            script: ScriptConfig::for_project_root(project_root),
        }
    }

    /// `address:port`, with IPv6 hosts in brackets.
    pub fn bind_address(&self) -> String {
        match self.address.parse::<IpAddr>() {
            Ok(IpAddr::V6(ip)) => format!("[{}]:{}", ip, self.port),
            _ => format!("{}:{}", self.address, self.port),
        }
    }
}
