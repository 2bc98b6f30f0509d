/// Process runner module for the dashboard API.
///
/// This module turns a validated start request into an external process,
/// captures what the process prints, and reduces it to a single outcome.
/// All components log through `tracing`.
///
/// # Components
///
/// * `request` - Validated start requests and invocation identifiers
/// * `launcher` - The `Launcher` seam and the script-backed implementation
/// * `process` - Spawning and incremental output capture
/// * `outcome` - The terminal result of one invocation
///
/// # Examples
///
/// Running an arbitrary command:
///
/// ```no_run
/// use dashboard_api::runner::run_command;
/// use std::path::Path;
///
/// # async fn example() {
/// let outcome = run_command(
///     "bash",
///     &["-c".to_string(), "echo ready".to_string()],
///     Path::new("."),
///     "demo",
/// )
/// .await;
/// assert!(outcome.succeeded);
/// assert_eq!(outcome.stdout, "ready");
/// # }
/// ```
pub mod launcher;
mod outcome;
mod process;
mod request;

pub use launcher::{Launcher, ScriptRunner};
pub use outcome::ProcessOutcome;
pub use process::run_command;
pub use request::{InvocationId, StartRequest};
