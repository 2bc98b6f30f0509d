use crate::config::{START_ACTION, ScriptConfig};
use crate::runner::{ProcessOutcome, StartRequest, run_command};
use async_trait::async_trait;

/// Launches the start-up logic for a service.
///
/// The router only depends on this trait, so anything that can turn a
/// [`StartRequest`] into a [`ProcessOutcome`] can stand in for the script.
#[async_trait]
pub trait Launcher: Send + Sync {
    /// Run the start-up logic for `request` to completion.
    ///
    /// Failures are part of the returned outcome; this never errors.
    async fn run(&self, request: &StartRequest) -> ProcessOutcome;
}

/// Runs the autostart script as an external process.
///
/// # Example
///
/// ```no_run
/// use dashboard_api::config::ScriptConfig;
/// use dashboard_api::runner::{Launcher, ScriptRunner, StartRequest};
///
/// # async fn example() -> dashboard_api::Result<()> {
/// let runner = ScriptRunner::new(ScriptConfig::for_project_root("/srv/project"));
/// let request = StartRequest::from_params(
///     Some("web".to_string()),
///     Some("http://localhost:8080".to_string()),
/// )?;
///
/// let outcome = runner.run(&request).await;
/// println!("succeeded: {}", outcome.succeeded);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScriptRunner {
    config: ScriptConfig,
}

impl ScriptRunner {
    pub fn new(config: ScriptConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScriptConfig {
        &self.config
    }

    /// Arguments handed to the interpreter: `<script> start <service> <url>`
    pub fn args_for(&self, request: &StartRequest) -> Vec<String> {
        vec![
            self.config.script_path.to_string_lossy().into_owned(),
            START_ACTION.to_string(),
            request.service.clone(),
            request.url.clone(),
        ]
    }
}

#[async_trait]
impl Launcher for ScriptRunner {
    async fn run(&self, request: &StartRequest) -> ProcessOutcome {
        tracing::info!(
            "Starting auto-start for service: {}, URL: {}",
            request.service,
            request.url
        );

        run_command(
            &self.config.interpreter,
            &self.args_for(request),
            &self.config.project_root,
            &request.service,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_follow_script_contract() {
        let runner = ScriptRunner::new(ScriptConfig::for_project_root("/srv/project"));
        let request = StartRequest {
            service: "web".to_string(),
            url: "http://localhost:8080".to_string(),
        };

        assert_eq!(
            runner.args_for(&request),
            vec![
                "/srv/project/scripts/autostart-service.sh",
                "start",
                "web",
                "http://localhost:8080",
            ]
        );
    }
}
