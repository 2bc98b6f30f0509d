use crate::error::Error;

/// Terminal result of one subprocess invocation.
///
/// Exactly one outcome is produced per invocation. It either describes a
/// process that ran to exit or a process that could not be launched at all;
/// in the latter case `exit_code` is `None` and `launch_error` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// Whether the process exited with status 0
    pub succeeded: bool,
    /// Exit code, absent on launch failure or when killed by a signal
    pub exit_code: Option<i32>,
    /// Accumulated standard output, whitespace-trimmed
    pub stdout: String,
    /// Accumulated standard error, whitespace-trimmed
    pub stderr: String,
    /// Why the process could not be launched
    pub launch_error: Option<String>,
}

impl ProcessOutcome {
    /// Outcome of a process that ran and exited.
    pub fn exited(exit_code: Option<i32>, stdout: &str, stderr: &str) -> Self {
        Self {
            succeeded: exit_code == Some(0),
            exit_code,
            stdout: stdout.trim().to_string(),
            stderr: stderr.trim().to_string(),
            launch_error: None,
        }
    }

    /// Outcome of a process that never started.
    pub fn launch_failed(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            exit_code: None,
            stdout: String::new(),
            stderr: String::new(),
            launch_error: Some(message.into()),
        }
    }

    /// The failure this outcome represents, if any.
    pub fn error(&self) -> Option<Error> {
        if let Some(message) = &self.launch_error {
            return Some(Error::Launch(message.clone()));
        }

        if self.succeeded {
            return None;
        }

        let reason = match self.exit_code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        };
        Some(Error::ProcessFailed(reason))
    }

    /// Log the outcome for a service.
    ///
    /// This is the only place an outcome is reported; the HTTP caller has
    /// already been answered.
    pub fn report(&self, service: &str) {
        match self.error() {
            None => {
                tracing::info!(
                    exit_code = ?self.exit_code,
                    "Service {} started successfully",
                    service
                );
            }
            Some(e) => {
                tracing::error!(
                    error = %e,
                    exit_code = ?self.exit_code,
                    stdout = %self.stdout,
                    stderr = %self.stderr,
                    "Failed to start service {}",
                    service
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_zero_succeeds() {
        let outcome = ProcessOutcome::exited(Some(0), "  started\n", "");

        assert!(outcome.succeeded);
        assert_eq!(outcome.stdout, "started");
        assert!(outcome.error().is_none());
    }

    #[test]
    fn test_non_zero_exit_fails() {
        let outcome = ProcessOutcome::exited(Some(3), "", "port busy\n");

        assert!(!outcome.succeeded);
        assert_eq!(outcome.stderr, "port busy");
        match outcome.error() {
            Some(Error::ProcessFailed(reason)) => assert_eq!(reason, "exit code 3"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_signal_exit_fails_without_code() {
        let outcome = ProcessOutcome::exited(None, "", "");

        assert!(!outcome.succeeded);
        assert!(outcome.launch_error.is_none());
        assert!(matches!(outcome.error(), Some(Error::ProcessFailed(_))));
    }

    #[test]
    fn test_launch_failure() {
        let outcome = ProcessOutcome::launch_failed("No such file or directory");

        assert!(!outcome.succeeded);
        assert_eq!(outcome.exit_code, None);
        assert!(matches!(outcome.error(), Some(Error::Launch(_))));
    }
}
