// src/runner/process.rs
use crate::runner::ProcessOutcome;
use async_process::{Command, Stdio};
use futures_lite::io::{AsyncRead, AsyncReadExt};
use std::fmt;
use std::path::Path;

const READ_CHUNK_SIZE: usize = 4096;

/// Which output stream a chunk came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreamKind {
    Stdout,
    Stderr,
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamKind::Stdout => write!(f, "stdout"),
            StreamKind::Stderr => write!(f, "stderr"),
        }
    }
}

/// Run a command to completion and capture its output.
///
/// Standard input is closed. Standard output and standard error are drained
/// concurrently with waiting for exit; each chunk is appended to its buffer
/// and logged with `label` as a prefix.
///
/// No timeout is applied: a process that never exits keeps this future
/// pending forever.
///
/// # Arguments
///
/// * `command` - Executable to spawn
/// * `args` - Arguments passed to the executable
/// * `working_dir` - Working directory of the process
/// * `label` - Prefix for logged output, typically the service name
///
/// # Returns
///
/// The [`ProcessOutcome`]; a spawn failure is reported in the outcome
/// rather than as an error.
pub async fn run_command(
    command: &str,
    args: &[String],
    working_dir: &Path,
    label: &str,
) -> ProcessOutcome {
    let spawned = Command::new(command)
        .args(args)
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn();

    let mut child = match spawned {
        Ok(child) => child,
        Err(e) => {
            tracing::error!(
                command = %command,
                error = %e,
                "Failed to launch process for {}",
                label
            );
            return ProcessOutcome::launch_failed(e.to_string());
        }
    };

    tracing::debug!(command = %command, args = ?args, pid = child.id(), "Process spawned");

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let (stdout, stderr, status) = futures::join!(
        capture(stdout, label, StreamKind::Stdout),
        capture(stderr, label, StreamKind::Stderr),
        child.status()
    );

    match status {
        Ok(status) => ProcessOutcome::exited(status.code(), &stdout, &stderr),
        Err(e) => {
            tracing::error!(error = %e, "Failed to wait for process of {}", label);
            ProcessOutcome::launch_failed(format!("Failed to wait for process: {}", e))
        }
    }
}

/// Drain a stream until EOF, logging each chunk as it arrives.
async fn capture<R>(stream: Option<R>, label: &str, kind: StreamKind) -> String
where
    R: AsyncRead + Unpin,
{
    let Some(mut stream) = stream else {
        return String::new();
    };

    let mut collected = Vec::new();
    let mut buf = [0u8; READ_CHUNK_SIZE];

    loop {
        match stream.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => {
                let chunk = &buf[..n];
                collected.extend_from_slice(chunk);

                let text = String::from_utf8_lossy(chunk);
                match kind {
                    StreamKind::Stdout => tracing::info!("[{}] {}", label, text.trim()),
                    StreamKind::Stderr => tracing::error!("[{} ERROR] {}", label, text.trim()),
                }
            }
            Err(e) => {
                tracing::warn!(stream = %kind, error = %e, "Stopped reading output of {}", label);
                break;
            }
        }
    }

    // Decode once at the end so multi-byte characters split across chunks survive
    String::from_utf8_lossy(&collected).into_owned()
}
