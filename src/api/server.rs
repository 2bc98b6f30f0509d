//! Server lifecycle for the dashboard API.
//!
//! Owns the listening socket: binds it, runs the Actix Web server in a
//! background task, and stops it gracefully on SIGINT or SIGTERM.
//! Subprocesses already launched are not touched on shutdown.

use crate::api::{cors_headers, routes};
use crate::config::{ApiConfig, validate_config};
use crate::error::{Error, Result};
use crate::runner::Launcher;

use actix_web::{App, HttpServer, dev::ServerHandle, middleware, web::Data};
use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Termination signal that triggered shutdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGINT / ctrl-c
    Interrupt,
    /// SIGTERM
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => write!(f, "SIGINT"),
            ShutdownSignal::Terminate => write!(f, "SIGTERM"),
        }
    }
}

/// Wait for the first interrupt or termination signal.
///
/// # Errors
///
/// Returns an error if a signal handler cannot be installed.
pub async fn shutdown_signal() -> Result<ShutdownSignal> {
    let interrupt = async {
        tokio::signal::ctrl_c()
            .await
            .map(|()| ShutdownSignal::Interrupt)
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        signal(SignalKind::terminate())?.recv().await;
        Ok::<_, std::io::Error>(ShutdownSignal::Terminate)
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<std::io::Result<ShutdownSignal>>();

    let received = tokio::select! {
        result = interrupt => result,
        result = terminate => result,
    };

    received.map_err(|e| Error::Other(format!("Failed to listen for shutdown signals: {}", e)))
}

/// Builder for the API server
pub struct ApiServer;

impl ApiServer {
    /// Bind the listener and start serving in a background task.
    ///
    /// Actix's own signal handling is disabled; use
    /// [`ApiServerHandle::run_until_shutdown`] or [`ApiServerHandle::stop`].
    ///
    /// # Arguments
    ///
    /// * `config` - Listener and script settings
    /// * `launcher` - Launcher that start requests are dispatched to
    ///
    /// # Returns
    ///
    /// A `Result` containing an `ApiServerHandle` or an error
    pub fn start(config: &ApiConfig, launcher: Arc<dyn Launcher>) -> Result<ApiServerHandle> {
        validate_config(config)?;

        let launcher: Data<dyn Launcher> = Data::from(launcher);

        let server = HttpServer::new(move || {
            App::new()
                .wrap(cors_headers())
                .wrap(middleware::Logger::default())
                .app_data(launcher.clone())
                .configure(routes)
        })
        .workers(config.workers)
        .shutdown_timeout(config.shutdown_timeout_secs)
        .disable_signals()
        .bind((config.address.as_str(), config.port))
        .map_err(|e| Error::Bind(format!("{}: {}", config.bind_address(), e)))?;

        let addrs = server.addrs();
        let server = server.run();
        let server_handle = server.handle();
        let task = tokio::spawn(server);

        tracing::info!(addrs = ?addrs, workers = config.workers, "Dashboard API server started");

        Ok(ApiServerHandle {
            addrs,
            server_handle,
            task,
        })
    }
}

/// Handle for a running API server
pub struct ApiServerHandle {
    addrs: Vec<SocketAddr>,
    server_handle: ServerHandle,
    task: JoinHandle<std::io::Result<()>>,
}

impl ApiServerHandle {
    /// First bound address
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.addrs.first().copied()
    }

    /// All bound addresses
    pub fn addrs(&self) -> &[SocketAddr] {
        &self.addrs
    }

    /// Stop accepting connections, let in-flight responses finish, then wait
    /// for the server task to end.
    pub async fn stop(self) -> Result<()> {
        self.server_handle.stop(true).await;

        match self.task.await {
            Ok(Ok(())) => {
                tracing::info!("Server closed");
                Ok(())
            }
            Ok(Err(e)) => Err(Error::Other(format!("Server error: {}", e))),
            Err(e) => Err(Error::Other(format!("Server task failed: {}", e))),
        }
    }

    /// Serve until SIGINT or SIGTERM, then stop gracefully.
    pub async fn run_until_shutdown(self) -> Result<ShutdownSignal> {
        let signal = shutdown_signal().await?;
        tracing::info!(signal = %signal, "Shutting down dashboard API server");

        self.stop().await?;
        Ok(signal)
    }
}
