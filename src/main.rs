use dashboard_api::{ApiConfig, ApiServer, ScriptRunner};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dashboard_api=info,actix_web=info"));

    fmt().with_env_filter(filter).with_target(true).init();

    let project_root = std::env::current_dir()?;
    let config = ApiConfig::for_project_root(&project_root);

    if !config.script.script_path.exists() {
        warn!(
            script = %config.script.script_path.display(),
            "Autostart script not found; start requests will fail until it exists"
        );
    }

    let launcher = Arc::new(ScriptRunner::new(config.script.clone()));
    let handle = ApiServer::start(&config, launcher)?;

    let base = match handle.local_addr() {
        Some(addr) => format!("http://{}", addr),
        None => format!("http://{}", config.bind_address()),
    };
    info!("Dashboard API server running at {}", base);
    info!("Project root: {}", config.script.project_root.display());
    info!("Autostart script: {}", config.script.script_path.display());
    info!("Available endpoints:");
    info!("  GET  {}/health", base);
    info!("  GET  {}/autostart?service=<name>&url=<url>", base);
    info!("  POST {}/autostart", base);

    handle.run_until_shutdown().await?;

    info!("Dashboard API server stopped");
    Ok(())
}
