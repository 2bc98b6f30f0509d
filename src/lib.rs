/*!
 # Dashboard API

 A small local control-plane endpoint that starts services on request.

 ## Overview

 Dashboard API provides functionality to:
 - Accept HTTP requests naming a service and a target url
 - Acknowledge them immediately with a "starting" payload
 - Run the autostart script for the service in the background
 - Log the script's output and outcome as they arrive

 The HTTP caller never learns how the script ended; failures to launch or
 non-zero exits are only visible in the log.

 ## Basic Usage

 ```no_run
 use dashboard_api::{ApiConfig, ApiServer, Result, ScriptRunner};
 use std::sync::Arc;

 #[tokio::main]
 async fn main() -> Result<()> {
     let config = ApiConfig::for_project_root("/srv/project");
     let launcher = Arc::new(ScriptRunner::new(config.script.clone()));

     // Serve on 127.0.0.1:3998 until SIGINT or SIGTERM
     let handle = ApiServer::start(&config, launcher)?;
     handle.run_until_shutdown().await?;

     Ok(())
 }
 ```

 ## Endpoints

 - `GET /health`
 - `GET /autostart?service=<name>&url=<url>`
 - `POST /autostart` with a JSON body `{"service": ..., "url": ...}`
*/

pub mod api;
pub mod config;
pub mod error;
pub mod runner;

pub use api::{ApiServer, ApiServerHandle};
pub use config::ApiConfig;
pub use error::{Error, Result};
pub use runner::{Launcher, ProcessOutcome, ScriptRunner, StartRequest};
