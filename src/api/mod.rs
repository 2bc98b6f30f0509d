//! HTTP API for the dashboard autostart endpoint, built on Actix Web.
//!
//! The router answers every request exactly once. Start requests are
//! acknowledged immediately and handed to a [`Launcher`](crate::runner::Launcher)
//! in the background; the launcher's outcome is logged, never returned.
//!
//! | Method  | Path         | Behavior                                      |
//! |---------|--------------|-----------------------------------------------|
//! | OPTIONS | any          | 200, empty body                               |
//! | any     | `/health`    | 200 `{status, timestamp}`                     |
//! | GET     | `/autostart` | `service` and `url` from the query string     |
//! | POST    | `/autostart` | `service` and `url` from a JSON body          |
//! | any     | anything else| 404 `{error, availableEndpoints}`             |

pub use self::server::{ApiServer, ApiServerHandle, ShutdownSignal, shutdown_signal};
pub use self::types::{AVAILABLE_ENDPOINTS, AutostartParams, ResponsePayload};

mod ack;
pub mod actix_error;
pub mod handlers;
pub mod server;
pub mod types;

use actix_web::{guard, middleware::DefaultHeaders, web};

/// Headers added to every response
///
/// Any origin may call the API; the content type is JSON unless a handler set
/// its own.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Methods", "GET, POST, OPTIONS"))
        .add(("Access-Control-Allow-Headers", "Content-Type"))
        .add(("Content-Type", "application/json"))
}

/// Largest POST body read before parsing
pub const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Register the API routes.
///
/// The launcher must be registered separately as `Data<dyn Launcher>`.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
        .service(
            // Registered first so preflight wins on every path
            web::resource("/{tail:.*}")
                .guard(guard::Options())
                .to(handlers::preflight),
        )
        .service(web::resource("/health").to(handlers::health))
        .service(
            web::resource("/autostart")
                .route(web::get().to(handlers::autostart_query))
                .route(web::post().to(handlers::autostart_json))
                .default_service(web::to(handlers::not_found)),
        )
        .default_service(web::to(handlers::not_found));
}
