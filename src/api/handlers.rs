//! HTTP request handlers for the dashboard API.
//!
//! This module contains the Actix Web handlers for:
//! - `/health` for liveness checks
//! - `/autostart` (GET and POST) for triggering the autostart script
//! - CORS preflight and the not-found fallback

use crate::api::ack::AckBody;
use crate::api::types::{AutostartParams, ResponsePayload};
use crate::error::{Error, Result};
use crate::runner::{InvocationId, Launcher, StartRequest};

use actix_web::{
    HttpRequest, HttpResponse,
    web::{Bytes, Data, Query},
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::Instrument;

/// CORS preflight: answer any OPTIONS request with an empty 200
pub async fn preflight(req: HttpRequest) -> HttpResponse {
    tracing::debug!(path = %req.path(), "CORS preflight");
    HttpResponse::Ok().finish()
}

/// Health check
pub async fn health(req: HttpRequest) -> HttpResponse {
    tracing::info!("{} {}", req.method(), req.path());
    HttpResponse::Ok().json(ResponsePayload::health())
}

/// Start a service from `service` and `url` query parameters
pub async fn autostart_query(
    req: HttpRequest,
    launcher: Data<dyn Launcher>,
) -> Result<HttpResponse> {
    // Duplicate keys keep the last value
    let query = Query::<HashMap<String, String>>::from_query(req.query_string())
        .map(Query::into_inner)
        .unwrap_or_default();

    tracing::info!(query = ?query, "{} {}", req.method(), req.path());

    let params = AutostartParams {
        service: query.get("service").cloned(),
        url: query.get("url").cloned(),
    };

    accept(params.into_request()?, launcher.into_inner())
}

/// Start a service from a JSON body `{"service": ..., "url": ...}`
pub async fn autostart_json(
    req: HttpRequest,
    body: std::result::Result<Bytes, actix_web::Error>,
    launcher: Data<dyn Launcher>,
) -> Result<HttpResponse> {
    // An unreadable body is answered like a malformed one
    let body = body.map_err(|e| {
        tracing::warn!(error = %e, "Failed to read autostart body");
        Error::InvalidJson(e.to_string())
    })?;

    tracing::info!(body_len = body.len(), "{} {}", req.method(), req.path());

    let params = AutostartParams::from_json_body(&body).inspect_err(|e| {
        if let Error::InvalidJson(detail) = e {
            tracing::warn!(detail = %detail, "Rejected autostart body");
        }
    })?;

    accept(params.into_request()?, launcher.into_inner())
}

/// Fallback for every unknown path or method
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse> {
    tracing::info!("{} {} (no route)", req.method(), req.path());
    Err(Error::RouteNotFound)
}

/// Acknowledge a start request and hand it to the launcher in the background.
///
/// The acknowledgment goes out before anything runs; the launcher's outcome
/// is only logged.
fn accept(request: StartRequest, launcher: Arc<dyn Launcher>) -> Result<HttpResponse> {
    let payload = serde_json::to_vec(&ResponsePayload::starting(&request))
        .map_err(|e| Error::Serialization(e.to_string()))?;
    let (body, sent) = AckBody::new(payload);

    let span = tracing::info_span!(
        "autostart",
        invocation = %InvocationId::new(),
        service = %request.service
    );
    tokio::spawn(dispatch(launcher, request, sent).instrument(span));

    Ok(HttpResponse::Ok().content_type("application/json").body(body))
}

async fn dispatch(
    launcher: Arc<dyn Launcher>,
    request: StartRequest,
    sent: oneshot::Receiver<()>,
) {
    // Resolves once the acknowledgment body is gone, written or not
    let _ = sent.await;

    let outcome = launcher.run(&request).await;
    outcome.report(&request.service);
}
