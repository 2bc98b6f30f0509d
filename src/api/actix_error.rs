//! Actix Web error adapters for dashboard API errors.
//!
//! This module implements Actix Web's `ResponseError` for the crate's error
//! type, so handlers can return `Result` and have request errors rendered as
//! the API's JSON payloads.

use crate::api::types::ResponsePayload;
use crate::error::Error;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};

impl ResponseError for Error {
    fn error_response(&self) -> HttpResponse {
        let payload = match self {
            Error::RouteNotFound => ResponsePayload::not_found(self),
            _ => ResponsePayload::error(self),
        };

        HttpResponse::build(self.status_code())
            .content_type("application/json")
            .json(payload)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingParameters => StatusCode::BAD_REQUEST,
            Error::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Error::RouteNotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
