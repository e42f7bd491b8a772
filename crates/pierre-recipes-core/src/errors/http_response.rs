// ABOUTME: Axum IntoResponse implementation for AppError
// ABOUTME: Central error responder that logs server failures and renders JSON error bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorResponse};
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use tracing::{error, warn};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(
                error.code = ?self.code,
                error.message = %self.message,
                error.source = ?self.source,
                "Request failed with server error"
            );
        } else {
            warn!(
                error.code = ?self.code,
                error.message = %self.message,
                http.status = status.as_u16(),
                "Request rejected"
            );
        }

        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
