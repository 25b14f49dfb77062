//! Error handling.

use axum::{
    http::header,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{event, Level};

/// Energy statistics server error type
///
/// This type encapsulates the various errors that may occur.
/// Each variant may result in a different API error response.
#[derive(Debug, Error)]
pub enum EnergyError {
    /// No record in the dataset matches the requested country
    #[error("Country not found")]
    CountryNotFound { country: String },

    /// Attempt to aggregate over an empty dataset
    #[error("No data available")]
    NoData,

    /// Error reading the dataset file
    #[error("failed to read dataset file {}", .path.display())]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing the dataset file
    #[error("failed to parse dataset file {}", .path.display())]
    DatasetParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Unexpected failure while handling a request
    #[error("internal error: {0}")]
    Internal(String),
}

/// Error starting or running the web server
#[derive(Debug, Error)]
pub enum ServerError {
    /// The host and port do not form a socket address
    #[error("invalid host name, IP address or port number {address}")]
    InvalidAddress {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// A TLS certificate or key file could not be located
    #[error("TLS file {path} could not be found")]
    TlsFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The TLS certificate or key could not be loaded
    #[error("failed to load TLS certificate files")]
    TlsConfig(#[source] std::io::Error),

    /// The server failed while running
    #[error("server error")]
    Serve(#[source] std::io::Error),
}

impl IntoResponse for EnergyError {
    /// Convert from an `EnergyError` into an [axum::response::Response].
    fn into_response(self) -> Response {
        ErrorResponse::from(self).into_response()
    }
}

/// A response to send in error cases
///
/// Serialises as `{"error": "<message>"}`.
#[derive(Deserialize, Serialize)]
struct ErrorResponse {
    /// HTTP status of the response
    #[serde(skip)]
    status: StatusCode,

    /// Error message
    error: String,
}

impl ErrorResponse {
    /// Return a new ErrorResponse
    ///
    /// # Arguments
    ///
    /// * `status`: HTTP status of the response
    /// * `error`: The error that occurred
    fn new<E>(status: StatusCode, error: &E) -> Self
    where
        E: std::error::Error + Send + Sync,
    {
        ErrorResponse {
            status,
            error: error.to_string(),
        }
    }

    /// Return a 404 not found ErrorResponse
    fn not_found<E>(error: &E) -> Self
    where
        E: std::error::Error + Send + Sync,
    {
        Self::new(StatusCode::NOT_FOUND, error)
    }

    /// Return a 500 internal server error ErrorResponse
    ///
    /// The details of the error are not exposed to the client.
    fn internal_server_error() -> Self {
        ErrorResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: "Internal Server Error".to_string(),
        }
    }
}

impl From<EnergyError> for ErrorResponse {
    /// Convert from an `EnergyError` into an `ErrorResponse`.
    fn from(error: EnergyError) -> Self {
        let response = match &error {
            // Not found
            EnergyError::CountryNotFound { country: _ } | EnergyError::NoData => {
                Self::not_found(&error)
            }

            // Internal server error
            EnergyError::DatasetRead { .. }
            | EnergyError::DatasetParse { .. }
            | EnergyError::Internal(_) => Self::internal_server_error(),
        };

        // Log server errors.
        if response.status.is_server_error() {
            log_error_chain(&error);
        }

        response
    }
}

/// Log an error followed by each of its causes.
pub fn log_error_chain(error: &dyn Error) {
    event!(Level::ERROR, "{}", error.to_string());
    let mut current = error.source();
    while let Some(source) = current {
        event!(Level::ERROR, "Caused by: {}", source.to_string());
        current = source.source();
    }
}

impl IntoResponse for ErrorResponse {
    /// Convert from an `ErrorResponse` into an `axum::response::Response`.
    ///
    /// Renders the response as JSON.
    fn into_response(self) -> Response {
        let json_body = serde_json::to_string(&self);
        match json_body {
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialise error response: {}", err),
            )
                .into_response(),
            Ok(json_body) => (
                self.status,
                [(&header::CONTENT_TYPE, mime::APPLICATION_JSON.to_string())],
                json_body,
            )
                .into_response(),
        }
    }
}
