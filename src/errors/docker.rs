use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DockerError {
    #[error("Failed to set up TLS client for {endpoint}: {reason}")]
    Tls { endpoint: String, reason: String },

    #[error("TLS handshake with {endpoint} failed: {reason}")]
    TlsHandshake { endpoint: String, reason: String },

    #[error("Request to {endpoint} failed: {reason}")]
    Network { endpoint: String, reason: String },

    #[error("Docker engine at {endpoint} answered with HTTP {status_code}: {message}")]
    HttpStatus {
        endpoint: String,
        status_code: u16,
        message: String,
    },

    #[error("Failed to decode container list from {endpoint}: {reason}")]
    Decode { endpoint: String, reason: String },
}

impl DockerError {
    pub fn error_code(&self) -> &'static str {
        use crate::errors::codes::ErrorCode;

        match self {
            DockerError::Tls { .. } => ErrorCode::DOCKER_TLS_SETUP_FAILED,
            DockerError::TlsHandshake { .. } => ErrorCode::DOCKER_TLS_HANDSHAKE_FAILED,
            DockerError::Network { .. } => ErrorCode::DOCKER_REQUEST_FAILED,
            DockerError::HttpStatus { .. } => ErrorCode::DOCKER_HTTP_STATUS,
            DockerError::Decode { .. } => ErrorCode::DOCKER_DECODE_FAILED,
        }
    }

    /// Sorts a bollard request error into the taxonomy above.
    pub fn from_request(endpoint: &str, err: bollard::errors::Error) -> Self {
        use bollard::errors::Error as BollardError;

        let endpoint = endpoint.to_string();
        match err {
            BollardError::DockerResponseServerError {
                status_code,
                message,
            } => DockerError::HttpStatus {
                endpoint,
                status_code,
                message,
            },
            BollardError::JsonDataError { .. } | BollardError::JsonSerdeError { .. } => {
                DockerError::Decode {
                    endpoint,
                    reason: error_chain(&err),
                }
            }
            other if find_tls_error(&other).is_some() => DockerError::TlsHandshake {
                endpoint,
                reason: error_chain(&other),
            },
            other => DockerError::Network {
                endpoint,
                reason: error_chain(&other),
            },
        }
    }
}

/// Walks `source()`, stepping into the payload of wrapped `io::Error`s.
fn next_in_chain<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    match err.downcast_ref::<std::io::Error>() {
        Some(io) => io
            .get_ref()
            .map(|inner| inner as &(dyn StdError + 'static))
            .or_else(|| err.source()),
        None => err.source(),
    }
}

fn find_tls_error<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a rustls::Error> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(tls) = e.downcast_ref::<rustls::Error>() {
            return Some(tls);
        }
        current = next_in_chain(e);
    }
    None
}

/// Joins every message in the chain, skipping ones the previous message
/// already spells out.
pub(crate) fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut messages: Vec<String> = Vec::new();
    let mut current = Some(err);
    while let Some(e) = current {
        let message = e.to_string();
        let repeated = messages.last().is_some_and(|last| last.contains(&message));
        if !message.is_empty() && !repeated {
            messages.push(message);
        }
        current = next_in_chain(e);
    }
    messages.join(": ")
}
