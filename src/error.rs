use reqwest::StatusCode;

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request did not complete before the per-attempt deadline.
    #[error("request timed out: {0}")]
    Timeout(reqwest::Error),
    /// Network or request execution error from `reqwest`.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// Retryable HTTP status (`400`, `429`, `500`, `502`, `503`, `504`).
    #[error("http error {status} (transient): {body}")]
    TransientHttp { status: u16, body: String },
    /// Any other non-success HTTP status.
    #[error("http error {status}: {body}")]
    FatalHttp { status: u16, body: String },
    /// Response body was not a JSON array of country records.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl FetchError {
    /// Classifies a `reqwest` failure that happened before a status was read.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Transport(err)
        }
    }

    /// Classifies a non-success HTTP status.
    pub(crate) fn from_status(status: StatusCode, body: String) -> Self {
        let status = status.as_u16();
        if is_transient_status(status) {
            Self::TransientHttp { status, body }
        } else {
            Self::FatalHttp { status, body }
        }
    }

    /// Returns `true` when the failure is eligible for another attempt.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout(_) | Self::TransientHttp { .. } => true,
            Self::Transport(err) => is_transient_transport(err),
            Self::FatalHttp { .. } | Self::MalformedResponse(_) => false,
        }
    }

    /// HTTP status code, when the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::TransientHttp { status, .. } | Self::FatalHttp { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn is_transient_status(status: u16) -> bool {
    matches!(status, 400 | 429 | 500 | 502 | 503 | 504)
}

fn is_transient_transport(err: &reqwest::Error) -> bool {
    err.is_timeout()
        || err.is_request()
        || err.is_body()
        // is_connect() is not available on wasm32 targets (no TCP)
        || {
            #[cfg(not(target_arch = "wasm32"))]
            { err.is_connect() }
            #[cfg(target_arch = "wasm32")]
            { false }
        }
}
