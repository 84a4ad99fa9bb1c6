use thiserror::Error;

/// Failure modes of a showcase fetch.
///
/// A request is attempted exactly once. Whether a failed fetch is worth
/// retrying is the caller's call, so each variant keeps enough context to
/// decide: the URL that was hit, and either the transport error or the
/// status line plus whatever body the server sent along.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced an HTTP response.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },
    /// A success response carried a body that is not valid JSON.
    #[error("response from {url} is not valid JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Status code of the failed request, when a response was received.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }
}
