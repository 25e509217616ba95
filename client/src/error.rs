use thiserror::Error;

/// Failure modes of a service call.
///
/// `Api` means the service answered and rejected the request; everything
/// else means no usable answer arrived.
#[derive(Debug, Error)]
pub enum Error {
    /// Non-success HTTP status. `detail` carries the structured message from
    /// the response body when one was present.
    #[error("service rejected the request (status {status})")]
    Api { status: u16, detail: Option<String> },

    /// The request never completed (connection refused, DNS, TLS, ...).
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// A success response whose body did not match the expected shape.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}
