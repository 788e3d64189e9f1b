use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FuzzError {
    #[error("SSL error occurred while sending request: {0}")]
    Tls(reqwest::Error),

    #[error("Error occurred while sending request: {0}")]
    Request(reqwest::Error),
}

impl FuzzError {
    pub fn from_request(err: reqwest::Error) -> Self {
        if is_tls_error(&err) {
            FuzzError::Tls(err)
        } else {
            FuzzError::Request(err)
        }
    }
}

// reqwest does not expose a TLS error kind; inspect the source chain instead.
fn is_tls_error(err: &reqwest::Error) -> bool {
    let mut source = err.source();
    while let Some(inner) = source {
        let msg = inner.to_string().to_lowercase();
        if msg.contains("certificate") || msg.contains("handshake") || msg.contains("tls") {
            return true;
        }
        source = inner.source();
    }
    false
}
