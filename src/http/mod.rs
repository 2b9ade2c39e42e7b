mod client;
mod request;
mod response;

pub use client::Client;
pub use request::HttpRequest;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("json marshal request body")]
    SerializeRequest {
        #[source]
        cause: serde_json::Error,
    },
    #[error("creating request for {url}")]
    BuildRequest {
        url: String,
        #[source]
        cause: reqwest::Error,
    },
    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("sending request")]
    Transport {
        #[source]
        cause: reqwest::Error,
    },
    #[error("reading response body")]
    ReadResponse {
        #[source]
        cause: reqwest::Error,
    },
    #[error("non {expected} response: {status}: {body}")]
    UnexpectedStatus {
        expected: u16,
        status: String,
        body: String,
    },
    #[error("unmarshaling response body")]
    ParseResponse {
        #[source]
        cause: serde_json::Error,
    },
    #[error("reading file for upload {}", path.display())]
    ReadAsset {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
}
