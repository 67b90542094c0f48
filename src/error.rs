// Error type shared by every API operation. Variants follow the stages of a
// request: building it, sending it, reading the body, decoding the JSON and
// finally the API's own verdict in the response envelope.

use thiserror::Error;

/// Errors that can occur while talking to the Imgur API.
#[derive(Debug, Error)]
pub enum ImgurError {
    /// The client id is empty; every request needs one.
    #[error("Imgur client id must not be empty")]
    MissingClientId,

    /// Upload type tag other than `binary`, `base64` or `URL`.
    #[error("Passed invalid upload type '{0}'. Please use binary/base64/URL.")]
    InvalidUploadType(String),

    /// The request could not be assembled (bad endpoint, bad header value, empty id).
    #[error("Could not create request for {target}: {reason}")]
    Request {
        /// Endpoint or resource the request was meant for.
        target: String,
        /// What went wrong.
        reason: String,
    },

    /// The request never produced a response.
    #[error("Could not reach {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A response arrived but its body could not be read.
    #[error("Problem reading the body for {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not the JSON we expected.
    #[error("Problem decoding json result from {url}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The API answered with `success: false`.
    #[error("Request to {url} failed with status {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Api {
        url: String,
        status: u16,
        message: Option<String>,
    },

    /// Input passed to URL resolution is not an Imgur link.
    #[error("{0} is not an imgur URL")]
    NotImgurUrl(String),
}

impl ImgurError {
    /// Status code reported by the API, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ImgurError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ImgurError>;
