// Rate-limit counters. Imgur reports them on every response through the
// X-RateLimit-* headers, and the `credits` endpoint repeats them in its body.

use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const USER_LIMIT: &str = "x-ratelimit-userlimit";
pub const USER_REMAINING: &str = "x-ratelimit-userremaining";
pub const USER_RESET: &str = "x-ratelimit-userreset";
pub const CLIENT_LIMIT: &str = "x-ratelimit-clientlimit";
pub const CLIENT_REMAINING: &str = "x-ratelimit-clientremaining";

/// Remaining request quota for the user (IP) and for the client id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RateLimit {
    pub user_limit: i64,
    pub user_remaining: i64,
    /// Unix timestamp (seconds) at which the user quota resets.
    pub user_reset: i64,
    pub client_limit: i64,
    pub client_remaining: i64,
}

/// Why the rate-limit headers could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RateLimitHeaderError {
    #[error("header {0} is missing")]
    Missing(&'static str),
    #[error("header {header} has non-numeric value '{value}'")]
    Malformed { header: &'static str, value: String },
}

impl RateLimit {
    /// Reads all five counters from the response headers. Any missing or
    /// non-numeric header makes the whole extraction fail.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, RateLimitHeaderError> {
        Ok(Self {
            user_limit: header_number(headers, USER_LIMIT)?,
            user_remaining: header_number(headers, USER_REMAINING)?,
            user_reset: header_number(headers, USER_RESET)?,
            client_limit: header_number(headers, CLIENT_LIMIT)?,
            client_remaining: header_number(headers, CLIENT_REMAINING)?,
        })
    }
}

impl fmt::Display for RateLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "user {}/{} (resets at {}), client {}/{}",
            self.user_remaining,
            self.user_limit,
            self.user_reset,
            self.client_remaining,
            self.client_limit
        )
    }
}

fn header_number(headers: &HeaderMap, name: &'static str) -> Result<i64, RateLimitHeaderError> {
    let value = headers
        .get(name)
        .ok_or(RateLimitHeaderError::Missing(name))?;
    let text = value
        .to_str()
        .map_err(|_| RateLimitHeaderError::Malformed {
            header: name,
            value: String::from_utf8_lossy(value.as_bytes()).into_owned(),
        })?;
    text.trim()
        .parse()
        .map_err(|_| RateLimitHeaderError::Malformed {
            header: name,
            value: text.to_string(),
        })
}
