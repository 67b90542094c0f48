// HTTP transport seam. The client only describes requests; a `Transport`
// turns them into responses. `ReqwestTransport` is the real one, tests plug
// in their own.

use crate::error::{ImgurError, Result};
use reqwest::blocking::Client;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use url::Url;

/// A fully assembled request, ready to be sent.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Status, headers and the whole body of a response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Sends one request and reads the full response.
pub trait Transport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Blocking transport backed by `reqwest`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ImgurError::Request {
                target: "HTTP client".to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = request.url.to_string();
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        let built = builder.build().map_err(|e| ImgurError::Request {
            target: url.clone(),
            reason: e.to_string(),
        })?;

        let res = self
            .client
            .execute(built)
            .map_err(|source| ImgurError::Transport {
                url: url.clone(),
                source,
            })?;
        let status = res.status();
        let headers = res.headers().clone();
        let body = res
            .bytes()
            .map_err(|source| ImgurError::Body { url, source })?
            .to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_host_is_a_transport_error() {
        let transport = ReqwestTransport::new().unwrap();
        let request = HttpRequest {
            method: Method::GET,
            url: Url::parse("http://127.0.0.1:1/3/image/abc").unwrap(),
            headers: HeaderMap::new(),
            body: None,
        };
        match transport.execute(request) {
            Err(ImgurError::Transport { url, .. }) => {
                assert_eq!(url, "http://127.0.0.1:1/3/image/abc")
            }
            other => panic!("Expected transport error, got {:?}", other.map(|r| r.status)),
        }
    }
}
