// API client module: a small blocking client for the Imgur v3 REST API.
// Each public method maps to one documented endpoint and performs exactly
// one request (gallery links may take two, see `get_info_from_url`).

use crate::config::{DEFAULT_API_URL, RAPIDAPI_URL};
use crate::error::{ImgurError, Result};
use crate::link::{parse_imgur_url, ImgurLink};
use crate::models::{
    AlbumInfo, Envelope, GalleryAlbumInfo, GalleryImageInfo, GenericInfo, ImageInfo, WithRateLimit,
};
use crate::ratelimit::RateLimit;
use crate::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
use crate::upload::{form_body, UploadKind, UploadOptions};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

const RAPIDAPI_KEY_HEADER: &str = "x-rapidapi-key";

/// Client for the Imgur API, authenticated with a client id.
#[derive(Clone)]
pub struct ImgurClient {
    transport: Arc<dyn Transport>,
    base_url: Url,
    auth_headers: HeaderMap,
}

/// A decoded response body together with the rate limit from its headers.
struct Decoded<T> {
    data: T,
    limit: Option<RateLimit>,
}

impl ImgurClient {
    /// Create a client talking to the public Imgur endpoint over `reqwest`.
    pub fn new(client_id: &str) -> Result<Self> {
        Self::with_transport(client_id, Arc::new(ReqwestTransport::new()?))
    }

    /// Create a client that sends its requests through `transport`.
    pub fn with_transport(client_id: &str, transport: Arc<dyn Transport>) -> Result<Self> {
        let client_id = client_id.trim();
        if client_id.is_empty() {
            return Err(ImgurError::MissingClientId);
        }
        let value = HeaderValue::from_str(&format!("Client-ID {client_id}")).map_err(|e| {
            ImgurError::Request {
                target: "Authorization header".to_string(),
                reason: e.to_string(),
            }
        })?;
        let mut auth_headers = HeaderMap::new();
        auth_headers.insert(AUTHORIZATION, value);

        Ok(Self {
            transport,
            base_url: parse_base_url(DEFAULT_API_URL)?,
            auth_headers,
        })
    }

    /// Point the client at another API root, e.g. a local mock.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Route requests through RapidAPI, authenticating with `key` on top of
    /// the client id.
    pub fn with_rapidapi_key(mut self, key: &str) -> Result<Self> {
        let value = HeaderValue::from_str(key.trim()).map_err(|e| ImgurError::Request {
            target: "RapidAPI key header".to_string(),
            reason: e.to_string(),
        })?;
        self.auth_headers
            .insert(HeaderName::from_static(RAPIDAPI_KEY_HEADER), value);
        self.base_url = parse_base_url(RAPIDAPI_URL)?;
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Information about a single image.
    pub fn get_image_info(&self, id: &str) -> Result<ImageInfo> {
        self.get_record(&["image", id])
    }

    /// Information about an album, including its images.
    pub fn get_album_info(&self, id: &str) -> Result<AlbumInfo> {
        self.get_record(&["album", id])
    }

    /// Information about an image posted to the gallery.
    pub fn get_gallery_image_info(&self, id: &str) -> Result<GalleryImageInfo> {
        self.get_record(&["gallery", "image", id])
    }

    /// Information about an album posted to the gallery.
    pub fn get_gallery_album_info(&self, id: &str) -> Result<GalleryAlbumInfo> {
        self.get_record(&["gallery", "album", id])
    }

    /// Resolve an Imgur URL and fetch whatever it points at.
    ///
    /// Gallery links do not say whether they hold an album or an image, so
    /// the album endpoint is tried first and the image endpoint on failure.
    pub fn get_info_from_url(&self, url: &str) -> Result<GenericInfo> {
        match parse_imgur_url(url)? {
            ImgurLink::Image(id) => self.get_image_info(&id).map(GenericInfo::Image),
            ImgurLink::Album(id) => self.get_album_info(&id).map(GenericInfo::Album),
            ImgurLink::Gallery(id) => match self.get_gallery_album_info(&id) {
                Ok(album) => Ok(GenericInfo::GalleryAlbum(album)),
                Err(e) => {
                    debug!("{} is not a gallery album ({}), trying gallery image", id, e);
                    self.get_gallery_image_info(&id)
                        .map(GenericInfo::GalleryImage)
                }
            },
        }
    }

    /// Upload an image. `kind` is the wire tag `binary`, `base64` or `URL`;
    /// any other tag is rejected before a request is made.
    pub fn upload_image(
        &self,
        image: &[u8],
        kind: &str,
        options: &UploadOptions,
    ) -> Result<ImageInfo> {
        let kind: UploadKind = kind.parse()?;
        self.upload(image, kind, options)
    }

    /// Upload an image of a known kind. Each call creates a new image.
    pub fn upload(
        &self,
        image: &[u8],
        kind: UploadKind,
        options: &UploadOptions,
    ) -> Result<ImageInfo> {
        let url = self.endpoint(&["image"])?;
        let body = form_body(image, kind, options);
        debug!(kind = %kind, album = ?options.album, title = ?options.title, "Uploading image");

        let mut headers = self.auth_headers.clone();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        let decoded = self.send::<ImageInfo>(Method::POST, url, headers, Some(body.into_bytes()))?;
        Ok(attach(decoded))
    }

    /// Current rate limit. Read from the headers of the `credits` response,
    /// or from its body when the headers are missing.
    pub fn get_rate_limit(&self) -> Result<RateLimit> {
        let url = self.endpoint(&["credits"])?;
        let target = url.to_string();
        let decoded = self.send::<Value>(Method::GET, url, self.auth_headers.clone(), None)?;
        if let Some(limit) = decoded.limit {
            return Ok(limit);
        }
        serde_json::from_value(decoded.data).map_err(|source| ImgurError::Json {
            url: target,
            source,
        })
    }

    fn get_record<T>(&self, segments: &[&str]) -> Result<T>
    where
        T: DeserializeOwned + WithRateLimit,
    {
        let url = self.endpoint(segments)?;
        let decoded = self.send::<T>(Method::GET, url, self.auth_headers.clone(), None)?;
        Ok(attach(decoded))
    }

    /// Build `base_url` + escaped `segments`. Empty segments are refused so
    /// that e.g. an empty image id cannot turn into the upload endpoint.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(pos) = segments.iter().position(|s| s.trim().is_empty()) {
            let what = segments[..pos].join("/");
            return Err(ImgurError::Request {
                target: format!("{}{}", self.base_url, what),
                reason: "identifier must not be empty".to_string(),
            });
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ImgurError::Request {
                target: self.base_url.to_string(),
                reason: "base URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments.iter().map(|s| s.trim()));
        Ok(url)
    }

    fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        headers: HeaderMap,
        body: Option<Vec<u8>>,
    ) -> Result<Decoded<T>> {
        debug!("{} {}", method, url);
        let target = url.to_string();
        let response = self.transport.execute(HttpRequest {
            method,
            url,
            headers,
            body,
        })?;
        debug!(status = %response.status, "{}", String::from_utf8_lossy(&response.body));

        let limit = match RateLimit::from_headers(&response.headers) {
            Ok(limit) => Some(limit),
            Err(e) => {
                info!("Problem with extracting rate limits: {}", e);
                None
            }
        };
        let data = decode(&target, &response)?;
        Ok(Decoded { data, limit })
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| ImgurError::Request {
        target: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ImgurError::Request {
            target: raw.to_string(),
            reason: "base URL cannot carry a path".to_string(),
        });
    }
    Ok(url)
}

fn attach<T: WithRateLimit>(decoded: Decoded<T>) -> T {
    let mut data = decoded.data;
    data.set_limit(decoded.limit);
    data
}

/// Unwrap the `{data, success, status}` envelope, turning `success: false`
/// into an API error.
fn decode<T: DeserializeOwned>(url: &str, response: &HttpResponse) -> Result<T> {
    let envelope: Envelope =
        serde_json::from_slice(&response.body).map_err(|source| ImgurError::Json {
            url: url.to_string(),
            source,
        })?;
    if !envelope.success {
        let status = if envelope.status != 0 {
            envelope.status
        } else {
            response.status.as_u16()
        };
        return Err(ImgurError::Api {
            url: url.to_string(),
            status,
            message: envelope.error_message(),
        });
    }
    serde_json::from_value(envelope.data).map_err(|source| ImgurError::Json {
        url: url.to_string(),
        source,
    })
}
