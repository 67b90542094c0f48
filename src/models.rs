// Records mirroring the JSON the Imgur API returns. Fields the API may send
// as `null` are `Option`; fields it may leave out fall back to their default.

use crate::ratelimit::RateLimit;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Every Imgur response is wrapped in `{ "data": ..., "success": ..., "status": ... }`.
#[derive(Deserialize, Debug)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub status: u16,
}

impl Envelope {
    /// Error text the API puts into `data.error` on failure. Older endpoints
    /// send a plain string, newer ones an object with a `message`.
    pub fn error_message(&self) -> Option<String> {
        match self.data.get("error")? {
            Value::String(message) => Some(message.clone()),
            Value::Object(error) => error
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        }
    }
}

/// A single image.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ImageInfo {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub datetime: i64,
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
    pub animated: bool,
    pub width: u32,
    pub height: u32,
    pub size: u64,
    pub views: u64,
    pub bandwidth: u64,
    /// Only present for images uploaded anonymously by this client.
    pub deletehash: Option<String>,
    pub name: Option<String>,
    pub section: Option<String>,
    pub link: String,
    pub gifv: Option<String>,
    pub mp4: Option<String>,
    pub mp4_size: Option<u64>,
    pub looping: Option<bool>,
    pub favorite: bool,
    pub nsfw: Option<bool>,
    pub vote: Option<String>,
    pub in_gallery: bool,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub limit: Option<RateLimit>,
}

/// An album and the images it contains.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AlbumInfo {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub datetime: i64,
    pub cover: Option<String>,
    pub cover_width: Option<u32>,
    pub cover_height: Option<u32>,
    pub account_url: Option<String>,
    pub account_id: Option<u64>,
    pub privacy: Option<String>,
    pub layout: Option<String>,
    pub views: u64,
    pub link: String,
    pub favorite: bool,
    pub nsfw: Option<bool>,
    pub section: Option<String>,
    pub images_count: u32,
    pub images: Vec<ImageInfo>,
    pub deletehash: Option<String>,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub limit: Option<RateLimit>,
}

/// An image as posted to the public gallery, with its social counters.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GalleryImageInfo {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub datetime: i64,
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
    pub animated: bool,
    pub width: u32,
    pub height: u32,
    pub size: u64,
    pub views: u64,
    pub bandwidth: u64,
    pub deletehash: Option<String>,
    pub gifv: Option<String>,
    pub mp4: Option<String>,
    pub mp4_size: Option<u64>,
    pub looping: Option<bool>,
    pub link: String,
    pub vote: Option<String>,
    pub favorite: bool,
    pub nsfw: Option<bool>,
    pub comment_count: u64,
    pub topic: Option<String>,
    pub topic_id: Option<u64>,
    pub section: Option<String>,
    pub account_url: Option<String>,
    pub account_id: Option<u64>,
    pub ups: u64,
    pub downs: u64,
    pub points: i64,
    pub score: i64,
    pub is_album: bool,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub limit: Option<RateLimit>,
}

/// An album as posted to the public gallery.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GalleryAlbumInfo {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub datetime: i64,
    pub cover: Option<String>,
    pub cover_width: Option<u32>,
    pub cover_height: Option<u32>,
    pub account_url: Option<String>,
    pub account_id: Option<u64>,
    pub privacy: Option<String>,
    pub layout: Option<String>,
    pub views: u64,
    pub link: String,
    pub ups: u64,
    pub downs: u64,
    pub points: i64,
    pub score: i64,
    pub is_album: bool,
    pub vote: Option<String>,
    pub favorite: bool,
    pub nsfw: Option<bool>,
    pub comment_count: u64,
    pub topic: Option<String>,
    pub topic_id: Option<u64>,
    pub images_count: u32,
    pub images: Vec<ImageInfo>,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub limit: Option<RateLimit>,
}

/// Whatever an Imgur URL pointed at.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum GenericInfo {
    Image(ImageInfo),
    Album(AlbumInfo),
    GalleryImage(GalleryImageInfo),
    GalleryAlbum(GalleryAlbumInfo),
}

impl GenericInfo {
    pub fn limit(&self) -> Option<RateLimit> {
        match self {
            GenericInfo::Image(info) => info.limit,
            GenericInfo::Album(info) => info.limit,
            GenericInfo::GalleryImage(info) => info.limit,
            GenericInfo::GalleryAlbum(info) => info.limit,
        }
    }
}

/// Records that carry the rate limit of the response they came from.
pub(crate) trait WithRateLimit {
    fn set_limit(&mut self, limit: Option<RateLimit>);
}

macro_rules! impl_with_rate_limit {
    ($($ty:ty),*) => {
        $(impl WithRateLimit for $ty {
            fn set_limit(&mut self, limit: Option<RateLimit>) {
                self.limit = limit;
            }
        })*
    };
}

impl_with_rate_limit!(ImageInfo, AlbumInfo, GalleryImageInfo, GalleryAlbumInfo);
