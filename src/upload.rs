// Upload payload handling: which kind of data is being sent and how it is
// laid out in the form body.

use crate::error::ImgurError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt;
use std::str::FromStr;
use url::form_urlencoded;

/// How the image bytes passed to an upload should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadKind {
    /// Raw file contents; base64-encoded before sending.
    #[default]
    Binary,
    /// Already base64-encoded text.
    Base64,
    /// A URL the API should fetch the image from.
    Url,
}

impl UploadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadKind::Binary => "binary",
            UploadKind::Base64 => "base64",
            UploadKind::Url => "URL",
        }
    }
}

impl FromStr for UploadKind {
    type Err = ImgurError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "binary" => Ok(UploadKind::Binary),
            "base64" => Ok(UploadKind::Base64),
            "URL" => Ok(UploadKind::Url),
            other => Err(ImgurError::InvalidUploadType(other.to_string())),
        }
    }
}

impl fmt::Display for UploadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional metadata attached to an upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOptions {
    /// Album id, or the album's deletehash for anonymous albums.
    pub album: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Builds the `application/x-www-form-urlencoded` body for `POST image`.
pub(crate) fn form_body(image: &[u8], kind: UploadKind, options: &UploadOptions) -> String {
    let mut form = form_urlencoded::Serializer::new(String::new());
    match kind {
        UploadKind::Binary => {
            form.append_pair("image", &STANDARD.encode(image));
            form.append_pair("type", "base64");
        }
        UploadKind::Base64 => {
            form.append_pair("image", &String::from_utf8_lossy(image));
            form.append_pair("type", "base64");
        }
        UploadKind::Url => {
            form.append_pair("image", &String::from_utf8_lossy(image));
            form.append_pair("type", "URL");
        }
    }

    let optional = [
        ("album", &options.album),
        ("title", &options.title),
        ("description", &options.description),
    ];
    for (key, value) in optional {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            form.append_pair(key, value);
        }
    }
    form.finish()
}
