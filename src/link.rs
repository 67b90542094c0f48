// Classification of Imgur URLs. Works on the URL alone; the client decides
// which endpoint to call for each kind of link.

use crate::error::{ImgurError, Result};
use url::Url;

/// What an Imgur URL points at, with the id extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImgurLink {
    /// `imgur.com/{id}` or `i.imgur.com/{id}.{ext}`
    Image(String),
    /// `imgur.com/a/{id}`
    Album(String),
    /// `imgur.com/gallery/{id}`; may be an album or an image.
    Gallery(String),
}

const SITE_HOSTS: [&str; 3] = ["imgur.com", "www.imgur.com", "m.imgur.com"];
const DIRECT_HOST: &str = "i.imgur.com";
// Site sections that are never image ids on their own.
const SECTIONS: [&str; 8] = ["a", "gallery", "t", "r", "user", "topic", "upload", "search"];

/// Parses `raw` into an [`ImgurLink`]. Query strings and fragments are
/// ignored, and a missing scheme is tolerated.
pub fn parse_imgur_url(raw: &str) -> Result<ImgurLink> {
    let raw = raw.trim();
    let not_imgur = || ImgurError::NotImgurUrl(raw.to_string());

    let url = match Url::parse(raw) {
        Ok(url) if url.has_host() => url,
        _ => Url::parse(&format!("https://{raw}")).map_err(|_| not_imgur())?,
    };
    let host = url.host_str().ok_or_else(not_imgur)?.to_ascii_lowercase();
    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    if host == DIRECT_HOST {
        let file = segments.last().ok_or_else(not_imgur)?;
        let (id, _ext) = file.rsplit_once('.').ok_or_else(|| ImgurError::Request {
            target: raw.to_string(),
            reason: "could not find the file ending of the direct image link".to_string(),
        })?;
        return non_empty(id, raw).map(ImgurLink::Image);
    }

    if !SITE_HOSTS.contains(&host.as_str()) {
        return Err(not_imgur());
    }

    match segments.as_slice() {
        ["a", id, ..] => non_empty(slug_id(id), raw).map(ImgurLink::Album),
        ["gallery", id, ..] => non_empty(slug_id(id), raw).map(ImgurLink::Gallery),
        [section] if SECTIONS.contains(section) => Err(not_imgur()),
        [id] => {
            // Some shared links still carry the file ending.
            let id = id.rsplit_once('.').map_or(*id, |(stem, _)| stem);
            non_empty(id, raw).map(ImgurLink::Image)
        }
        _ => Err(not_imgur()),
    }
}

// Newer links look like `gallery/some-title-words-AbC12`.
fn slug_id(segment: &str) -> &str {
    segment.rsplit('-').next().unwrap_or(segment)
}

fn non_empty(id: &str, raw: &str) -> Result<String> {
    if id.is_empty() {
        return Err(ImgurError::NotImgurUrl(raw.to_string()));
    }
    Ok(id.to_string())
}
