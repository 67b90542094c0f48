// Library root
// -----------
// Client library for the Imgur v3 API plus the pieces the `imgur-cli`
// binary is built from.
//
// Module responsibilities:
// - `api`: `ImgurClient`, one method per API operation.
// - `models` / `ratelimit`: typed records decoded from responses.
// - `transport`: the HTTP seam (`reqwest` blocking by default).
// - `upload` / `link`: upload form bodies and Imgur URL classification.
// - `config`: endpoints and the persisted client id.
// - `cli` / `ui`: flag definitions and the flag-driven run loop.
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod link;
pub mod models;
pub mod ratelimit;
pub mod transport;
pub mod ui;
pub mod upload;

pub use api::ImgurClient;
pub use error::{ImgurError, Result};
pub use models::{AlbumInfo, GalleryAlbumInfo, GalleryImageInfo, GenericInfo, ImageInfo};
pub use ratelimit::RateLimit;
pub use upload::{UploadKind, UploadOptions};
