// UI layer: runs the operations requested on the command line, one after
// the other, and prints each resulting record as pretty JSON. A failing
// operation is logged and the run moves on to the next one.

use crate::api::ImgurClient;
use crate::cli::Cli;
use crate::upload::{UploadKind, UploadOptions};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io::Write;
use std::time::Duration;
use tracing::{error, info};

/// Run every operation requested in `cli` against `client`, writing the
/// records to `out`. Returns how many operations failed.
///
/// Order: upload, rate, image, album, gimage, galbum, url.
pub fn run<W: Write>(cli: &Cli, client: &ImgurClient, out: &mut W) -> Result<usize> {
    let mut failed = 0;

    if let Some(upload) = non_empty(&cli.upload) {
        info!("*** IMAGE UPLOAD ***");
        match read_payload(upload, cli.upload_type) {
            Ok(payload) => {
                let options = UploadOptions {
                    album: cli.to_album.clone(),
                    title: cli.title.clone(),
                    description: cli.description.clone(),
                };
                let spinner = spinner("Uploading...");
                let result = client.upload(&payload, cli.upload_type, &options);
                spinner.finish_and_clear();
                failed += report(out, "UploadImage", result)?;
            }
            Err(e) => {
                error!("{:#}", e);
                failed += 1;
            }
        }
    }

    if cli.rate {
        info!("*** RATE LIMIT ***");
        failed += report(out, "GetRateLimit", client.get_rate_limit())?;
    }

    if let Some(id) = non_empty(&cli.image) {
        info!("*** IMAGE ***");
        failed += report(out, "GetImageInfo", client.get_image_info(id))?;
    }

    if let Some(id) = non_empty(&cli.album) {
        info!("*** ALBUM ***");
        failed += report(out, "GetAlbumInfo", client.get_album_info(id))?;
    }

    if let Some(id) = non_empty(&cli.gimage) {
        info!("*** GALLERY IMAGE ***");
        failed += report(out, "GetGalleryImageInfo", client.get_gallery_image_info(id))?;
    }

    if let Some(id) = non_empty(&cli.galbum) {
        info!("*** GALLERY ALBUM ***");
        failed += report(out, "GetGalleryAlbumInfo", client.get_gallery_album_info(id))?;
    }

    if let Some(url) = non_empty(&cli.url) {
        info!("*** URL ***");
        let result = client.get_info_from_url(url);
        if let Some(limit) = result.as_ref().ok().and_then(|info| info.limit()) {
            info!("Rate limit: {}", limit);
        }
        failed += report(out, "GetInfoFromURL", result)?;
    }

    Ok(failed)
}

fn non_empty(flag: &Option<String>) -> Option<&str> {
    flag.as_deref().filter(|v| !v.is_empty())
}

/// Print the record, or log the error with its causes. Returns 1 on failure
/// so callers can count; only a broken `out` is propagated.
fn report<T, W>(out: &mut W, operation: &str, result: crate::error::Result<T>) -> Result<usize>
where
    T: Serialize,
    W: Write,
{
    match result {
        Ok(record) => {
            let json = serde_json::to_string_pretty(&record)
                .with_context(|| format!("Failed to render {operation} result"))?;
            writeln!(out, "{json}")?;
            Ok(0)
        }
        Err(e) => {
            error!("Error in {}: {:#}", operation, anyhow::Error::from(e));
            Ok(1)
        }
    }
}

/// For URL uploads the flag value is the image URL itself; otherwise it is
/// a path whose contents are sent.
fn read_payload(upload: &str, kind: UploadKind) -> Result<Vec<u8>> {
    if kind == UploadKind::Url {
        return Ok(upload.as_bytes().to_vec());
    }
    std::fs::read(upload).with_context(|| format!("Could not read file {upload}"))
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
