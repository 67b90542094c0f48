// CLI argument definitions via clap derive. Flag names follow the Imgur
// operations one to one; upload metadata and endpoint overrides are extras.

use clap::Parser;

use crate::upload::UploadKind;

/// Query and upload images on Imgur.
#[derive(Debug, Parser, Default)]
#[command(name = "imgur-cli", version)]
pub struct Cli {
    /// Your imgur client id. REQUIRED (or stored with --save-id).
    #[arg(long = "id", env = "IMGUR_CLIENT_ID", value_name = "CLIENT_ID")]
    pub client_id: Option<String>,

    /// Gets information based on the URL passed.
    #[arg(long)]
    pub url: Option<String>,

    /// Filepath to an image that will be uploaded to imgur
    /// (the image URL itself with --upload-type URL).
    #[arg(long, value_name = "PATH")]
    pub upload: Option<String>,

    /// How the upload is sent: binary, base64 or URL.
    #[arg(long, value_name = "TYPE", default_value = "binary")]
    pub upload_type: UploadKind,

    /// Title for the uploaded image.
    #[arg(long)]
    pub title: Option<String>,

    /// Description for the uploaded image.
    #[arg(long)]
    pub description: Option<String>,

    /// Album id (or deletehash for anonymous albums) to add the upload to.
    #[arg(long, value_name = "ALBUM")]
    pub to_album: Option<String>,

    /// The image ID to be queried.
    #[arg(long)]
    pub image: Option<String>,

    /// The album ID to be queried.
    #[arg(long)]
    pub album: Option<String>,

    /// The gallery image ID to be queried.
    #[arg(long)]
    pub gimage: Option<String>,

    /// The gallery album ID to be queried.
    #[arg(long)]
    pub galbum: Option<String>,

    /// Get the current rate limit.
    #[arg(long)]
    pub rate: bool,

    /// Use the RapidAPI endpoint with this key.
    #[arg(long, env = "IMGUR_RAPIDAPI_KEY", value_name = "KEY", hide_env_values = true)]
    pub rapidapi_key: Option<String>,

    /// Override the API base URL.
    #[arg(long, env = "IMGUR_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Store the client id so later runs can omit --id.
    #[arg(long)]
    pub save_id: bool,

    /// Log requests and raw responses.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether any flag asks for an API operation.
    pub fn has_work(&self) -> bool {
        self.rate
            || [
                &self.url,
                &self.upload,
                &self.image,
                &self.album,
                &self.gimage,
                &self.galbum,
            ]
            .iter()
            .any(|flag| flag.as_deref().is_some_and(|v| !v.is_empty()))
    }
}
