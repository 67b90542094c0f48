// Where the client id and API endpoint come from. Flags and environment
// variables are handled by clap; this module adds the persisted client id
// so it does not have to be passed on every run.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default REST endpoint of the Imgur v3 API.
pub const DEFAULT_API_URL: &str = "https://api.imgur.com/3/";
/// Imgur v3 API as proxied by RapidAPI (formerly Mashape).
pub const RAPIDAPI_URL: &str = "https://imgur-apiv3.p.rapidapi.com/3/";

const APP_DIR: &str = "imgur-cli";
const CLIENT_ID_FILE: &str = "client_id";

/// Default location of the persisted client id:
/// `<config dir>/imgur-cli/client_id`, or the home directory when the
/// platform has no config dir.
pub fn client_id_path() -> PathBuf {
    let dir = dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    dir.join(APP_DIR).join(CLIENT_ID_FILE)
}

/// Reads a persisted client id. A missing or blank file yields `None`.
pub fn load_client_id(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(data) => {
            let id = data.trim();
            Ok((!id.is_empty()).then(|| id.to_string()))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

/// Persists the client id for future runs.
pub fn persist_client_id(path: &Path, client_id: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, client_id.trim())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Picks the client id: an explicit value (flag or env) wins over the
/// persisted one. Blank values count as absent.
pub fn resolve_client_id(explicit: Option<&str>, path: &Path) -> Result<Option<String>> {
    if let Some(id) = explicit.map(str::trim).filter(|id| !id.is_empty()) {
        return Ok(Some(id.to_string()));
    }
    load_client_id(path)
}
