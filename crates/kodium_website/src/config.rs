use std::fs;
use std::path::{Path, PathBuf};

use kodium::content::Site;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "kodium.toml";

#[derive(Error, Debug)]
pub enum LoadConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Loads the site configuration from `kodium.toml` in the given root directory.
pub fn load_site(root: &Path) -> Result<Site, LoadConfigError> {
    let path = root.join(CONFIG_FILE_NAME);

    let text = fs::read_to_string(&path).map_err(|source| LoadConfigError::Io {
        path: path.clone(),
        source,
    })?;

    let site: Site =
        toml::from_str(&text).map_err(|source| LoadConfigError::Toml { path, source })?;

    tracing::debug!(url = %site.url, name = %site.name, "Loaded site config");

    Ok(site)
}
