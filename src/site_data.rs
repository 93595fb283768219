//! Loading the resolved site data file.
//!
//! DESIGN
//! ======
//! The CMS export is resolved ahead of time into a YAML document matching
//! `client::state::site::SiteData`. It is read once at startup and shared
//! read-only for the life of the process.

use std::path::{Path, PathBuf};

use client::state::site::SiteData;

#[derive(Debug, thiserror::Error)]
pub enum SiteDataError {
    #[error("failed to read site data {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse site data {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Read and parse the site data file at `path`.
pub async fn load(path: &Path) -> Result<SiteData, SiteDataError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SiteDataError::Read { path: path.to_path_buf(), source })?;
    let data = parse(&raw).map_err(|source| SiteDataError::Parse { path: path.to_path_buf(), source })?;
    tracing::info!(
        path = %path.display(),
        title = %data.settings.title,
        nav_items = data.settings.navigation.len(),
        "site data loaded"
    );
    Ok(data)
}

/// Parse site data from YAML text.
pub fn parse(raw: &str) -> Result<SiteData, serde_yaml::Error> {
    serde_yaml::from_str(raw)
}

#[cfg(test)]
#[path = "site_data_test.rs"]
mod tests;
