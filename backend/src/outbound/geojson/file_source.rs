//! File-backed region source.
//!
//! The document is re-read on every load; nothing is cached between calls.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cap_std::{ambient_authority, fs::Dir};
use serde_json::Value;
use tracing::debug;

use super::dto::FeatureCollectionDto;
use crate::domain::Region;
use crate::domain::ports::{RegionSource, RegionSourceError};

/// Region source reading a GeoJSON feature collection from disk.
#[derive(Debug, Clone)]
pub struct GeoJsonFileRegionSource {
    path: PathBuf,
}

impl GeoJsonFileRegionSource {
    /// Serve regions from the document at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Vec<u8>, RegionSourceError> {
        let file_name = self.path.file_name().ok_or_else(|| {
            RegionSourceError::unavailable(format!(
                "{} does not name a file",
                self.path.display()
            ))
        })?;
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let directory = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|err| map_read_error(&self.path, &err))?;
        directory
            .read(Path::new(file_name))
            .map_err(|err| map_read_error(&self.path, &err))
    }
}

#[async_trait]
impl RegionSource for GeoJsonFileRegionSource {
    async fn load_regions(&self) -> Result<Vec<Region>, RegionSourceError> {
        let bytes = self.read_document()?;
        let regions = parse_regions(&bytes)?;
        debug!(
            path = %self.path.display(),
            regions = regions.len(),
            "region document loaded"
        );
        Ok(regions)
    }
}

fn parse_regions(body: &[u8]) -> Result<Vec<Region>, RegionSourceError> {
    let document: Value = serde_json::from_slice(body).map_err(|error| {
        RegionSourceError::malformed(format!("invalid GeoJSON document: {error}"))
    })?;
    let decoded = FeatureCollectionDto::from_document(document).map_err(|reason| {
        RegionSourceError::malformed(format!("invalid GeoJSON feature collection: {reason}"))
    })?;
    Ok(decoded.into_domain_regions())
}

fn map_read_error(path: &Path, error: &std::io::Error) -> RegionSourceError {
    RegionSourceError::unavailable(format!("{error} ({})", path.display()))
}
