use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};
use log::info;
use thiserror::Error;

/// Fatal failures while obtaining the input image. Both abort the run
/// before any artifact is produced.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("image not found at {path}: {reason}")]
    NotFound { path: PathBuf, reason: String },
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Resolves the input image: a local path first, with a one-shot network
/// download into that path when the file is missing and a URL is
/// configured. The rest of the pipeline only ever sees a decoded image.
pub struct ImageSource {
    path: PathBuf,
    download_url: Option<String>,
}

impl ImageSource {
    pub fn new(path: impl Into<PathBuf>, download_url: Option<String>) -> Self {
        Self {
            path: path.into(),
            download_url,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<DynamicImage, SourceError> {
        if !self.path.exists() {
            self.fetch()?;
        }

        let reader = ImageReader::open(&self.path).map_err(|e| SourceError::NotFound {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        reader.decode().map_err(|e| SourceError::Decode {
            path: self.path.clone(),
            source: e,
        })
    }

    fn fetch(&self) -> Result<(), SourceError> {
        let not_found = |reason: String| SourceError::NotFound {
            path: self.path.clone(),
            reason,
        };

        let url = self
            .download_url
            .as_deref()
            .ok_or_else(|| not_found("file missing and no download URL configured".into()))?;

        info!("image missing locally, downloading from {url}");
        let response = reqwest::blocking::get(url)
            .and_then(|r| r.error_for_status())
            .map_err(|e| not_found(format!("download failed: {e}")))?;
        let bytes = response
            .bytes()
            .map_err(|e| not_found(format!("download failed: {e}")))?;

        std::fs::write(&self.path, &bytes)
            .map_err(|e| not_found(format!("could not write downloaded bytes: {e}")))?;
        info!("saved {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }
}
