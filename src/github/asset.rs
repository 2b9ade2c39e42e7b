use crate::http::Error;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Local file to be attached to a release.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub name: String,
    pub path: PathBuf,
}

impl Asset {
    pub fn new(name: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self {
            name: name.into(),
            path: path.as_ref().to_path_buf(),
        }
    }

    pub async fn read(&self) -> Result<Vec<u8>, Error> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|cause| Error::ReadAsset {
                path: self.path.to_owned(),
                cause,
            })
    }
}

/// Lists every non-directory entry of `dir`, ordered by file name.
pub async fn collect(dir: impl AsRef<Path>) -> Result<Vec<Asset>> {
    let mut entries = tokio::fs::read_dir(dir.as_ref()).await?;
    let mut assets = vec![];

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();

        // only a flat directory of archives is expected
        if entry.file_type().await?.is_dir() {
            log::debug!("skipping directory {}", path.display());
            continue;
        }

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                let name = raw.to_string_lossy().into_owned();
                log::warn!(
                    "file name {} is not valid UTF-8, uploading it as {}",
                    path.display(),
                    name
                );
                name
            }
        };
        assets.push(Asset::new(name, path));
    }

    assets.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(assets)
}
