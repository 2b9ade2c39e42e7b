use crate::{
    config::Config,
    github::{asset, Asset, GithubClient, Release, ReleaseRequest},
};
use anyhow::{Context, Result};

/// Outcome of the asset upload batch.
#[derive(Debug, Default, PartialEq)]
pub struct UploadReport {
    pub uploaded: Vec<String>,
    pub failed: Vec<String>,
}

/// Creates the release, then uploads every file of the uploads directory.
///
/// Release creation and listing the directory are fatal. A failed upload is only
/// logged and the batch moves on.
pub async fn run(config: &Config, github: &GithubClient) -> Result<UploadReport> {
    let request = ReleaseRequest::from(&config.release);

    let release = github
        .create_release(&config.user, &config.repo, &request)
        .await
        .context("Cannot create the github release")?;

    log::info!("created release {} at {}", release.id, release.html_url);

    let assets = asset::collect(&config.uploads)
        .await
        .with_context(|| format!("Cannot read assets dir {}", config.uploads.display()))?;

    Ok(upload_all(github, &release, assets).await)
}

async fn upload_all(github: &GithubClient, release: &Release, assets: Vec<Asset>) -> UploadReport {
    let mut report = UploadReport::default();

    for asset in assets {
        match github.upload_asset(release, &asset).await {
            Ok(()) => report.uploaded.push(asset.name),
            Err(err) => {
                let err = anyhow::Error::new(err);
                log::warn!("uploading asset {}: {:#}", asset.name, err);
                report.failed.push(asset.name);
            }
        }
    }

    report
}
