use crate::config::ReleaseConfig;
use serde::Serialize;

/// Payload of `POST /repos/{owner}/{repo}/releases`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReleaseRequest {
    pub tag_name: String,
    pub target_commitish: String,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

impl From<&ReleaseConfig> for ReleaseRequest {
    fn from(config: &ReleaseConfig) -> Self {
        ReleaseRequest {
            tag_name: config.tag.to_owned(),
            target_commitish: config.target.to_owned(),
            name: config.name.to_owned(),
            body: config.body.to_owned(),
            draft: config.draft,
            prerelease: config.prerelease,
        }
    }
}
