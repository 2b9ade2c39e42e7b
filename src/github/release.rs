use crate::http::Error;
use reqwest::Url;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

pub const UPLOAD_URL_TEMPLATE_SUFFIX: &str = "{?name,label}";

/// Release record returned by a successful create call.
///
/// Only `upload_url` is required; everything else falls back to its default when
/// missing or `null` (drafts come back with `published_at: null`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Release {
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub html_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub assets_url: String,
    pub upload_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub tarball_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub zipball_url: String,

    #[serde(default, deserialize_with = "nullable")]
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub node_id: String,

    #[serde(default, deserialize_with = "nullable")]
    pub tag_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub target_commitish: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub body: String,
    #[serde(default, deserialize_with = "nullable")]
    pub draft: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub prerelease: bool,

    #[serde(default, deserialize_with = "nullable")]
    pub created_at: String,
    #[serde(default, deserialize_with = "nullable")]
    pub published_at: String,

    #[serde(default, deserialize_with = "nullable")]
    pub author: Map<String, Value>,
    #[serde(default, deserialize_with = "nullable")]
    pub assets: Vec<Map<String, Value>>,
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Release {
    /// The upload URL without its `{?name,label}` template suffix.
    pub fn upload_base(&self) -> &str {
        self.upload_url
            .strip_suffix(UPLOAD_URL_TEMPLATE_SUFFIX)
            .unwrap_or(&self.upload_url)
    }

    /// Concrete upload endpoint for an asset. The name is query encoded, so names
    /// with `&`, `%` or spaces survive intact.
    pub fn upload_endpoint(&self, asset_name: &str) -> Result<Url, Error> {
        let base = self.upload_base();
        let mut url = Url::parse(base).map_err(|err| Error::InvalidUrl {
            url: base.to_owned(),
            reason: err.to_string(),
        })?;

        url.query_pairs_mut().append_pair("name", asset_name);

        Ok(url)
    }
}

#[cfg(test)]
pub(crate) fn sample_release(upload_url: &str) -> Value {
    serde_json::json!({
        "url": "https://api.github.com/repos/octo/demo/releases/1",
        "html_url": "https://github.com/octo/demo/releases/v1",
        "assets_url": "https://api.github.com/repos/octo/demo/releases/1/assets",
        "upload_url": upload_url,
        "tarball_url": "https://api.github.com/repos/octo/demo/tarball/v1",
        "zipball_url": "https://api.github.com/repos/octo/demo/zipball/v1",
        "id": 1,
        "node_id": "MDc6UmVsZWFzZTE=",
        "tag_name": "v1",
        "target_commitish": "main",
        "name": "v1",
        "body": "notes",
        "draft": true,
        "prerelease": false,
        "created_at": "2013-02-27T19:35:32Z",
        "published_at": null,
        "author": { "login": "octocat", "id": 1 },
        "assets": []
    })
}
