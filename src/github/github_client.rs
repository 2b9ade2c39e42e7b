use super::{asset::Asset, release::Release, release_request::ReleaseRequest};
use crate::http::{Client, Error, HttpRequest};
use reqwest::StatusCode;

pub const ASSET_CONTENT_TYPE: &str = "application/tar+gzip";

/// Release API calls against one API base URL with one access token.
#[derive(Clone, Debug)]
pub struct GithubClient {
    client: Client,
    api_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(client: Client, api_url: impl Into<String>, token: impl Into<String>) -> Self {
        GithubClient {
            client,
            api_url: api_url.into(),
            token: token.into(),
        }
    }

    pub fn releases_url(&self, owner: &str, repo: &str) -> String {
        format!(
            "{}/repos/{}/{}/releases",
            self.api_url.trim_end_matches('/'),
            owner,
            repo
        )
    }

    pub async fn create_release(
        &self,
        owner: &str,
        repo: &str,
        request: &ReleaseRequest,
    ) -> Result<Release, Error> {
        let uri = self.releases_url(owner, repo);

        let request = HttpRequest::post(uri)
            .github_headers(&self.token)
            .json(request)?;

        self.client
            .send(request)
            .await?
            .expect_json::<Release>(StatusCode::CREATED)
            .await
    }

    pub async fn upload_asset(&self, release: &Release, asset: &Asset) -> Result<(), Error> {
        let content = asset.read().await?;
        let uri = release.upload_endpoint(&asset.name)?;

        let request = HttpRequest::post(uri)
            .github_headers(&self.token)
            .bytes(ASSET_CONTENT_TYPE, content);

        self.client
            .send(request)
            .await?
            .expect(StatusCode::CREATED)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::release::sample_release;
    use anyhow::Result;
    use mockito::{Matcher, Server};
    use serde_json::json;
    use std::fs;
    use tempdir::TempDir;

    fn request() -> ReleaseRequest {
        ReleaseRequest {
            tag_name: "v1".to_owned(),
            target_commitish: "main".to_owned(),
            name: "v1".to_owned(),
            body: "notes".to_owned(),
            draft: true,
            prerelease: false,
        }
    }

    #[test]
    fn should_build_releases_url() {
        let github = GithubClient::new(Client::new(), "https://api.github.com/", "t");

        assert_eq!(
            github.releases_url("octo", "demo"),
            "https://api.github.com/repos/octo/demo/releases"
        );
    }

    #[tokio::test]
    async fn should_create_release() -> Result<()> {
        let mut server = Server::new_async().await;
        let response = sample_release("https://uploads.github.com/up{?name,label}");
        let mock = server
            .mock("POST", "/repos/octo/demo/releases")
            .match_header("authorization", "token secret")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "tag_name": "v1",
                "target_commitish": "main",
                "name": "v1",
                "body": "notes",
                "draft": true,
                "prerelease": false
            })))
            .with_status(201)
            .with_body(response.to_string())
            .create_async()
            .await;

        let github = GithubClient::new(Client::new(), server.url(), "secret");
        let release = github.create_release("octo", "demo", &request()).await?;

        mock.assert_async().await;
        assert_eq!(release, serde_json::from_value::<Release>(response)?);

        Ok(())
    }

    #[tokio::test]
    async fn should_fail_with_status_and_body_on_non_created() -> Result<()> {
        let mut server = Server::new_async().await;
        let body = r#"{"message":"Validation Failed","errors":[{"resource":"Release","code":"already_exists","field":"tag_name"}]}"#;
        let _mock = server
            .mock("POST", "/repos/octo/demo/releases")
            .with_status(422)
            .with_body(body)
            .create_async()
            .await;

        let github = GithubClient::new(Client::new(), server.url(), "secret");
        let err = github
            .create_release("octo", "demo", &request())
            .await
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("422"));
        assert!(message.contains(body));

        Ok(())
    }

    #[tokio::test]
    async fn should_fail_on_malformed_release_body() -> Result<()> {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/repos/octo/demo/releases")
            .with_status(201)
            .with_body(r#"{"id": "not a number"}"#)
            .create_async()
            .await;

        let github = GithubClient::new(Client::new(), server.url(), "secret");
        let result = github.create_release("octo", "demo", &request()).await;

        assert!(matches!(result, Err(Error::ParseResponse { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn should_fail_on_malformed_api_url() {
        let github = GithubClient::new(Client::new(), "not a url", "secret");

        let result = github.create_release("octo", "demo", &request()).await;

        assert!(matches!(result, Err(Error::BuildRequest { .. })));
    }

    #[tokio::test]
    async fn should_upload_asset_bytes() -> Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Regex("^/up".to_owned()))
            .match_query(Matcher::UrlEncoded("name".to_owned(), "a.tar.gz".to_owned()))
            .match_header("authorization", "token secret")
            .match_header("content-type", "application/tar+gzip")
            .match_body("archive bytes")
            .with_status(201)
            .with_body("{}")
            .create_async()
            .await;

        let dir = TempDir::new("uploads")?;
        let path = dir.path().join("a.tar.gz");
        fs::write(&path, "archive bytes")?;

        let release: Release =
            serde_json::from_value(sample_release(&format!("{}/up{{?name,label}}", server.url())))?;
        let github = GithubClient::new(Client::new(), server.url(), "secret");

        github
            .upload_asset(&release, &Asset::new("a.tar.gz", &path))
            .await?;

        mock.assert_async().await;

        Ok(())
    }

    #[tokio::test]
    async fn should_fail_upload_on_non_created() -> Result<()> {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", Matcher::Regex("^/up".to_owned()))
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let dir = TempDir::new("uploads")?;
        let path = dir.path().join("a.tar.gz");
        fs::write(&path, "archive bytes")?;

        let release: Release =
            serde_json::from_value(sample_release(&format!("{}/up{{?name,label}}", server.url())))?;
        let github = GithubClient::new(Client::new(), server.url(), "secret");

        let err = github
            .upload_asset(&release, &Asset::new("a.tar.gz", &path))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "non 201 response: 500 Internal Server Error: boom"
        );

        Ok(())
    }

    #[tokio::test]
    async fn should_not_send_upload_when_file_is_unreadable() -> Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let release: Release =
            serde_json::from_value(sample_release(&format!("{}/up{{?name,label}}", server.url())))?;
        let github = GithubClient::new(Client::new(), server.url(), "secret");

        let result = github
            .upload_asset(&release, &Asset::new("gone.tar.gz", "/nonexistent/gone.tar.gz"))
            .await;

        mock.assert_async().await;
        assert!(matches!(result, Err(Error::ReadAsset { .. })));

        Ok(())
    }
}
