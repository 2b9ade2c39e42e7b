use super::Error;
use reqwest::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
    Method,
};
use serde::Serialize;

const JSON_CONTENT_TYPE: &str = "application/json";
const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const AGENT: &str = "ghrelease";

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(String),
    Bytes(Vec<u8>),
}

/// A fully described request, handed to [`super::Client::send`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Body>,
}

impl HttpRequest {
    pub fn post(url: impl Into<String>) -> Self {
        HttpRequest {
            method: Method::POST,
            url: url.into(),
            headers: vec![],
            body: None,
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Adds the `token` authorization scheme plus the headers every platform call carries.
    pub fn github_headers(self, token: &str) -> Self {
        self.header(AUTHORIZATION.as_str(), format!("token {}", token))
            .header(ACCEPT.as_str(), GITHUB_ACCEPT)
            .header(USER_AGENT.as_str(), AGENT)
    }

    pub fn json<T: Serialize>(mut self, payload: &T) -> Result<Self, Error> {
        let body =
            serde_json::to_string(payload).map_err(|cause| Error::SerializeRequest { cause })?;

        self.body = Some(Body::Json(body));
        Ok(self.header(CONTENT_TYPE.as_str(), JSON_CONTENT_TYPE))
    }

    pub fn bytes(mut self, content_type: &str, content: Vec<u8>) -> Self {
        self.body = Some(Body::Bytes(content));
        self.header(CONTENT_TYPE.as_str(), content_type)
    }
}
