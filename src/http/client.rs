use super::{
    request::{Body, HttpRequest},
    response::Response,
    Error,
};

/// Stateless wrapper over the reqwest client; clones share one connection pool.
#[derive(Clone, Debug, Default)]
pub struct Client(reqwest::Client);

impl Client {
    pub fn new() -> Client {
        Client(reqwest::Client::new())
    }

    pub async fn send(&self, request: HttpRequest) -> Result<Response, Error> {
        let mut builder = self.0.request(request.method, &request.url);

        for (key, value) in request.headers {
            builder = builder.header(key, value);
        }

        if let Some(body) = request.body {
            builder = match body {
                Body::Json(json) => builder.body(json),
                Body::Bytes(bytes) => builder.body(bytes),
            }
        }

        let built = builder.build().map_err(|cause| Error::BuildRequest {
            url: request.url,
            cause,
        })?;

        log::info!("sending {} request to {}", built.method(), built.url());

        let response = self
            .0
            .execute(built)
            .await
            .map_err(|cause| Error::Transport { cause })?;

        Ok(Response::new(response))
    }
}
