use super::Error;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

pub struct Response(reqwest::Response);

impl Response {
    pub fn new(response: reqwest::Response) -> Self {
        Response(response)
    }

    /// Reads the whole body, failing with the status line and raw body when the
    /// status is not `expected`.
    pub async fn expect(self, expected: StatusCode) -> Result<String, Error> {
        let status = self.0.status();
        let text = self
            .0
            .text()
            .await
            .map_err(|cause| Error::ReadResponse { cause })?;

        if status != expected {
            return Err(Error::UnexpectedStatus {
                expected: expected.as_u16(),
                status: status.to_string(),
                body: text,
            });
        }

        Ok(text)
    }

    pub async fn expect_json<T: DeserializeOwned>(self, expected: StatusCode) -> Result<T, Error> {
        let text = self.expect(expected).await?;
        log::debug!("received {} response: {}", expected.as_u16(), text);

        serde_json::from_str::<T>(&text).map_err(|cause| Error::ParseResponse { cause })
    }
}
