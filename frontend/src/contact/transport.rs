use gloo_console::log;
use gloo_net::http::Request;

use crate::contact::error::SubmitError;

/// Status and raw body of the endpoint's answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_form(&self, url: &str, body: String) -> Result<RawResponse, SubmitError>;
}

/// Posts through the browser's fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    async fn post_form(&self, url: &str, body: String) -> Result<RawResponse, SubmitError> {
        let response = Request::post(url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                log!(format!("Contact request failed: {}", e));
                SubmitError::Network(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}
