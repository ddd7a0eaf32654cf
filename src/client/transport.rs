use std::future::Future;

use reqwest::header::CONTENT_TYPE;

use super::{ClientError, ClientOptions, HttpReply};

/// Sends one JSON body to an endpoint and hands back the raw answer.
///
/// Implementations must not retry and must not interpret the status code;
/// [`ValidationClient`](crate::client::ValidationClient) does that.
pub trait Transport: Send + Sync {
    fn post_json(
        &self,
        endpoint: &str,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<HttpReply, ClientError>> + Send;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(options: &ClientOptions) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = options.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ClientError::transport)?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_json(
        &self,
        endpoint: &str,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<HttpReply, ClientError>> + Send {
        let request = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        async move {
            let response = request.send().await.map_err(ClientError::transport)?;
            let status = response.status().as_u16();
            let body = response.bytes().await.map_err(ClientError::transport)?;
            Ok(HttpReply::new(status, body.to_vec()))
        }
    }
}
