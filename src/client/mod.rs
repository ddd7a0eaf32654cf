//! Client for the `/validate` endpoint.
//!
//! [`ValidationClient::validate`] performs exactly one `POST` with a JSON
//! body. There is no retry and no backoff; the HTTP status is checked before
//! the body is decoded.

mod error;
mod options;
mod transport;
mod types;

pub use error::ClientError;
pub use options::{ClientOptions, DEFAULT_ENDPOINT};
pub use transport::{HttpTransport, Transport};
pub use types::{HttpReply, ValidationResponse};

use tracing::debug;

use crate::form::ValidationRequest;

#[derive(Debug, Clone)]
pub struct ValidationClient<T> {
    transport: T,
    endpoint: String,
}

impl ValidationClient<HttpTransport> {
    /// Client over HTTP, configured from `options`.
    pub fn http(options: &ClientOptions) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(options)?;
        Self::new(transport, options)
    }
}

impl<T: Transport> ValidationClient<T> {
    pub fn new(transport: T, options: &ClientOptions) -> Result<Self, ClientError> {
        let endpoint = options.endpoint.trim();
        url::Url::parse(endpoint)
            .map_err(|source| ClientError::invalid_endpoint(endpoint, source))?;
        Ok(Self {
            transport,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn validate(
        &self,
        request: &ValidationRequest,
    ) -> Result<ValidationResponse, ClientError> {
        let body = serde_json::to_vec(request).map_err(ClientError::encode)?;
        debug!(
            endpoint = %self.endpoint,
            domain = %request.domain,
            extras = request.extras.len(),
            light_mode = request.light_mode,
            "sending validation request"
        );

        let reply = self.transport.post_json(&self.endpoint, body).await?;
        decode_reply(&reply)
    }
}

pub(crate) fn decode_reply(reply: &HttpReply) -> Result<ValidationResponse, ClientError> {
    if !reply.is_success() {
        debug!(status = reply.status, "validation endpoint rejected the request");
        return Err(ClientError::status(reply.status, &reply.body));
    }
    let response: ValidationResponse =
        serde_json::from_slice(&reply.body).map_err(ClientError::decode)?;
    debug!(
        confirmed = response.confirmed.len(),
        total_tested = response.total_tested,
        catch_all = response.catch_all,
        "validation response decoded"
    );
    Ok(response)
}
