use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/validate";

/// Configuration knobs for [`ValidationClient`](crate::client::ValidationClient)
/// and [`HttpTransport`](crate::client::HttpTransport).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    pub endpoint: String,
    pub timeout_ms: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: 0,
        }
    }
}

impl ClientOptions {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Return the timeout as a [`Duration`]. A zero timeout leaves the
    /// request open until the transport gives up on its own.
    pub fn timeout(&self) -> Option<Duration> {
        if self.timeout_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.timeout_ms))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_means_none() {
        assert_eq!(ClientOptions::default().timeout(), None);
        let opts = ClientOptions {
            timeout_ms: 1_500,
            ..ClientOptions::default()
        };
        assert_eq!(opts.timeout(), Some(Duration::from_millis(1_500)));
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let opts: ClientOptions =
            serde_json::from_str(r#"{"timeout_ms": 250}"#).expect("options parse");
        assert_eq!(opts.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(opts.timeout_ms, 250);
    }
}
