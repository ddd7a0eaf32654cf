use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures of one `/validate` exchange.
///
/// Network-layer failures (timeout, refused connection, reset, TLS) all land
/// in [`ClientError::Transport`]; an answer with a non-2xx status is reported
/// separately as [`ClientError::Status`].
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request encoding failed: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },
    #[error("request failed: {}", error_chain(.source))]
    Transport {
        #[source]
        source: BoxError,
    },
    #[error("server answered HTTP {status}")]
    Status { status: u16, body: String },
    #[error("invalid response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    pub fn transport<E>(source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Transport {
            source: source.into(),
        }
    }

    pub(crate) fn invalid_endpoint(
        endpoint: impl Into<String>,
        source: url::ParseError,
    ) -> Self {
        Self::InvalidEndpoint {
            endpoint: endpoint.into(),
            source,
        }
    }

    pub(crate) fn encode(source: serde_json::Error) -> Self {
        Self::Encode { source }
    }

    pub(crate) fn decode(source: serde_json::Error) -> Self {
        Self::Decode { source }
    }

    pub(crate) fn status(status: u16, body: &[u8]) -> Self {
        Self::Status {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }
}

/// `err` suivi de ses causes, séparées par `: `. Une cause déjà reprise dans
/// le message qui la précède n'est pas répétée.
fn error_chain(err: &BoxError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
