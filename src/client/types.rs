use serde::{Deserialize, Serialize};

/// Body returned by `POST /validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    /// Confirmed addresses, in the order the server listed them.
    pub confirmed: Vec<String>,
    pub total_tested: u64,
    pub catch_all: bool,
}

/// Raw answer handed back by a [`Transport`](crate::client::Transport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
