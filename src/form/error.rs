use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("field '{field}' is required")]
    MissingField { field: &'static str },
    #[error("domain '{domain}' has an invalid format")]
    InvalidDomain { domain: String },
}

impl FormError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn invalid_domain(domain: impl Into<String>) -> Self {
        Self::InvalidDomain {
            domain: domain.into(),
        }
    }
}
