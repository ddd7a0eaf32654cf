//! État du formulaire et corps de la requête `/validate`.
//!
//! [`FormState`] garde les champs tels que saisis ; le corps envoyé est
//! dérivé avec [`FormState::to_request`].

mod domain;
mod error;
mod extras;
mod types;

pub use domain::looks_like_domain;
pub use error::FormError;
pub use extras::tokenize_extras;
pub use types::{FormState, ValidationRequest};

#[cfg(test)]
mod tests;
