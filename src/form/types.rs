use serde::{Deserialize, Serialize};

use super::error::FormError;
use super::extras::tokenize_extras;

/// Valeurs brutes des six champs du formulaire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub first: String,
    pub middle: String,
    pub last: String,
    /// texte libre, découpé sur les espaces à la construction de la requête
    pub extras: String,
    pub domain: String,
    pub light_mode: bool,
}

/// Body of `POST /validate`.
///
/// Field order follows the wire schema:
/// `{ first, middle, last, domain, light_mode, extras }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRequest {
    pub first: String,
    pub middle: String,
    pub last: String,
    pub domain: String,
    pub light_mode: bool,
    pub extras: Vec<String>,
}

impl FormState {
    pub fn new(first: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            domain: domain.into(),
            ..Self::default()
        }
    }

    /// Même sémantique que l'attribut HTML `required` : valeur non vide,
    /// les espaces comptent comme une valeur.
    pub fn check_required(&self) -> Result<(), FormError> {
        if self.first.is_empty() {
            return Err(FormError::missing("first"));
        }
        if self.domain.is_empty() {
            return Err(FormError::missing("domain"));
        }
        Ok(())
    }

    pub fn to_request(&self) -> ValidationRequest {
        ValidationRequest {
            first: self.first.clone(),
            middle: self.middle.clone(),
            last: self.last.clone(),
            domain: self.domain.clone(),
            light_mode: self.light_mode,
            extras: tokenize_extras(&self.extras),
        }
    }
}
