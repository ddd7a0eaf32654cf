use std::sync::LazyLock;

use regex::Regex;

static DOMAIN_SHAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:[a-z0-9-]{1,63}\.)+[a-z]{2,63}$").ok());

/// Contrôle de forme utilisé par le mode interactif avant d'accepter un
/// domaine : conversion IDNA, 4..=253 caractères, labels pointés et TLD
/// alphabétique. Aucune requête DNS.
pub fn looks_like_domain(domain: &str) -> bool {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return false;
    }
    // la regex ne voit que la forme ASCII (punycode)
    let ascii = match idna::domain_to_ascii(trimmed) {
        Ok(d) => d,
        Err(_) => return false,
    };
    if !(4..=253).contains(&ascii.len()) {
        return false;
    }
    DOMAIN_SHAPE
        .as_ref()
        .is_some_and(|shape| shape.is_match(&ascii))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_domains() {
        assert!(looks_like_domain("empresa.com"));
        assert!(looks_like_domain("exemplo.com.br"));
        assert!(looks_like_domain("Mail.Example.ORG"));
    }

    #[test]
    fn accepts_idn_after_conversion() {
        assert!(looks_like_domain("pão.com.br"));
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(!looks_like_domain(""));
        assert!(!looks_like_domain("localhost"));
        assert!(!looks_like_domain("a.b"));
        assert!(!looks_like_domain("foo..com"));
        assert!(!looks_like_domain("empresa.c0m"));
    }

    #[test]
    fn label_too_long() {
        let long = "a".repeat(64);
        assert!(!looks_like_domain(&format!("{long}.com")));
    }
}
