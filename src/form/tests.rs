use proptest::prelude::*;
use serde_json::json;

use super::{FormError, FormState, tokenize_extras};

#[test]
fn minimal_form_builds_expected_payload() {
    let form = FormState::new("Ana", "empresa.com");
    let payload = serde_json::to_value(form.to_request()).expect("request serializes");
    assert_eq!(
        payload,
        json!({
            "first": "Ana",
            "middle": "",
            "last": "",
            "domain": "empresa.com",
            "light_mode": false,
            "extras": []
        })
    );
}

#[test]
fn payload_keys_follow_wire_order() {
    let form = FormState::new("Ana", "empresa.com");
    let body = serde_json::to_string(&form.to_request()).expect("request serializes");
    assert_eq!(
        body,
        r#"{"first":"Ana","middle":"","last":"","domain":"empresa.com","light_mode":false,"extras":[]}"#
    );
}

#[test]
fn full_form_keeps_text_fields_verbatim() {
    let form = FormState {
        first: "João".into(),
        middle: "Carlos".into(),
        last: "Silva".into(),
        extras: "  TI   vendas ".into(),
        domain: "empresa.com.br".into(),
        light_mode: true,
    };
    let request = form.to_request();
    assert_eq!(request.first, "João");
    assert_eq!(request.middle, "Carlos");
    assert_eq!(request.last, "Silva");
    assert_eq!(request.domain, "empresa.com.br");
    assert!(request.light_mode);
    assert_eq!(request.extras, vec!["TI", "vendas"]);
}

#[test]
fn required_fields_are_checked_in_order() {
    let empty = FormState::default();
    assert_eq!(
        empty.check_required(),
        Err(FormError::MissingField { field: "first" })
    );

    let no_domain = FormState {
        first: "Ana".into(),
        ..FormState::default()
    };
    assert_eq!(
        no_domain.check_required(),
        Err(FormError::MissingField { field: "domain" })
    );

    assert!(FormState::new("Ana", "empresa.com").check_required().is_ok());
}

#[test]
fn whitespace_satisfies_required() {
    assert!(FormState::new(" ", " ").check_required().is_ok());
}

proptest! {
    #[test]
    fn extras_never_contain_empty_tokens(raw in "[ \\ta-zA-Z0-9\\n]{0,64}") {
        let tokens = tokenize_extras(&raw);
        prop_assert!(tokens.iter().all(|t| !t.is_empty()));
        prop_assert!(tokens.iter().all(|t| !t.chars().any(char::is_whitespace)));
        prop_assert_eq!(tokens.join(""), raw.split_whitespace().collect::<String>());
    }

    #[test]
    fn padding_does_not_change_tokens(raw in "[a-z ]{0,32}", left in 0usize..4, right in 0usize..4) {
        let padded = format!("{}{}{}", " ".repeat(left), raw, " ".repeat(right));
        prop_assert_eq!(tokenize_extras(&padded), tokenize_extras(&raw));
    }
}
