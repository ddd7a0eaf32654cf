/// Découpe le champ libre `extras` en jetons.
///
/// Toute suite d'espaces sépare deux jetons ; jamais de jeton vide.
pub fn tokenize_extras(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_surrounding_and_repeated_spaces() {
        assert_eq!(tokenize_extras("  TI   vendas "), vec!["TI", "vendas"]);
    }

    #[test]
    fn blank_input_gives_no_tokens() {
        assert!(tokenize_extras("").is_empty());
        assert!(tokenize_extras(" \t \n ").is_empty());
    }

    #[test]
    fn tabs_and_newlines_separate_tokens() {
        assert_eq!(tokenize_extras("rh\tti\nsp"), vec!["rh", "ti", "sp"]);
    }
}
