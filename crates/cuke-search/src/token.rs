//! Name and query tokenization.

/// Splits text into lowercase word tokens.
///
/// Words are maximal runs of alphanumeric characters; whitespace and
/// punctuation are boundaries and never appear in the output. Empty
/// fragments are dropped, so an empty or punctuation-only input yields no
/// tokens. Names and queries go through the same function so the two sides
/// of a lookup always agree on word boundaries and case.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn whitespace_only() {
        assert!(tokenize("  \t ").is_empty());
    }

    #[test]
    fn punctuation_only() {
        assert!(tokenize("--- !!! ...").is_empty());
    }

    #[test]
    fn single_word() {
        assert_eq!(tokenize("scenario"), vec!["scenario"]);
    }

    #[test]
    fn lowercases() {
        assert_eq!(tokenize("A Passed SCENARIO"), vec!["a", "passed", "scenario"]);
    }

    #[test]
    fn splits_on_punctuation() {
        assert_eq!(
            tokenize("log-in (admin), retry!"),
            vec!["log", "in", "admin", "retry"]
        );
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(tokenize("issue 1234"), vec!["issue", "1234"]);
    }

    #[test]
    fn non_ascii_words() {
        assert_eq!(tokenize("Ajout d'une Pièce"), vec!["ajout", "d", "une", "pièce"]);
    }
}
