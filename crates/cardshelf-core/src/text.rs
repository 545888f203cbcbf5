#![forbid(unsafe_code)]

//! Search text normalisation.

/// Lowercase `text` and drop every whitespace character.
///
/// Whitespace is the browser regex `\s` set: Unicode `White_Space` except
/// NEL (U+0085), plus the byte-order mark (U+FEFF).
///
/// Indexing and querying both go through this function, so matching is
/// insensitive to case and to spacing.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|&c| !is_search_space(c))
        .collect()
}

fn is_search_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_input_yields_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n "), "");
    }

    #[test]
    fn lowercases_and_strips_runs() {
        assert_eq!(normalize("  Hello   World\t!"), "helloworld!");
        assert_eq!(normalize("Code Sample 程式 範例"), "codesample程式範例");
    }

    #[test]
    fn full_width_space_is_whitespace() {
        assert_eq!(normalize("小王子\u{3000}星球"), "小王子星球");
    }

    #[test]
    fn byte_order_mark_is_whitespace() {
        assert_eq!(normalize("a\u{FEFF}b"), "ab");
        assert_eq!(normalize("\u{FEFF}Moon"), "moon");
    }

    #[test]
    fn next_line_is_kept() {
        assert_eq!(normalize("a\u{85}b"), "a\u{85}b");
    }

    proptest! {
        #[test]
        fn idempotent(s in ".*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once.clone());
        }

        #[test]
        fn never_contains_whitespace(s in ".*") {
            prop_assert!(!normalize(&s).chars().any(is_search_space));
        }
    }
}
