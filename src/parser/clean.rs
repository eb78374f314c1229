//! Separation of sign-glued numbers in path data.

/// Insert a space before every `-` that directly follows a digit.
///
/// Path data may run numbers together (`10-5` means `10, -5`). After this
/// pass every such sign starts its own whitespace-separated token.
/// Nothing else is touched, so `3.5` or `1e-5` stay intact.
pub fn clean_path_data(data: &str) -> String {
    let mut out = String::with_capacity(data.len() + data.len() / 4);
    let mut prev: Option<char> = None;

    for c in data.chars() {
        if c == '-' && prev.is_some_and(|p| p.is_ascii_digit()) {
            out.push(' ');
        }
        out.push(c);
        prev = Some(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_glued_negatives() {
        assert_eq!(clean_path_data("10-5 3.5-2"), "10 -5 3.5 -2");
    }

    #[test]
    fn test_leading_minus_untouched() {
        assert_eq!(clean_path_data("-1-2"), "-1 -2");
    }

    #[test]
    fn test_only_digit_then_minus() {
        assert_eq!(clean_path_data("1.5.5"), "1.5.5");
        assert_eq!(clean_path_data("1e-5"), "1e-5");
        assert_eq!(clean_path_data("m -3,-4"), "m -3,-4");
        assert_eq!(clean_path_data("10,-5"), "10,-5");
    }

    #[test]
    fn test_preserves_numeric_tokens() {
        use crate::parser::argument_tokens;

        let cases: [(&str, &[&str]); 6] = [
            ("10-5", &["10", "-5"]),
            ("1-2-3-4", &["1", "-2", "-3", "-4"]),
            ("3.5-.5,7", &["3.5", "-.5", "7"]),
            ("1e-5 2", &["1e-5", "2"]),
            ("-1 -2, -3", &["-1", "-2", "-3"]),
            ("0.5,1.5 2.5", &["0.5", "1.5", "2.5"]),
        ];

        for (input, expected) in cases {
            let cleaned = clean_path_data(input);
            let tokens = argument_tokens(&cleaned);
            assert_eq!(tokens, expected, "{input}");

            let parsed: Vec<f32> = tokens.iter().map(|t| t.parse().unwrap()).collect();
            let manual: Vec<f32> = expected.iter().map(|t| t.parse().unwrap()).collect();
            assert_eq!(parsed, manual, "{input}");
        }
    }

    #[test]
    fn test_never_shrinks() {
        for input in ["", "z", "M0-0-0", "c1-2-3-4-5-6"] {
            assert!(clean_path_data(input).len() >= input.len());
        }
    }
}
