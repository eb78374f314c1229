//! Lint checks for parsed scene documents.
//!
//! Parsing guarantees a well-formed tree; these checks flag documents that
//! are valid but probably not what the author meant. Used by
//! `vecscene validate`.

mod checks;
mod warning;

pub use checks::{check_duplicate_ids, check_empty_groups, check_empty_paths, check_leading_move};
pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::types::SceneDocument;

/// Run all lint checks against a document.
pub fn validate_document(document: &SceneDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(check_duplicate_ids(document));
    result.merge(check_empty_paths(document));
    result.merge(check_leading_move(document));
    result.merge(check_empty_groups(document));

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_svg;

    #[test]
    fn test_clean_document() {
        let doc = parse_svg(r#"<svg><g id="g"><path id="p" d="M0 0 L1 1 z"/></g></svg>"#).unwrap();
        assert!(validate_document(&doc).is_clean());
    }

    #[test]
    fn test_empty_document_is_clean() {
        let doc = parse_svg("<svg/>").unwrap();
        assert!(validate_document(&doc).is_clean());
    }

    #[test]
    fn test_collects_all_checks() {
        let doc = parse_svg(r#"<svg><g id="x"><path id="x"/></g><g/></svg>"#).unwrap();
        let result = validate_document(&doc);

        assert_eq!(result.error_count(), 1);
        assert_eq!(result.warning_count(), 2);
    }
}
