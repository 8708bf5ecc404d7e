//! Extraction of code arrays from reference C documents.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

/// Matches the codes array declaration: `uint64_t <name>[<size>] = { ... }`.
/// The body class `[^}]+` spans newlines, so the multi-line literals in the
/// reference documents match without any flag.
static CODES_ARRAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"uint64_t\s+\w+\[\d*\]\s*=\s*\{([^}]+)\}").expect("codes array pattern")
});

/// Matches one hexadecimal literal inside the array body.
static HEX_LITERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"0x([0-9a-fA-F]+)").expect("hex literal pattern"));

/// Extraction failure.
#[derive(thiserror::Error, Debug)]
pub enum ExtractError {
    /// The document contains no recognizable codes array declaration.
    #[error("no codes array found in {path}")]
    MissingCodesArray { path: PathBuf },
    /// A hex literal in the array body does not fit in a `u64`.
    #[error("code literal 0x{literal} in {path} does not fit in u64")]
    CodeOutOfRange { literal: String, path: PathBuf },
}

/// Extract the family's codes from the text of a reference document.
///
/// Returns the values in order of appearance; duplicates are preserved and
/// the count is not validated against any expected per-family total. A body
/// that matches the array pattern but contains no hexadecimal literals
/// yields an empty vector. A literal wider than 64 bits is a hard failure,
/// matching the fatal pack-time abort of the reference pipeline. `path` is
/// only used to name the document in errors.
pub fn extract_codes(text: &str, path: &Path) -> Result<Vec<u64>, ExtractError> {
    let body = CODES_ARRAY_RE
        .captures(text)
        .ok_or_else(|| ExtractError::MissingCodesArray {
            path: path.to_path_buf(),
        })?
        .get(1)
        .map(|m| m.as_str())
        .unwrap_or_default();

    HEX_LITERAL_RE
        .captures_iter(body)
        .map(|cap| {
            u64::from_str_radix(&cap[1], 16).map_err(|_| ExtractError::CodeOutOfRange {
                literal: cap[1].to_string(),
                path: path.to_path_buf(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Result<Vec<u64>, ExtractError> {
        extract_codes(text, Path::new("test.c"))
    }

    #[test]
    fn extracts_all_literals_in_source_order() {
        let text = r#"
#include <stdint.h>
static uint64_t codes[4] = {
   0x00000000000027c8UL,
   0x00000000000031b6UL,
   0x0000000000003859UL,
   0x000000000000569cUL,
};
"#;
        let codes = extract(text).unwrap();
        assert_eq!(codes, vec![0x27c8, 0x31b6, 0x3859, 0x569c]);
    }

    #[test]
    fn preserves_duplicates() {
        let text = "uint64_t c[] = { 0xab, 0xab, 0xcd };";
        assert_eq!(extract(text).unwrap(), vec![0xab, 0xab, 0xcd]);
    }

    #[test]
    fn empty_size_bracket_and_single_line_body_match() {
        let text = "uint64_t tag16h5_codes[] = { 0x1, 0x2 };";
        assert_eq!(extract(text).unwrap(), vec![1, 2]);
    }

    #[test]
    fn body_without_hex_literals_yields_empty_vec() {
        let text = "uint64_t codes[0] = { /* none yet */ };";
        assert_eq!(extract(text).unwrap(), Vec::<u64>::new());
    }

    #[test]
    fn missing_array_is_an_error_naming_the_document() {
        let text = "int32_t codes[] = { 0x1 };";
        let err = extract(text).unwrap_err();
        assert!(err.to_string().contains("no codes array found in test.c"));
    }

    #[test]
    fn full_width_values_parse_without_overflow() {
        let text = "uint64_t c[1] = { 0xffffffffffffffff };";
        assert_eq!(extract(text).unwrap(), vec![u64::MAX]);
    }

    #[test]
    fn over_width_literal_is_a_hard_failure_not_a_skip() {
        let text = "uint64_t c[] = { 0x1ffffffffffffffff, 0x2 };";
        let err = extract(text).unwrap_err();
        assert!(matches!(
            &err,
            ExtractError::CodeOutOfRange { literal, .. } if literal == "1ffffffffffffffff"
        ));
        assert!(err.to_string().contains("does not fit in u64"));
    }

    #[test]
    fn surrounding_c_syntax_is_ignored() {
        let text = r#"
#include "tag36h11.h"
// lookup helpers
static const char *name = "tag36h11";
uint64_t tag36h11_codes[587] = {
   0x0000000d7e00984bUL,
   0x0000000dda664ca7UL
};
int tag36h11_bits = 36;
"#;
        assert_eq!(extract(text).unwrap(), vec![0xd7e00984b, 0xdda664ca7]);
    }
}
