//! Registry document normalization.
//!
//! Turns the raw registry text into canonical TLD labels: comments and blank
//! lines dropped, case lowered, and every punycode (`xn--`) label followed by
//! its decoded Unicode form.

use std::collections::HashSet;

use crate::config::ACE_PREFIX;
use crate::error_handling::TldError;

/// Normalizes one raw registry line.
///
/// Returns `None` for blank and comment lines.
pub(crate) fn normalize_line(line: &str) -> Option<String> {
    let label = line.trim().to_lowercase();
    if label.is_empty() || label.starts_with('#') {
        None
    } else {
        Some(label)
    }
}

/// Decodes a lowercase punycode label into its native-script form.
///
/// The IDNA decoder is case sensitive, so `label` must already be lowercase.
pub(crate) fn decode_label(label: &str) -> Result<String, TldError> {
    let (decoded, result) = idna::domain_to_unicode(label);
    match result {
        Ok(()) if !decoded.is_empty() && decoded != label => Ok(decoded),
        _ => Err(TldError::Decode {
            label: label.to_string(),
        }),
    }
}

/// Normalizes a registry document into an ordered list of TLD labels.
///
/// Labels appear in the order they first occur in `doc`. A decoded label
/// immediately follows its punycode original. A label that was already
/// emitted earlier in the same pass is skipped, which keeps the output
/// stable when fed back in as input.
///
/// # Errors
///
/// Returns `TldError::Decode` for the first punycode label that fails to
/// decode; nothing is returned for the rest of the document in that case.
///
/// # Examples
///
/// ```
/// use image_downloader::tld::process;
///
/// let labels = process("# Version 2024\nCOM\nXN--P1AI\n").unwrap();
/// assert_eq!(labels, vec!["com", "xn--p1ai", "рф"]);
/// ```
pub fn process(doc: &str) -> Result<Vec<String>, TldError> {
    let mut labels = Vec::new();
    let mut seen = HashSet::new();

    for label in doc.lines().filter_map(normalize_line) {
        let decoded = if label.starts_with(ACE_PREFIX) {
            Some(decode_label(&label)?)
        } else {
            None
        };

        for candidate in std::iter::once(label).chain(decoded) {
            if seen.insert(candidate.clone()) {
                labels.push(candidate);
            }
        }
    }

    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_drops_comments_and_blank_lines() {
        let doc = "# comment\n\nEXAMPLE\nXN--VERMGENSBERATUNG-PWB\n";
        let labels = process(doc).unwrap();
        assert_eq!(
            labels,
            vec!["example", "xn--vermgensberatung-pwb", "vermögensberatung"]
        );
    }

    #[test]
    fn test_process_iana_header_and_whitespace() {
        let doc = "# Version 2024101900, Last Updated Sat Oct 19 07:07:01 2024 UTC\r\n  AAA  \r\n\tAARP\r\n   # indented comment\r\n\r\nZW\r\n";
        let labels = process(doc).unwrap();
        assert_eq!(labels, vec!["aaa", "aarp", "zw"]);
    }

    #[test]
    fn test_process_empty_document() {
        assert!(process("").unwrap().is_empty());
        assert!(process("# only a comment\n\n   \n").unwrap().is_empty());
    }

    #[test]
    fn test_process_decodes_several_scripts() {
        let doc = "XN--P1AI\nxn--fiqs8s\nXN--MGBAAM7A8H\n";
        let labels = process(doc).unwrap();
        assert_eq!(
            labels,
            vec![
                "xn--p1ai",
                "рф",
                "xn--fiqs8s",
                "中国",
                "xn--mgbaam7a8h",
                "امارات",
            ]
        );
    }

    #[test]
    fn test_process_keeps_first_appearance_only() {
        let doc = "com\nNET\nCOM\nnet\norg\n";
        assert_eq!(process(doc).unwrap(), vec!["com", "net", "org"]);
    }

    #[test]
    fn test_process_is_idempotent_on_its_output() {
        let doc = "# comment\n\nEXAMPLE\nXN--VERMGENSBERATUNG-PWB\nXN--P1AI\nORG\n";
        let first = process(doc).unwrap();
        let second = process(&first.join("\n")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_process_clean_input_passes_through() {
        let doc = "com\nnet\norg\n";
        assert_eq!(process(doc).unwrap(), vec!["com", "net", "org"]);
    }

    #[test]
    fn test_process_aborts_on_undecodable_label() {
        let doc = "com\nxn--99999999\nnet\n";
        match process(doc) {
            Err(TldError::Decode { label }) => {
                assert_eq!(label, "xn--99999999");
            }
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_normalize_line() {
        assert_eq!(normalize_line("  COM \n"), Some("com".to_string()));
        assert_eq!(normalize_line("#COM"), None);
        assert_eq!(normalize_line("   "), None);
    }

    #[test]
    fn test_decode_label() {
        assert_eq!(decode_label("xn--p1ai").unwrap(), "рф");
        assert!(decode_label("xn--99999999").is_err());
    }
}
