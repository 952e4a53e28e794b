//! Byte patterns used to find signature structures in raw pdf data.
//!
//! All patterns run on `regex::bytes` with Unicode disabled so that arbitrary
//! binary content between the markers never breaks matching.

use lazy_static::lazy_static;
use regex::bytes::Regex;

lazy_static! {
    /// `/Type /Sig` declaration of a signature dictionary.
    pub(crate) static ref RE_SIG_DICT_TYPE: Regex = Regex::new(r"(?-u)/Type\s*/Sig\b").unwrap();

    /// `/FT /Sig` declaration of an interactive form signature field.
    pub(crate) static ref RE_SIG_FIELD_TYPE: Regex = Regex::new(r"(?-u)/FT\s*/Sig\b").unwrap();

    /// `/ByteRange [n n n n]` with the four integers captured.
    pub(crate) static ref RE_BYTE_RANGE: Regex = Regex::new(
        r"(?-u)/ByteRange\s*\[\s*(\d+)\s+(\d+)\s+(\d+)\s+(\d+)\s*\]"
    )
    .unwrap();

    /// Opening of a `/Name (...)` literal string, see [`read_literal_string`] for the body.
    pub(crate) static ref RE_NAME: Regex = Regex::new(r"(?-u)/Name\s*\(").unwrap();

    /// `/M (D:...)` modification date, the literal after `D:` is captured.
    pub(crate) static ref RE_SIGNING_DATE: Regex = Regex::new(r"(?-u)/M\s*\(D:([^)]*)\)").unwrap();

    /// X.509 common name up to the next comma or line break.
    pub(crate) static ref RE_COMMON_NAME: Regex = Regex::new(r"(?-u)CN=([^,\r\n]+)").unwrap();
}

lazy_static! {
    /// Strict `YYYYMMDDHHmmSS+HH'mm'` date literal.
    pub(crate) static ref RE_PDF_DATE: regex::Regex = regex::Regex::new(
        r"(?-u)^(\d{4})(\d{2})(\d{2})(\d{2})(\d{2})(\d{2})([+-])(\d{2})'(\d{2})'$"
    )
    .unwrap();

    /// `\uXXXX` escapes, consecutive ones are grouped so surrogate pairs stay together.
    pub(crate) static ref RE_UNICODE_ESCAPES: regex::Regex =
        regex::Regex::new(r"(?:\\u[0-9A-Fa-f]{4})+").unwrap();
}

/// Finds the first instance of `pattern` in `bytes`.
///
/// Result is `byte_offset_where_pattern_starts`.
pub(crate) fn find_binary_pattern(bytes: &[u8], pattern: &[u8]) -> Option<usize> {
    if bytes.is_empty() || pattern.is_empty() || pattern.len() > bytes.len() {
        return None;
    }
    bytes
        .windows(pattern.len())
        .position(|window| window == pattern)
}

pub(crate) fn contains_binary_pattern(bytes: &[u8], pattern: &[u8]) -> bool {
    find_binary_pattern(bytes, pattern).is_some()
}

/// Body of the literal string whose opening `(` is right before `start`.
///
/// Balanced parentheses may appear unescaped inside a literal string, so the closing `)`
/// is the one that brings the depth back to zero. `None` when the string is not closed.
pub(crate) fn read_literal_string(bytes: &[u8], start: usize) -> Option<&[u8]> {
    let mut depth = 1usize;
    let mut index = start;
    while index < bytes.len() {
        match bytes[index] {
            b'\\' => index += 1,
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&bytes[start..index]);
                }
            }
            _ => {}
        }
        index += 1;
    }
    None
}

/// Body of the first `/Name (...)` literal string.
///
/// Only the first `/Name (` is looked at; if it is not closed nothing is returned,
/// a later `/Name` belongs to an other dictionary.
pub(crate) fn find_name_string(bytes: &[u8]) -> Option<&[u8]> {
    let opening = RE_NAME.find(bytes)?;
    read_literal_string(bytes, opening.end())
}
