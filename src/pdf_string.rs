use crate::patterns::RE_UNICODE_ESCAPES;
use regex::Captures;

/// Decode a pdf literal string as it appears between the parentheses.
///
/// Un-escapes `\(`, `\)` and `\\`, then replaces `\uXXXX` escapes (UTF-16BE code units)
/// with the characters they encode. Anything that can not be decoded is kept as is.
/// The result is trimmed.
pub fn decode_pdf_string(raw: &str) -> String {
    let unescaped = unescape_literal(raw);
    let decoded = if unescaped.contains("\\u") {
        decode_unicode_escapes(&unescaped)
    } else {
        unescaped
    };
    decoded.trim().to_owned()
}

// Single left to right pass, so `\\(` is a backslash followed by `(`.
fn unescape_literal(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if matches!(next, '(' | ')' | '\\') {
                    result.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        result.push(c);
    }
    result
}

fn decode_unicode_escapes(text: &str) -> String {
    RE_UNICODE_ESCAPES
        .replace_all(text, |caps: &Captures| {
            let run = &caps[0];
            // Every escape is `\u` + 4 hex digits, already validated by the pattern.
            let units = run
                .as_bytes()
                .chunks(6)
                .filter_map(|escape| std::str::from_utf8(&escape[2..]).ok())
                .filter_map(|hex| u16::from_str_radix(hex, 16).ok());
            let mut decoded = String::with_capacity(run.len());
            let mut offset = 0;
            for unit in char::decode_utf16(units) {
                match unit {
                    Ok(c) => {
                        decoded.push(c);
                        offset += if c.len_utf16() == 2 { 12 } else { 6 };
                    }
                    Err(_) => {
                        // Unpaired surrogate, keep the escape text.
                        decoded.push_str(&run[offset..offset + 6]);
                        offset += 6;
                    }
                }
            }
            decoded
        })
        .into_owned()
}
