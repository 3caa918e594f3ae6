//! Legacy `escape`-style percent encoding
//!
//! The CGI endpoint decodes its query with the old ECMAScript `escape`
//! rules, not RFC 3986. Code units below 256 become `%XX`, everything else
//! becomes `%uXXXX` (one per UTF-16 code unit).

use std::fmt::Write;

/// Characters passed through untouched
fn is_unreserved(unit: u16) -> bool {
    matches!(unit,
        0x30..=0x39 // 0-9
        | 0x41..=0x5A // A-Z
        | 0x61..=0x7A // a-z
        | 0x40 // @
        | 0x2A // *
        | 0x5F // _
        | 0x2B // +
        | 0x2D // -
        | 0x2E // .
        | 0x2F // /
    )
}

/// Escape `input` with the legacy `escape` semantics
///
/// # Examples
/// ```
/// use kmlquery::query::escape;
/// assert_eq!(escape("a b&c=d"), "a%20b%26c%3Dd");
/// assert_eq!(escape("1+1"), "1+1");
/// ```
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);

    for unit in input.encode_utf16() {
        if is_unreserved(unit) {
            out.push(unit as u8 as char);
        } else if unit < 0x100 {
            // write! 到 String 不会失败
            let _ = write!(out, "%{:02X}", unit);
        } else {
            let _ = write!(out, "%u{:04X}", unit);
        }
    }

    out
}

/// Re-escape every literal `+` so the server does not read it as a space
pub fn escape_plus(input: &str) -> String {
    input.replace('+', "%2B")
}
