//! Per-format escaping rules.
//!
//! Each textual CPE binding reserves a different set of characters:
//!
//! - **URI** (CPE 2.2): `%01` stands for `?` and `%02` for `*`. Only the
//!   first occurrence of each code is substituted; this is not general
//!   percent-decoding.
//! - **Formatted string** (CPE 2.3): `\` makes the next character literal,
//!   so `\:` inside a field never splits it.
//! - **WFN**: values are `ANY`, `NA` or a double-quoted literal in which `\`
//!   makes the next character literal.

/// Decode the two reserved URI codes in a single URI component.
///
/// # Examples
///
/// ```
/// use cpe_tools::escape::decode_uri_component;
///
/// assert_eq!(decode_uri_component("8.%02"), "8.*");
/// assert_eq!(decode_uri_component("sp%01"), "sp?");
/// ```
pub fn decode_uri_component(s: &str) -> String {
    s.replacen("%01", "?", 1).replacen("%02", "*", 1)
}

/// Encode `?` and `*` in a single URI component.
///
/// # Examples
///
/// ```
/// use cpe_tools::escape::encode_uri_component;
///
/// assert_eq!(encode_uri_component("8.*"), "8.%02");
/// assert_eq!(encode_uri_component("sp?"), "sp%01");
/// ```
pub fn encode_uri_component(s: &str) -> String {
    s.replacen('?', "%01", 1).replacen('*', "%02", 1)
}

/// Split the body of a formatted string on unescaped `:`.
///
/// Escaped characters are kept verbatim (backslash included); use
/// [`unescape_formatted`] on each field afterwards. Returns `None` when the
/// body ends with a lone `\`.
pub fn split_formatted(body: &str) -> Option<Vec<&str>> {
    let bytes = body.as_bytes();
    let mut fields = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                if i + 1 >= bytes.len() {
                    return None;
                }
                // Skip the escaped character (may be multi-byte)
                i += 1;
                i += utf8_width(bytes[i]);
            }
            b':' => {
                fields.push(&body[start..i]);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }
    fields.push(&body[start..]);
    Some(fields)
}

/// Remove formatted-string escapes from one field.
///
/// # Examples
///
/// ```
/// use cpe_tools::escape::unescape_formatted;
///
/// assert_eq!(unescape_formatted(r"a\:b"), "a:b");
/// assert_eq!(unescape_formatted(r"c\\d"), r"c\d");
/// ```
pub fn unescape_formatted(s: &str) -> String {
    unescape_backslashes(s)
}

/// Escape one field for inclusion in a formatted string.
///
/// # Examples
///
/// ```
/// use cpe_tools::escape::escape_formatted;
///
/// assert_eq!(escape_formatted("a:b"), r"a\:b");
/// assert_eq!(escape_formatted("8.0.*"), "8.0.*");
/// ```
pub fn escape_formatted(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ':' => result.push_str("\\:"),
            _ => result.push(c),
        }
    }
    result
}

/// Remove WFN quoted-literal escapes from the inner content of a literal.
pub fn unescape_wfn(s: &str) -> String {
    unescape_backslashes(s)
}

/// Escape a value for use between the quotes of a WFN literal.
///
/// # Examples
///
/// ```
/// use cpe_tools::escape::escape_wfn;
///
/// assert_eq!(escape_wfn("internet_explorer"), "internet_explorer");
/// assert_eq!(escape_wfn("say \"hi\""), r#"say \"hi\""#);
/// ```
pub fn escape_wfn(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            _ => result.push(c),
        }
    }
    result
}

fn unescape_backslashes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                result.push(next);
            }
        } else {
            result.push(c);
        }
    }
    result
}

/// Byte width of the UTF-8 sequence starting with `lead`.
const fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7f => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        _ => 4,
    }
}
