//! Restrictive percent-encoding.
//!
//! Every byte outside `[0-9A-Za-z]` is escaped on encode, so an encoded
//! string never contains a separator character or a `+`.

use crate::compat::{Cow, String, ToString};
use percent_encoding::{NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Percent-encode every non-alphanumeric byte as `%XX`.
///
/// Works on the UTF-8 bytes of `input`; a space becomes `%20`, never `+`.
pub fn encode(input: &str) -> String {
    utf8_percent_encode(input, NON_ALPHANUMERIC).to_string()
}

/// Like [`encode`], with an absent input encoding to the empty string.
pub fn encode_opt(input: Option<&str>) -> String {
    input.map(encode).unwrap_or_default()
}

/// Decode `%XX` escapes and turn `+` into a space.
///
/// A `%` not followed by two hex digits is kept as is. Byte sequences that
/// do not form valid UTF-8 after decoding are replaced with U+FFFD.
pub fn decode(input: &str) -> String {
    let spaced = replace_plus(input);
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Like [`decode`], with an absent input decoding to the empty string.
pub fn decode_opt(input: Option<&str>) -> String {
    input.map(decode).unwrap_or_default()
}

/// Fast path: only allocate when the input actually contains a `+`
fn replace_plus(input: &str) -> Cow<'_, str> {
    if memchr::memchr(b'+', input.as_bytes()).is_some() {
        Cow::Owned(input.replace('+', " "))
    } else {
        Cow::Borrowed(input)
    }
}
