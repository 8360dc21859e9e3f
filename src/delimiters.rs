use crate::error::{CursorError, Result};

/// Marks the start of the query section
pub const QUERY_MARK: u8 = b'?';

/// Marks the start of the fragment, which also ends the query section
pub const FRAGMENT_MARK: u8 = b'#';

/// Splits a parameter into key and value
pub const VALUE_SEPARATOR: u8 = b'=';

/// Parameter separator used when none is given
pub const DEFAULT_SEPARATOR: u8 = b'&';

/// Check if a byte is one of the delimiters with a fixed meaning
pub fn is_reserved(b: u8) -> bool {
    matches!(b, QUERY_MARK | FRAGMENT_MARK | VALUE_SEPARATOR)
}

/// Validate a parameter separator and narrow it to a single byte.
///
/// Offsets are byte indices found with `memchr`, so the separator must be
/// ASCII. It also must not collide with `?`, `#` or `=`.
pub fn separator_byte(separator: char) -> Result<u8> {
    if !separator.is_ascii() {
        return Err(CursorError::InvalidSeparator);
    }
    let b = separator as u8;
    if is_reserved(b) {
        return Err(CursorError::InvalidSeparator);
    }
    Ok(b)
}
