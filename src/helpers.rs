use crate::delimiters::{FRAGMENT_MARK, QUERY_MARK};

/// Index of the first `needle` in `input[from..to]`, or `to` if absent.
/// An empty or inverted range yields `to`.
pub fn find_byte_in(input: &str, from: usize, to: usize, needle: u8) -> usize {
    if from >= to {
        return to;
    }
    memchr::memchr(needle, &input.as_bytes()[from..to]).map_or(to, |pos| from + pos)
}

/// Index of the fragment mark `#`, or the input length when there is none
pub fn find_fragment_start(input: &str) -> usize {
    memchr::memchr(FRAGMENT_MARK, input.as_bytes()).unwrap_or(input.len())
}

/// Index of the query mark `?` before `fragment_start`, or `fragment_start`
/// when the URL has no query section
pub fn find_query_start(input: &str, fragment_start: usize) -> usize {
    find_byte_in(input, 0, fragment_start, QUERY_MARK)
}

/// Slice `input[from..to]`, empty when the range is empty or inverted
pub fn slice_or_empty(input: &str, from: usize, to: usize) -> &str {
    if from < to { &input[from..to] } else { "" }
}
