use crate::delimiters::VALUE_SEPARATOR;
use crate::helpers::{find_byte_in, find_fragment_start, find_query_start, slice_or_empty};

/// Fixed boundaries of the query section inside a URL
///
/// Layout: "http://site/path?a=1&b=2#frag"
/// - `query_start`: 16 (the '?')
/// - `fragment_start`: 24 (the '#', or the URL length without a fragment)
///
/// Without a '?', `query_start == fragment_start` and the URL has no
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryBounds {
    pub query_start: usize,
    pub fragment_start: usize,
}

impl QueryBounds {
    pub fn detect(input: &str) -> Self {
        let fragment_start = find_fragment_start(input);
        Self {
            query_start: find_query_start(input, fragment_start),
            fragment_start,
        }
    }

    pub fn has_query(self) -> bool {
        self.query_start < self.fragment_start
    }
}

/// Offsets of one parameter
///
/// Layout for "?a=1&key=val&z" with the cursor on "key=val":
/// - `start`: 4 (the '&' before the parameter, or the '?' for the first)
/// - `key_end`: 8 (the '=', or `end` when there is no '=')
/// - `end`: 12 (the next separator, or the fragment start)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpan {
    pub start: usize,
    pub key_end: usize,
    pub end: usize,
}

impl ParamSpan {
    /// Scan the parameter whose leading delimiter sits at `start`
    pub fn scan(input: &str, start: usize, bounds: QueryBounds, separator: u8) -> Self {
        let end = find_byte_in(input, start + 1, bounds.fragment_start, separator);
        let key_end = find_byte_in(input, start + 1, end, VALUE_SEPARATOR);
        Self {
            start,
            key_end,
            end,
        }
    }

    pub fn key<'a>(&self, input: &'a str) -> &'a str {
        slice_or_empty(input, self.start + 1, self.key_end)
    }

    /// Value after the '=', `None` when the parameter has no '='
    pub fn value<'a>(&self, input: &'a str) -> Option<&'a str> {
        (self.key_end < self.end).then(|| slice_or_empty(input, self.key_end + 1, self.end))
    }

    /// Whole parameter text without its leading delimiter
    pub fn raw<'a>(&self, input: &'a str) -> &'a str {
        slice_or_empty(input, self.start + 1, self.end)
    }
}
