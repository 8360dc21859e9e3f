use core::iter::FusedIterator;

use crate::delimiters::{DEFAULT_SEPARATOR, separator_byte};
use crate::error::Result;
use crate::span::{ParamSpan, QueryBounds};

/// One query parameter, borrowed from the URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param<'a> {
    pub key: &'a str,
    /// `None` when the parameter has no '='
    pub value: Option<&'a str>,
}

impl<'a> Param<'a> {
    pub(crate) fn from_span(source: &'a str, span: ParamSpan) -> Self {
        Self {
            key: span.key(source),
            value: span.value(source),
        }
    }
}

impl core::fmt::Display for Param<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key)?;
        if let Some(value) = self.value {
            write!(f, "={value}")?;
        }
        Ok(())
    }
}

/// Read-only iterator over the query parameters of a URL
///
/// # Examples
///
/// ```
/// use param_cursor::{Param, params};
///
/// let found: Vec<Param<'_>> = params("AA?k=v&k=&k").collect();
/// assert_eq!(found[0], Param { key: "k", value: Some("v") });
/// assert_eq!(found[1].value, Some(""));
/// assert_eq!(found[2].value, None);
/// ```
#[derive(Debug, Clone)]
pub struct Params<'a> {
    source: &'a str,
    bounds: QueryBounds,
    separator: u8,
    next_start: usize,
}

impl<'a> Params<'a> {
    /// Iterate with a custom parameter separator.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::InvalidSeparator`](crate::CursorError::InvalidSeparator)
    /// if `separator` is not ASCII or is one of `?`, `#` and `=`.
    pub fn with_separator(url: &'a str, separator: char) -> Result<Self> {
        Ok(Self::from_parts(
            url,
            QueryBounds::detect(url),
            separator_byte(separator)?,
        ))
    }

    pub(crate) fn from_parts(source: &'a str, bounds: QueryBounds, separator: u8) -> Self {
        Self {
            source,
            bounds,
            separator,
            next_start: bounds.query_start,
        }
    }
}

impl<'a> Iterator for Params<'a> {
    type Item = Param<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_start >= self.bounds.fragment_start {
            return None;
        }
        let span = ParamSpan::scan(self.source, self.next_start, self.bounds, self.separator);
        self.next_start = span.end;
        Some(Param::from_span(self.source, span))
    }
}

impl FusedIterator for Params<'_> {}

/// Iterate the `&`-separated query parameters of `url`
pub fn params(url: &str) -> Params<'_> {
    Params::from_parts(url, QueryBounds::detect(url), DEFAULT_SEPARATOR)
}
