use core::cell::OnceCell;

use crate::compat::{String, ToString};
use crate::delimiters::{DEFAULT_SEPARATOR, separator_byte};
use crate::edit::{EditLog, Placement};
use crate::error::{CursorError, Result};
use crate::params::{Param, Params};
use crate::render::render_edits;
use crate::span::{ParamSpan, QueryBounds};

/// Cursor that walks the query parameters of a URL once, from first to
/// last, and records edits relative to the current parameter.
///
/// The source URL is never modified. Removals and insertions are kept in
/// side buffers and applied when the URL is rendered, so iteration always
/// follows the parameters of the original URL.
///
/// Keys and values are returned exactly as they appear in the URL, and
/// inserted text is copied verbatim: percent-encoding is left to the caller.
///
/// # Examples
///
/// ```
/// use param_cursor::ParamCursor;
///
/// let mut cursor = ParamCursor::new("http://site?c=2&d");
/// while cursor.advance() {
///     if cursor.is_first() {
///         cursor.insert_before("b", Some("1")).unwrap();
///     }
///     if cursor.key() == Some("d") && cursor.value() != Some("3") {
///         // A parameter is modified by removing and reinserting it
///         cursor.remove().unwrap();
///         cursor.insert_after("d", Some("3")).unwrap();
///     }
///     if cursor.is_last() {
///         cursor.insert_after("e", Some("4")).unwrap();
///     }
/// }
/// cursor.insert_first("a", Some("0"));
/// cursor.insert_last("f", Some("5"));
/// assert_eq!(cursor.render(), "http://site?a=0&b=1&c=2&d=3&e=4&f=5");
/// ```
#[derive(Debug, Clone)]
pub struct ParamCursor<'a> {
    source: &'a str,
    separator: u8,
    bounds: QueryBounds,
    span: Option<ParamSpan>,
    edits: EditLog,
    rendered: OnceCell<String>,
}

impl<'a> ParamCursor<'a> {
    /// Create a cursor over `url` using `&` as the parameter separator
    pub fn new(url: &'a str) -> Self {
        Self::with_separator_byte(url, DEFAULT_SEPARATOR)
    }

    /// Create a cursor over `url` using a custom parameter separator.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::InvalidSeparator`] if `separator` is not ASCII
    /// or is one of `?`, `#` and `=`.
    ///
    /// # Examples
    ///
    /// ```
    /// use param_cursor::{ErrorKind, ParamCursor};
    ///
    /// let mut cursor = ParamCursor::with_separator("AA?b=2;c=3", ';').unwrap();
    /// assert!(cursor.advance());
    /// assert_eq!(cursor.value(), Some("2"));
    ///
    /// let err = ParamCursor::with_separator("AA?b=2", '=').unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// ```
    pub fn with_separator(url: &'a str, separator: char) -> Result<Self> {
        Ok(Self::with_separator_byte(url, separator_byte(separator)?))
    }

    fn with_separator_byte(url: &'a str, separator: u8) -> Self {
        Self {
            source: url,
            separator,
            bounds: QueryBounds::detect(url),
            span: None,
            edits: EditLog::default(),
            rendered: OnceCell::new(),
        }
    }

    /// The URL this cursor was created with
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The parameter separator, `&` unless set with [`with_separator`](Self::with_separator)
    pub fn separator(&self) -> char {
        char::from(self.separator)
    }

    /// Index of the '?', or of the fragment start when there is no query
    pub fn query_start(&self) -> usize {
        self.bounds.query_start
    }

    /// Index of the '#', or the URL length when there is no fragment
    pub fn fragment_start(&self) -> usize {
        self.bounds.fragment_start
    }

    /// Move to the next parameter.
    ///
    /// Returns `false` once every parameter has been visited; the last
    /// parameter then stays selected and further calls keep returning
    /// `false`.
    pub fn advance(&mut self) -> bool {
        let start = self.span.map_or(self.bounds.query_start, |span| span.end);
        if start >= self.bounds.fragment_start {
            return false;
        }
        self.span = Some(ParamSpan::scan(self.source, start, self.bounds, self.separator));
        true
    }

    /// True if the current parameter is the first one; false when none is selected
    pub fn is_first(&self) -> bool {
        self.span.is_some_and(|span| span.start == self.bounds.query_start)
    }

    /// True if the current parameter is the last one; false when none is selected
    pub fn is_last(&self) -> bool {
        self.span.is_some_and(|span| span.end == self.bounds.fragment_start)
    }

    /// Key of the current parameter, possibly empty.
    /// `None` if no parameter is selected.
    pub fn key(&self) -> Option<&'a str> {
        self.span.map(|span| span.key(self.source))
    }

    /// Value of the current parameter.
    /// `None` if the parameter has no '=' or no parameter is selected;
    /// `Some("")` for a parameter like `key=`.
    pub fn value(&self) -> Option<&'a str> {
        self.span.and_then(|span| span.value(self.source))
    }

    /// Text of the current parameter as it appears in the URL
    pub fn raw(&self) -> Option<&'a str> {
        self.span.map(|span| span.raw(self.source))
    }

    /// Key and value of the current parameter, `None` if none is selected
    pub fn param(&self) -> Option<Param<'a>> {
        self.span.map(|span| Param::from_span(self.source, span))
    }

    /// Iterate the parameters of the original URL, independent of the
    /// cursor position and of any edits
    pub fn params(&self) -> Params<'a> {
        Params::from_parts(self.source, self.bounds, self.separator)
    }

    /// True if rendering would differ from the source URL
    pub fn is_modified(&self) -> bool {
        !self.edits.is_empty()
    }

    /// Remove the current parameter from the rendered URL.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::NoParameterSelected`] if [`advance`] has not
    /// selected a parameter yet.
    ///
    /// [`advance`]: Self::advance
    pub fn remove(&mut self) -> Result<()> {
        self.prepare_edit()?;
        self.edits.mark_removed();
        Ok(())
    }

    /// Insert a parameter right before the current one, after any parameter
    /// previously inserted at the same position.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::NoParameterSelected`] if no parameter is
    /// selected.
    pub fn insert_before(&mut self, key: &str, value: Option<&str>) -> Result<()> {
        self.prepare_edit()?;
        self.edits.insert(Placement::Before, self.separator, key, value);
        Ok(())
    }

    /// Insert a parameter right after the current one, after any parameter
    /// previously inserted at the same position.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::NoParameterSelected`] if no parameter is
    /// selected.
    pub fn insert_after(&mut self, key: &str, value: Option<&str>) -> Result<()> {
        self.prepare_edit()?;
        self.edits.insert(Placement::After, self.separator, key, value);
        Ok(())
    }

    /// Insert a parameter before all the others. Works in any cursor state.
    pub fn insert_first(&mut self, key: &str, value: Option<&str>) {
        self.edits.insert(Placement::First, self.separator, key, value);
        self.rendered.take();
    }

    /// Insert a parameter after all the others. Works in any cursor state.
    pub fn insert_last(&mut self, key: &str, value: Option<&str>) {
        self.edits.insert(Placement::Last, self.separator, key, value);
        self.rendered.take();
    }

    /// The URL with all recorded edits applied.
    ///
    /// Returns the source itself when nothing was edited. Otherwise the
    /// result is built once and cached until the next edit.
    pub fn render(&self) -> &str {
        if self.edits.is_empty() {
            return self.source;
        }
        self.rendered
            .get_or_init(|| render_edits(self.source, self.bounds, self.separator, &self.edits))
    }

    /// Consume the cursor and return the rendered URL, reusing the cached render
    pub fn into_string(self) -> String {
        if self.edits.is_empty() {
            return self.source.to_string();
        }
        match self.rendered.into_inner() {
            Some(rendered) => rendered,
            None => render_edits(self.source, self.bounds, self.separator, &self.edits),
        }
    }

    fn prepare_edit(&mut self) -> Result<()> {
        let span = self.span.ok_or(CursorError::NoParameterSelected)?;
        self.edits.track(self.source, self.bounds, span, self.separator);
        self.rendered.take();
        Ok(())
    }
}

impl<'a> From<&'a str> for ParamCursor<'a> {
    fn from(url: &'a str) -> Self {
        Self::new(url)
    }
}

impl core::fmt::Display for ParamCursor<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.render())
    }
}
