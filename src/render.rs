use crate::compat::String;
use crate::delimiters::QUERY_MARK;
use crate::edit::EditLog;
use crate::helpers::slice_or_empty;
use crate::span::QueryBounds;

/// Output builder applying the separator placement rule.
///
/// The first piece written drops its separator and is preceded by
/// everything before the query mark plus a single '?'. Later pieces are
/// joined with the separator.
struct QueryWriter<'a> {
    out: String,
    prefix: &'a str,
    separator: u8,
}

impl<'a> QueryWriter<'a> {
    fn new(prefix: &'a str, separator: u8, capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            prefix,
            separator,
        }
    }

    fn open_piece(&mut self) {
        if self.out.is_empty() {
            self.out.push_str(self.prefix);
            self.out.push(char::from(QUERY_MARK));
        } else {
            self.out.push(char::from(self.separator));
        }
    }

    /// Write a buffer whose entries already carry a leading separator
    fn push_buffer(&mut self, buf: &str) {
        if buf.is_empty() {
            return;
        }
        self.open_piece();
        // Separator is ASCII, so byte 1 is a char boundary
        self.out.push_str(&buf[1..]);
    }

    /// Write original parameter text that has no leading separator
    fn push_raw(&mut self, raw: &str) {
        self.open_piece();
        self.out.push_str(raw);
    }

    fn finish(mut self, fragment: &str) -> String {
        if self.out.is_empty() {
            self.out.push_str(self.prefix);
        }
        self.out.push_str(fragment);
        self.out
    }
}

/// Rebuild `source` with the recorded edits applied
pub fn render_edits(source: &str, bounds: QueryBounds, separator: u8, edits: &EditLog) -> String {
    let buffers = &edits.buffers;
    let capacity = source.len()
        + buffers.accumulated.len()
        + buffers.before.len()
        + buffers.after.len()
        + buffers.first.len()
        + buffers.last.len();
    let mut writer = QueryWriter::new(&source[..bounds.query_start], separator, capacity);

    writer.push_buffer(&buffers.first);
    if let Some(record) = edits.record {
        writer.push_buffer(&buffers.accumulated);
        writer.push_buffer(&buffers.before);
        if !record.removed {
            writer.push_raw(slice_or_empty(source, record.start + 1, record.end));
        }
        writer.push_buffer(&buffers.after);
        if record.end < bounds.fragment_start {
            writer.push_raw(slice_or_empty(source, record.end + 1, bounds.fragment_start));
        }
    } else if bounds.has_query() {
        // Nothing tracked: the original query is kept whole
        writer.push_raw(slice_or_empty(source, bounds.query_start + 1, bounds.fragment_start));
    }
    writer.push_buffer(&buffers.last);

    let rendered = writer.finish(&source[bounds.fragment_start..]);
    log::debug!("rendered {} bytes from {} byte source", rendered.len(), source.len());
    rendered
}
