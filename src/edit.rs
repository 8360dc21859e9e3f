use crate::compat::String;
use crate::delimiters::VALUE_SEPARATOR;
use crate::helpers::slice_or_empty;
use crate::span::{ParamSpan, QueryBounds};

/// Range and state of the most recently edited parameter that has not been
/// folded into the accumulated buffer yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditRecord {
    pub start: usize,
    pub end: usize,
    pub removed: bool,
}

impl EditRecord {
    fn tracking(span: ParamSpan) -> Self {
        Self {
            start: span.start,
            end: span.end,
            removed: false,
        }
    }
}

/// Where an inserted parameter goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Right before the tracked parameter
    Before,
    /// Right after the tracked parameter
    After,
    /// Before every other parameter
    First,
    /// After every other parameter
    Last,
}

/// Pending parameter text.
///
/// Every entry starts with the parameter separator. `accumulated` holds the
/// finished output for everything up to the tracked parameter; `before` and
/// `after` belong to the tracked parameter; `first` and `last` wrap the
/// whole query.
#[derive(Debug, Clone, Default)]
pub struct EditBuffers {
    pub accumulated: String,
    pub before: String,
    pub after: String,
    pub first: String,
    pub last: String,
}

impl EditBuffers {
    /// Append `separator key[=value]` to the buffer for `placement`
    pub fn push_param(&mut self, placement: Placement, separator: u8, key: &str, value: Option<&str>) {
        let buf = match placement {
            Placement::Before => &mut self.before,
            Placement::After => &mut self.after,
            Placement::First => &mut self.first,
            Placement::Last => &mut self.last,
        };
        buf.push(char::from(separator));
        buf.push_str(key);
        if let Some(value) = value {
            buf.push(char::from(VALUE_SEPARATOR));
            buf.push_str(value);
        }
    }

    /// Append original parameter text, prefixed with the separator
    fn accumulate_raw(&mut self, separator: u8, raw: &str) {
        self.accumulated.push(char::from(separator));
        self.accumulated.push_str(raw);
    }

    fn flush_before(&mut self) {
        self.accumulated.push_str(&self.before);
        self.before.clear();
    }

    fn flush_after(&mut self) {
        self.accumulated.push_str(&self.after);
        self.after.clear();
    }
}

/// Deferred edits recorded against a source URL
#[derive(Debug, Clone, Default)]
pub struct EditLog {
    pub record: Option<EditRecord>,
    pub buffers: EditBuffers,
}

impl EditLog {
    /// True when nothing has been recorded and rendering is the identity
    pub fn is_empty(&self) -> bool {
        self.record.is_none() && self.buffers.first.is_empty() && self.buffers.last.is_empty()
    }

    /// Make `span` the tracked parameter.
    ///
    /// When the cursor has moved past the previously tracked parameter, that
    /// parameter (unless removed), its pending insertions and the untouched
    /// parameters up to `span` are moved into `accumulated`. Editing the same
    /// parameter again keeps its record, including the removed flag.
    pub fn track(&mut self, source: &str, bounds: QueryBounds, span: ParamSpan, separator: u8) {
        match &mut self.record {
            None => {
                if bounds.query_start < span.start {
                    let skipped = slice_or_empty(source, bounds.query_start + 1, span.start);
                    self.buffers.accumulate_raw(separator, skipped);
                }
                self.record = Some(EditRecord::tracking(span));
            }
            Some(record) if record.start < span.start => {
                log::trace!(
                    "accumulating edits of parameter at {}..{} (removed: {})",
                    record.start,
                    record.end,
                    record.removed
                );
                self.buffers.flush_before();
                if !record.removed {
                    let raw = slice_or_empty(source, record.start + 1, record.end);
                    self.buffers.accumulate_raw(separator, raw);
                }
                self.buffers.flush_after();
                if record.end < span.start {
                    let skipped = slice_or_empty(source, record.end + 1, span.start);
                    self.buffers.accumulate_raw(separator, skipped);
                }
                *record = EditRecord::tracking(span);
            }
            Some(_) => {}
        }
    }

    pub fn mark_removed(&mut self) {
        if let Some(record) = &mut self.record {
            record.removed = true;
        }
    }

    pub fn insert(&mut self, placement: Placement, separator: u8, key: &str, value: Option<&str>) {
        self.buffers.push_param(placement, separator, key, value);
    }
}
