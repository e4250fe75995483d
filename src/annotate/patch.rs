/// A planned replacement of a byte range in the original buffer.
///
/// The range is half-open; `start == end` inserts `text` without
/// consuming any bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Applies non-overlapping edits in a single pass, copying unmodified
/// spans from the original buffer and substituting edit spans. Edits
/// must be sorted ascending by `start`; the planner emits them in
/// source order.
#[must_use]
pub fn apply(source: &str, edits: &[Edit]) -> String {
    let mut result = String::with_capacity(source.len());
    let mut last_pos = 0;

    for edit in edits {
        debug_assert!(edit.start >= last_pos && edit.end >= edit.start);
        if edit.start > last_pos {
            result.push_str(&source[last_pos..edit.start]);
        }
        result.push_str(&edit.text);
        last_pos = edit.end;
    }

    if last_pos < source.len() {
        result.push_str(&source[last_pos..]);
    }

    result
}
