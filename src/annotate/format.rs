// Member-level blocks sit inside a 4-space-indented body; top-level
// blocks start at column zero.
const MEMBER_PREFIX: &str = "     * ";
const MEMBER_CLOSING: &str = "     */";
const MEMBER_PADDING: &str = "\n    ";
const TOP_PREFIX: &str = " * ";
const TOP_CLOSING: &str = " */";
const TOP_PADDING: &str = "\n";

/// Builds a brand-new docblock to insert directly above a declaration.
///
/// The trailing padding re-establishes the leading whitespace consumed
/// by inserting at the declaration's first byte.
#[must_use]
pub fn new_docblock(lines: &[String], member: bool) -> String {
    let (prefix, closing, padding) = if member {
        (MEMBER_PREFIX, MEMBER_CLOSING, MEMBER_PADDING)
    } else {
        (TOP_PREFIX, TOP_CLOSING, TOP_PADDING)
    };

    let mut doc = String::from("/**\n");
    for line in lines {
        doc.push_str(prefix);
        doc.push_str(line);
        doc.push('\n');
    }
    doc.push_str(closing);
    doc.push_str(padding);
    doc
}

/// Merges new lines into an existing docblock, returning the full
/// replacement text for the comment span.
#[must_use]
pub fn merge_docblock(existing: &str, lines: &[String], member: bool) -> String {
    let (prefix, closing) = if member {
        (MEMBER_PREFIX, MEMBER_CLOSING)
    } else {
        (TOP_PREFIX, TOP_CLOSING)
    };

    let mut doc = if existing.contains('\n') {
        // Multi-line: peel off the closing delimiter line, keeping the
        // interior lines byte-for-byte.
        existing
            .trim_end_matches(&[' ', '*', '/', '\n'][..])
            .to_string()
    } else {
        // Single-line `/** ... */` becomes the first line of a block.
        let inner = existing.strip_prefix("/**").unwrap_or(existing);
        let inner = inner.strip_suffix("*/").unwrap_or(inner);
        format!("/**\n{prefix}{}", inner.trim())
    };

    for line in lines {
        doc.push('\n');
        doc.push_str(prefix);
        doc.push_str(line);
    }
    doc.push('\n');
    doc.push_str(closing);
    doc
}
