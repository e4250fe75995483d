//! Docblock merge/rewrite engine.
//!
//! [`Annotator`] guarantees that a fixed set of comment lines is present
//! in the docblock of every matching declaration. It plans byte-range
//! edits against the original buffer and applies them in one pass;
//! bytes outside the touched docblocks are never disturbed, and
//! re-running with the same lines is a no-op.

pub mod classify;
pub mod dedupe;
pub mod format;
pub mod patch;
mod visitor;

pub use classify::{MemberKind, Visibility};
pub use patch::Edit;

use crate::error::Result;

/// Rewrites docblocks in PHP source according to a fixed set of comment
/// lines and kind/visibility filters. Holds only immutable
/// configuration; safe to share across threads.
pub struct Annotator {
    comments: Vec<String>,
    visibilities: Vec<Visibility>,
    kinds: Vec<MemberKind>,
}

impl Annotator {
    #[must_use]
    pub fn new(
        comments: Vec<String>,
        visibilities: Vec<Visibility>,
        kinds: Vec<MemberKind>,
    ) -> Self {
        Self {
            comments,
            visibilities,
            kinds,
        }
    }

    /// Default filters: public methods, properties, and class constants.
    #[must_use]
    pub fn with_defaults(comments: Vec<String>) -> Self {
        Self::new(
            comments,
            vec![Visibility::Public],
            vec![
                MemberKind::Method,
                MemberKind::Property,
                MemberKind::ClassConstant,
            ],
        )
    }

    /// Processes one source buffer, returning the rewritten text.
    ///
    /// # Errors
    /// Returns `DocstampError::Parse` when the input is not valid PHP;
    /// nothing is ever applied partially.
    pub fn process(&self, code: &str) -> Result<String> {
        let tree = visitor::parse(code)?;
        let edits = visitor::plan_edits(tree.root_node(), code, self);
        Ok(patch::apply(code, &edits))
    }
}
