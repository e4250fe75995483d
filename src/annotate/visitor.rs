use tree_sitter::{Node, Parser, Tree};

use crate::annotate::classify::{matches_visibility, MemberKind};
use crate::annotate::dedupe::dedupe;
use crate::annotate::format::{merge_docblock, new_docblock};
use crate::annotate::patch::Edit;
use crate::annotate::Annotator;
use crate::error::{DocstampError, Result};
use crate::lang::Lang;

/// Parses PHP source. Tree-sitter recovers from syntax errors instead
/// of failing, so error nodes in the tree are what malformed input
/// looks like; callers get a hard error and no edits are produced.
pub fn parse(code: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(Lang::Php.grammar())
        .map_err(|e| DocstampError::Parse(e.to_string()))?;

    let tree = parser
        .parse(code, None)
        .ok_or_else(|| DocstampError::Parse("parser produced no tree".into()))?;

    if tree.root_node().has_error() {
        return Err(DocstampError::Parse("input is not valid PHP".into()));
    }

    Ok(tree)
}

/// Collects one edit per matching declaration, in source order.
pub fn plan_edits(root: Node, source: &str, annotator: &Annotator) -> Vec<Edit> {
    let mut edits = Vec::new();
    walk(root, source, annotator, &mut edits);
    edits
}

fn walk(node: Node, source: &str, annotator: &Annotator, edits: &mut Vec<Edit>) {
    if let Some(edit) = plan_node(node, source, annotator) {
        edits.push(edit);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, source, annotator, edits);
    }
}

/// Pure per-node decision: `None` for skipped or already-complete
/// declarations, one edit otherwise.
fn plan_node(node: Node, source: &str, annotator: &Annotator) -> Option<Edit> {
    let kind = MemberKind::classify(node)?;
    if !annotator.kinds.contains(&kind) {
        return None;
    }
    if !matches_visibility(node, kind, source, &annotator.visibilities) {
        return None;
    }

    let doc = doc_comment(node, source);
    let existing = doc.map(|d| d.text).unwrap_or("");
    let lines = dedupe(existing, &annotator.comments);
    if lines.is_empty() {
        return None;
    }

    Some(match doc {
        Some(d) => Edit {
            start: d.start,
            end: d.end,
            text: merge_docblock(d.text, &lines, kind.is_member()),
        },
        None => Edit {
            start: node.start_byte(),
            end: node.start_byte(),
            text: new_docblock(&lines, kind.is_member()),
        },
    })
}

#[derive(Clone, Copy)]
struct DocComment<'s> {
    start: usize,
    end: usize,
    text: &'s str,
}

/// The declaration's docblock: the immediately preceding comment
/// sibling when it is a `/** ... */` block. Any other comment in
/// between detaches the docblock, matching how PHP doc comments bind.
fn doc_comment<'s>(node: Node, source: &'s str) -> Option<DocComment<'s>> {
    let prev = node.prev_sibling()?;
    if prev.kind() != "comment" {
        return None;
    }
    let text = &source[prev.byte_range()];
    text.starts_with("/**").then(|| DocComment {
        start: prev.start_byte(),
        end: prev.end_byte(),
        text,
    })
}
