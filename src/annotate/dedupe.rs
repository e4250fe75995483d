/// Removes every whitespace character, newlines included.
fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Returns the candidate lines not already present in `existing`,
/// preserving candidate order.
///
/// Matching is deliberately permissive: both sides are stripped of all
/// whitespace and a candidate is dropped if it occurs as a substring
/// anywhere in the flattened existing text, across line boundaries.
/// Over-suppression beats inserting a near-duplicate.
#[must_use]
pub fn dedupe(existing: &str, candidates: &[String]) -> Vec<String> {
    let haystack = strip_whitespace(existing);
    candidates
        .iter()
        .filter(|line| !haystack.contains(&strip_whitespace(line)))
        .cloned()
        .collect()
}
