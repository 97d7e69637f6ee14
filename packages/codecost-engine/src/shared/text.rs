//! Line-window text helpers shared by the detector and the optimizer.

/// Forward window `[start, start + span)` clamped to the line count.
pub fn window(len: usize, start: usize, span: usize) -> std::ops::Range<usize> {
    let end = len.min(start.saturating_add(span));
    start.min(end)..end
}

/// Symmetric window `[idx - radius, idx + radius]` clamped to the line count.
pub fn around(len: usize, idx: usize, radius: usize) -> std::ops::Range<usize> {
    idx.saturating_sub(radius)..len.min(idx.saturating_add(radius) + 1)
}

/// Does `line` contain any of `tokens` as a plain substring?
pub fn contains_any(line: &str, tokens: &[&str]) -> bool {
    tokens.iter().any(|t| line.contains(t))
}

/// Does `line` contain a call to `name` (i.e. `name(` not preceded by an
/// identifier character)?
pub fn contains_call(line: &str, name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    let needle = format!("{}(", name);
    let mut from = 0;
    while let Some(pos) = line[from..].find(&needle) {
        let at = from + pos;
        let preceded_by_ident = at > 0
            && line[..at]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_alphanumeric() || c == '_');
        if !preceded_by_ident {
            return true;
        }
        from = at + needle.len();
    }
    false
}

/// Leading-whitespace width of a line, tabs counted as one column each.
pub fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ' || *c == '\t').count()
}

/// Is the line blank (empty or whitespace only)?
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
