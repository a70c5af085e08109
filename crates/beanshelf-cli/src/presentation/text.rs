/// Single-line, width-limited rendering of free text.
///
/// Newlines collapse to spaces and runs of whitespace to one space. Counts
/// characters, not bytes, and marks a cut with `...`.
pub fn truncate(s: &str, max_chars: usize) -> String {
    let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");

    if normalized.chars().count() <= max_chars {
        normalized
    } else if max_chars <= 3 {
        normalized.chars().take(max_chars).collect()
    } else {
        let truncated: String = normalized.chars().take(max_chars - 3).collect();
        format!("{}...", truncated)
    }
}
