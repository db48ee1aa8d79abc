//! Compact output rendering helpers for CLI surfaces.
//!
//! Keeps rendered page output bounded and readable while preserving signal.

/// Collapse newlines/extra whitespace and bound length for terminal display.
pub fn compact_line(input: &str, max_chars: usize) -> String {
    let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = collapsed.chars();
    let preview: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", preview)
    } else {
        preview
    }
}

/// Render up to `max_items` lines with compact formatting.
pub fn preview_lines(lines: &[String], max_items: usize, max_chars: usize) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let shown = lines
        .iter()
        .take(max_items)
        .map(|l| compact_line(l, max_chars))
        .collect::<Vec<_>>()
        .join(" | ");
    if lines.len() > max_items {
        format!("{} (+{} more)", shown, lines.len() - max_items)
    } else {
        shown
    }
}

/// A titled section of a page body. Pages build their bodies from these so
/// every view renders with the same shape.
pub fn section(title: &str, lines: &[String]) -> String {
    let mut out = String::new();
    out.push_str("## ");
    out.push_str(title);
    out.push('\n');
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_line_collapses_whitespace() {
        assert_eq!(compact_line("a\n  b\tc", 80), "a b c");
    }

    #[test]
    fn test_compact_line_bounds_length() {
        assert_eq!(compact_line("abcdef", 3), "abc...");
    }

    #[test]
    fn test_preview_lines_overflow_marker() {
        let lines = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        assert_eq!(preview_lines(&lines, 2, 80), "one | two (+1 more)");
    }

    #[test]
    fn test_section_shape() {
        let body = section("People", &["Alice".to_string()]);
        assert_eq!(body, "## People\nAlice\n");
    }
}
