//! Utility functions for text measurement and indentation.

use unicode_width::UnicodeWidthStr;

/// Returns the display width of a string in terminal columns.
///
/// Uses Unicode width calculations, so CJK and other wide characters count
/// as two columns.
///
/// # Example
///
/// ```rust
/// use rstout::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Left-justifies a string to the given display width by padding with spaces.
///
/// Strings already at or beyond `width` are returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut result = String::with_capacity(s.len() + (width - current));
    result.push_str(s);
    for _ in current..width {
        result.push(' ');
    }
    result
}

/// Returns the number of leading whitespace characters in a line.
///
/// # Example
///
/// ```rust
/// use rstout::indentation;
///
/// assert_eq!(indentation(""), 0);
/// assert_eq!(indentation("foo"), 0);
/// assert_eq!(indentation(" foo"), 1);
/// ```
pub fn indentation(s: &str) -> usize {
    s.chars().take_while(|c| c.is_whitespace()).count()
}

/// Reduces the indentation of a text block to the minimum.
///
/// Empty lines don't count toward the minimum.
///
/// # Example
///
/// ```rust
/// use rstout::unindent;
///
/// assert_eq!(unindent("\n  foo\n    foo\n"), "\nfoo\n  foo");
/// assert_eq!(unindent("\nfoo\n    foo\n"), "\nfoo\n    foo");
/// ```
pub fn unindent(s: &str) -> String {
    let s = s.trim_end();
    let lines: Vec<&str> = s.lines().collect();
    if lines.is_empty() {
        return String::new();
    }

    let mut min_indent: Option<usize> = None;
    for line in &lines {
        let line = line.trim_end();
        if !line.is_empty() {
            let indent = indentation(line);
            min_indent = Some(min_indent.map_or(indent, |m| m.min(indent)));
            if indent == 0 {
                break;
            }
        }
    }

    match min_indent {
        None | Some(0) => s.to_string(),
        Some(n) => lines
            .iter()
            .map(|line| {
                let start = line
                    .char_indices()
                    .nth(n)
                    .map(|(i, _)| i)
                    .unwrap_or(line.len());
                &line[start..]
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_ascii() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("abc"), 3);
    }

    #[test]
    fn test_display_width_wide_chars() {
        assert_eq!(display_width("日本語"), 6);
    }

    #[test]
    fn test_pad_right_pads() {
        assert_eq!(pad_right("ab", 5), "ab   ");
    }

    #[test]
    fn test_pad_right_exact_and_over() {
        assert_eq!(pad_right("abcde", 5), "abcde");
        assert_eq!(pad_right("abcdef", 5), "abcdef");
    }

    #[test]
    fn test_pad_right_wide_chars() {
        // "日" is two columns, so only two pad spaces are needed
        assert_eq!(pad_right("日", 4), "日  ");
    }

    #[test]
    fn test_indentation() {
        assert_eq!(indentation(""), 0);
        assert_eq!(indentation("foo"), 0);
        assert_eq!(indentation("  foo"), 2);
        assert_eq!(indentation("\tfoo"), 1);
    }

    #[test]
    fn test_unindent_empty() {
        assert_eq!(unindent(""), "");
    }

    #[test]
    fn test_unindent_common_prefix() {
        assert_eq!(unindent("\n  foo\n    foo\n"), "\nfoo\n  foo");
    }

    #[test]
    fn test_unindent_zero_indent_line_wins() {
        assert_eq!(unindent("\nfoo\n    foo\n"), "\nfoo\n    foo");
    }

    #[test]
    fn test_unindent_whitespace_only_lines_ignored() {
        // The blank middle line is shorter than the common indent
        assert_eq!(unindent("  a\n \n  b"), "a\n\nb");
    }
}
