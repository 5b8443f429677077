//! Bullet and ordered list rendering.

use crate::util::display_width;

/// Render `items` as a bullet list.
///
/// Items containing line breaks continue on lines indented past the bullet.
/// If at least one item contains more than one paragraph (an empty line),
/// all items are separated by an additional blank line.
///
/// # Example
///
/// ```rust
/// use rstout::ul;
///
/// assert_eq!(ul(&["Foo", "Bar", "Baz"]), "- Foo\n- Bar\n- Baz\n");
/// assert_eq!(
///     ul(&["Foo", "An item\nwith several lines of text.", "Bar"]),
///     "- Foo\n- An item\n  with several lines of text.\n- Bar\n"
/// );
/// ```
pub fn ul<S: AsRef<str>>(items: &[S]) -> String {
    bulleted(items, "-")
}

/// Render `items` as an ordered list using auto-enumerated `#.` bullets.
///
/// # Example
///
/// ```rust
/// use rstout::ol;
///
/// assert_eq!(ol(&["Foo", "Bar"]), "#. Foo\n#. Bar\n");
/// ```
pub fn ol<S: AsRef<str>>(items: &[S]) -> String {
    bulleted(items, "#.")
}

/// Render `items` as a list with the given bullet.
///
/// [`ul`] and [`ol`] are shorthands for the two standard bullets.
pub fn bulleted<S: AsRef<str>>(items: &[S], bullet: &str) -> String {
    let compressed = items.iter().all(|item| !item.as_ref().contains("\n\n"));
    let innersep = format!("\n{}", " ".repeat(display_width(bullet) + 1));

    let mut out = String::new();
    for item in items {
        let text = item.as_ref().lines().collect::<Vec<_>>().join(&innersep);
        if !compressed {
            out.push('\n');
        }
        out.push_str(bullet);
        out.push(' ');
        out.push_str(&text);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_items() {
        assert_eq!(ul(&["Foo", "Bar", "Baz"]), "- Foo\n- Bar\n- Baz\n");
    }

    #[test]
    fn multiline_item_continues_indented() {
        assert_eq!(
            ul(&["Foo", "An item\nwith several lines of text.", "Bar"]),
            "- Foo\n- An item\n  with several lines of text.\n- Bar\n"
        );
    }

    #[test]
    fn ordered_list_indents_past_wider_bullet() {
        assert_eq!(
            ol(&["Foo", "An item\nwith several lines of text.", "Bar"]),
            "#. Foo\n#. An item\n   with several lines of text.\n#. Bar\n"
        );
    }

    #[test]
    fn any_multiparagraph_item_spaces_all_items() {
        assert_eq!(
            ul(&[
                "A first item\nwith several lines of text.",
                "Another item with a nested paragraph:\n\n  Like this.\n\nWow.",
            ]),
            "\n- A first item\n  with several lines of text.\n\n- Another item with a nested paragraph:\n  \n    Like this.\n  \n  Wow.\n"
        );
    }

    #[test]
    fn empty_items_render_nothing() {
        assert_eq!(ul::<&str>(&[]), "");
    }

    #[test]
    fn custom_bullet() {
        assert_eq!(bulleted(&["a\nb"], "*"), "* a\n  b\n");
    }
}
