//! Section header rendering with level-based decoration.

use std::io;

use crate::error::RenderError;
use crate::util::display_width;

/// Decoration characters for levels 1-3, cycled again for levels 4-6.
const LEVEL_CHARS: [char; 3] = ['=', '-', '~'];

/// Render `text` as a section header of the given `level`.
///
/// Levels 1-3 receive both an overline and an underline of a level-specific
/// character (`=`, `-`, `~` respectively); levels 4-6 are underlined only,
/// cycling the same three characters. The decoration matches the text's
/// display width exactly and the block ends with one blank line.
///
/// A level outside 1-6 fails with [`RenderError::InvalidLevel`]; it is
/// never clamped.
///
/// # Example
///
/// ```rust
/// use rstout::header;
///
/// assert_eq!(header(1, "Level 1").unwrap(), "=======\nLevel 1\n=======\n\n");
/// assert_eq!(header(5, "Level 5").unwrap(), "Level 5\n-------\n\n");
/// assert!(header(7, "nope").is_err());
/// ```
pub fn header(level: usize, text: &str) -> Result<String, RenderError> {
    if !(1..=6).contains(&level) {
        return Err(RenderError::InvalidLevel(level));
    }

    let rule = LEVEL_CHARS[(level - 1) % 3]
        .to_string()
        .repeat(display_width(text));

    let mut out = String::new();
    if level <= 3 {
        out.push_str(&rule);
        out.push('\n');
    }
    out.push_str(text);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push('\n');
    Ok(out)
}

/// Write `text` to `writer` as a header of the given `level`.
///
/// Streaming variant of [`header`]; see there for the layout contract.
pub fn write_header<W: io::Write>(
    writer: &mut W,
    level: usize,
    text: &str,
) -> Result<(), RenderError> {
    writer.write_all(header(level, text)?.as_bytes())?;
    Ok(())
}

/// Render `title` as a bold paragraph, surrounded by blank lines.
///
/// # Example
///
/// ```rust
/// use rstout::boldheader;
///
/// assert_eq!(boldheader("  My Title "), "\n\n**My Title**\n\n");
/// ```
pub fn boldheader(title: &str) -> String {
    format!("\n\n**{}**\n\n", title.trim())
}
