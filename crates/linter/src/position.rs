use crate::diagnostics::Position;

/// Convert a byte offset to a line and column (0-indexed)
///
/// Iterates through the document counting newlines until the offset is
/// reached. Columns count characters, not bytes, so multi-byte UTF-8
/// sequences advance the column by one.
#[must_use]
pub fn offset_to_line_col(document: &str, offset: usize) -> (usize, usize) {
    let mut line = 0;
    let mut col = 0;
    let mut current_offset = 0;

    for ch in document.chars() {
        if current_offset >= offset {
            break;
        }

        if ch == '\n' {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }

        current_offset += ch.len_utf8();
    }

    (line, col)
}

/// Convert a byte offset to a [`Position`]
#[must_use]
pub fn offset_to_position(document: &str, offset: usize) -> Position {
    let (line, character) = offset_to_line_col(document, offset);
    Position { line, character }
}
