//! Line splitting for multi-line paste

/// Split `text` into lines on `\r\n`, `\r` or `\n`.
///
/// Separators are not included. A trailing terminator does not produce a final empty line,
/// so `"a\nb\n"` and `"a\nb"` both yield `["a", "b"]`. Empty text yields one empty line.
pub fn tokenize_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut line_start = 0;
    let mut index = 0;

    while index < bytes.len() {
        match bytes[index] {
            b'\n' => {
                lines.push(&text[line_start..index]);
                index += 1;
                line_start = index;
            }
            b'\r' => {
                lines.push(&text[line_start..index]);
                index += if bytes.get(index + 1) == Some(&b'\n') { 2 } else { 1 };
                line_start = index;
            }
            _ => index += 1,
        }
    }

    if line_start < text.len() || lines.is_empty() {
        lines.push(&text[line_start..]);
    }
    lines
}
