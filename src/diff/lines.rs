//! Line splitting on universal newlines.

/// Split `text` into lines on `\r\n`, `\n` or a lone `\r`.
///
/// Separators are not kept. Every separator ends a line, so a trailing
/// separator yields a trailing empty line, and `""` yields `[""]`.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&text[start..]);

    lines
}
