use std::borrow::Cow;

/// Longest header prefix shown in progress messages.
pub const HEADER_DISPLAY_LEN: usize = 60;

/// ASCII whitespace plus the vertical tab and the `\x1c..=\x1f` separators.
fn is_space(c: u8) -> bool {
    c.is_ascii_whitespace() || matches!(c, 0x0b | 0x1c..=0x1f)
}

pub fn trim_ascii_whitespace(b: &[u8]) -> Option<&[u8]> {
    let start = b.iter().position(|&c| !is_space(c))?;
    let end = b.iter().rposition(|&c| !is_space(c))?;
    Some(&b[start..=end])
}

pub fn is_header(line: &[u8]) -> bool {
    line.first() == Some(&b'>')
}

/// Header text for console output, cut to [`HEADER_DISPLAY_LEN`] characters with a trailing
/// `...` when longer.
pub fn display_header(header: &[u8]) -> Cow<'_, str> {
    let header = String::from_utf8_lossy(header);

    match header.char_indices().nth(HEADER_DISPLAY_LEN) {
        Some((end, _)) => Cow::Owned(format!("{}...", &header[..end])),
        None => header,
    }
}
