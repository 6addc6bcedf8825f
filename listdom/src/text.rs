use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Number of rows a block of text occupies. Empty text still takes a row.
pub fn line_count(s: &str) -> usize {
    s.lines().count().max(1)
}

/// Widest line of `s`, in terminal cells.
pub fn max_line_width(s: &str) -> usize {
    s.lines().map(display_width).max().unwrap_or(0)
}
