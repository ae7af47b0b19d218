pub const MIN_TEXT_ROWS: usize = 6;
pub const MAX_TEXT_ROWS: usize = 24;

/// Row count that fits `text`, so text areas grow with their content.
pub fn auto_rows(text: &str, min: usize, max: usize) -> usize {
    let mut rows = text.lines().count().max(1);
    if text.ends_with('\n') {
        rows += 1;
    }
    rows.clamp(min, max)
}
