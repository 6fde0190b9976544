//! Commit-on-blur parsing for the picker's text fields.
//!
//! Fields validate when the user commits (blur/Enter), not per keystroke.
//! A parse failure returns `None` and the caller keeps the previous value.

/// Parse a percent field such as `"25"` or `"25%"`. Values clamp to 0–100.
pub fn parse_percent(input: &str) -> Option<i32> {
    let trimmed = input.trim();
    let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    digits.parse::<i32>().ok().map(|v| v.clamp(0, 100))
}

/// Parse a degree field such as `"90"` or `"90°"`, wrapping into 0–359
/// (`"-10°"` commits as 350).
pub fn parse_degrees(input: &str) -> Option<i32> {
    let trimmed = input.trim();
    let digits = trimmed.strip_suffix('°').unwrap_or(trimmed).trim_end();
    digits.parse::<i32>().ok().map(|v| v.rem_euclid(360))
}
