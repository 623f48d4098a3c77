//! Coercion of user-entered text into numbers.
//!
//! Table cells arrive as free text. Anything that does not parse to a
//! finite number becomes `0.0`, so the solvers never see a parse error.

/// Parses one cell, returning `0.0` for empty, malformed, or non-finite text.
///
/// # Examples
///
/// ```
/// use u_ewaste::input::parse_number;
///
/// assert_eq!(parse_number(" 42.5 "), 42.5);
/// assert_eq!(parse_number("abc"), 0.0);
/// assert_eq!(parse_number(""), 0.0);
/// ```
pub fn parse_number(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Parses a row of cells separated by commas, semicolons, or whitespace.
///
/// Empty fields between separators are skipped.
///
/// # Examples
///
/// ```
/// use u_ewaste::input::parse_row;
///
/// assert_eq!(parse_row("8, 6, x,10"), vec![8.0, 6.0, 0.0, 10.0]);
/// ```
pub fn parse_row(text: &str) -> Vec<f64> {
    text.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(parse_number)
        .collect()
}
