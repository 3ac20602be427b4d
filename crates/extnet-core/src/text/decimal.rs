use super::FormatError;

/// Number of digits after the decimal point of a plain decimal literal.
///
/// Trailing zeros count (`"1.250"` is 3); integers have none. Signs are
/// allowed, exponents are not.
pub fn fractional_digits(literal: &str) -> Result<usize, FormatError> {
    let trimmed = literal.trim();
    let unsigned = trimmed
        .strip_prefix(|c: char| c == '-' || c == '+')
        .unwrap_or(trimmed);
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty()) || !all_digits(integer) || !all_digits(fraction)
    {
        return Err(FormatError::invalid(
            "literal",
            format!("'{literal}' is not a decimal number"),
        ));
    }
    Ok(fraction.len())
}
