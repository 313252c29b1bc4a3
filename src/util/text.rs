/// The separator `format_with_commas` puts between digit groups.
const THOUSANDS_SEPARATOR: char = ',';

/// Formats an integer with its digits grouped in threes from the right.
///
/// Values with three or fewer digits are returned unchanged. A negative value
/// keeps its sign in front of the grouped magnitude.
///
/// # Example
///
/// ```
/// assert_eq!(format_with_commas(1234567), "1,234,567");
/// assert_eq!(format_with_commas(-1000), "-1,000");
/// assert_eq!(format_with_commas(999), "999");
/// ```
pub fn format_with_commas(n: i64) -> String {
    // unsigned_abs 讓 i64::MIN 也不會溢位
    let digits = n.unsigned_abs().to_string();
    let len = digits.len();
    let mut formatted = String::with_capacity(len + len / 3 + 1);

    if n < 0 {
        formatted.push('-');
    }

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            formatted.push(THOUSANDS_SEPARATOR);
        }
        formatted.push(c);
    }

    formatted
}
