//! Display helpers for money and percentages.

const GROUP_SEPARATOR: char = '\u{a0}';

/// Whole roubles with grouped thousands, e.g. `10 212 ₽`.
pub fn format_rub(value: f64) -> String {
    format!("{}{GROUP_SEPARATOR}₽", format_grouped(value, 0))
}

/// Yuan with two decimals, e.g. `40.00 ¥`.
pub fn format_cny(value: f64) -> String {
    format!("{}{GROUP_SEPARATOR}¥", format_grouped(value, 2))
}

/// Percentage with one decimal, e.g. `50.0%`.
pub fn format_percent(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    format!("{value:.1}%")
}

/// Format with a fixed number of decimals and grouped thousands.
/// Non-finite values render as zero.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    // Negative zero after rounding must not print a sign.
    if value < 0.0 && fixed.chars().any(|ch| ch.is_ascii_digit() && ch != '0') {
        grouped.push('-');
    }
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rub() {
        assert_eq!(format_rub(10212.0), "10\u{a0}212\u{a0}₽");
        assert_eq!(format_rub(999.6), "1\u{a0}000\u{a0}₽");
        assert_eq!(format_rub(0.0), "0\u{a0}₽");
        assert_eq!(format_rub(f64::NAN), "0\u{a0}₽");
    }

    #[test]
    fn test_format_cny() {
        assert_eq!(format_cny(40.0), "40.00\u{a0}¥");
        assert_eq!(format_cny(1234.567), "1\u{a0}234.57\u{a0}¥");
    }

    #[test]
    fn test_format_grouped_edges() {
        assert_eq!(format_grouped(1_000_000_000.0, 0), "1\u{a0}000\u{a0}000\u{a0}000");
        assert_eq!(format_grouped(-1234.0, 0), "-1\u{a0}234");
        assert_eq!(format_grouped(-0.2, 0), "0");
        assert_eq!(format_grouped(123.0, 0), "123");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(50.0), "50.0%");
        assert_eq!(format_percent(f64::INFINITY), "0.0%");
    }
}
