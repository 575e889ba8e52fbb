//! Label formatting: month names and number formats.

/// Full month names, indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Abbreviated month names, indexed by zero-based month.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Full name for a zero-based month index. Out-of-range indices give `""`.
#[must_use]
pub fn month_name(index: usize) -> &'static str {
    MONTH_NAMES.get(index).copied().unwrap_or("")
}

/// Abbreviated name for a zero-based month index. Out-of-range indices give `""`.
#[must_use]
pub fn month_abbreviation(index: usize) -> &'static str {
    MONTH_ABBREVIATIONS.get(index).copied().unwrap_or("")
}

/// Formats `value` with `precision` significant digits.
///
/// Matches `Number.prototype.toPrecision`: exact halves round away from
/// zero, fixed notation keeps trailing zeros, and exponential notation is
/// used when the decimal exponent is below -6 or at least `precision`.
/// `precision` is clamped to 1-15.
///
/// # Example
///
/// ```
/// use temp_heatmap::format::to_precision;
///
/// assert_eq!(to_precision(0.9, 2), "0.90");
/// assert_eq!(to_precision(12.5, 2), "13");
/// assert_eq!(to_precision(123.0, 2), "1.2e+2");
/// ```
#[must_use]
pub fn to_precision(value: f64, precision: usize) -> String {
    let precision = precision.clamp(1, 15);
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return place_point(&"0".repeat(precision), 0);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    // Shortest round-trip form carries the exact decimal exponent.
    let shortest = format!("{:e}", magnitude);
    let mut exponent: i32 = shortest
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);

    let mut digits = scale_by_pow10(magnitude, precision as i32 - 1 - exponent).round();
    if digits >= 10f64.powi(precision as i32) {
        digits /= 10.0;
        exponent += 1;
    }
    let digits = format!("{:0>width$}", digits as u64, width = precision);

    if exponent < -6 || exponent >= precision as i32 {
        let (lead, rest) = digits.split_at(1);
        let mantissa = if rest.is_empty() {
            lead.to_string()
        } else {
            format!("{lead}.{rest}")
        };
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        return format!("{sign}{mantissa}e{exp_sign}{}", exponent.abs());
    }

    format!("{sign}{}", place_point(&digits, exponent))
}

/// Multiplies by `10^power`, dividing for negative powers so exact
/// decimals like `125 / 10` stay exact.
fn scale_by_pow10(value: f64, power: i32) -> f64 {
    if power >= 0 {
        value * 10f64.powi(power)
    } else {
        value / 10f64.powi(-power)
    }
}

/// Inserts the decimal point into significant `digits` whose leading digit
/// sits at `10^exponent`, for `-6 <= exponent < digits.len()`.
fn place_point(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0.{zeros}{digits}");
    }
    let (int, frac) = digits.split_at((exponent as usize + 1).min(digits.len()));
    if frac.is_empty() {
        int.to_string()
    } else {
        format!("{int}.{frac}")
    }
}

/// Formats a year tick label as an integer.
#[must_use]
pub fn format_year(value: f64) -> String {
    format!("{}", value.round() as i64)
}

/// Formats a legend temperature with one decimal.
#[must_use]
pub fn format_legend_temperature(value: f64) -> String {
    format!("{:.1}", value)
}

/// Formats a number with the shortest representation that parses back to
/// the same `f64`.
#[must_use]
pub fn format_exact(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_tables() {
        assert_eq!(month_name(0), "January");
        assert_eq!(month_name(11), "December");
        assert_eq!(month_name(12), "");
        assert_eq!(month_abbreviation(8), "Sep");
    }

    #[test]
    fn test_to_precision_fixed() {
        assert_eq!(to_precision(8.66 - 7.76, 2), "0.90");
        assert_eq!(to_precision(9.96, 2), "10");
        assert_eq!(to_precision(-1.234, 2), "-1.2");
        assert_eq!(to_precision(0.0, 2), "0.0");
        assert_eq!(to_precision(0.0123, 2), "0.012");
    }

    #[test]
    fn test_to_precision_rounds_halves_up() {
        // 8.66 + 3.84 is exactly 12.5
        assert_eq!(to_precision(8.66 + 3.84, 2), "13");
        assert_eq!(to_precision(12.5, 2), "13");
        assert_eq!(to_precision(10.5, 2), "11");
        assert_eq!(to_precision(0.125, 2), "0.13");
        assert_eq!(to_precision(9.25, 2), "9.3");
        assert_eq!(to_precision(-12.5, 2), "-13");
        assert_eq!(to_precision(99.5, 2), "1.0e+2");
    }

    #[test]
    fn test_to_precision_exponential() {
        assert_eq!(to_precision(123.0, 2), "1.2e+2");
        assert_eq!(to_precision(0.00000012, 2), "1.2e-7");
    }

    #[test]
    fn test_format_year() {
        assert_eq!(format_year(1760.0), "1760");
        assert_eq!(format_year(1999.9999999), "2000");
    }

    #[test]
    fn test_format_exact_round_trips() {
        let value = 8.66 + -7.76;
        let text = format_exact(value);
        assert_eq!(text.parse::<f64>().unwrap(), value);
    }
}
