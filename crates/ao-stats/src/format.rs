//! Significant-digit float formatting for statistic tables.

/// Format `value` with `digits` significant digits.
///
/// Fixed notation is used for decimal exponents in `-4..digits`, scientific
/// notation (`1.2345e-05`) otherwise.  Trailing zeros are dropped, but fixed
/// notation keeps at least one fractional digit (`1.0`).  Non-finite values
/// print as `nan`, `inf` and `-inf`.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_owned();
    }

    let digits = digits.max(1);
    // Rounding to `digits` may carry into the next decade, so read the
    // exponent back from the rounded scientific form.
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        let mantissa = trim_fraction(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent) as usize;
        let fixed = format!("{value:.decimals$}");
        let trimmed = trim_fraction(&fixed);
        if trimmed.contains('.') {
            trimmed.to_owned()
        } else {
            format!("{trimmed}.0")
        }
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
