//! Lenient numeric parsing.
//!
//! The historical data format coerced unparseable reps/weight values to 0
//! instead of rejecting them. That fallback is a documented part of the
//! store contract, so it lives here under a name rather than as ad-hoc
//! `unwrap_or` calls at every use site.

/// Parse a non-negative integer, falling back to 0 on any failure.
pub fn parse_int_or_default(s: &str) -> u32 {
    s.trim().parse::<u32>().unwrap_or(0)
}

/// Parse a non-negative weight in kg, falling back to 0 on any failure.
/// Negative values are treated as unparseable.
pub fn parse_float_or_default(s: &str) -> f64 {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_fallback() {
        assert_eq!(parse_int_or_default("12"), 12);
        assert_eq!(parse_int_or_default(" 7 "), 7);
        assert_eq!(parse_int_or_default(""), 0);
        assert_eq!(parse_int_or_default("abc"), 0);
        assert_eq!(parse_int_or_default("-3"), 0);
    }

    #[test]
    fn float_fallback() {
        assert_eq!(parse_float_or_default("80.5"), 80.5);
        assert_eq!(parse_float_or_default(""), 0.0);
        assert_eq!(parse_float_or_default("heavy"), 0.0);
        assert_eq!(parse_float_or_default("-10"), 0.0);
        assert_eq!(parse_float_or_default("NaN"), 0.0);
    }
}
