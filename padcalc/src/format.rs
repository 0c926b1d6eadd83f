//! Number rendering for the display
//!
//! Shortest round-trip digits, always with a fractional part. Magnitudes
//! outside `[1e-3, 1e7)` switch to scientific notation with an upper-case
//! exponent marker.

const PLAIN_MIN: f64 = 1e-3;
const PLAIN_MAX: f64 = 1e7;

pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = n.abs();
    if n == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        // Debug keeps the trailing ".0" and stays positional in this range
        return format!("{:?}", n);
    }

    let sci = format!("{:e}", n);
    match sci.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => sci,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_keep_fraction() {
        assert_eq!(format_number(10.0), "10.0");
        assert_eq!(format_number(5.0), "5.0");
        assert_eq!(format_number(-4.0), "-4.0");
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(-0.0), "-0.0");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(0.001), "0.001");
        assert_eq!(format_number(1234567.5), "1234567.5");
    }

    #[test]
    fn test_scientific() {
        assert_eq!(format_number(1e7), "1.0E7");
        assert_eq!(format_number(12345678.0), "1.2345678E7");
        assert_eq!(format_number(0.0001), "1.0E-4");
        assert_eq!(format_number(-2.5e-5), "-2.5E-5");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
