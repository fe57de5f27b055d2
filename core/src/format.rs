//! Compact number rendering for the presentation layer.

/// Floor `n` and render it with a k/M/G suffix, or in scientific
/// notation from 10^13 up.
pub fn format_number(n: f64) -> String {
    let n = n.floor();

    if n < 1e4 {
        return format!("{n:.0}");
    }
    if n < 1e7 {
        return format!("{:.0}k", (n / 1e3).floor());
    }
    if n < 1e10 {
        return format!("{:.0}M", (n / 1e6).floor());
    }
    if n < 1e13 {
        return format!("{:.0}G", (n / 1e9).floor());
    }

    // Rust prints `1.5e13`; the display layer expects an explicit sign.
    let sci = format!("{n:e}");
    match sci.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => sci,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers_are_plain() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(42.9), "42");
        assert_eq!(format_number(9999.0), "9999");
    }

    #[test]
    fn suffix_thresholds() {
        assert_eq!(format_number(10_000.0), "10k");
        assert_eq!(format_number(9_999_999.0), "9999k");
        assert_eq!(format_number(10_000_000.0), "10M");
        assert_eq!(format_number(7_000_000_000.0), "7000M");
        assert_eq!(format_number(10_000_000_000.0), "10G");
    }

    #[test]
    fn huge_numbers_use_scientific_notation() {
        assert_eq!(format_number(1.5e13), "1.5e+13");
        assert_eq!(format_number(2e20), "2e+20");
    }
}
