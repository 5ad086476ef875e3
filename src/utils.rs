//! Small formatting helpers shared by the typed option setters.

/// Render a bool the way the URL grammar spells it: `1` or `0`.
pub(crate) fn bool_as_number_str(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Render a float in its shortest decimal form, no trailing zeros.
pub(crate) fn format_float(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_as_number_str() {
        assert_eq!(bool_as_number_str(true), "1");
        assert_eq!(bool_as_number_str(false), "0");
    }

    #[test]
    fn test_format_float_trims_trailing_zeros() {
        assert_eq!(format_float(1.234), "1.234");
        assert_eq!(format_float(2.0), "2");
        assert_eq!(format_float(0.5), "0.5");
    }
}
