//! Numeric conversion capability.
//!
//! The number parser does not hard-code how a string becomes a number; it
//! delegates to a [`NumberConverter`]. This is the seam for locale-aware
//! formats (decimal commas, digit grouping): plug in a converter bound to
//! the right locale and the parser logic stays unchanged.
//!
//! Failure is the tagged `None`, never a NaN sentinel. A converter that
//! returns `Some(NAN)` is treated as a failed conversion by the parser.

/// Converts a candidate string to a number, or reports that it is not one.
pub trait NumberConverter: Send + Sync {
    /// Returns the converted value, or `None` when `input` does not convert.
    fn convert(&self, input: &str) -> Option<f64>;
}

impl<F> NumberConverter for F
where
    F: Fn(&str) -> Option<f64> + Send + Sync,
{
    fn convert(&self, input: &str) -> Option<f64> {
        self(input)
    }
}

/// The default converter: locale-agnostic full-token float conversion.
///
/// Accepts what [`str::parse::<f64>`] accepts (`1000`, `+1000`, `-1.5`,
/// `1e3`); the whole input must be numeric.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatConverter;

impl NumberConverter for FloatConverter {
    fn convert(&self, input: &str) -> Option<f64> {
        input.parse().ok()
    }
}

/// Converts the longest numeric prefix of the input, like C's `strtod` or
/// JavaScript's `parseInt`: `"1000cc"` converts to `1000`.
///
/// Prefix-stopping converters like this one are why the number parser does
/// plateau detection: growing the token window past the numeric prefix keeps
/// yielding the same value, and those extra tokens must not be consumed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixFloatConverter;

impl NumberConverter for PrefixFloatConverter {
    fn convert(&self, input: &str) -> Option<f64> {
        for end in (1..=input.len()).rev() {
            if !input.is_char_boundary(end) {
                continue;
            }
            if let Ok(value) = input[..end].parse::<f64>() {
                return Some(value);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_converter_accepts_signs_and_exponents() {
        assert_eq!(FloatConverter.convert("1000"), Some(1000.0));
        assert_eq!(FloatConverter.convert("+1000"), Some(1000.0));
        assert_eq!(FloatConverter.convert("-1000"), Some(-1000.0));
        assert_eq!(FloatConverter.convert("1e3"), Some(1000.0));
        assert_eq!(FloatConverter.convert("100.1"), Some(100.1));
    }

    #[test]
    fn test_float_converter_rejects_partial_numbers() {
        assert_eq!(FloatConverter.convert("1000cc"), None);
        assert_eq!(FloatConverter.convert("foo"), None);
        assert_eq!(FloatConverter.convert(""), None);
    }

    #[test]
    fn test_prefix_converter_stops_at_first_non_numeric() {
        assert_eq!(PrefixFloatConverter.convert("1000cc"), Some(1000.0));
        assert_eq!(PrefixFloatConverter.convert("-12.5x"), Some(-12.5));
        assert_eq!(PrefixFloatConverter.convert("foo"), None);
    }

    #[test]
    fn test_closures_are_converters() {
        let comma_decimal = |input: &str| input.replace(',', ".").parse::<f64>().ok();
        assert_eq!(comma_decimal.convert("1,5"), Some(1.5));
        assert_eq!(comma_decimal.convert("x"), None);
    }
}
