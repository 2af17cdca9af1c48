use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::Zero;

use fieldcheck_core::{Matcher, ValidationResult};

use crate::error::MatcherConfigError;

const DEFAULT_MAX_DIGITS: u64 = 11;

/// Code reported when the value does not parse as a decimal number.
pub const CODE_NOT_A_NUMBER: &str = "doubleNumber.e001";
/// Code reported when the value has more significant digits than allowed.
pub const CODE_MAX_DIGITS: &str = "doubleNumber.e002";
/// Code reported when the value has more decimal places than allowed.
pub const CODE_MAX_DECIMAL_PLACES: &str = "doubleNumber.e003";

/// Digit-count limits enforced by [`DecimalNumberMatcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitLimits {
    /// No explicit configuration; total significant digits are capped at 11.
    Default,
    /// Cap on total significant digits.
    TotalDigits(u64),
    /// Caps on total significant digits and on decimal places. Both are
    /// checked independently; one failing does not suppress the other.
    TotalAndFractional(u64, u64),
}

/// Validates that a string value represents a decimal number within
/// configured digit limits. The decimal separator is always `"."`.
///
/// Digit counts follow the parsed number's canonical form: trailing
/// fractional zeros are dropped before counting, so `"0.50"` has one
/// significant digit and one decimal place, while trailing integer zeros
/// count (`"100"` has three digits). The sign is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalNumberMatcher {
    limits: DigitLimits,
}

impl DecimalNumberMatcher {
    /// Creates a matcher with the default total-digit cap of 11.
    pub fn new() -> Self {
        Self {
            limits: DigitLimits::Default,
        }
    }

    /// Creates a matcher capping total significant digits at `total`.
    pub fn with_total_digits(total: u64) -> Self {
        Self {
            limits: DigitLimits::TotalDigits(total),
        }
    }

    /// Creates a matcher capping total significant digits at `total` and
    /// decimal places at `fractional`.
    pub fn with_limits(total: u64, fractional: u64) -> Self {
        Self {
            limits: DigitLimits::TotalAndFractional(total, fractional),
        }
    }

    /// Builds a matcher from a variable-length parameter list.
    ///
    /// Zero, one, or two parameters select the same limits as the dedicated
    /// constructors; longer lists are rejected.
    pub fn from_params(params: &[u64]) -> Result<Self, MatcherConfigError> {
        match *params {
            [] => Ok(Self::new()),
            [total] => Ok(Self::with_total_digits(total)),
            [total, fractional] => Ok(Self::with_limits(total, fractional)),
            _ => Err(MatcherConfigError::TooManyParameters {
                max: 2,
                got: params.len(),
            }),
        }
    }

    /// Configured limits.
    pub fn limits(&self) -> DigitLimits {
        self.limits
    }
}

impl Default for DecimalNumberMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher for DecimalNumberMatcher {
    fn match_value(&self, value: Option<&str>) -> ValidationResult {
        let mut result = ValidationResult::new();
        let Some(raw) = value else {
            return result;
        };
        let Ok(number) = BigDecimal::from_str(raw) else {
            result.add_invalid_type_error(
                CODE_NOT_A_NUMBER,
                "The value is not a valid decimal number.",
            );
            return result;
        };

        let stats = DigitStats::of(&number);
        let (max_total, max_fractional) = match self.limits {
            DigitLimits::Default => (DEFAULT_MAX_DIGITS, None),
            DigitLimits::TotalDigits(total) => (total, None),
            DigitLimits::TotalAndFractional(total, fractional) => (total, Some(fractional)),
        };

        if stats.total > max_total {
            result.add_invalid_type_error(
                CODE_MAX_DIGITS,
                "The value exceeded maximum number of digits.",
            );
        }
        if let Some(max_fractional) = max_fractional {
            if stats.fractional > max_fractional {
                result.add_invalid_type_error(
                    CODE_MAX_DECIMAL_PLACES,
                    "The value exceeded maximum number of decimal places.",
                );
            }
        }
        result
    }
}

/// Digit counts of a parsed decimal in canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DigitStats {
    /// Significant digits across integer and fractional parts.
    total: u64,
    /// Digits after the decimal point.
    fractional: u64,
}

impl DigitStats {
    fn of(number: &BigDecimal) -> Self {
        let (mut mantissa, mut scale) = number.as_bigint_and_exponent();
        let ten = BigInt::from(10);
        // Trailing fractional zeros are not significant.
        while scale > 0 && (&mantissa % &ten).is_zero() {
            mantissa /= &ten;
            scale -= 1;
        }
        let digits = mantissa.magnitude().to_str_radix(10).len() as u64;
        // A negative scale means trailing integer zeros, which do count.
        let total = if scale < 0 {
            digits + scale.unsigned_abs()
        } else {
            digits
        };
        Self {
            total,
            fractional: scale.max(0) as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(raw: &str) -> DigitStats {
        DigitStats::of(&BigDecimal::from_str(raw).unwrap())
    }

    #[test]
    fn counts_integer_and_fractional_digits() {
        assert_eq!(
            stats("123.45"),
            DigitStats {
                total: 5,
                fractional: 2
            }
        );
    }

    #[test]
    fn trailing_fractional_zeros_are_not_significant() {
        assert_eq!(
            stats("0.50"),
            DigitStats {
                total: 1,
                fractional: 1
            }
        );
        assert_eq!(
            stats("1.10"),
            DigitStats {
                total: 2,
                fractional: 1
            }
        );
    }

    #[test]
    fn trailing_integer_zeros_are_significant() {
        assert_eq!(
            stats("100"),
            DigitStats {
                total: 3,
                fractional: 0
            }
        );
    }

    #[test]
    fn leading_zeros_and_sign_are_ignored() {
        assert_eq!(
            stats("0.05"),
            DigitStats {
                total: 1,
                fractional: 2
            }
        );
        assert_eq!(
            stats("-12.3"),
            DigitStats {
                total: 3,
                fractional: 1
            }
        );
    }

    #[test]
    fn zero_has_one_digit() {
        assert_eq!(
            stats("0"),
            DigitStats {
                total: 1,
                fractional: 0
            }
        );
        assert_eq!(
            stats("0.00"),
            DigitStats {
                total: 1,
                fractional: 0
            }
        );
    }

    #[test]
    fn counts_digits_beyond_fixed_width_decimals() {
        let raw = "123456789012345678901234567890123.5";
        assert_eq!(
            stats(raw),
            DigitStats {
                total: 34,
                fractional: 1
            }
        );
    }
}
