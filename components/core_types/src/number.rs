//! Arbitrary-precision decimal numbers.
//!
//! A number is stored as `coefficient × 10^exponent` with trailing zeros
//! stripped from the coefficient, so two numbers with the same value always
//! have the same representation. Stripping stops once the exponent reaches
//! `i64::MAX`; the result is still unique per value.

use num_bigint::BigInt;
use num_traits::{Float, Signed, ToPrimitive, Zero};
use std::fmt;
use std::str::FromStr;

/// Arbitrary-precision decimal number.
///
/// # Examples
///
/// ```
/// use core_types::Number;
///
/// let half = Number::from_f64(0.5);
/// assert_eq!(half, "0.5".parse().unwrap());
/// assert_eq!(Number::from(1200i64).to_string(), "1200");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    coefficient: BigInt,
    exponent: i64,
}

/// Error returned when a decimal literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid number literal {input:?}")]
pub struct ParseNumberError {
    input: String,
}

impl Number {
    /// Build `coefficient × 10^exponent`.
    pub fn new(coefficient: BigInt, exponent: i64) -> Self {
        Self::normalize(coefficient, exponent)
    }

    /// Zero.
    pub fn zero() -> Self {
        Number {
            coefficient: BigInt::zero(),
            exponent: 0,
        }
    }

    fn normalize(mut coefficient: BigInt, mut exponent: i64) -> Self {
        if coefficient.is_zero() {
            return Self::zero();
        }
        let ten = BigInt::from(10u8);
        while exponent < i64::MAX && (&coefficient % &ten).is_zero() {
            coefficient = &coefficient / &ten;
            exponent += 1;
        }
        Number {
            coefficient,
            exponent,
        }
    }

    /// Exact decimal value of a binary floating-point number.
    ///
    /// Every finite `f64` is `mantissa × 2^e`, which has a finite decimal
    /// expansion, so no rounding happens here.
    ///
    /// # Panics
    ///
    /// Panics if `value` is NaN or infinite.
    pub fn from_f64(value: f64) -> Self {
        assert!(
            value.is_finite(),
            "cannot represent non-finite float {} as a number",
            value
        );
        let (mantissa, exp, sign) = Float::integer_decode(value);
        let mut coefficient = BigInt::from(mantissa);
        if sign < 0 {
            coefficient = -coefficient;
        }
        let shift = u32::from(exp.unsigned_abs());
        if exp >= 0 {
            Self::new(coefficient << shift, 0)
        } else {
            // m / 2^k == m * 5^k / 10^k
            Self::new(coefficient * BigInt::from(5u8).pow(shift), -i64::from(shift))
        }
    }

    /// Whether this number is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// Whether this number is below zero.
    pub fn is_negative(&self) -> bool {
        self.coefficient.is_negative()
    }

    /// Whether this number has no fractional part.
    pub fn is_integer(&self) -> bool {
        self.exponent >= 0
    }

    /// The value as an `i64`, if it is an integer within range.
    pub fn to_i64(&self) -> Option<i64> {
        if self.is_zero() {
            return Some(0);
        }
        // |coefficient| >= 1, so anything past 10^18 overflows anyway.
        if !(0..=18).contains(&self.exponent) {
            return None;
        }
        let scale = BigInt::from(10u8).pow(u32::try_from(self.exponent).ok()?);
        (&self.coefficient * scale).to_i64()
    }

    /// Nearest `f64` to this number.
    pub fn to_f64(&self) -> f64 {
        format!("{}e{}", self.coefficient, self.exponent)
            .parse()
            .unwrap_or(f64::NAN)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self::new(BigInt::from(value), 0)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Self::new(value, 0)
    }
}

impl FromStr for Number {
    type Err = ParseNumberError;

    /// Parses `[+-]digits[.digits][(e|E)[+-]digits]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseNumberError {
            input: s.to_string(),
        };

        let (mantissa, exponent) = match s.find(|c: char| c == 'e' || c == 'E') {
            Some(at) => (&s[..at], s[at + 1..].parse::<i64>().map_err(|_| err())?),
            None => (s, 0),
        };
        let (negative, digits) = match mantissa.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
        };
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(err());
        }
        if !int_part
            .bytes()
            .chain(frac_part.bytes())
            .all(|b| b.is_ascii_digit())
        {
            return Err(err());
        }

        let all_digits = format!("{}{}", int_part, frac_part);
        let mut coefficient = BigInt::parse_bytes(all_digits.as_bytes(), 10).ok_or_else(err)?;
        if negative {
            coefficient = -coefficient;
        }
        let frac_len = i64::try_from(frac_part.len()).map_err(|_| err())?;
        let exponent = exponent.checked_sub(frac_len).ok_or_else(err)?;
        Ok(Self::new(coefficient, exponent))
    }
}

/// Padding zeros beyond which `Display` switches to `<coefficient>e<exponent>`.
const MAX_PLAIN_PADDING: u64 = 1000;

/// Plain decimal notation, unless that needs more than
/// `MAX_PLAIN_PADDING` padding zeros. Both forms parse back.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.coefficient.abs().to_string();
        let scale = self.exponent.unsigned_abs();
        let padding = if self.exponent >= 0 {
            scale
        } else {
            scale.saturating_sub(digits.len() as u64)
        };
        if padding > MAX_PLAIN_PADDING {
            return write!(f, "{}e{}", self.coefficient, self.exponent);
        }

        if self.exponent >= 0 {
            write!(f, "{}", self.coefficient)?;
            return f.write_str(&"0".repeat(padding as usize));
        }

        let scale = usize::try_from(scale).map_err(|_| fmt::Error)?;
        if self.is_negative() {
            f.write_str("-")?;
        }
        if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            write!(f, "{}.{}", int_part, frac_part)
        } else {
            write!(f, "0.{}{}", "0".repeat(scale - digits.len()), digits)
        }
    }
}
