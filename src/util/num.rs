use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// A real number compared with a relative tolerance.
///
/// Two values are equal when they are identical or when their absolute
/// difference is smaller than `f64::EPSILON` times the larger magnitude.
/// Ordering is derived from that equality, so `a < b` is false whenever `a`
/// and `b` are equal under tolerance.
///
/// Arithmetic is plain `f64` arithmetic: division by zero and overflow
/// produce infinities or `NaN` as usual.
///
/// # Example
/// ```
/// use symcalc::util::num::Real;
///
/// let sum = Real::new(0.1) + Real::new(0.2);
///
/// assert_eq!(sum, Real::new(0.3));
/// assert!(!(sum < Real::new(0.3)));
/// assert!(Real::new(1.0) < Real::new(1.5));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Real(f64);

impl Real {
    /// Wraps a raw `f64`.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw `f64`.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Whether the value is strictly negative (tolerance does not apply).
    ///
    /// Negative zero is not negative; it prints as `0`.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    /// Whether the value is neither infinite nor `NaN`.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Raises `self` to the power `exponent`.
    #[must_use]
    pub fn pow(self, exponent: Self) -> Self {
        Self(self.0.powf(exponent.0))
    }
}

impl PartialEq for Real {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        if self.0 == other.0 {
            return true;
        }
        (self.0 - other.0).abs() < f64::EPSILON * self.0.abs().max(other.0.abs())
    }
}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        self.0.partial_cmp(&other.0)
    }
}

impl From<f64> for Real {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Real> for f64 {
    fn from(value: Real) -> Self {
        value.0
    }
}

macro_rules! real_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Real {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self(self.0 $op rhs.0)
            }
        }
    };
}

real_binop!(Add, add, +);
real_binop!(Sub, sub, -);
real_binop!(Mul, mul, *);
real_binop!(Div, div, /);

impl Neg for Real {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Prints the shortest text that reads back as the same value.
///
/// Negative zero prints as `0`. Values without a literal form print as the
/// division producing them: `1 / 0`, `-1 / 0` and `0 / 0`.
impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            v if v.is_nan() => write!(f, "0 / 0"),
            v if v.is_infinite() && v > 0.0 => write!(f, "1 / 0"),
            v if v.is_infinite() => write!(f, "-1 / 0"),
            v if v == 0.0 => write!(f, "0"),
            v => write!(f, "{v}"),
        }
    }
}

/// Wraps `value` into `0..len` the way the index operator does.
///
/// The value is truncated toward zero, then reduced with
/// `((n % len) + len) % len`, so negative positions count from the end and
/// large positions wrap around. Returns `None` for an empty collection.
///
/// # Example
/// ```
/// use symcalc::util::num::wrap_index;
///
/// assert_eq!(wrap_index(-1.0, 3), Some(2));
/// assert_eq!(wrap_index(4.9, 3), Some(1));
/// assert_eq!(wrap_index(0.0, 0), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn wrap_index(value: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = len as i64;
    let position = value.trunc() as i64;
    Some((position.rem_euclid(len)) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_equals_zero() {
        assert_eq!(Real::new(0.0), Real::new(0.0));
        assert_eq!(Real::new(0.0), Real::new(-0.0));
    }

    #[test]
    fn tolerance_is_relative() {
        let big = 1.0e12;
        assert_eq!(Real::new(big), Real::new(big + big * f64::EPSILON * 0.5));
        assert_ne!(Real::new(1.0), Real::new(1.0 + 4.0 * f64::EPSILON));
        assert_ne!(Real::new(0.0), Real::new(f64::MIN_POSITIVE));
    }

    #[test]
    fn ordering_respects_tolerance() {
        let a = Real::new(0.1) + Real::new(0.2);
        let b = Real::new(0.3);
        assert!(!(a < b) && !(a > b));
        assert!(a <= b && a >= b);
        assert!(Real::new(-2.0) < Real::new(1.0));
    }

    #[test]
    fn nan_is_unordered() {
        let nan = Real::new(f64::NAN);
        assert_ne!(nan, nan);
        assert_eq!(nan.partial_cmp(&Real::new(1.0)), None);
    }

    #[test]
    fn printing_reads_back() {
        assert_eq!(Real::new(-0.0).to_string(), "0");
        assert!(!Real::new(-0.0).is_negative());
        assert_eq!(Real::new(2.5).to_string(), "2.5");
        assert_eq!(Real::new(-3.0).to_string(), "-3");
        assert_eq!(Real::new(f64::INFINITY).to_string(), "1 / 0");
        assert_eq!(Real::new(f64::NEG_INFINITY).to_string(), "-1 / 0");
        assert_eq!(Real::new(f64::NAN).to_string(), "0 / 0");
        assert!(!Real::new(f64::NAN).is_finite());
    }

    #[test]
    fn wrap_index_matches_double_modulo() {
        assert_eq!(wrap_index(-1.0, 3), Some(2));
        assert_eq!(wrap_index(-4.0, 3), Some(2));
        assert_eq!(wrap_index(3.0, 3), Some(0));
        assert_eq!(wrap_index(-0.7, 3), Some(0));
        assert_eq!(wrap_index(7.0, 1), Some(0));
    }
}
