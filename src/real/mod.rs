use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

// catch invalid configurations that would only lead to more opaque errors later on.
// features are an enum here: exactly one math backend.
#[cfg(all(feature = "std", feature = "libm"))] compile_error!("`std` feature is enabled with `libm`. These are mutually exclusive, pick one.");
#[cfg(all(
  not(feature = "std"),
  not(feature = "libm")
))] compile_error!("You must select a backend by enabling one of the following features: { std, libm }.");

// if we have the `std` feature (default absent)
#[cfg(feature = "std")]  mod std_impl;

// if we have the `libm` feature (default present)
#[cfg(feature = "libm")] mod libm_impl;

/// Scalar every activation formula is written against.
///
/// Implemented for `f32` and `f64` by the selected backend, and for [`Dual`](crate::Dual)
/// on top of any `Real`, which is how derivatives are obtained.
///
/// Ordering and equality compare the primal value only, so branches inside a formula
/// (`if x < 1`, clamps) pick the same side for plain and dual evaluation.
pub trait Real:
  Copy + Debug + PartialEq + PartialOrd
  + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self> + Neg<Output = Self>
{
  /// Embed a literal constant (zero derivative).
  fn lit(value: f64) -> Self;
  /// Primal value, widened to `f64`.
  fn to_f64(self) -> f64;

  fn abs(self)   -> Self;
  /// `1` above zero, `-1` below, zero (sign preserved) at zero, NaN for NaN.
  fn signum(self) -> Self;
  fn exp(self)   -> Self;
  fn ln(self)    -> Self;
  fn ln_1p(self) -> Self;
  fn powf(self, exponent: Self) -> Self;
  fn sqrt(self)  -> Self;
  fn sin(self)   -> Self;
  fn cos(self)   -> Self;
  fn tan(self)   -> Self;
  fn sinh(self)  -> Self;
  fn cosh(self)  -> Self;
  fn tanh(self)  -> Self;
  fn atan(self)  -> Self;
  fn asinh(self) -> Self;
  fn erf(self)   -> Self;

  fn zero() -> Self { Self::lit(0.0) }
  fn one()  -> Self { Self::lit(1.0) }

  fn square(self) -> Self { self * self }

  /// `max(self, lo)`. At equality the value itself is kept, so its gradient passes.
  fn clamp_min(self, lo: Self) -> Self {
    if self < lo { lo } else { self }
  }

  /// Clamp into the closed interval `[lo, hi]`; the gradient passes inside it and is zero outside.
  fn clamp_range(self, lo: Self, hi: Self) -> Self {
    if self < lo { lo } else if self > hi { hi } else { self }
  }
}
