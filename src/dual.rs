use core::cmp::Ordering;
use core::ops::{Add, Div, Mul, Neg, Sub};
use crate::Real;

const FRAC_2_SQRT_PI: f64 = core::f64::consts::FRAC_2_SQRT_PI;

/// Forward-mode dual number: a value and one directional derivative.
///
/// Every formula in the catalogue is generic over [`Real`], so evaluating it on `Dual`
/// yields `f(x)` together with the derivative along whichever input was seeded with a
/// unit tangent. Derivatives therefore flow through the unrolled Lambert W iterations,
/// the elliptic series and every `abs`/`clamp` exactly as written.
///
/// A zero tangent never multiplies an infinite local derivative (`0 * inf`), so inactive
/// inputs cannot turn a finite gradient into NaN.
#[derive(Clone, Copy, Debug)]
pub struct Dual<T> {
  pub value:   T,
  pub tangent: T,
}

impl<T: Real> Dual<T> {
  pub fn new(value: T, tangent: T) -> Self { Self { value, tangent } }

  /// Treated as a constant: zero tangent.
  pub fn constant(value: T) -> Self { Self::new(value, T::zero()) }

  /// The variable being differentiated against: unit tangent.
  pub fn variable(value: T) -> Self { Self::new(value, T::one()) }

  /// Unit tangent when `active`, constant otherwise.
  pub fn seeded(value: T, active: bool) -> Self {
    if active { Self::variable(value) } else { Self::constant(value) }
  }

  /// Apply a unary function with the given local derivative.
  fn chain(self, value: T, derivative: T) -> Self {
    Self::new(value, scale(self.tangent, derivative))
  }
}

/// `tangent * factor`, with a zero tangent staying zero.
fn scale<T: Real>(tangent: T, factor: T) -> T {
  if tangent == T::zero() { T::zero() } else { tangent * factor }
}

impl<T: Real> PartialEq for Dual<T> {
  fn eq(&self, other: &Self) -> bool { self.value == other.value }
}

impl<T: Real> PartialOrd for Dual<T> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> { self.value.partial_cmp(&other.value) }
}

impl<T: Real> Add for Dual<T> {
  type Output = Self;
  fn add(self, rhs: Self) -> Self { Self::new(self.value + rhs.value, self.tangent + rhs.tangent) }
}

impl<T: Real> Sub for Dual<T> {
  type Output = Self;
  fn sub(self, rhs: Self) -> Self { Self::new(self.value - rhs.value, self.tangent - rhs.tangent) }
}

impl<T: Real> Mul for Dual<T> {
  type Output = Self;
  fn mul(self, rhs: Self) -> Self {
    Self::new(
      self.value * rhs.value,
      scale(self.tangent, rhs.value) + scale(rhs.tangent, self.value)
    )
  }
}

impl<T: Real> Div for Dual<T> {
  type Output = Self;
  fn div(self, rhs: Self) -> Self {
    let value = self.value / rhs.value;
    // (a' - (a/b) b') / b
    let numerator = self.tangent - scale(rhs.tangent, value);
    Self::new(value, scale(numerator, T::one() / rhs.value))
  }
}

impl<T: Real> Neg for Dual<T> {
  type Output = Self;
  fn neg(self) -> Self { Self::new(-self.value, -self.tangent) }
}

impl<T: Real> Real for Dual<T> {
  fn lit(value: f64) -> Self { Self::constant(T::lit(value)) }
  fn to_f64(self)    -> f64  { self.value.to_f64() }

  fn abs(self)    -> Self { self.chain(self.value.abs(), self.value.signum()) }
  fn signum(self) -> Self { Self::constant(self.value.signum()) }

  fn exp(self) -> Self {
    let e = self.value.exp();
    self.chain(e, e)
  }

  fn ln(self)    -> Self { self.chain(self.value.ln(), T::one() / self.value) }
  fn ln_1p(self) -> Self { self.chain(self.value.ln_1p(), T::one() / (T::one() + self.value)) }

  fn powf(self, exponent: Self) -> Self {
    let value = self.value.powf(exponent.value);

    // d(b^e) = e b^(e-1) db + b^e ln(b) de
    let mut tangent = T::zero();
    if self.tangent != T::zero() {
      tangent = tangent + exponent.value * self.value.powf(exponent.value - T::one()) * self.tangent;
    }
    // ln(0) term is dropped: a zero base contributes nothing through the exponent
    if exponent.tangent != T::zero() && self.value != T::zero() {
      tangent = tangent + value * self.value.ln() * exponent.tangent;
    }

    Self::new(value, tangent)
  }

  fn sqrt(self) -> Self {
    let root = self.value.sqrt();
    self.chain(root, T::one() / (T::lit(2.0) * root))
  }

  fn sin(self) -> Self { self.chain(self.value.sin(),   self.value.cos()) }
  fn cos(self) -> Self { self.chain(self.value.cos(), -(self.value.sin())) }

  fn tan(self) -> Self {
    let t = self.value.tan();
    self.chain(t, T::one() + t * t)
  }

  fn sinh(self) -> Self { self.chain(self.value.sinh(), self.value.cosh()) }
  fn cosh(self) -> Self { self.chain(self.value.cosh(), self.value.sinh()) }

  fn tanh(self) -> Self {
    let t = self.value.tanh();
    self.chain(t, T::one() - t * t)
  }

  fn atan(self)  -> Self { self.chain(self.value.atan(),  T::one() / (T::one() + self.value * self.value)) }
  fn asinh(self) -> Self { self.chain(self.value.asinh(), T::one() / (self.value * self.value + T::one()).sqrt()) }

  fn erf(self) -> Self {
    let density = T::lit(FRAC_2_SQRT_PI) * (-(self.value * self.value)).exp();
    self.chain(self.value.erf(), density)
  }
}
