use crate::Real;

impl Real for f64 {
  fn lit(value: f64) -> Self { value as f64 }
  fn to_f64(self)    -> f64  { self as f64 }

  fn abs(self)    -> Self { f64::abs(self) }
  fn signum(self) -> Self { if self > 0.0 { 1.0 } else if self < 0.0 { -1.0 } else { self } }
  fn exp(self)    -> Self { f64::exp(self) }
  fn ln(self)     -> Self { f64::ln(self) }
  fn ln_1p(self)  -> Self { f64::ln_1p(self) }
  fn powf(self, exponent: Self) -> Self { f64::powf(self, exponent) }
  fn sqrt(self)   -> Self { f64::sqrt(self) }
  fn sin(self)    -> Self { f64::sin(self) }
  fn cos(self)    -> Self { f64::cos(self) }
  fn tan(self)    -> Self { f64::tan(self) }
  fn sinh(self)   -> Self { f64::sinh(self) }
  fn cosh(self)   -> Self { f64::cosh(self) }
  fn tanh(self)   -> Self { f64::tanh(self) }
  fn atan(self)   -> Self { f64::atan(self) }
  fn asinh(self)  -> Self { f64::asinh(self) }
  // std has no stable erf
  fn erf(self)    -> Self { libm::erf(self) }
}
