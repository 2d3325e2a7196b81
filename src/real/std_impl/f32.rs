use crate::Real;

impl Real for f32 {
  fn lit(value: f64) -> Self { value as f32 }
  fn to_f64(self)    -> f64  { self as f64 }

  fn abs(self)    -> Self { f32::abs(self) }
  fn signum(self) -> Self { if self > 0.0 { 1.0 } else if self < 0.0 { -1.0 } else { self } }
  fn exp(self)    -> Self { f32::exp(self) }
  fn ln(self)     -> Self { f32::ln(self) }
  fn ln_1p(self)  -> Self { f32::ln_1p(self) }
  fn powf(self, exponent: Self) -> Self { f32::powf(self, exponent) }
  fn sqrt(self)   -> Self { f32::sqrt(self) }
  fn sin(self)    -> Self { f32::sin(self) }
  fn cos(self)    -> Self { f32::cos(self) }
  fn tan(self)    -> Self { f32::tan(self) }
  fn sinh(self)   -> Self { f32::sinh(self) }
  fn cosh(self)   -> Self { f32::cosh(self) }
  fn tanh(self)   -> Self { f32::tanh(self) }
  fn atan(self)   -> Self { f32::atan(self) }
  fn asinh(self)  -> Self { f32::asinh(self) }
  // std has no stable erf
  fn erf(self)    -> Self { libm::erff(self) }
}
