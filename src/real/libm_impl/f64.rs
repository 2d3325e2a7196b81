use libm::{
  fabs  as libm_abs,
  exp   as libm_exp,
  log   as libm_ln,
  log1p as libm_ln_1p,
  pow   as libm_pow,
  sqrt  as libm_sqrt,
  sin   as libm_sin,
  cos   as libm_cos,
  tan   as libm_tan,
  sinh  as libm_sinh,
  cosh  as libm_cosh,
  tanh  as libm_tanh,
  atan  as libm_atan,
  asinh as libm_asinh,
  erf   as libm_erf
};
use crate::Real;

impl Real for f64 {
  fn lit(value: f64) -> Self { value }
  fn to_f64(self)    -> f64  { self }

  fn abs(self)    -> Self { libm_abs(self) }
  fn signum(self) -> Self { if self > 0.0 { 1.0 } else if self < 0.0 { -1.0 } else { self } }
  fn exp(self)    -> Self { libm_exp(self) }
  fn ln(self)     -> Self { libm_ln(self) }
  fn ln_1p(self)  -> Self { libm_ln_1p(self) }
  fn powf(self, exponent: Self) -> Self { libm_pow(self, exponent) }
  fn sqrt(self)   -> Self { libm_sqrt(self) }
  fn sin(self)    -> Self { libm_sin(self) }
  fn cos(self)    -> Self { libm_cos(self) }
  fn tan(self)    -> Self { libm_tan(self) }
  fn sinh(self)   -> Self { libm_sinh(self) }
  fn cosh(self)   -> Self { libm_cosh(self) }
  fn tanh(self)   -> Self { libm_tanh(self) }
  fn atan(self)   -> Self { libm_atan(self) }
  fn asinh(self)  -> Self { libm_asinh(self) }
  fn erf(self)    -> Self { libm_erf(self) }
}
