use libm::{
  fabsf  as libm_abs,
  expf   as libm_exp,
  logf   as libm_ln,
  log1pf as libm_ln_1p,
  powf   as libm_pow,
  sqrtf  as libm_sqrt,
  sinf   as libm_sin,
  cosf   as libm_cos,
  tanf   as libm_tan,
  sinhf  as libm_sinh,
  coshf  as libm_cosh,
  tanhf  as libm_tanh,
  atanf  as libm_atan,
  asinhf as libm_asinh,
  erff   as libm_erf
};
use crate::Real;

impl Real for f32 {
  fn lit(value: f64) -> Self { value as f32 }
  fn to_f64(self)    -> f64  { self as f64 }

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
