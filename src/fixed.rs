//! Fixed-form activations: no learnable parameters.

use crate::baseline::{sigmoid, sign, soft_sign, swish};
use crate::primitives::LambertW;
use crate::{Activation, Parameters, Real};

const EPSILON: f64 = 1e-7;

macro_rules! fixed_activation {
  (
    $(#[$meta:meta])*
    $name:ident, |$x:ident| $body:expr
  ) => {
    $(#[$meta])*
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Parameters)]
    pub struct $name;

    impl<T: Real> Activation<T> for $name {
      fn forward(&self, $x: T) -> T { $body }
    }
  };
}

fixed_activation!(
  /// `x·sinh(x)`
  SinhGate, |x| x * x.sinh()
);

fixed_activation!(
  /// `x·exp(-x²)`, odd.
  SoftRBF, |x| x * (-x.square()).exp()
);

fixed_activation!(
  /// `atan(x)·σ(x)`
  ATanSigmoid, |x| x.atan() * sigmoid(x)
);

fixed_activation!(
  /// `softsign(x)·exp(-|x|)`
  ExpoSoft, |x| soft_sign(x) * (-x.abs()).exp()
);

fixed_activation!(
  /// `tanh(x) + sin(x)`, odd.
  HarmonicTanh, |x| x.tanh() + x.sin()
);

fixed_activation!(
  /// `s / (0.5 + s + ε)` where `s = x·σ(x)`.
  RationalSoftplus, |x| {
    let s = swish(x);
    s / (T::lit(0.5) + s + T::lit(EPSILON))
  }
);

fixed_activation!(
  /// `x·sin(exp(-x²))`
  UnifiedSineExp, |x| x * (-x.square()).exp().sin()
);

fixed_activation!(
  /// `σ(x)·erf(x)`
  SigmoidErf, |x| sigmoid(x) * x.erf()
);

fixed_activation!(
  /// `x·ln(cosh(x) + ε)`
  LogCoshGate, |x| x * (x.cosh() + T::lit(EPSILON)).ln()
);

fixed_activation!(
  /// `tanh(x)·atan(x)`, even.
  TanhArc, |x| x.tanh() * x.atan()
);

fixed_activation!(
  /// `atan(x)·erf(x) / (1 + |x| + ε)`
  RiemannianSoftsignActivation, |x| (x.atan() * x.erf()) / (T::one() + x.abs() + T::lit(EPSILON))
);

fixed_activation!(
  /// `tanh(x)·exp(-tan²(x))`
  QuantumTanhActivation, |x| x.tanh() * (-x.tan().square()).exp()
);

fixed_activation!(
  /// `sign(x)·ln(1 + exp(|x| - (|x| + ε)⁻¹) + ε)`
  LogExponentialActivation, |x| {
    let magnitude = x.abs();
    let exponent  = magnitude - (magnitude + T::lit(EPSILON)).powf(-T::one());
    sign(x) * (T::one() + exponent.exp() + T::lit(EPSILON)).ln()
  }
);

fixed_activation!(
  /// `atan(x)·exp(-x²)`
  BipolarGaussianArctanActivation, |x| x.atan() * (-x.square()).exp()
);

fixed_activation!(
  /// `exp(-x²)·atan(x)·sin(x)`
  ExpArcTanHarmonicActivation, |x| (-x.square()).exp() * x.atan() * x.sin()
);

fixed_activation!(
  /// `x / (1 + exp(-x·W(eˣ)) + ε)`, with `W` the principal Lambert W (8 iterations).
  LogisticWActivation, |x| {
    let w = LambertW::default().solve(x.exp());
    x / (T::one() + (-x * w).exp() + T::lit(EPSILON))
  }
);
