//! Activations with learnable scalar parameters.
//!
//! Every unit is a plain struct of public scalar fields, one per parameter, generic over
//! the scalar (`f64` by default). Defaults place each curve near a familiar baseline
//! (identity, Swish, tanh) so early training behaves like it.
//!
//! Where a formula wraps a parameter in `abs` or `clamp`, the stored field stays raw and
//! unconstrained: only the effective value inside `forward` is constrained, so gradient
//! descent can move the raw value through zero.

use crate::baseline::{elu, relu, sigmoid, sign, softplus};
use crate::primitives::{EllipticCn, LambertW};
use crate::{Activation, Parameters, Real};

/// Guards divisions, logarithms and fractional-power bases.
const EPSILON: f64 = 1e-7;

/// OptimA: `α·tanh(βx) + γ·softplus(δx)·σ(λx)`
#[derive(Clone, Copy, Debug, PartialEq, Parameters)]
pub struct OptimA<T = f64> {
  #[param(default = 1.0)] pub alpha:  T,
  #[param(default = 0.5)] pub beta:   T,
  #[param(default = 1.0)] pub gamma:  T,
  #[param(default = 0.5)] pub delta:  T,
  #[param(default = 1.0)] pub lambda: T,
}

impl<T: Real> Activation<T> for OptimA<T> {
  fn forward(&self, x: T) -> T {
    self.alpha * (self.beta * x).tanh() + self.gamma * softplus(self.delta * x) * sigmoid(self.lambda * x)
  }
}

/// `α·tanh(βx² + γx + δ)`
#[derive(Clone, Copy, Debug, PartialEq, Parameters)]
pub struct ParametricPolyTanh<T = f64> {
  #[param(default = 1.0)] pub alpha: T,
  #[param(default = 1.0)] pub beta:  T,
  #[param(default = 0.0)] pub gamma: T,
  #[param(default = 0.0)] pub delta: T,
}

impl<T: Real> Activation<T> for ParametricPolyTanh<T> {
  fn forward(&self, x: T) -> T {
    self.alpha * (self.beta * x.square() + self.gamma * x + self.delta).tanh()
  }
}

/// `αx / (1 + |βx|^γ)`
///
/// The exponent is used raw here, unlike [`GeneralizedAlphaSigmoid`].
#[derive(Clone, Copy, Debug, PartialEq, Parameters)]
pub struct AdaptiveRationalSoftsign<T = f64> {
  #[param(default = 1.0)] pub alpha: T,
  #[param(default = 1.0)] pub beta:  T,
  #[param(default = 2.0)] pub gamma: T,
}

impl<T: Real> Activation<T> for AdaptiveRationalSoftsign<T> {
  fn forward(&self, x: T) -> T {
    (self.alpha * x) / (T::one() + (self.beta * x).abs().powf(self.gamma))
  }
}

/// `α·tanh(βx) + γ·σ(δx)`
#[derive(Clone, Copy, Debug, PartialEq, Parameters)]
pub struct OptimXTemporal<T = f64> {
  #[param(default = 0.5)] pub alpha: T,
  #[param(default = 1.0)] pub beta:  T,
  #[param(default = 0.5)] pub gamma: T,
  #[param(default = 1.0)] pub delta: T,
}

impl<T: Real> Activation<T> for OptimXTemporal<T> {
  fn forward(&self, x: T) -> T {
    self.alpha * (self.beta * x).tanh() + self.gamma * sigmoid(self.delta * x)
  }
}

/// `αx·exp(-βx²)`
#[derive(Clone, Copy, Debug, PartialEq, Parameters)]
pub struct ParametricGaussianActivation<T = f64> {
  #[param(default = 1.0)] pub alpha: T,
  #[param(default = 1.0)] pub beta:  T,
}

impl<T: Real> Activation<T> for ParametricGaussianActivation<T> {
  fn forward(&self, x: T) -> T {
    self.alpha * x * (-self.beta * x.square()).exp()
  }
}

/// `α·sin(βx + γ) + δ·cos(λx + φ)`
#[derive(Clone, Copy, Debug, PartialEq, Parameters)]
pub struct LearnableFourierActivation<T = f64> {
  #[param(default = 1.0)] pub alpha:  T,
  #[param(default = 1.0)] pub beta:   T,
  #[param(default = 0.0)] pub gamma:  T,
  #[param(default = 1.0)] pub delta:  T,
  #[param(default = 1.0)] pub lambda: T,
  #[param(default = 0.0)] pub phi:    T,
}

impl<T: Real> Activation<T> for LearnableFourierActivation<T> {
  fn forward(&self, x: T) -> T {
    self.alpha * (self.beta * x + self.gamma).sin() + self.delta * (self.lambda * x + self.phi).cos()
  }
}

/// A-ELuC: `α·elu(βx) + γx·σ(δx)`
#[derive(Clone, Copy, Debug, PartialEq, Parameters)]
#[activation(name = "A_ELuC")]
pub struct AELuC<T = f64> {
  #[param(default = 0.5)] pub alpha: T,
  #[param(default = 1.0)] pub beta:  T,
  #[param(default = 0.5)] pub gamma: T,
  #[param(default = 1.0)] pub delta: T,
}

impl<T: Real> Activation<T> for AELuC<T> {
  fn forward(&self, x: T) -> T {
    self.alpha * elu(self.beta * x) + self.gamma * x * sigmoid(self.delta * x)
  }
}

/// `α·σ(β(x - γ)) - α·σ(δ(x + μ))`
///
/// A bump between two sigmoid edges; identically zero at defaults.
#[derive(Clone, Copy, Debug, PartialEq, Parameters)]
pub struct ParametricSmoothStep<T = f64> {
  #[param(default = 1.0)] pub alpha: T,
  #[param(default = 1.0)] pub beta:  T,
  #[param(default = 0.0)] pub gamma: T,
  #[param(default = 1.0)] pub delta: T,
  #[param(default = 0.0)] pub mu:    T,
}

impl<T: Real> Activation<T> for ParametricSmoothStep<T> {
  fn forward(&self, x: T) -> T {
    self.alpha * sigmoid(self.beta * (x - self.gamma)) - self.alpha * sigmoid(self.delta * (x + self.mu))
  }
}

/// `α·tanh(βx) + (1 - α)·tanh³(γx)`
#[derive(Clone, Copy, Debug, PartialEq, Parameters)]
pub struct AdaptiveBiHyperbolic<T = f64> {
  #[param(default = 0.5)] pub alpha: T,
  #[param(default = 1.0)] pub beta:  T,
  #[param(default = 1.0)] pub gamma: T,
}

impl<T: Real> Activation<T> for AdaptiveBiHyperbolic<T> {
  fn forward(&self, x: T) -> T {
    let cubed = (self.gamma * x).tanh();
    self.alpha * (self.beta * x).tanh() + (T::one() - self.alpha) * cubed * cubed * cubed
  }
}

/// `αx·σ(βx)`, Swish at defaults.
#[derive(Clone, Copy, Debug, PartialEq, Parameters)]
pub struct ParametricLogish<T = f64> {
  #[param(default = 1.0)] pub alpha: T,
  #[param(default = 1.0)] pub beta:  T,
}

impl<T: Real> Activation<T> for ParametricLogish<T> {
  fn forward(&self, x: T) -> T {
    self.alpha * x * sigmoid(self.beta * x)
  }
}

/// `αx·σ(βx) + γ·relu(δx)`
#[derive(Clone, Copy, Debug, PartialEq, Parameters)]
pub struct AdaptSigmoidReLU<T = f64> {
  #[param(default = 0.5)] pub alpha: T,
  #[param(default = 1.0)] pub beta:  T,
  #[param(default = 0.5)] pub gamma: T,
  #[param(default = 1.0)] pub delta: T,
}

impl<T: Real> Activation<T> for AdaptSigmoidReLU<T> {
  fn forward(&self, x: T) -> T {
    self.alpha * x * sigmoid(self.beta * x) + self.gamma * relu(self.delta * x)
  }
}

/// `αx·W(|β|·exp(γx))`, with `W` the principal Lambert W (8 iterations).
#[derive(Clone, Copy, Debug, PartialEq, Parameters)]
pub struct ParametricLambertWActivation<T = f64> {
  #[param(default = 1.0)] pub alpha: T,
  #[param(default = 1.0)] pub beta:  T,
  #[param(default = 1.0)] pub gamma: T,
}

impl<T: Real> Activation<T> for ParametricLambertWActivation<T> {
  fn forward(&self, x: T) -> T {
    let argument = self.beta.abs() * (self.gamma * x).exp();
    self.alpha * x * LambertW::default().solve(argument)
  }
}

/// `α·asinh(βx) + γ·ln(|δ| + x² + ε)`
#[derive(Clone, Copy, Debug, PartialEq, Parameters)]
pub struct AdaptiveHyperbolicLogarithm<T = f64> {
  #[param(default = 1.0)] pub alpha: T,
  #[param(default = 1.0)] pub beta:  T,
  #[param(default = 1.0)] pub gamma: T,
  #[param(default = 0.5)] pub delta: T,
}

impl<T: Real> Activation<T> for AdaptiveHyperbolicLogarithm<T> {
  fn forward(&self, x: T) -> T {
    self.alpha * (self.beta * x).asinh() + self.gamma * (self.delta.abs() + x.square() + T::lit(EPSILON)).ln()
  }
}

/// `α·exp(-β·exp(-γx)) - δ`
#[derive(Clone, Copy, Debug, PartialEq, Parameters)]
pub struct ParametricGeneralizedGompertzActivation<T = f64> {
  #[param(default = 1.0)] pub alpha: T,
  #[param(default = 1.0)] pub beta:  T,
  #[param(default = 1.0)] pub gamma: T,
  #[param(default = 0.0)] pub delta: T,
}

impl<T: Real> Activation<T> for ParametricGeneralizedGompertzActivation<T> {
  fn forward(&self, x: T) -> T {
    self.alpha * (-self.beta * (-self.gamma * x).exp()).exp() - self.delta
  }
}

/// `α·tanh(βx) + γ·sin(δx² + λ)`
#[derive(Clone, Copy, Debug, PartialEq, Parameters)]
pub struct ComplexHarmonicActivation<T = f64> {
  #[param(default = 1.0)] pub alpha:  T,
  #[param(default = 1.0)] pub beta:   T,
  #[param(default = 1.0)] pub gamma:  T,
  #[param(default = 1.0)] pub delta:  T,
  #[param(default = 0.0)] pub lambda: T,
}

impl<T: Real> Activation<T> for ComplexHarmonicActivation<T> {
  fn forward(&self, x: T) -> T {
    self.alpha * (self.beta * x).tanh() + self.gamma * (self.delta * x.square() + self.lambda).sin()
  }
}

/// `αx·σ(β(x - γ)) + δ·(1 - exp(-|λ|·(|x| + ε)^|μ|))`
///
/// A shifted Swish plus a Weibull CDF in `|x|`.
#[derive(Clone, Copy, Debug, PartialEq, Parameters)]
pub struct WeibullSoftplusActivation<T = f64> {
  #[param(default = 1.0)] pub alpha:  T,
  #[param(default = 1.0)] pub beta:   T,
  #[param(default = 0.0)] pub gamma:  T,
  #[param(default = 1.0)] pub delta:  T,
  #[param(default = 1.0)] pub lambda: T,
  #[param(default = 1.0)] pub mu:     T,
}

impl<T: Real> Activation<T> for WeibullSoftplusActivation<T> {
  fn forward(&self, x: T) -> T {
    let swish   = self.alpha * x * sigmoid(self.beta * (x - self.gamma));
    let weibull = self.lambda.abs() * (x.abs() + T::lit(EPSILON)).powf(self.mu.abs());
    swish + self.delta * (T::one() - (-weibull).exp())
  }
}

/// `αx·erf(βx)·σ(γx)`
#[derive(Clone, Copy, Debug, PartialEq, Parameters)]
pub struct AdaptiveErfSwish<T = f64> {
  #[param(default = 1.0)] pub alpha: T,
  #[param(default = 1.0)] pub beta:  T,
  #[param(default = 1.0)] pub gamma: T,
}

impl<T: Real> Activation<T> for AdaptiveErfSwish<T> {
  fn forward(&self, x: T) -> T {
    self.alpha * x * (self.beta * x).erf() * sigmoid(self.gamma * x)
  }
}

/// `α·sign(x)·|x|^|β| / (1 + |x|^|γ| + ε)`
#[derive(Clone, Copy, Debug, PartialEq, Parameters)]
pub struct ParametricBetaSoftsign<T = f64> {
  #[param(default = 1.0)] pub alpha: T,
  #[param(default = 1.0)] pub beta:  T,
  #[param(default = 1.0)] pub gamma: T,
}

impl<T: Real> Activation<T> for ParametricBetaSoftsign<T> {
  fn forward(&self, x: T) -> T {
    let magnitude = x.abs();
    let rising    = magnitude.powf(self.beta.abs());
    let falling   = magnitude.powf(self.gamma.abs());
    self.alpha * (rising / (T::one() + falling + T::lit(EPSILON))) * sign(x)
  }
}

/// `αx·asinh(βx)`
#[derive(Clone, Copy, Debug, PartialEq, Parameters)]
pub struct ParametricArcSinhGate<T = f64> {
  #[param(default = 1.0)] pub alpha: T,
  #[param(default = 1.0)] pub beta:  T,
}

impl<T: Real> Activation<T> for ParametricArcSinhGate<T> {
  fn forward(&self, x: T) -> T {
    self.alpha * x * (self.beta * x).asinh()
  }
}

/// `αx / ((1 + |βx|^|γ|)^(1 / (|δ| + ε)) + ε)`
///
/// Softsign at defaults; `δ` controls how sharply the curve saturates.
#[derive(Clone, Copy, Debug, PartialEq, Parameters)]
pub struct GeneralizedAlphaSigmoid<T = f64> {
  #[param(default = 1.0)] pub alpha: T,
  #[param(default = 1.0)] pub beta:  T,
  #[param(default = 1.0)] pub gamma: T,
  #[param(default = 1.0)] pub delta: T,
}

impl<T: Real> Activation<T> for GeneralizedAlphaSigmoid<T> {
  fn forward(&self, x: T) -> T {
    let epsilon = T::lit(EPSILON);
    let base    = T::one() + (self.beta * x).abs().powf(self.gamma.abs());
    let root    = T::one() / (self.delta.abs() + epsilon);
    (self.alpha * x) / (base.powf(root) + epsilon)
  }
}

/// `x·exp(-cn(x, clamp(m, 0, 1)))`, with `cn` the 4-term elliptic series.
#[derive(Clone, Copy, Debug, PartialEq, Parameters)]
pub struct EllipticGaussianActivation<T = f64> {
  #[param(default = 0.5)] pub m: T,
}

impl<T: Real> Activation<T> for EllipticGaussianActivation<T> {
  fn forward(&self, x: T) -> T {
    let m = self.m.clamp_range(T::zero(), T::one());
    x * (-EllipticCn::default().cn(x, m)).exp()
  }
}
