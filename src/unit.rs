use crate::fixed::*;
use crate::parametric::*;
use crate::{Activation, Differentiable, Error, Parameters};

macro_rules! catalogue {
  (
    parametric: [$($p:ident),* $(,)?],
    fixed:      [$($f:ident),* $(,)?]
  ) => {
    /// Any catalogue activation over `f64`, selectable at runtime by its published name.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub enum Unit {
      $($p($p<f64>),)*
      $($f($f),)*
    }

    impl Unit {
      /// Every published name, parametric units first.
      pub const NAMES: &'static [&'static str] = &[
        $(<$p<f64> as Parameters<f64>>::NAME,)*
        $(<$f as Parameters<f64>>::NAME,)*
      ];

      /// Construct the named unit with default parameters.
      pub fn from_name(name: &str) -> Result<Self, Error> {
        $(if name == <$p<f64> as Parameters<f64>>::NAME { return Ok(Unit::$p(Default::default())); })*
        $(if name == <$f as Parameters<f64>>::NAME { return Ok(Unit::$f($f)); })*

        log::debug!("no activation named `{}`", name);
        Err(Error::UnknownActivation)
      }

      pub fn name(&self) -> &'static str {
        match self {
          $(Unit::$p(_) => <$p<f64> as Parameters<f64>>::NAME,)*
          $(Unit::$f(_) => <$f as Parameters<f64>>::NAME,)*
        }
      }

      pub fn parameter_names(&self) -> &'static [&'static str] {
        match self {
          $(Unit::$p(_) => <$p<f64> as Parameters<f64>>::PARAMETERS,)*
          $(Unit::$f(_) => <$f as Parameters<f64>>::PARAMETERS,)*
        }
      }

      pub fn parameter(&self, name: &str) -> Result<f64, Error> {
        match self {
          $(Unit::$p(unit) => unit.parameter_by_name(name),)*
          $(Unit::$f(unit) => Parameters::<f64>::parameter_by_name(unit, name),)*
        }
      }

      pub fn set_parameter(&mut self, name: &str, value: f64) -> Result<(), Error> {
        match self {
          $(Unit::$p(unit) => unit.set_parameter(name, value),)*
          $(Unit::$f(unit) => Parameters::<f64>::set_parameter(unit, name, value),)*
        }
      }

      pub fn derivative(&self, x: f64) -> f64 {
        match self {
          $(Unit::$p(unit) => unit.derivative(x),)*
          $(Unit::$f(unit) => Differentiable::<f64>::derivative(unit, x),)*
        }
      }

      pub fn parameter_derivative(&self, x: f64, index: usize) -> Option<f64> {
        match self {
          $(Unit::$p(unit) => unit.parameter_derivative(x, index),)*
          $(Unit::$f(unit) => Differentiable::<f64>::parameter_derivative(unit, x, index),)*
        }
      }
    }

    impl Activation<f64> for Unit {
      fn forward(&self, x: f64) -> f64 {
        match self {
          $(Unit::$p(unit) => unit.forward(x),)*
          $(Unit::$f(unit) => Activation::<f64>::forward(unit, x),)*
        }
      }
    }
  };
}

catalogue! {
  parametric: [
    OptimA,
    ParametricPolyTanh,
    AdaptiveRationalSoftsign,
    OptimXTemporal,
    ParametricGaussianActivation,
    LearnableFourierActivation,
    AELuC,
    ParametricSmoothStep,
    AdaptiveBiHyperbolic,
    ParametricLogish,
    AdaptSigmoidReLU,
    ParametricLambertWActivation,
    AdaptiveHyperbolicLogarithm,
    ParametricGeneralizedGompertzActivation,
    ComplexHarmonicActivation,
    WeibullSoftplusActivation,
    AdaptiveErfSwish,
    ParametricBetaSoftsign,
    ParametricArcSinhGate,
    GeneralizedAlphaSigmoid,
    EllipticGaussianActivation,
  ],
  fixed: [
    SinhGate,
    SoftRBF,
    ATanSigmoid,
    ExpoSoft,
    HarmonicTanh,
    RationalSoftplus,
    UnifiedSineExp,
    SigmoidErf,
    LogCoshGate,
    TanhArc,
    RiemannianSoftsignActivation,
    QuantumTanhActivation,
    LogExponentialActivation,
    BipolarGaussianArctanActivation,
    ExpArcTanHarmonicActivation,
    LogisticWActivation,
  ]
}

impl Unit {
  /// One default-initialised instance of every unit, in [`Unit::NAMES`] order.
  pub fn all() -> impl Iterator<Item = Unit> {
    Self::NAMES.iter().filter_map(|name| Self::from_name(name).ok())
  }

  /// Number of learnable parameters.
  pub fn parameter_count(&self) -> usize { self.parameter_names().len() }
}
