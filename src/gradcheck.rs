//! Finite-difference verification of the dual-number derivatives.

use crate::{Differentiable, Real};

/// `(f(x + h) - f(x - h)) / 2h`
pub fn central_difference<F: Fn(f64) -> f64>(f: F, x: f64, h: f64) -> f64 {
  (f(x + h) - f(x - h)) / (2.0 * h)
}

/// Outcome of one comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradReport {
  pub analytic: f64,
  pub numeric:  f64,
  pub passed:   bool,
}

/// Central-difference step and the mixed absolute/relative tolerance it is judged against.
/// - Points where the formula has a kink (`|x|` or `relu` at zero) fail by construction, avoid them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradCheck {
  pub step:      f64,
  pub tolerance: f64,
}

impl Default for GradCheck {
  fn default() -> Self { Self { step: 1e-5, tolerance: 1e-4 } }
}

impl GradCheck {
  fn report(&self, analytic: f64, numeric: f64) -> GradReport {
    let scale  = 1.0 + Real::abs(analytic).max(Real::abs(numeric));
    let passed = Real::abs(analytic - numeric) <= self.tolerance * scale;
    GradReport { analytic, numeric, passed }
  }

  /// Compare `df/dx` at `x`.
  pub fn check_input<A: Differentiable<f64>>(&self, unit: &A, x: f64) -> GradReport {
    let numeric = central_difference(|x| unit.forward(x), x, self.step);
    self.report(unit.derivative(x), numeric)
  }

  /// Compare `df/dθ` for the parameter at `index`, `None` past the last parameter.
  pub fn check_parameter<A: Differentiable<f64> + Clone>(&self, unit: &A, x: f64, index: usize) -> Option<GradReport> {
    let analytic = unit.parameter_derivative(x, index)?;
    let origin   = unit.parameter(index)?;

    let numeric = central_difference(|theta| {
      let mut perturbed = unit.clone();
      if let Some(slot) = perturbed.parameter_mut(index) { *slot = theta; }
      perturbed.forward(x)
    }, origin, self.step);

    Some(self.report(analytic, numeric))
  }
}
