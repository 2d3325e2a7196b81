use crate::Real;

/// Guards `ln(z)` in the seed at `z = 0`.
const SEED_EPSILON: f64 = 1e-38;
/// Guards the Newton denominator.
const STEP_EPSILON: f64 = 1e-20;

/// Principal-branch Lambert W solver: `w` such that `w * e^w = z`, for `z >= 0`.
///
/// - Runs exactly `iterations` Newton steps with no convergence test, so cost is uniform
///   across a batch and the whole unrolled loop is differentiable.
/// - `w` is clamped to `>= 0` after the seed and after every step.
/// - Accuracy degrades for very large `z` or very few iterations, but every finite `z >= 0`
///   gives a finite `w`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LambertW {
  pub iterations: usize,
}

impl Default for LambertW {
  fn default() -> Self { Self { iterations: 8 } }
}

impl LambertW {
  pub fn new(iterations: usize) -> Self { Self { iterations } }

  pub fn solve<T: Real>(&self, z: T) -> T {
    let zero = T::zero();
    let one  = T::one();

    // `z` itself below 1, `ln(z)` above: both stay inside the basin of convergence
    let mut w = if z < one { z } else { (z + T::lit(SEED_EPSILON)).ln() };
    w = w.clamp_min(zero);

    // Newton on `w e^w - z` with both sides of the step scaled by `e^-w`, so `w e^w`
    // is never formed and `z` up to the type's maximum cannot overflow it
    for _ in 0..self.iterations {
      let decay       = (-w).exp();
      let numerator   = w - z * decay;
      let denominator = w + one + T::lit(STEP_EPSILON) * decay;
      w = (w - numerator / denominator).clamp_min(zero);
    }

    w
  }

  /// `|w e^w - z|` for the solved `w`.
  pub fn residual<T: Real>(&self, z: T) -> T {
    let w = self.solve(z);
    (w * w.exp() - z).abs()
  }
}

/// [`LambertW::solve`] with the default 8 iterations.
pub fn lambert_w<T: Real>(z: T) -> T {
  LambertW::default().solve(z)
}
