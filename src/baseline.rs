//! Standard smooth baselines the catalogue is built from.

use crate::Real;

/// `ln(1 + e^x)` switches to the identity above this, as the reference framework does.
const SOFTPLUS_THRESHOLD: f64 = 20.0;

pub fn relu<T: Real>(x: T) -> T { if x > T::zero() { x } else { T::zero() } }
pub fn sign<T: Real>(x: T) -> T { x.signum() }

/// `1 / (1 + e^-x)`, evaluated on the side that cannot overflow.
pub fn sigmoid<T: Real>(x: T) -> T {
  if x >= T::zero() {
    T::one() / (T::one() + (-x).exp())
  } else {
    let e = x.exp();
    e / (T::one() + e)
  }
}

pub fn softplus<T: Real>(x: T) -> T {
  if x > T::lit(SOFTPLUS_THRESHOLD) { x } else { x.exp().ln_1p() }
}

/// ELU with `alpha = 1`.
pub fn elu<T: Real>(x: T) -> T {
  if x > T::zero() { x } else { x.exp() - T::one() }
}

pub fn soft_sign<T: Real>(x: T) -> T { x / (T::one() + x.abs()) }

/// `x * sigmoid(x)`
pub fn swish<T: Real>(x: T) -> T { x * sigmoid(x) }
