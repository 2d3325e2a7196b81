use crate::Real;

/// Jacobi elliptic `cn(u, m)` from its Maclaurin series in `u`, truncated after `num_terms` terms.
///
/// - Terms past the fourth (`u^6`) are not implemented, so `num_terms > 4` behaves like 4.
/// - Only accurate for small `|u|`; the result is clamped to `[-1, 1]`, where the true function lives.
/// - `m` is expected in `[0, 1]`, callers clamp it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EllipticCn {
  pub num_terms: usize,
}

impl Default for EllipticCn {
  fn default() -> Self { Self { num_terms: 4 } }
}

impl EllipticCn {
  pub fn new(num_terms: usize) -> Self { Self { num_terms } }

  pub fn cn<T: Real>(&self, u: T, m: T) -> T {
    let one = T::one();
    let u_2 = u.square();
    let mut cn = one;

    if self.num_terms > 1 {
      cn = cn - u_2 / T::lit(2.0);
    }
    if self.num_terms > 2 {
      let u_4 = u_2 * u_2;
      cn = cn + (u_4 / T::lit(24.0)) * (one + T::lit(4.0) * m);
    }
    if self.num_terms > 3 {
      let u_6 = u_2 * u_2 * u_2;
      cn = cn - (u_6 / T::lit(720.0)) * (one + T::lit(44.0) * m + T::lit(16.0) * m.square());
    }

    cn.clamp_range(-one, one)
  }
}

/// [`EllipticCn::cn`] with the default 4 terms.
pub fn elliptic_cn<T: Real>(u: T, m: T) -> T {
  EllipticCn::default().cn(u, m)
}
