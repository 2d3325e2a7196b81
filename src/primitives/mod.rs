//! Numerical primitives with real algorithmic content: fixed-iteration Lambert W and
//! the truncated-series Jacobi elliptic `cn`.

mod lambert;
mod elliptic;

pub use lambert::{lambert_w, LambertW};
pub use elliptic::{elliptic_cn, EllipticCn};
