#![cfg_attr(not(any(feature = "std", test)), no_std)]
//! Parametric and fixed-form activation functions, each a differentiable elementwise map.
//!
//! - Every formula is written once against the [`Real`] scalar trait, so it runs on `f32`,
//!   `f64` and [`Dual`] numbers alike. Dual evaluation is how [`Differentiable`] gets
//!   derivatives with respect to the input and to every learnable parameter.
//! - Parametric units ([`parametric`]) are plain structs of public scalar fields; an
//!   external optimiser owns the update step.
//! - Fixed units ([`fixed`]) have no parameters.
//! - [`Unit`] selects any of them by published name at runtime.
//!
//! ```rust
//! use actix::{Activation, Differentiable};
//! use actix::parametric::ParametricGaussianActivation;
//!
//! let gaussian: ParametricGaussianActivation = Default::default();
//! let mut outputs = [0.0; 3];
//! gaussian.apply(&[-1.0, 0.0, 1.0], &mut outputs).unwrap();
//!
//! let slope_at_zero = gaussian.derivative(0.0);
//! assert!((slope_at_zero - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Backends
//! Pick exactly one of the `libm` (default, `no_std`) or `std` features.

// generated code names this crate by path
extern crate self as actix;

mod real;
mod dual;
mod error;
mod activation;
mod unit;
pub mod baseline;
pub mod primitives;
pub mod parametric;
pub mod fixed;
pub mod gradcheck;

pub use real::Real;
pub use dual::Dual;
pub use error::Error;
pub use activation::{Activation, Differentiable, Parameters};
pub use unit::Unit;
pub use actix_macro::Parameters;

#[cfg(test)] #[macro_use] extern crate assert_float_eq;
#[cfg(test)] mod tests;
