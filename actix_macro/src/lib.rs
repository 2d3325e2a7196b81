extern crate proc_macro;
use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod attributes;
mod derive_core;

/// Derives `actix::Parameters` (and `Default`) for an activation unit.
/// - Named structs must be generic over exactly one scalar type, and every field is one learnable scalar.
///   Each field needs a `#[param(default = ...)]` initial value.
/// - Unit structs derive an empty parameter set.
/// - The published name defaults to the struct name, override it with `#[activation(name = "...")]`.
/// ```ignore
/// use actix::{Activation, Parameters, Real};
///
/// /// f(x) = alpha * x * exp(-beta * x^2)
/// #[derive(Clone, Copy, Debug, Parameters)]
/// pub struct Gaussian<T = f64> {
///   #[param(default = 1.0)] pub alpha: T,
///   #[param(default = 1.0)] pub beta:  T,
/// }
///
/// impl<T: Real> Activation<T> for Gaussian<T> {
///   fn forward(&self, x: T) -> T { self.alpha * x * (-self.beta * x.square()).exp() }
/// }
/// ```
#[proc_macro_derive(Parameters, attributes(activation, param))]
pub fn parameters(item: TokenStream) -> TokenStream {
  let input = parse_macro_input!(item as DeriveInput);
  derive_core::core(input)
    .unwrap_or_else(|error| error.to_compile_error())
    .into()
}
