use crate::{Dual, Error, Real};

/// An elementwise transform `f: T -> T`.
///
/// `forward` is the scalar formula; the buffer methods map it over a tensor's flat
/// storage, so the output always has the input's shape.
pub trait Activation<T: Real> {
  fn forward(&self, x: T) -> T;

  /// `output[i] = forward(input[i])`.
  fn apply(&self, input: &[T], output: &mut [T]) -> Result<(), Error> {
    check_lengths(input.len(), output.len())?;
    for (y, &x) in output.iter_mut().zip(input) {
      *y = self.forward(x);
    }
    Ok(())
  }

  fn apply_in_place(&self, buffer: &mut [T]) {
    for v in buffer.iter_mut() {
      *v = self.forward(*v);
    }
  }
}

/// The learnable scalars of a unit, in declaration order.
///
/// Derive it with `#[derive(Parameters)]`. Stored values are raw and unconstrained;
/// any `abs`/`clamp` a formula needs is applied inside `forward`.
pub trait Parameters<T: Real> {
  /// Published name of the unit.
  const NAME: &'static str;
  /// Parameter names; index `i` here is index `i` everywhere else.
  const PARAMETERS: &'static [&'static str];

  /// The same unit over dual numbers.
  type Lifted: Activation<Dual<T>>;

  fn parameter(&self, index: usize) -> Option<T>;
  fn parameter_mut(&mut self, index: usize) -> Option<&mut T>;

  /// Lift every parameter into a dual number; the one at `seed` (if any) gets a unit tangent.
  fn lift(&self, seed: Option<usize>) -> Self::Lifted;

  fn parameter_count(&self) -> usize { Self::PARAMETERS.len() }

  fn parameter_index(name: &str) -> Option<usize> {
    Self::PARAMETERS.iter().position(|p| *p == name)
  }

  fn parameter_by_name(&self, name: &str) -> Result<T, Error> {
    Self::parameter_index(name)
      .and_then(|index| self.parameter(index))
      .ok_or(Error::UnknownParameter { activation: Self::NAME })
  }

  fn set_parameter(&mut self, name: &str, value: T) -> Result<(), Error> {
    let slot = Self::parameter_index(name)
      .and_then(|index| self.parameter_mut(index))
      .ok_or(Error::UnknownParameter { activation: Self::NAME })?;

    log::trace!("{}.{} <- {:?}", Self::NAME, name, value);
    *slot = value;
    Ok(())
  }
}

/// Derivatives of any unit with respect to its input and each parameter.
///
/// Blanket-implemented: evaluation runs the unit's own formula over [`Dual`] numbers.
pub trait Differentiable<T: Real>: Activation<T> + Parameters<T> {
  /// `df/dx` at `x`.
  fn derivative(&self, x: T) -> T {
    self.lift(None).forward(Dual::variable(x)).tangent
  }

  /// `df/dθ` for the parameter at `index`, `None` past the last parameter.
  fn parameter_derivative(&self, x: T, index: usize) -> Option<T> {
    if index >= Self::PARAMETERS.len() { return None; }
    Some(self.lift(Some(index)).forward(Dual::constant(x)).tangent)
  }

  /// Backward pass over a buffer, given the upstream gradient `dL/dy`.
  /// - `grad_input[i] = upstream[i] * df/dx(input[i])` (overwritten).
  /// - `grad_params[j] += Σᵢ upstream[i] * df/dθⱼ(input[i])` (accumulated, the optimiser zeroes it).
  fn backward(&self, input: &[T], upstream: &[T], grad_input: &mut [T], grad_params: &mut [T]) -> Result<(), Error> {
    check_lengths(input.len(), upstream.len())?;
    check_lengths(input.len(), grad_input.len())?;
    if grad_params.len() != Self::PARAMETERS.len() {
      return Err(Error::ParameterCountMismatch { parameters: Self::PARAMETERS.len(), gradients: grad_params.len() });
    }

    for ((&x, &g), dx) in input.iter().zip(upstream).zip(grad_input.iter_mut()) {
      *dx = g * self.derivative(x);
      for (index, accumulated) in grad_params.iter_mut().enumerate() {
        let partial = self.lift(Some(index)).forward(Dual::constant(x)).tangent;
        *accumulated = *accumulated + g * partial;
      }
    }

    Ok(())
  }
}

impl<T: Real, A: Activation<T> + Parameters<T>> Differentiable<T> for A {}

fn check_lengths(input: usize, output: usize) -> Result<(), Error> {
  if input == output { Ok(()) } else { Err(Error::LengthMismatch { input, output }) }
}
