use thiserror::Error;

/// Structural errors. Numeric evaluation itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
  /// `Unit::from_name` was given a name outside the catalogue.
  #[error("no activation with that name exists in the catalogue")]
  UnknownActivation,

  /// Named parameter access on a unit that has no such parameter.
  #[error("`{activation}` has no parameter with that name")]
  UnknownParameter { activation: &'static str },

  /// Paired buffers differ in length, so the elementwise map cannot preserve shape.
  #[error("buffer holds {output} elements but input holds {input}")]
  LengthMismatch { input: usize, output: usize },

  /// The parameter-gradient buffer handed to `backward` does not have one slot per parameter.
  #[error("unit has {parameters} parameters but the gradient buffer holds {gradients}")]
  ParameterCountMismatch { parameters: usize, gradients: usize },
}
