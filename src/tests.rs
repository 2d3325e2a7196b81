/// Principal-branch Lambert W: fixed-iteration Newton solve.
mod lambert_w {
  use crate::*;
  use crate::primitives::{lambert_w, LambertW};
  use proptest::prelude::*;

  #[test]
  fn zero_maps_to_zero() {
    assert_eq!(lambert_w(0.0f64), 0.0);
  }

  #[test]
  fn known_values() {
    // omega constant
    assert_float_absolute_eq!(lambert_w(1.0f64), 0.567_143_290_409_783_8, 1e-12);
    assert_float_absolute_eq!(lambert_w(core::f64::consts::E), 1.0, 1e-12);
    assert_float_absolute_eq!(lambert_w(1.0f32), 0.567_143_3, 1e-5);
  }

  /// `w e^w` reproduces `z` across the range callers feed it.
  #[test]
  fn residual_vanishes() {
    proptest!(ProptestConfig::with_cases(5_000), |(z in 0.0f64..1000.0)| {
      let residual = LambertW::default().residual(z);
      prop_assert!(residual <= 1e-9 * (1.0 + z), "z = {}, residual = {}", z, residual);
    });
  }

  #[test]
  fn more_iterations_tighten() {
    for z in [0.5, 3.0, 50.0, 400.0] {
      let coarse = LambertW::new(1).residual(z);
      let fine   = LambertW::new(8).residual(z);
      assert!(coarse >= fine, "z = {}: {} < {}", z, coarse, fine);
    }
  }

  #[test]
  fn non_decreasing() {
    proptest!(ProptestConfig::with_cases(5_000), |(a in 0.0f64..500.0, b in 0.0f64..500.0)| {
      let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
      prop_assert!(lambert_w(lo) <= lambert_w(hi) + 1e-12);
    });
  }

  #[test]
  fn never_negative() {
    proptest!(ProptestConfig::with_cases(2_000), |(z in 0.0f64..1e6, iterations in 0usize..12)| {
      prop_assert!(LambertW::new(iterations).solve(z) >= 0.0);
    });
  }

  /// Finite and non-negative for `z` spread over every decade up to the type's maximum.
  #[test]
  fn finite_over_whole_range() {
    proptest!(ProptestConfig::with_cases(2_000), |(decade in -300.0f64..308.0, iterations in 0usize..12)| {
      let z = 10f64.powf(decade);
      let w = LambertW::new(iterations).solve(z);
      prop_assert!(w.is_finite() && w >= 0.0, "W({}) = {}", z, w);
    });
    proptest!(ProptestConfig::with_cases(2_000), |(decade in -30.0f32..38.0, iterations in 0usize..12)| {
      let z = 10f32.powf(decade);
      let w = LambertW::new(iterations).solve(z);
      prop_assert!(w.is_finite() && w >= 0.0, "W({}) = {}", z, w);
    });
    assert!(lambert_w(f64::MAX).is_finite());
    assert!(lambert_w(f32::MAX).is_finite());
  }

  /// Near the top of each type's range the default solve is bracketed by
  /// `ln z - ln ln z <= W(z) <= ln z`, and more iterations converge on `w + ln w = ln z`.
  #[test]
  fn huge_arguments() {
    let ln_z = 1e308f64.ln();
    let w    = lambert_w(1e308f64);
    assert!(w.is_finite());
    assert!(w <= ln_z && w >= ln_z - ln_z.ln() - 1e-6, "W(1e308) = {}", w);

    let converged = LambertW::new(32).solve(1e308f64);
    assert_float_absolute_eq!(converged + converged.ln(), ln_z, 1e-10);

    let ln_z = (1e37f32 as f64).ln();
    let w    = lambert_w(1e37f32) as f64;
    assert!(w.is_finite());
    assert!(w <= ln_z + 1e-4 && w >= ln_z - ln_z.ln() - 1e-4, "W(1e37) = {}", w);

    let converged = LambertW::new(32).solve(1e37f32) as f64;
    assert_float_absolute_eq!(converged + converged.ln(), ln_z, 1e-4);
  }

  /// Differentiating through the unrolled loop recovers `W'(z) = W / (z (1 + W))`.
  #[test]
  fn derivative_through_iterations() {
    for z in [0.3, 2.0, 25.0] {
      let w = lambert_w(z);
      let expected = w / (z * (1.0 + w));
      let dual = lambert_w(Dual::variable(z));
      assert_float_absolute_eq!(dual.value, w, 1e-15);
      assert_float_absolute_eq!(dual.tangent, expected, 1e-9);
    }
  }
}

/// Truncated-series Jacobi elliptic cn.
mod elliptic_cn {
  use crate::primitives::{elliptic_cn, EllipticCn};
  use proptest::prelude::*;

  #[test]
  fn one_at_origin() {
    proptest!(ProptestConfig::with_cases(1_000), |(m in 0.0f64..=1.0)| {
      prop_assert_eq!(elliptic_cn(0.0, m), 1.0);
    });
  }

  #[test]
  fn bounded() {
    proptest!(ProptestConfig::with_cases(10_000), |(u in -50.0f64..50.0, m in 0.0f64..=1.0, terms in 0usize..8)| {
      let cn = EllipticCn::new(terms).cn(u, m);
      prop_assert!((-1.0..=1.0).contains(&cn));
    });
  }

  #[test]
  fn single_term_is_constant() {
    proptest!(ProptestConfig::with_cases(1_000), |(u in -50.0f64..50.0, m in 0.0f64..=1.0)| {
      prop_assert_eq!(EllipticCn::new(1).cn(u, m), 1.0);
    });
  }

  #[test]
  fn terms_past_four_do_nothing() {
    proptest!(ProptestConfig::with_cases(1_000), |(u in -3.0f64..3.0, m in 0.0f64..=1.0)| {
      prop_assert_eq!(EllipticCn::new(9).cn(u, m), EllipticCn::new(4).cn(u, m));
    });
  }

  /// `cn(u, 0) = cos u` and `cn(u, 1) = sech u`.
  #[test]
  fn degenerate_moduli() {
    for u in [-0.3f64, -0.1, 0.05, 0.2, 0.3] {
      assert_float_absolute_eq!(elliptic_cn(u, 0.0), u.cos(), 1e-8);
    }
    // the first dropped sech term is larger
    for u in [-0.1f64, 0.05, 0.1] {
      assert_float_absolute_eq!(elliptic_cn(u, 1.0), 1.0 / u.cosh(), 1e-8);
    }
  }
}

/// Dual-number arithmetic and the sub-gradient conventions.
mod dual {
  use crate::*;

  #[test]
  fn product_and_quotient_rules() {
    let x = Dual::variable(3.0f64);
    let y = x * x / (x + Dual::lit(1.0));
    // d/dx x²/(x+1) = (x² + 2x) / (x+1)²
    assert_float_absolute_eq!(y.value, 9.0 / 4.0, 1e-15);
    assert_float_absolute_eq!(y.tangent, 15.0 / 16.0, 1e-15);
  }

  #[test]
  fn abs_and_sign_at_zero() {
    let zero = Dual::variable(0.0f64);
    assert_eq!(zero.abs().tangent, 0.0);
    assert_eq!(zero.signum().tangent, 0.0);
    assert_eq!(Dual::variable(-2.0f64).abs().tangent, -1.0);
  }

  #[test]
  fn clamp_passes_gradient_inside_only() {
    let (lo, hi) = (Dual::lit(0.0f64), Dual::lit(1.0));
    assert_eq!(Dual::variable(0.5f64).clamp_range(lo, hi).tangent, 1.0);
    assert_eq!(Dual::variable(1.5f64).clamp_range(lo, hi).tangent, 0.0);
    assert_eq!(Dual::variable(-0.5f64).clamp_min(lo).tangent, 0.0);
    // boundary belongs to the inside
    assert_eq!(Dual::variable(0.0f64).clamp_min(lo).tangent, 1.0);
  }

  #[test]
  fn zero_base_power_stays_finite() {
    let base = Dual::constant(0.0f64);
    let exponent = Dual::variable(1.5f64);
    let y = base.powf(exponent);
    assert_eq!(y.value, 0.0);
    assert_eq!(y.tangent, 0.0);
  }

  #[test]
  fn power_rule_in_both_arguments() {
    let b = 2.0f64;
    let e = 3.0f64;
    let by_base = Dual::variable(b).powf(Dual::constant(e));
    let by_exponent = Dual::constant(b).powf(Dual::variable(e));
    assert_float_absolute_eq!(by_base.tangent, e * b.powf(e - 1.0), 1e-12);
    assert_float_absolute_eq!(by_exponent.tangent, b.powf(e) * b.ln(), 1e-12);
  }

  #[test]
  fn comparisons_use_the_value() {
    assert!(Dual::new(1.0f64, 100.0) < Dual::new(2.0, -100.0));
    assert!(Dual::new(1.0f64, 5.0) == Dual::new(1.0, 0.0));
  }
}

/// Standard baselines.
mod baseline {
  use crate::*;
  use crate::baseline::*;

  #[test]
  fn sigmoid_is_stable_far_out() {
    let low = sigmoid(Dual::variable(-1000.0f64));
    assert_eq!(low.value, 0.0);
    assert!(low.tangent.is_finite());
    let high = sigmoid(Dual::variable(1000.0f64));
    assert_eq!(high.value, 1.0);
    assert!(high.tangent.is_finite());
  }

  #[test]
  fn softplus_threshold() {
    assert_eq!(softplus(25.0f64), 25.0);
    assert_float_absolute_eq!(softplus(0.0f64), core::f64::consts::LN_2, 1e-15);
    assert_float_absolute_eq!(softplus(-5.0f64), (1.0 + (-5.0f64).exp()).ln(), 1e-15);
  }

  #[test]
  fn piecewise_baselines() {
    assert_eq!(relu(-2.0f64), 0.0);
    assert_eq!(relu(2.0f64), 2.0);
    assert_eq!(elu(2.0f64), 2.0);
    assert_float_absolute_eq!(elu(-1.0f64), (-1.0f64).exp() - 1.0, 1e-15);
    assert_eq!(sign(0.0f64), 0.0);
    assert_eq!(sign(-3.0f64), -1.0);
    assert_eq!(soft_sign(1.0f64), 0.5);
  }
}

/// Parametric units: defaults, identities, parameter access.
mod parametric {
  use crate::*;
  use crate::parametric::*;
  use proptest::prelude::*;

  #[test]
  fn defaults() {
    let optim: OptimA = Default::default();
    assert_eq!(optim, OptimA { alpha: 1.0, beta: 0.5, gamma: 1.0, delta: 0.5, lambda: 1.0 });

    let softsign: AdaptiveRationalSoftsign = Default::default();
    assert_eq!(softsign.gamma, 2.0);

    let elliptic: EllipticGaussianActivation = Default::default();
    assert_eq!(elliptic.m, 0.5);

    let fourier: LearnableFourierActivation = Default::default();
    assert_eq!(fourier, LearnableFourierActivation { alpha: 1.0, beta: 1.0, gamma: 0.0, delta: 1.0, lambda: 1.0, phi: 0.0 });
  }

  #[test]
  fn names_and_parameter_order() {
    assert_eq!(<AELuC as Parameters<f64>>::NAME, "A_ELuC");
    assert_eq!(<OptimA as Parameters<f64>>::PARAMETERS, &["alpha", "beta", "gamma", "delta", "lambda"]);
    assert_eq!(<WeibullSoftplusActivation as Parameters<f64>>::PARAMETERS, &["alpha", "beta", "gamma", "delta", "lambda", "mu"]);
    assert_eq!(<EllipticGaussianActivation as Parameters<f64>>::PARAMETERS, &["m"]);

    let optim: OptimA = Default::default();
    assert_eq!(optim.parameter(4), Some(1.0));
    assert_eq!(optim.parameter(5), None);
    assert_eq!(optim.parameter_count(), 5);
  }

  #[test]
  fn gaussian_end_to_end() {
    let gaussian: ParametricGaussianActivation = Default::default();
    let mut outputs = [0.0; 3];
    gaussian.apply(&[-1.0, 0.0, 1.0], &mut outputs).unwrap();

    let e = (-1.0f64).exp();
    assert_float_absolute_eq!(outputs[0], -e, 1e-15);
    assert_eq!(outputs[1], 0.0);
    assert_float_absolute_eq!(outputs[2], e, 1e-15);
    assert_float_absolute_eq!(outputs[2], 0.3679, 1e-4);
  }

  #[test]
  fn logish_is_swish() {
    let logish: ParametricLogish = Default::default();
    proptest!(ProptestConfig::with_cases(5_000), |(x in -30.0f64..30.0)| {
      let swish = x / (1.0 + (-x).exp());
      prop_assert!((logish.forward(x) - swish).abs() <= 1e-12 * (1.0 + x.abs()));
    });
  }

  #[test]
  fn alpha_sigmoid_is_softsign_at_defaults() {
    let unit: GeneralizedAlphaSigmoid = Default::default();
    proptest!(ProptestConfig::with_cases(5_000), |(x in -30.0f64..30.0)| {
      prop_assert!((unit.forward(x) - x / (1.0 + x.abs())).abs() <= 1e-5);
    });
  }

  #[test]
  fn smooth_step_vanishes_at_defaults() {
    let step: ParametricSmoothStep = Default::default();
    proptest!(ProptestConfig::with_cases(1_000), |(x in -30.0f64..30.0)| {
      prop_assert_eq!(step.forward(x), 0.0);
    });
  }

  #[test]
  fn gompertz_limits() {
    let gompertz: ParametricGeneralizedGompertzActivation = Default::default();
    assert_float_absolute_eq!(gompertz.forward(0.0), (-1.0f64).exp(), 1e-15);
    assert_float_absolute_eq!(gompertz.forward(40.0), 1.0, 1e-12);
  }

  /// The stored value is raw; `abs` applies only at use.
  #[test]
  fn raw_parameters_are_unconstrained() {
    let positive: ParametricLambertWActivation = Default::default();
    let negative = ParametricLambertWActivation { beta: -1.0, ..positive };
    assert_eq!(negative.beta, -1.0);
    for x in [-2.0, -0.5, 0.7, 3.0] {
      assert_eq!(positive.forward(x), negative.forward(x));
    }

    // one clamp bound each side
    let low  = EllipticGaussianActivation { m: -4.0 };
    let zero = EllipticGaussianActivation { m:  0.0 };
    let high = EllipticGaussianActivation { m:  9.0 };
    let one  = EllipticGaussianActivation { m:  1.0 };
    assert_eq!(low.forward(0.4), zero.forward(0.4));
    assert_eq!(high.forward(0.4), one.forward(0.4));
  }

  #[test]
  fn named_parameter_access() {
    let mut unit: AdaptSigmoidReLU = Default::default();
    unit.set_parameter("gamma", 3.0).unwrap();
    assert_eq!(unit.gamma, 3.0);
    assert_eq!(unit.parameter_by_name("gamma"), Ok(3.0));
    assert_eq!(
      unit.set_parameter("lambda", 1.0),
      Err(Error::UnknownParameter { activation: "AdaptSigmoidReLU" })
    );
  }

  #[test]
  fn single_precision() {
    let wide:   OptimA<f64> = Default::default();
    let narrow: OptimA<f32> = Default::default();
    for x in [-2.0f32, -0.3, 0.0, 0.8, 4.0] {
      assert_float_absolute_eq!(narrow.forward(x) as f64, wide.forward(x as f64), 1e-5);
    }
  }
}

/// Fixed-form units: zeros and symmetry.
mod fixed {
  use crate::*;
  use crate::fixed::*;
  use proptest::prelude::*;

  #[test]
  fn zeros() {
    assert_eq!(SinhGate.forward(0.0f64), 0.0);
    assert_eq!(SoftRBF.forward(0.0f64), 0.0);
    assert_float_absolute_eq!(RationalSoftplus.forward(0.0f64), 0.0, 1e-15);
    assert_eq!(LogExponentialActivation.forward(0.0f64), 0.0);
    assert_eq!(LogisticWActivation.forward(0.0f64), 0.0);
    assert_eq!(QuantumTanhActivation.forward(0.0f64), 0.0);
  }

  fn mirrored<F: Fn(f64) -> f64>(f: F, x: f64, parity: f64) -> bool {
    (f(-x) - parity * f(x)).abs() <= 1e-12 * (1.0 + f(x).abs())
  }

  #[test]
  fn odd_functions() {
    proptest!(ProptestConfig::with_cases(5_000), |(x in -20.0f64..20.0)| {
      prop_assert!(mirrored(|x| SoftRBF.forward(x), x, -1.0));
      prop_assert!(mirrored(|x| HarmonicTanh.forward(x), x, -1.0));
      prop_assert!(mirrored(|x| BipolarGaussianArctanActivation.forward(x), x, -1.0));
    });
  }

  #[test]
  fn even_functions() {
    proptest!(ProptestConfig::with_cases(5_000), |(x in -20.0f64..20.0)| {
      prop_assert!(mirrored(|x| TanhArc.forward(x), x, 1.0));
      prop_assert!(mirrored(|x| SinhGate.forward(x), x, 1.0));
    });
  }

  #[test]
  fn soft_rbf_slope() {
    // d/dx x e^-x² = (1 - 2x²) e^-x²
    for x in [-1.5f64, -0.2, 0.0, 0.6, 2.0] {
      let expected = (1.0 - 2.0 * x * x) * (-x * x).exp();
      assert_float_absolute_eq!(SoftRBF.derivative(x), expected, 1e-14);
    }
  }

  #[test]
  fn no_parameters() {
    assert!(<SinhGate as Parameters<f64>>::PARAMETERS.is_empty());
    assert_eq!(<SinhGate as Parameters<f64>>::NAME, "SinhGate");
    assert_eq!(Differentiable::<f64>::parameter_derivative(&SinhGate, 1.0, 0), None);
    assert_eq!(
      Parameters::<f64>::set_parameter(&mut SinhGate, "alpha", 1.0),
      Err(Error::UnknownParameter { activation: "SinhGate" })
    );
  }
}

/// Buffer-level application and the backward pass.
mod buffers {
  use crate::*;
  use crate::parametric::*;
  use crate::fixed::*;

  #[test]
  fn length_mismatch() {
    let mut outputs = [0.0f64; 2];
    assert_eq!(
      SoftRBF.apply(&[1.0, 2.0, 3.0], &mut outputs),
      Err(Error::LengthMismatch { input: 3, output: 2 })
    );
    assert!(format!("{}", Error::LengthMismatch { input: 3, output: 2 }).contains("3"));
  }

  #[test]
  fn in_place_matches_out_of_place() {
    let unit: OptimA = Default::default();
    let input = [-3.0, -1.0, -0.25, 0.0, 0.5, 2.0, 7.0];
    let mut outputs = [0.0; 7];
    unit.apply(&input, &mut outputs).unwrap();

    let mut buffer = input;
    unit.apply_in_place(&mut buffer);
    assert_eq!(buffer, outputs);
  }

  #[test]
  fn backward_accumulates_parameter_gradients() {
    let unit: ParametricLogish = Default::default();
    let input    = [-1.0, 0.5, 2.0];
    let upstream = [1.0, -2.0, 0.5];
    let mut grad_input  = [0.0; 3];
    let mut grad_params = [0.0; 2];

    unit.backward(&input, &upstream, &mut grad_input, &mut grad_params).unwrap();
    let once = grad_params;
    unit.backward(&input, &upstream, &mut grad_input, &mut grad_params).unwrap();

    for (index, value) in once.iter().enumerate() {
      let expected: f64 = input.iter().zip(&upstream)
        .map(|(&x, &g)| g * unit.parameter_derivative(x, index).unwrap())
        .sum();
      assert_float_absolute_eq!(*value, expected, 1e-14);
      assert_float_absolute_eq!(grad_params[index], 2.0 * expected, 1e-14);
    }
    for ((&x, &g), &dx) in input.iter().zip(&upstream).zip(&grad_input) {
      assert_float_absolute_eq!(dx, g * unit.derivative(x), 1e-15);
    }
  }

  #[test]
  fn backward_checks_lengths() {
    let unit: OptimA = Default::default();
    let mut grad_input  = [0.0; 2];
    let mut grad_params = [0.0; 3];
    assert_eq!(
      unit.backward(&[1.0, 2.0], &[1.0, 1.0], &mut grad_input, &mut grad_params),
      Err(Error::ParameterCountMismatch { parameters: 5, gradients: 3 })
    );
    assert_eq!(
      unit.backward(&[1.0, 2.0], &[1.0], &mut grad_input, &mut [0.0; 5]),
      Err(Error::LengthMismatch { input: 2, output: 1 })
    );

    let message = format!("{}", Error::ParameterCountMismatch { parameters: 5, gradients: 3 });
    assert!(message.contains("5 parameters") && message.contains("holds 3"));
  }
}

/// The runtime catalogue and whole-catalogue numeric properties.
mod catalogue {
  use crate::*;
  use crate::gradcheck::{central_difference, GradCheck};
  use crate::parametric::*;
  use crate::fixed::*;
  use proptest::prelude::*;

  /// Away from every kink (`|x|`, `relu`) and the Lambert W seed switch at `x = 0`.
  const SAMPLES: [f64; 6] = [-2.3, -1.1, -0.4, 0.35, 0.9, 1.7];

  #[test]
  fn every_name_round_trips() {
    assert_eq!(Unit::NAMES.len(), 37);
    assert_eq!(Unit::all().count(), 37);
    for name in Unit::NAMES {
      assert_eq!(Unit::from_name(name).unwrap().name(), *name);
    }
    assert_eq!(Unit::from_name("Swish"), Err(Error::UnknownActivation));
  }

  #[test]
  fn enum_forwards_to_the_unit() {
    let mut unit = Unit::from_name("ParametricGaussianActivation").unwrap();
    assert_eq!(unit.parameter_names(), &["alpha", "beta"]);
    unit.set_parameter("alpha", 2.0).unwrap();
    assert_eq!(unit.parameter("alpha"), Ok(2.0));

    let direct = ParametricGaussianActivation { alpha: 2.0, beta: 1.0 };
    assert_eq!(unit, Unit::ParametricGaussianActivation(direct));
    assert_eq!(unit.forward(0.7), direct.forward(0.7));
    assert_eq!(unit.derivative(0.7), direct.derivative(0.7));
    assert_eq!(Unit::from_name("HarmonicTanh").unwrap().parameter_count(), 0);
  }

  #[test]
  fn finite_at_defaults() {
    proptest!(ProptestConfig::with_cases(2_000), |(x in -10.0f64..10.0)| {
      for unit in Unit::all() {
        prop_assert!(unit.forward(x).is_finite(), "{}({}) = {}", unit.name(), x, unit.forward(x));
      }
    });
  }

  /// Up to `|x| = 700`, where `exp(x)` is still finite in `f64`.
  #[test]
  fn finite_at_large_inputs() {
    proptest!(ProptestConfig::with_cases(2_000), |(x in -700.0f64..700.0)| {
      for unit in Unit::all() {
        prop_assert!(unit.forward(x).is_finite(), "{}({}) = {}", unit.name(), x, unit.forward(x));
      }
    });
    for unit in Unit::all() {
      for x in [-700.0, 700.0] {
        assert!(unit.forward(x).is_finite(), "{}({}) = {}", unit.name(), x, unit.forward(x));
      }
    }
  }

  /// Every unit over `f32` up to `|x| = 80`; `x·sinh(x)` leaves the `f32` range just past that.
  #[test]
  fn finite_in_single_precision() {
    macro_rules! sweep {
      ($x:expr; parametric: [$($p:ident),* $(,)?]; fixed: [$($f:ident),* $(,)?]) => {{
        $({
          let unit: $p<f32> = Default::default();
          let y = unit.forward($x);
          prop_assert!(y.is_finite(), "{}({}) = {}", stringify!($p), $x, y);
        })*
        $({
          let y = Activation::<f32>::forward(&$f, $x);
          prop_assert!(y.is_finite(), "{}({}) = {}", stringify!($f), $x, y);
        })*
      }};
    }

    proptest!(ProptestConfig::with_cases(2_000), |(x in -80.0f32..80.0)| {
      sweep!(x;
        parametric: [
          OptimA, ParametricPolyTanh, AdaptiveRationalSoftsign, OptimXTemporal,
          ParametricGaussianActivation, LearnableFourierActivation, AELuC, ParametricSmoothStep,
          AdaptiveBiHyperbolic, ParametricLogish, AdaptSigmoidReLU, ParametricLambertWActivation,
          AdaptiveHyperbolicLogarithm, ParametricGeneralizedGompertzActivation,
          ComplexHarmonicActivation, WeibullSoftplusActivation, AdaptiveErfSwish,
          ParametricBetaSoftsign, ParametricArcSinhGate, GeneralizedAlphaSigmoid,
          EllipticGaussianActivation,
        ];
        fixed: [
          SinhGate, SoftRBF, ATanSigmoid, ExpoSoft, HarmonicTanh, RationalSoftplus, UnifiedSineExp,
          SigmoidErf, LogCoshGate, TanhArc, RiemannianSoftsignActivation, QuantumTanhActivation,
          LogExponentialActivation, BipolarGaussianArctanActivation, ExpArcTanHarmonicActivation,
          LogisticWActivation,
        ]
      );
    });
  }

  /// The two Lambert W units past the point where `w·e^w` itself would overflow.
  #[test]
  fn lambert_units_at_extremes() {
    let parametric: ParametricLambertWActivation = Default::default();
    assert!(parametric.forward(705.0).is_finite());
    assert!(LogisticWActivation.forward(705.0f64).is_finite());

    let narrow: ParametricLambertWActivation<f32> = Default::default();
    assert!(narrow.forward(85.0f32).is_finite());
    // logistic factor is 1 there, so the unit is the identity
    assert_float_absolute_eq!(LogisticWActivation.forward(85.0f32) as f64, 85.0, 1e-3);
    assert_float_absolute_eq!(LogisticWActivation.forward(705.0f64), 705.0, 1e-3);
  }

  #[test]
  fn derivatives_finite_at_defaults() {
    proptest!(ProptestConfig::with_cases(1_000), |(x in -5.0f64..5.0)| {
      for unit in Unit::all() {
        prop_assert!(unit.derivative(x).is_finite(), "{}'({})", unit.name(), x);
        for index in 0..unit.parameter_count() {
          let partial = unit.parameter_derivative(x, index).unwrap();
          prop_assert!(partial.is_finite(), "{} d/d{} at {}", unit.name(), unit.parameter_names()[index], x);
        }
      }
    });
  }

  #[test]
  fn derivatives_finite_at_origin() {
    for unit in Unit::all() {
      assert!(unit.derivative(0.0).is_finite(), "{}", unit.name());
      for index in 0..unit.parameter_count() {
        assert!(unit.parameter_derivative(0.0, index).unwrap().is_finite(), "{}", unit.name());
      }
    }
  }

  #[test]
  fn shape_preserving() {
    let input = [-4.0, -1.0, 0.0, 0.25, 3.0];
    for unit in Unit::all() {
      let mut outputs = [f64::NAN; 5];
      unit.apply(&input, &mut outputs).unwrap();
      for (&x, &y) in input.iter().zip(&outputs) {
        assert_eq!(y, unit.forward(x), "{}", unit.name());
      }
    }
  }

  /// Dual-number derivatives agree with central finite differences, for the input and every parameter.
  #[test]
  fn gradients_match_finite_differences() {
    let check = GradCheck::default();
    for unit in Unit::all() {
      for x in SAMPLES {
        let numeric = central_difference(|x| unit.forward(x), x, check.step);
        let analytic = unit.derivative(x);
        assert!(
          (analytic - numeric).abs() <= check.tolerance * (1.0 + analytic.abs().max(numeric.abs())),
          "{}'({}): analytic {} numeric {}", unit.name(), x, analytic, numeric
        );

        for (index, name) in unit.parameter_names().iter().enumerate() {
          let origin = unit.parameter(name).unwrap();
          let numeric = central_difference(|theta| {
            let mut perturbed = unit;
            perturbed.set_parameter(name, theta).unwrap();
            perturbed.forward(x)
          }, origin, check.step);
          let analytic = unit.parameter_derivative(x, index).unwrap();
          assert!(
            (analytic - numeric).abs() <= check.tolerance * (1.0 + analytic.abs().max(numeric.abs())),
            "{} d/d{} at {}: analytic {} numeric {}", unit.name(), name, x, analytic, numeric
          );
        }
      }
    }
  }

  #[test]
  fn grad_check_reports() {
    let check = GradCheck::default();
    let optim: OptimA = Default::default();
    for x in SAMPLES {
      assert!(check.check_input(&optim, x).passed);
      for index in 0..optim.parameter_count() {
        assert!(check.check_parameter(&optim, x, index).unwrap().passed);
      }
    }
    assert!(check.check_input(&LogisticWActivation, 0.9).passed);
    assert_eq!(check.check_parameter(&optim, 0.9, 5), None);

    // a kink is reported, not hidden
    let relu_gate = AdaptSigmoidReLU { alpha: 0.0, beta: 1.0, gamma: 1.0, delta: 1.0 };
    let at_kink = check.check_input(&relu_gate, 0.0);
    assert!(!at_kink.passed);
    assert_eq!(at_kink.analytic, 0.0);
    assert_float_absolute_eq!(at_kink.numeric, 0.5, 1e-9);
  }
}
