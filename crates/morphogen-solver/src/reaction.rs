//! Brusselator reaction kinetics.
//!
//! The local (non-diffusive) part of the system:
//!
//! ```text
//! du/dt = a - (b + 1) * u + u^2 * v
//! dv/dt = b * u - u^2 * v
//! ```
//!
//! The mode descriptions in a settings file classify stability regimes
//! (Turing critical point, Hopf bifurcation, ...) by linear analysis of
//! exactly these kinetics, so the signs here must not drift.

/// Evaluate the Brusselator kinetics at one cell.
///
/// Pure and stateless; well-defined for all finite inputs.
#[inline]
pub fn brusselator(u: f64, v: f64, a: f64, b: f64) -> (f64, f64) {
    let uuv = u * u * v;
    let du = a - (b + 1.0) * u + uuv;
    let dv = b * u - uuv;
    (du, dv)
}

/// The homogeneous steady state `(u*, v*) = (a, b/a)`.
///
/// For `a != 0` this is the unique spatially uniform fixed point of the
/// kinetics: [`brusselator`] evaluates to `(0, 0)` there.
#[inline]
pub fn fixed_point(a: f64, b: f64) -> (f64, f64) {
    (a, b / a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn kinetics_match_the_textbook_form() {
        // u = 1, v = 2, a = 1, b = 3:
        // du = 1 - 4*1 + 1*2 = -1, dv = 3*1 - 2 = 1.
        let (du, dv) = brusselator(1.0, 2.0, 1.0, 3.0);
        assert_eq!(du, -1.0);
        assert_eq!(dv, 1.0);
    }

    #[test]
    fn fixed_point_is_exact_for_classic_parameters() {
        let (u, v) = fixed_point(1.0, 3.0);
        assert_eq!((u, v), (1.0, 3.0));
        let (du, dv) = brusselator(u, v, 1.0, 3.0);
        assert_eq!(du, 0.0);
        assert_eq!(dv, 0.0);
    }

    proptest! {
        #[test]
        fn fixed_point_zeroes_the_kinetics(
            a in 0.1f64..10.0,
            b in 0.0f64..10.0,
        ) {
            let (u, v) = fixed_point(a, b);
            let (du, dv) = brusselator(u, v, a, b);
            // u*^2 * v* = a * b is not always exactly representable, so
            // allow rounding at the scale of the intermediate terms.
            let scale = (a * b).abs().max(1.0);
            prop_assert!(du.abs() <= scale * 1e-12, "du = {du}");
            prop_assert!(dv.abs() <= scale * 1e-12, "dv = {dv}");
        }

        #[test]
        fn mass_exchange_is_antisymmetric_in_the_nonlinear_term(
            u in -5.0f64..5.0,
            v in -5.0f64..5.0,
            a in 0.1f64..5.0,
            b in 0.1f64..5.0,
        ) {
            // du + dv = a - u: the u^2 v term only moves mass between
            // the species, never creates it.
            let (du, dv) = brusselator(u, v, a, b);
            prop_assert!((du + dv - (a - u)).abs() < 1e-9);
        }
    }
}
