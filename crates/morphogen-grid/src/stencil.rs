//! Pure 5-point finite-difference Laplacian.
//!
//! `laplacian(f)[i] = (N + S + E + W - 4 * C) / h^2`, with missing
//! neighbours resolved by the [`BoundaryPolicy`]. The operator mutates
//! nothing and depends only on its inputs, so it can be tested in
//! isolation from the integrator.

use crate::boundary::{resolve_axis, BoundaryPolicy};

/// Compute the discrete Laplacian of `field` into `out`.
///
/// `field` and `out` must both have `resolution * resolution` elements;
/// a mismatch is a programming error and panics. `spacing` is the grid
/// spacing `h`. Interior cells use direct index arithmetic; only the
/// edge rows and columns pay for boundary resolution.
pub fn laplacian_into(
    field: &[f64],
    resolution: usize,
    policy: BoundaryPolicy,
    spacing: f64,
    out: &mut [f64],
) {
    let n = resolution;
    assert_eq!(field.len(), n * n, "field length must match resolution^2");
    assert_eq!(out.len(), n * n, "output length must match resolution^2");

    let inv_h2 = 1.0 / (spacing * spacing);

    for y in 0..n {
        let interior_row = y > 0 && y + 1 < n;
        for x in 0..n {
            let i = y * n + x;
            let c = field[i];

            let (north, south, west, east) = if interior_row && x > 0 && x + 1 < n {
                (
                    field[i - n],
                    field[i + n],
                    field[i - 1],
                    field[i + 1],
                )
            } else {
                let xi = x as i64;
                let yi = y as i64;
                (
                    field[resolve_axis(yi - 1, n, policy) * n + x],
                    field[resolve_axis(yi + 1, n, policy) * n + x],
                    field[y * n + resolve_axis(xi - 1, n, policy)],
                    field[y * n + resolve_axis(xi + 1, n, policy)],
                )
            };

            out[i] = (north + south + east + west - 4.0 * c) * inv_h2;
        }
    }
}

/// Allocating convenience wrapper around [`laplacian_into`].
pub fn laplacian(
    field: &[f64],
    resolution: usize,
    policy: BoundaryPolicy,
    spacing: f64,
) -> Vec<f64> {
    let mut out = vec![0.0; field.len()];
    laplacian_into(field, resolution, policy, spacing, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const H: f64 = 1.0;

    #[test]
    fn constant_field_has_zero_laplacian() {
        for policy in [BoundaryPolicy::Fixed, BoundaryPolicy::Periodic] {
            let field = vec![3.7; 36];
            let lap = laplacian(&field, 6, policy, H);
            for (i, &l) in lap.iter().enumerate() {
                assert!(l.abs() < 1e-12, "cell {i} nonzero under {policy:?}: {l}");
            }
        }
    }

    #[test]
    fn interior_spike_has_five_point_weights() {
        let n = 5;
        let mut field = vec![0.0; n * n];
        field[2 * n + 2] = 1.0;
        let lap = laplacian(&field, n, BoundaryPolicy::Fixed, 0.5);

        let inv_h2 = 1.0 / 0.25;
        assert_eq!(lap[2 * n + 2], -4.0 * inv_h2);
        for i in [1 * n + 2, 3 * n + 2, 2 * n + 1, 2 * n + 3] {
            assert_eq!(lap[i], inv_h2);
        }
        // Diagonal neighbours see nothing from a 5-point stencil.
        assert_eq!(lap[1 * n + 1], 0.0);
        assert_eq!(lap[3 * n + 3], 0.0);
    }

    #[test]
    fn fixed_boundary_is_zero_flux() {
        // A spike in the corner: under the zero-flux policy the
        // out-of-range neighbours take the centre's own value, so the
        // corner loses mass through only its two real neighbours.
        let n = 4;
        let mut field = vec![0.0; n * n];
        field[0] = 1.0;
        let lap = laplacian(&field, n, BoundaryPolicy::Fixed, H);

        // N + S + E + W - 4C = (1 + 0 + 1 + 0) - 4 = -2.
        assert_eq!(lap[0], -2.0);
        // The opposite corner is untouched: nothing wrapped around.
        assert_eq!(lap[n * n - 1], 0.0);
    }

    #[test]
    fn periodic_boundary_wraps_to_opposite_edge() {
        let n = 4;
        let mut field = vec![0.0; n * n];
        field[0] = 1.0;
        let lap = laplacian(&field, n, BoundaryPolicy::Periodic, H);

        // All four neighbours of the corner are real cells holding 0.
        assert_eq!(lap[0], -4.0);
        // The wrapped neighbours each receive the spike.
        assert_eq!(lap[3], 1.0); // west wraps to x = n-1
        assert_eq!(lap[3 * n], 1.0); // north wraps to y = n-1
        assert_eq!(lap[1], 1.0);
        assert_eq!(lap[n], 1.0);
        // Far corner touches the spike only diagonally: still zero.
        assert_eq!(lap[3 * n + 3], 0.0);
    }

    #[test]
    fn periodic_field_matches_interior_formula_at_edges() {
        // A field with period `resolution` in both axes: the wrapped
        // stencil at the edges must agree with the interior formula
        // applied with modular indexing, i.e. no edge discontinuity.
        let n = 8;
        let f = |x: usize, y: usize| {
            ((x as f64) * std::f64::consts::TAU / n as f64).sin()
                + ((y as f64) * std::f64::consts::TAU / n as f64).cos()
        };
        let field: Vec<f64> = (0..n * n).map(|i| f(i % n, i / n)).collect();
        let lap = laplacian(&field, n, BoundaryPolicy::Periodic, H);

        for y in 0..n {
            for x in 0..n {
                let expect = f(x, (y + n - 1) % n)
                    + f(x, (y + 1) % n)
                    + f((x + n - 1) % n, y)
                    + f((x + 1) % n, y)
                    - 4.0 * f(x, y);
                let got = lap[y * n + x];
                assert!(
                    (got - expect).abs() < 1e-12,
                    "mismatch at ({x}, {y}): {got} vs {expect}"
                );
            }
        }
    }

    #[test]
    #[should_panic(expected = "field length")]
    fn mismatched_field_length_panics() {
        let mut out = vec![0.0; 16];
        laplacian_into(&[0.0; 15], 4, BoundaryPolicy::Fixed, H, &mut out);
    }

    proptest! {
        #[test]
        fn constant_fields_are_harmonic(
            value in -1e6f64..1e6,
            n in 1usize..16,
            fixed in proptest::bool::ANY,
        ) {
            let policy = BoundaryPolicy::from_fixed_flag(fixed);
            let field = vec![value; n * n];
            let lap = laplacian(&field, n, policy, 1.0 / n as f64);
            for &l in &lap {
                prop_assert!(l.abs() < 1e-6);
            }
        }
    }
}
