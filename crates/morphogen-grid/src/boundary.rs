//! Boundary policy for stencil edge handling.

/// How the stencil treats neighbours that fall outside the grid.
///
/// This controls the *topology* seen by the Laplacian, not the stored
/// field values: boundary cells hold ordinary concentrations under
/// either policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryPolicy {
    /// Out-of-range neighbour resolves to the boundary cell itself.
    ///
    /// For a 5-point stencil this substitutes the centre value for the
    /// missing neighbour, which is the discrete zero-flux (Neumann)
    /// condition: no concentration diffuses across the wall.
    Fixed,
    /// Out-of-range neighbour wraps to the opposite side (torus).
    Periodic,
}

impl BoundaryPolicy {
    /// Select the policy implied by a `fixed_boundary` flag.
    pub fn from_fixed_flag(fixed: bool) -> Self {
        if fixed {
            BoundaryPolicy::Fixed
        } else {
            BoundaryPolicy::Periodic
        }
    }
}

/// Resolve a possibly out-of-range axis index to a cell index.
///
/// `i` may be -1 or `n` (a one-cell stencil offset past either edge);
/// `n` is the axis length and must be non-zero.
pub fn resolve_axis(i: i64, n: usize, policy: BoundaryPolicy) -> usize {
    debug_assert!(n > 0);
    match policy {
        BoundaryPolicy::Fixed => i.clamp(0, n as i64 - 1) as usize,
        BoundaryPolicy::Periodic => i.rem_euclid(n as i64) as usize,
    }
}
