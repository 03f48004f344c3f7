//! Forward-Euler integrator for the reaction-diffusion system.

use morphogen_core::{ParamError, Params, Species, StepId};
use morphogen_grid::stencil::laplacian_into;
use morphogen_grid::{BoundaryPolicy, Grid};

use crate::error::StepError;
use crate::reaction::brusselator;

/// Advances a [`Grid`] by explicit Euler steps.
///
/// Each step computes, for every cell:
///
/// ```text
/// u' = u + dt * (d0 * lap(u) + a - (b + 1) * u + u^2 * v)
/// v' = v + dt * (d1 * lap(v) + b * u - u^2 * v)
/// ```
///
/// into the grid's scratch pair, verifies that every output is finite,
/// and only then swaps the scratch pair in. A failed step therefore
/// leaves the published fields at the last valid state.
///
/// The integrator carries no state besides its parameters and two
/// reusable Laplacian buffers: each step is a pure transition from
/// `Grid(t)` to `Grid(t + dt)`.
#[derive(Debug)]
pub struct Integrator {
    params: Params,
    boundary: BoundaryPolicy,
    lap_u: Vec<f64>,
    lap_v: Vec<f64>,
}

impl Integrator {
    /// Validate parameters and the diffusion stability bound, then
    /// allocate the step buffers.
    ///
    /// The explicit scheme requires `dt <= h^2 / (4 * max(d0, d1))`;
    /// a timestep above that bound is rejected here rather than left to
    /// blow up millions of steps later.
    pub fn new(params: Params, boundary: BoundaryPolicy) -> Result<Self, ParamError> {
        params.validate()?;
        if let Some(limit) = params.max_stable_dt() {
            if params.dt > limit {
                return Err(ParamError::DtUnstable {
                    dt: params.dt,
                    limit,
                });
            }
        }
        let n = params.resolution * params.resolution;
        Ok(Self {
            params,
            boundary,
            lap_u: vec![0.0; n],
            lap_v: vec![0.0; n],
        })
    }

    /// The per-run parameters this integrator was built with.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The boundary policy applied by the stencil.
    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    /// Advance `grid` by one timestep.
    ///
    /// `step` identifies the step being performed, for diagnostics.
    /// On [`StepError::NumericalBlowup`] the grid still holds the state
    /// from before this step.
    ///
    /// # Panics
    ///
    /// Panics if `grid` was not allocated at this integrator's
    /// resolution; runs construct both from the same [`Params`].
    pub fn step(&mut self, grid: &mut Grid, step: StepId) -> Result<(), StepError> {
        let p = &self.params;
        assert_eq!(
            grid.resolution(),
            p.resolution,
            "grid resolution does not match integrator parameters"
        );
        let h = grid.spacing();
        let n = grid.cell_count();

        let bufs = grid.step_buffers();
        laplacian_into(bufs.u, p.resolution, self.boundary, h, &mut self.lap_u);
        laplacian_into(bufs.v, p.resolution, self.boundary, h, &mut self.lap_v);

        for i in 0..n {
            let u = bufs.u[i];
            let v = bufs.v[i];
            let (ru, rv) = brusselator(u, v, p.a, p.b);
            bufs.u_next[i] = u + p.dt * (p.d0 * self.lap_u[i] + ru);
            bufs.v_next[i] = v + p.dt * (p.d1 * self.lap_v[i] + rv);
        }

        for species in Species::ALL {
            let next = match species {
                Species::U => &*bufs.u_next,
                Species::V => &*bufs.v_next,
            };
            if let Some(cell) = next.iter().position(|c| !c.is_finite()) {
                return Err(StepError::NumericalBlowup {
                    species,
                    cell,
                    step,
                });
            }
        }

        grid.swap();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morphogen_grid::SeedPolicy;

    fn params(a: f64, b: f64, d0: f64, d1: f64, dt: f64, resolution: usize) -> Params {
        Params {
            a,
            b,
            d0,
            d1,
            dt,
            t_max: 1.0,
            resolution,
        }
    }

    #[test]
    fn unstable_dt_is_rejected_at_construction() {
        // h = 0.25, limit = h^2 / (4 * 1) = 0.015625.
        let p = params(1.0, 3.0, 1.0, 0.0, 0.02, 4);
        let err = Integrator::new(p, BoundaryPolicy::Fixed).unwrap_err();
        assert!(matches!(err, ParamError::DtUnstable { .. }));
    }

    #[test]
    fn pure_kinetics_at_the_fixed_point_is_stationary() {
        // resolution = 4, dt = 0.1, a = 1, b = 3, no diffusion, seeded
        // exactly at (u*, v*) = (1, 3): two steps must leave every cell
        // at (1, 3) exactly, not just approximately.
        let p = params(1.0, 3.0, 0.0, 0.0, 0.1, 4);
        let mut integrator = Integrator::new(p, BoundaryPolicy::Fixed).unwrap();
        let mut grid = Grid::new(4, SeedPolicy::Uniform { u: 1.0, v: 3.0 }).unwrap();

        integrator.step(&mut grid, StepId(1)).unwrap();
        integrator.step(&mut grid, StepId(2)).unwrap();

        assert!(grid.field(Species::U).iter().all(|&c| c == 1.0));
        assert!(grid.field(Species::V).iter().all(|&c| c == 3.0));
    }

    #[test]
    fn uniform_fixed_point_stationary_with_diffusion() {
        // With diffusion on, a spatially uniform fixed point stays a
        // fixed point: the Laplacian of a constant field is zero.
        let p = params(2.0, 1.0, 1.0, 0.5, 1e-3, 8);
        let mut integrator = Integrator::new(p, BoundaryPolicy::Periodic).unwrap();
        let mut grid = Grid::new(8, SeedPolicy::Uniform { u: 2.0, v: 0.5 }).unwrap();

        for s in 1..=10 {
            integrator.step(&mut grid, StepId(s)).unwrap();
        }
        for &u in grid.field(Species::U) {
            assert!((u - 2.0).abs() < 1e-12);
        }
        for &v in grid.field(Species::V) {
            assert!((v - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn single_perturbation_diffuses_to_von_neumann_neighbours_only() {
        // a = b = 0 kills the reaction term away from the spike, so
        // after one step only the perturbed cell and its four
        // neighbours may differ from zero.
        let n = 5;
        let p = params(0.0, 0.0, 1.0, 0.0, 0.005, n);
        let mut integrator = Integrator::new(p, BoundaryPolicy::Fixed).unwrap();
        let mut grid = Grid::new(n, SeedPolicy::Uniform { u: 0.0, v: 0.0 }).unwrap();
        grid.set(Species::U, 2, 2, 1.0).unwrap();

        integrator.step(&mut grid, StepId(1)).unwrap();

        let touched = [(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)];
        for y in 0..n {
            for x in 0..n {
                let u = grid.get(Species::U, x, y).unwrap();
                if touched.contains(&(x, y)) {
                    if (x, y) == (2, 2) {
                        assert!(u < 1.0, "centre should lose mass: {u}");
                    } else {
                        assert!(u > 0.0, "neighbour ({x}, {y}) should gain: {u}");
                    }
                } else {
                    assert_eq!(u, 0.0, "cell ({x}, {y}) should be untouched");
                }
                // d1 = 0 and dv = b*u - u^2*v = 0 everywhere.
                assert_eq!(grid.get(Species::V, x, y).unwrap(), 0.0);
            }
        }
    }

    #[test]
    fn injected_nan_fails_the_next_step() {
        let p = params(1.0, 3.0, 0.0, 0.0, 0.1, 4);
        let mut integrator = Integrator::new(p, BoundaryPolicy::Fixed).unwrap();
        let mut grid = Grid::new(4, SeedPolicy::Uniform { u: 1.0, v: 3.0 }).unwrap();
        grid.set(Species::U, 1, 1, f64::NAN).unwrap();

        let err = integrator.step(&mut grid, StepId(1)).unwrap_err();
        assert!(matches!(
            err,
            StepError::NumericalBlowup {
                species: Species::U,
                step: StepId(1),
                ..
            }
        ));
    }

    #[test]
    fn failed_step_leaves_published_state_untouched() {
        let p = params(1.0, 3.0, 0.0, 0.0, 0.1, 4);
        let mut integrator = Integrator::new(p, BoundaryPolicy::Fixed).unwrap();
        let mut grid = Grid::new(4, SeedPolicy::Uniform { u: 1.0, v: 3.0 }).unwrap();
        grid.set(Species::V, 0, 0, f64::INFINITY).unwrap();

        assert!(integrator.step(&mut grid, StepId(1)).is_err());
        // The poisoned input is still the published state: no partial
        // swap happened.
        assert_eq!(grid.get(Species::U, 2, 2).unwrap(), 1.0);
        assert_eq!(grid.get(Species::V, 0, 0).unwrap(), f64::INFINITY);
    }

    #[test]
    #[should_panic(expected = "resolution")]
    fn mismatched_grid_panics() {
        let p = params(1.0, 3.0, 0.0, 0.0, 0.1, 4);
        let mut integrator = Integrator::new(p, BoundaryPolicy::Fixed).unwrap();
        let mut grid = Grid::new(5, SeedPolicy::Uniform { u: 1.0, v: 3.0 }).unwrap();
        let _ = integrator.step(&mut grid, StepId(1));
    }
}
