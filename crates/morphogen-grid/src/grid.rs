//! Double-buffered storage for the two concentration fields.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use morphogen_core::Species;

use crate::error::GridError;

/// Initial state written into a freshly allocated [`Grid`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SeedPolicy {
    /// Every cell of `u` and `v` set to the given values.
    ///
    /// Seeding with the homogeneous fixed point `(a, b/a)` produces an
    /// exact steady state of the discrete scheme.
    Uniform {
        /// Initial `u` concentration.
        u: f64,
        /// Initial `v` concentration.
        v: f64,
    },
    /// Uniform `u`, and `v` perturbed by deterministic Gaussian noise.
    ///
    /// Each `v` cell becomes `v + amplitude * N(0, 1)` drawn from a
    /// ChaCha8 RNG seeded with `seed`, so identical seeds reproduce
    /// identical initial states. The small asymmetry is what allows
    /// pattern-forming instabilities to break the homogeneous state.
    Perturbed {
        /// Homogeneous `u` concentration.
        u: f64,
        /// Mean `v` concentration.
        v: f64,
        /// Standard deviation of the `v` noise.
        amplitude: f64,
        /// RNG seed.
        seed: u64,
    },
}

/// Split-borrow view used by the integrator during one step.
///
/// The current fields are read-only while the scratch pair is written;
/// [`Grid::swap`] then publishes the scratch pair atomically, so no
/// reader ever observes a mixture of old and new values.
pub struct StepBuffers<'a> {
    /// Current `u` field (read-only).
    pub u: &'a [f64],
    /// Current `v` field (read-only).
    pub v: &'a [f64],
    /// Scratch buffer receiving the next `u` state.
    pub u_next: &'a mut [f64],
    /// Scratch buffer receiving the next `v` state.
    pub v_next: &'a mut [f64],
}

/// Dense square grid holding the `u` and `v` concentration fields.
///
/// Both fields are row-major `resolution * resolution` slices and always
/// share their shape. A same-shaped scratch pair exists for the whole
/// lifetime of the grid, so the step loop performs no allocation after
/// construction.
#[derive(Clone, Debug)]
pub struct Grid {
    resolution: usize,
    u: Vec<f64>,
    v: Vec<f64>,
    u_next: Vec<f64>,
    v_next: Vec<f64>,
}

impl Grid {
    /// Allocate a grid and write the seed state into the current fields.
    ///
    /// The scratch pair starts zeroed; it is fully overwritten before
    /// every swap.
    pub fn new(resolution: usize, policy: SeedPolicy) -> Result<Self, GridError> {
        if resolution == 0 {
            return Err(GridError::EmptyGrid);
        }
        let n = resolution * resolution;
        let (u, v) = match policy {
            SeedPolicy::Uniform { u, v } => (vec![u; n], vec![v; n]),
            SeedPolicy::Perturbed {
                u,
                v,
                amplitude,
                seed,
            } => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let v = (0..n)
                    .map(|_| v + amplitude * box_muller(&mut rng))
                    .collect();
                (vec![u; n], v)
            }
        };
        Ok(Self {
            resolution,
            u,
            v,
            u_next: vec![0.0; n],
            v_next: vec![0.0; n],
        })
    }

    /// Grid side length in cells.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Total cell count (`resolution^2`).
    pub fn cell_count(&self) -> usize {
        self.resolution * self.resolution
    }

    /// Grid spacing `h` for a unit-square domain.
    pub fn spacing(&self) -> f64 {
        1.0 / self.resolution as f64
    }

    /// Read-only view of one current field, row-major.
    pub fn field(&self, species: Species) -> &[f64] {
        match species {
            Species::U => &self.u,
            Species::V => &self.v,
        }
    }

    /// Bounds-checked read of one cell.
    pub fn get(&self, species: Species, x: usize, y: usize) -> Result<f64, GridError> {
        let i = self.checked_index(species, x, y)?;
        Ok(self.field(species)[i])
    }

    /// Bounds-checked write to one cell of the *current* state.
    ///
    /// Intended for seeding perturbations and for fault injection in
    /// tests; the step loop itself writes only through [`StepBuffers`].
    pub fn set(
        &mut self,
        species: Species,
        x: usize,
        y: usize,
        value: f64,
    ) -> Result<(), GridError> {
        let i = self.checked_index(species, x, y)?;
        match species {
            Species::U => self.u[i] = value,
            Species::V => self.v[i] = value,
        }
        Ok(())
    }

    /// Split borrows for one integration step: current fields read-only,
    /// scratch pair writable.
    pub fn step_buffers(&mut self) -> StepBuffers<'_> {
        StepBuffers {
            u: &self.u,
            v: &self.v,
            u_next: &mut self.u_next,
            v_next: &mut self.v_next,
        }
    }

    /// Publish the scratch pair as the new current state.
    ///
    /// Both fields change together; there is no intermediate state in
    /// which one species is new and the other old.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.u, &mut self.u_next);
        std::mem::swap(&mut self.v, &mut self.v_next);
    }

    /// Index of the first non-finite cell in either field, if any.
    ///
    /// Scans `u` first, then `v`; a hit signals numerical blow-up.
    pub fn first_non_finite(&self) -> Option<(Species, usize)> {
        for species in Species::ALL {
            if let Some(i) = self.field(species).iter().position(|c| !c.is_finite()) {
                return Some((species, i));
            }
        }
        None
    }

    fn checked_index(&self, species: Species, x: usize, y: usize) -> Result<usize, GridError> {
        if x >= self.resolution || y >= self.resolution {
            return Err(GridError::OutOfBounds {
                species,
                x,
                y,
                resolution: self.resolution,
            });
        }
        Ok(y * self.resolution + x)
    }
}

/// Gaussian sample via the Box-Muller transform.
/// Avoids the `rand_distr` dependency.
fn box_muller(rng: &mut ChaCha8Rng) -> f64 {
    let u1: f64 = rng.random::<f64>().max(1e-300); // avoid ln(0)
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_resolution_is_rejected() {
        assert_eq!(
            Grid::new(0, SeedPolicy::Uniform { u: 0.0, v: 0.0 }).unwrap_err(),
            GridError::EmptyGrid
        );
    }

    #[test]
    fn uniform_seed_fills_both_fields() {
        let grid = Grid::new(4, SeedPolicy::Uniform { u: 1.0, v: 3.0 }).unwrap();
        assert_eq!(grid.cell_count(), 16);
        assert!(grid.field(Species::U).iter().all(|&c| c == 1.0));
        assert!(grid.field(Species::V).iter().all(|&c| c == 3.0));
    }

    #[test]
    fn perturbed_seed_is_deterministic() {
        let policy = SeedPolicy::Perturbed {
            u: 1.0,
            v: 3.0,
            amplitude: 0.1,
            seed: 7,
        };
        let a = Grid::new(8, policy).unwrap();
        let b = Grid::new(8, policy).unwrap();
        assert_eq!(a.field(Species::V), b.field(Species::V));

        let c = Grid::new(
            8,
            SeedPolicy::Perturbed {
                u: 1.0,
                v: 3.0,
                amplitude: 0.1,
                seed: 8,
            },
        )
        .unwrap();
        assert_ne!(a.field(Species::V), c.field(Species::V));
    }

    #[test]
    fn perturbed_seed_leaves_u_uniform() {
        let grid = Grid::new(
            8,
            SeedPolicy::Perturbed {
                u: 2.0,
                v: 1.5,
                amplitude: 0.1,
                seed: 1,
            },
        )
        .unwrap();
        assert!(grid.field(Species::U).iter().all(|&c| c == 2.0));
        // Noise actually perturbs v.
        assert!(grid.field(Species::V).iter().any(|&c| c != 1.5));
    }

    #[test]
    fn perturbed_mean_stays_near_target() {
        let grid = Grid::new(
            32,
            SeedPolicy::Perturbed {
                u: 1.0,
                v: 3.0,
                amplitude: 0.1,
                seed: 42,
            },
        )
        .unwrap();
        let mean: f64 =
            grid.field(Species::V).iter().sum::<f64>() / grid.cell_count() as f64;
        assert!((mean - 3.0).abs() < 0.05, "mean drifted: {mean}");
    }

    #[test]
    fn get_set_round_trip() {
        let mut grid = Grid::new(4, SeedPolicy::Uniform { u: 0.0, v: 0.0 }).unwrap();
        grid.set(Species::U, 2, 3, 7.5).unwrap();
        assert_eq!(grid.get(Species::U, 2, 3).unwrap(), 7.5);
        assert_eq!(grid.get(Species::V, 2, 3).unwrap(), 0.0);
    }

    #[test]
    fn out_of_bounds_access_fails() {
        let mut grid = Grid::new(4, SeedPolicy::Uniform { u: 0.0, v: 0.0 }).unwrap();
        assert!(matches!(
            grid.get(Species::U, 4, 0),
            Err(GridError::OutOfBounds { x: 4, .. })
        ));
        assert!(matches!(
            grid.set(Species::V, 0, 9, 1.0),
            Err(GridError::OutOfBounds { y: 9, .. })
        ));
    }

    #[test]
    fn swap_publishes_scratch_atomically() {
        let mut grid = Grid::new(2, SeedPolicy::Uniform { u: 1.0, v: 2.0 }).unwrap();
        {
            let bufs = grid.step_buffers();
            bufs.u_next.fill(10.0);
            bufs.v_next.fill(20.0);
            // Current fields still hold the old state mid-step.
            assert!(bufs.u.iter().all(|&c| c == 1.0));
        }
        grid.swap();
        assert!(grid.field(Species::U).iter().all(|&c| c == 10.0));
        assert!(grid.field(Species::V).iter().all(|&c| c == 20.0));
    }

    #[test]
    fn first_non_finite_reports_species_and_cell() {
        let mut grid = Grid::new(3, SeedPolicy::Uniform { u: 1.0, v: 1.0 }).unwrap();
        assert_eq!(grid.first_non_finite(), None);
        grid.set(Species::V, 1, 2, f64::NAN).unwrap();
        assert_eq!(grid.first_non_finite(), Some((Species::V, 2 * 3 + 1)));
    }
}
