//! Field statistics for blow-up diagnostics.

use morphogen_core::Species;
use morphogen_grid::Grid;

/// Summary statistics over one concentration field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeciesStats {
    /// Smallest cell value.
    pub min: f64,
    /// Largest cell value.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl SpeciesStats {
    fn of(field: &[f64]) -> Self {
        let n = field.len() as f64;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &c in field {
            min = min.min(c);
            max = max.max(c);
            sum += c;
        }
        let mean = sum / n;
        let var = field.iter().map(|&c| (c - mean) * (c - mean)).sum::<f64>() / n;
        Self {
            min,
            max,
            mean,
            std_dev: var.sqrt(),
        }
    }
}

/// Statistics for both fields at the last valid step.
///
/// Attached to a failed run's report so the operator can see how far
/// the state had drifted when the blow-up hit, mirroring the min/max/
/// mean/std diagnostics the batch log prints on failure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldStats {
    /// Statistics for the `u` field.
    pub u: SpeciesStats,
    /// Statistics for the `v` field.
    pub v: SpeciesStats,
}

impl FieldStats {
    /// Compute statistics over the grid's published state.
    pub fn of(grid: &Grid) -> Self {
        Self {
            u: SpeciesStats::of(grid.field(Species::U)),
            v: SpeciesStats::of(grid.field(Species::V)),
        }
    }
}
