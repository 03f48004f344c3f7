//! Integrator error types.

use std::error::Error;
use std::fmt;

use morphogen_core::{Species, StepId};

/// Errors from [`Integrator::step`](crate::Integrator::step).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// A field cell became NaN or infinite during the step.
    ///
    /// The grid's published state is left at the last valid step; the
    /// run controller decides whether to abort the mode (the default)
    /// or do something else with the partial result.
    NumericalBlowup {
        /// The field containing the non-finite value.
        species: Species,
        /// Row-major index of the first offending cell.
        cell: usize,
        /// The step at which the blow-up was detected.
        step: StepId,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumericalBlowup {
                species,
                cell,
                step,
            } => write!(
                f,
                "numerical blow-up in field {species} at cell {cell} ({step})"
            ),
        }
    }
}

impl Error for StepError {}
