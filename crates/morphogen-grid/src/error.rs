//! Grid error types.

use std::error::Error;
use std::fmt;

use morphogen_core::Species;

/// Errors from grid construction and cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Requested resolution is zero.
    EmptyGrid,
    /// A cell coordinate is outside `0..resolution` on either axis.
    ///
    /// This is a programming error in the caller, surfaced as a value
    /// rather than a panic so batch drivers can report it.
    OutOfBounds {
        /// The field being accessed.
        species: Species,
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
        /// Grid side length.
        resolution: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid resolution must be at least 1"),
            Self::OutOfBounds {
                species,
                x,
                y,
                resolution,
            } => write!(
                f,
                "cell ({x}, {y}) of field {species} is outside the {resolution}x{resolution} grid"
            ),
        }
    }
}

impl Error for GridError {}
