//! The two chemical species of the Brusselator system.

use std::fmt;

/// Identifies one of the two concentration fields.
///
/// The Brusselator is a fixed two-species system, so a closed enum
/// replaces a dynamic field registry: every storage and render path
/// indexes by `Species`, and exhaustive matches catch missing handling
/// at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Species {
    /// The activator field `u` (compound X).
    U,
    /// The inhibitor field `v` (compound Y).
    V,
}

impl Species {
    /// Both species, in storage order.
    pub const ALL: [Species; 2] = [Species::U, Species::V];

    /// Lowercase field label used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            Species::U => "u",
            Species::V => "v",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
