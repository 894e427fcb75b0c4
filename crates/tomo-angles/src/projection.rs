//! Polarization projection labels.
//!
//! The six-projection table is indexed by [`Projection`] and the three-basis
//! table by [`BasisPair`]. Labels exist for documentation and lookup only;
//! the tables themselves are plain angle arrays.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::angle::WavePlateAngles;
use crate::table::{SIX_PROJECTION_ANGLES, THREE_BASIS_ANGLES};

/// A single-qubit polarization projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Projection {
    /// Horizontal.
    H,
    /// Vertical.
    V,
    /// Diagonal.
    D,
    /// Anti-diagonal.
    A,
    /// Right circular.
    R,
    /// Left circular.
    L,
}

impl Projection {
    /// All projections in table order.
    pub const ALL: [Projection; 6] = [
        Projection::H,
        Projection::V,
        Projection::D,
        Projection::A,
        Projection::R,
        Projection::L,
    ];

    /// Short label used in measurement logs.
    pub fn label(&self) -> &'static str {
        match self {
            Projection::H => "H",
            Projection::V => "V",
            Projection::D => "D",
            Projection::A => "A",
            Projection::R => "R",
            Projection::L => "L",
        }
    }

    /// Row index of this projection in the six-projection table.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Projection at a six-projection table row, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Wave-plate settings realizing this projection.
    pub fn angles(&self) -> WavePlateAngles {
        SIX_PROJECTION_ANGLES[self.index()]
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A measurement basis made of two orthogonal projections.
///
/// The three-basis scheme sets the plates once per basis and reads both
/// outcomes, so each row stands for a pair of projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasisPair {
    /// Rectilinear basis.
    HV,
    /// Diagonal basis.
    DA,
    /// Circular basis.
    RL,
}

impl BasisPair {
    /// All bases in table order.
    pub const ALL: [BasisPair; 3] = [BasisPair::HV, BasisPair::DA, BasisPair::RL];

    /// Short label used in measurement logs.
    pub fn label(&self) -> &'static str {
        match self {
            BasisPair::HV => "H/V",
            BasisPair::DA => "D/A",
            BasisPair::RL => "R/L",
        }
    }

    /// Row index of this basis in the three-basis table.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Basis at a three-basis table row, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Wave-plate settings for this basis.
    pub fn angles(&self) -> WavePlateAngles {
        THREE_BASIS_ANGLES[self.index()]
    }

    /// The two projections measured in this basis.
    pub fn projections(&self) -> (Projection, Projection) {
        match self {
            BasisPair::HV => (Projection::H, Projection::V),
            BasisPair::DA => (Projection::D, Projection::A),
            BasisPair::RL => (Projection::R, Projection::L),
        }
    }
}

impl fmt::Display for BasisPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_indices() {
        for (i, p) in Projection::ALL.iter().enumerate() {
            assert_eq!(p.index(), i);
            assert_eq!(Projection::from_index(i), Some(*p));
        }
        assert_eq!(Projection::from_index(6), None);
    }

    #[test]
    fn test_projection_labels() {
        let labels: Vec<String> = Projection::ALL.iter().map(|p| p.to_string()).collect();
        assert_eq!(labels, ["H", "V", "D", "A", "R", "L"]);
    }

    #[test]
    fn test_projection_angles() {
        assert_eq!(Projection::H.angles().as_pair(), (0.0, 0.0));
        assert_eq!(Projection::V.angles().as_pair(), (45.0, 0.0));
        assert_eq!(Projection::D.angles().as_pair(), (22.5, 0.0));
        assert_eq!(Projection::A.angles().as_pair(), (-22.5, 0.0));
        assert_eq!(Projection::R.angles().as_pair(), (0.0, 45.0));
        assert_eq!(Projection::L.angles().as_pair(), (0.0, -45.0));
    }

    #[test]
    fn test_basis_pair_labels() {
        assert_eq!(format!("{}", BasisPair::HV), "H/V");
        assert_eq!(format!("{}", BasisPair::DA), "D/A");
        assert_eq!(format!("{}", BasisPair::RL), "R/L");
        assert_eq!(BasisPair::from_index(3), None);
    }

    #[test]
    fn test_basis_pair_uses_first_projection_setting() {
        for basis in BasisPair::ALL {
            let (first, second) = basis.projections();
            assert_eq!(basis.angles(), first.angles());
            assert_ne!(basis.angles(), second.angles());
        }
    }
}
