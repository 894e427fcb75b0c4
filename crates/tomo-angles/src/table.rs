//! Wave-plate angle tables.
//!
//! Each row is `(HWP, QWP)` in degrees. Row order is part of the contract:
//! downstream code maps row `i` to a physical projection, so the rows are
//! never sorted or deduplicated.
//!
//! | Row | Six-projection | Three-basis |
//! |-----|----------------|-------------|
//! | 0   | H: (0, 0)      | H/V: (0, 0) |
//! | 1   | V: (45, 0)     | D/A: (22.5, 0) |
//! | 2   | D: (22.5, 0)   | R/L: (0, 45) |
//! | 3   | A: (-22.5, 0)  | |
//! | 4   | R: (0, 45)     | |
//! | 5   | L: (0, -45)    | |

use tracing::debug;

use crate::angle::WavePlateAngles;
use crate::error::AngleResult;
use crate::scheme::Scheme;

/// Wave-plate settings for the six-projection scheme (H, V, D, A, R, L).
pub const SIX_PROJECTION_ANGLES: [WavePlateAngles; 6] = [
    WavePlateAngles::new(0.0, 0.0),
    WavePlateAngles::new(45.0, 0.0),
    WavePlateAngles::new(22.5, 0.0),
    WavePlateAngles::new(-22.5, 0.0),
    WavePlateAngles::new(0.0, 45.0),
    WavePlateAngles::new(0.0, -45.0),
];

/// Wave-plate settings for the three-basis scheme (H/V, D/A, R/L).
pub const THREE_BASIS_ANGLES: [WavePlateAngles; 3] = [
    WavePlateAngles::new(0.0, 0.0),
    WavePlateAngles::new(22.5, 0.0),
    WavePlateAngles::new(0.0, 45.0),
];

/// Read-only view of one scheme's angle table.
///
/// The rows live in static memory, so the handle is `Copy` and can be
/// shared across threads freely. Use [`AngleTable::to_vec`] for an owned
/// copy that may be modified without affecting later reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleTable {
    scheme: Scheme,
    angles: &'static [WavePlateAngles],
}

impl AngleTable {
    /// The table for a scheme.
    pub fn for_scheme(scheme: Scheme) -> Self {
        let angles: &'static [WavePlateAngles] = match scheme {
            Scheme::SixProjection => &SIX_PROJECTION_ANGLES,
            Scheme::ThreeBasis => &THREE_BASIS_ANGLES,
        };
        Self { scheme, angles }
    }

    /// The scheme this table realizes.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// True if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// The row at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<WavePlateAngles> {
        self.angles.get(index).copied()
    }

    /// All rows, in order.
    pub fn as_slice(&self) -> &'static [WavePlateAngles] {
        self.angles
    }

    /// Iterate over the rows in order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'static, WavePlateAngles>> {
        self.angles.iter().copied()
    }

    /// Row labels in table order.
    pub fn labels(&self) -> &'static [&'static str] {
        self.scheme.labels()
    }

    /// Iterate over `(label, angles)` rows in order.
    pub fn labelled(self) -> impl Iterator<Item = (&'static str, WavePlateAngles)> {
        self.labels().iter().copied().zip(self.iter())
    }

    /// Owned copy of the rows.
    pub fn to_vec(&self) -> Vec<WavePlateAngles> {
        self.angles.to_vec()
    }

    /// The rows as two-column numeric rows `[hwp, qwp]` in degrees.
    pub fn to_rows(&self) -> Vec<[f64; 2]> {
        self.iter().map(|a| a.as_row()).collect()
    }

    /// The rows as `(hwp, qwp)` pairs in radians.
    pub fn to_radians(&self) -> Vec<(f64, f64)> {
        self.iter().map(|a| a.to_radians()).collect()
    }
}

impl Default for AngleTable {
    fn default() -> Self {
        get_table()
    }
}

impl IntoIterator for AngleTable {
    type Item = WavePlateAngles;
    type IntoIter = std::iter::Copied<std::slice::Iter<'static, WavePlateAngles>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &AngleTable {
    type Item = WavePlateAngles;
    type IntoIter = std::iter::Copied<std::slice::Iter<'static, WavePlateAngles>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The active angle table: the six-projection scheme.
pub fn get_table() -> AngleTable {
    AngleTable::for_scheme(Scheme::SixProjection)
}

/// The angle table for a scheme.
pub fn get_table_for(scheme: Scheme) -> AngleTable {
    AngleTable::for_scheme(scheme)
}

/// The angle table for a scheme identifier such as `"three-basis"`.
///
/// Fails with [`AngleError::InvalidScheme`](crate::AngleError::InvalidScheme)
/// for unknown identifiers.
pub fn get_table_by_name(name: &str) -> AngleResult<AngleTable> {
    let scheme: Scheme = name.parse()?;
    debug!("Resolved projection scheme '{}' -> {}", name, scheme);
    Ok(AngleTable::for_scheme(scheme))
}
