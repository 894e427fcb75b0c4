//! A single pair of wave-plate settings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rotation settings for the half-wave plate and quarter-wave plate of one
/// measurement projection.
///
/// Both angles are in degrees. Nothing in this crate converts them
/// implicitly; use [`WavePlateAngles::to_radians`] when a consumer needs
/// radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WavePlateAngles {
    /// Half-wave plate angle in degrees.
    pub hwp: f64,
    /// Quarter-wave plate angle in degrees.
    pub qwp: f64,
}

impl WavePlateAngles {
    /// Create a new angle pair from degrees.
    pub const fn new(hwp: f64, qwp: f64) -> Self {
        Self { hwp, qwp }
    }

    /// The pair as `(hwp, qwp)` in degrees.
    pub const fn as_pair(&self) -> (f64, f64) {
        (self.hwp, self.qwp)
    }

    /// The pair as a two-column row `[hwp, qwp]` in degrees.
    pub const fn as_row(&self) -> [f64; 2] {
        [self.hwp, self.qwp]
    }

    /// The pair as `(hwp, qwp)` in radians.
    pub fn to_radians(&self) -> (f64, f64) {
        (self.hwp.to_radians(), self.qwp.to_radians())
    }
}

impl From<(f64, f64)> for WavePlateAngles {
    fn from((hwp, qwp): (f64, f64)) -> Self {
        Self::new(hwp, qwp)
    }
}

impl From<WavePlateAngles> for (f64, f64) {
    fn from(angles: WavePlateAngles) -> Self {
        angles.as_pair()
    }
}

impl fmt::Display for WavePlateAngles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HWP {}°, QWP {}°", self.hwp, self.qwp)
    }
}
