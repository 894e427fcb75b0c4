//! Projection scheme selection.
//!
//! The six-projection scheme is the active one. The three-basis scheme is
//! the documented alternative; exposing it through a selector is an
//! extension rather than a change to the default table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AngleError;

/// Which wave-plate table to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Scheme {
    /// Six projections: H, V, D, A, R, L.
    #[default]
    SixProjection,
    /// Three bases: H/V, D/A, R/L.
    ThreeBasis,
}

impl Scheme {
    /// All schemes.
    pub const ALL: [Scheme; 2] = [Scheme::SixProjection, Scheme::ThreeBasis];

    /// Canonical identifier, accepted by [`Scheme::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::SixProjection => "six-projection",
            Scheme::ThreeBasis => "three-basis",
        }
    }

    /// Number of rows in this scheme's table.
    pub fn row_count(&self) -> usize {
        self.labels().len()
    }

    /// Row labels in table order.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            Scheme::SixProjection => &["H", "V", "D", "A", "R", "L"],
            Scheme::ThreeBasis => &["H/V", "D/A", "R/L"],
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = AngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "six-projection" | "6" => Ok(Scheme::SixProjection),
            "three-basis" | "3" => Ok(Scheme::ThreeBasis),
            _ => Err(AngleError::InvalidScheme { name: s.to_string() }),
        }
    }
}

impl TryFrom<String> for Scheme {
    type Error = AngleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Scheme> for String {
    fn from(scheme: Scheme) -> Self {
        scheme.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_default() {
        assert_eq!(Scheme::default(), Scheme::SixProjection);
    }

    #[test]
    fn test_scheme_parse() {
        assert_eq!("six-projection".parse::<Scheme>().unwrap(), Scheme::SixProjection);
        assert_eq!("Three_Basis".parse::<Scheme>().unwrap(), Scheme::ThreeBasis);
        assert_eq!("  3 ".parse::<Scheme>().unwrap(), Scheme::ThreeBasis);
        assert_eq!("6".parse::<Scheme>().unwrap(), Scheme::SixProjection);
    }

    #[test]
    fn test_scheme_parse_unknown() {
        let err = "four-basis".parse::<Scheme>().unwrap_err();
        match &err {
            AngleError::InvalidScheme { name } => assert_eq!(name, "four-basis"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("four-basis"));
    }

    #[test]
    fn test_scheme_lengths() {
        assert_eq!(Scheme::SixProjection.row_count(), 6);
        assert_eq!(Scheme::ThreeBasis.row_count(), 3);
    }

    #[test]
    fn test_scheme_serialization() {
        let json = serde_json::to_string(&Scheme::ThreeBasis).unwrap();
        assert_eq!(json, r#""three-basis""#);

        let back: Scheme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Scheme::ThreeBasis);

        assert!(serde_json::from_str::<Scheme>(r#""four-basis""#).is_err());
    }
}
