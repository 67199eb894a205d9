//! Solar-system bodies and their computed states

pub mod computation;
pub mod state;

pub use computation::{ComputationError, ComputationErrorKind};
pub use state::BodyState;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Enum representing the bodies the ephemeris can compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// All bodies, in code order
    pub const ALL: [Body; 11] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// Stable code, 0 (Sun) to 10 (Pluto)
    pub fn code(&self) -> i32 {
        *self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Body::ALL.get(i).copied())
    }

    /// Get the body's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }

    /// Case-insensitive lookup by name
    pub fn from_name(name: &str) -> Option<Self> {
        Body::ALL
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Body::Sun.code(), 0);
        assert_eq!(Body::Moon.code(), 1);
        assert_eq!(Body::Earth.code(), 4);
        assert_eq!(Body::Pluto.code(), 10);
        for body in Body::ALL {
            assert_eq!(Body::from_code(body.code()), Some(body));
        }
        assert_eq!(Body::from_code(11), None);
        assert_eq!(Body::from_code(-1), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(Body::from_name("jupiter"), Some(Body::Jupiter));
        assert_eq!(Body::from_name(" Moon "), Some(Body::Moon));
        assert_eq!(Body::from_name("Vulcan"), None);
        assert_eq!(Body::Neptune.to_string(), "Neptune");
    }
}
