//! Solarfield: solar-system ephemerides computed from periodic-series theories
//!
//! This crate evaluates VSOP87-style planetary series (plus dedicated Pluto and
//! Moon theories), corrects for light time, and carries the results through
//! heliocentric, equatorial and ecliptic reference frames, time scales and
//! unit systems.
//!
//! ```no_run
//! use solarfield::context::{AstroConfig, AstroContext, CoordinateRequest};
//! use solarfield::framelib::{CoordinateExpression, Frame};
//! use solarfield::planetlib::Body;
//! use solarfield::time::TimeScale;
//! use solarfield::units::Unit;
//!
//! let mut ctx = AstroContext::new(
//!     2451545.0,
//!     TimeScale::TtTdb,
//!     &[Body::Mercury, Body::Venus],
//!     AstroConfig::default(),
//! )?;
//! ctx.calc_body_coords(&CoordinateRequest {
//!     frame: Frame::Ecliptic,
//!     expression: CoordinateExpression::Spherical,
//!     precision: 1.0,
//!     velocities: false,
//!     units: vec![Unit::Au, Unit::Deg, Unit::Deg],
//! })?;
//! println!("{:?}", ctx.bodies()[0].position());
//! # Ok::<(), solarfield::SolarfieldError>(())
//! ```

use thiserror::Error;

pub mod constants;
pub mod context;
pub mod ephemeris;
pub mod framelib;
pub mod planetlib;
pub mod precession;
pub mod series;
pub mod time;
pub mod units;

// Re-export commonly used types
pub use context::{AstroConfig, AstroContext, CoordinateRequest};
pub use ephemeris::{compute_ephemeris, compute_one_instant, Ephemeris, EphemerisRequest};
pub use framelib::{Coord, CoordinateExpression, Frame};
pub use planetlib::{Body, BodyState};
pub use time::TimeScale;
pub use units::Unit;

/// Main error type for the solarfield library
#[derive(Debug, Error)]
pub enum SolarfieldError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unit type mismatch: {0}")]
    UnitMismatch(String),

    #[error("Computation failure: {message}")]
    ComputationFailure {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl SolarfieldError {
    /// Computation failure carrying only a message
    pub fn computation(message: impl Into<String>) -> Self {
        SolarfieldError::ComputationFailure {
            message: message.into(),
            source: None,
        }
    }

    /// Computation failure wrapping a lower-level cause
    pub fn computation_caused_by<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        SolarfieldError::ComputationFailure {
            message: message.into(),
            source: Some(Box::new(cause)),
        }
    }
}

/// Result type for solarfield operations
pub type Result<T> = std::result::Result<T, SolarfieldError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_computation_failure_keeps_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = SolarfieldError::computation_caused_by("light time", io);
        assert_eq!(err.to_string(), "Computation failure: light time");
        let source = err.source().expect("cause should be kept");
        assert_eq!(source.to_string(), "disk on fire");

        let bare = SolarfieldError::computation("no cause");
        assert!(bare.source().is_none());
    }

    #[test]
    fn test_config_parse_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: SolarfieldError = parse.unwrap_err().into();
        assert!(matches!(err, SolarfieldError::ConfigParse(_)));
    }
}
