//! Engines producing finalized body states
//!
//! The orchestrator depends only on [`EphemerisEngine`]. [`SeriesEngine`]
//! runs the built-in theories and frame pipeline; other implementations (for
//! example a reader of numerically integrated ephemerides) can be attached to
//! an [`AstroConfig`](super::AstroConfig).

use super::{run_series_pipeline, CoordinateRequest};
use crate::framelib::{CoordinateExpression, Frame};
use crate::planetlib::{Body, BodyState};
use crate::units::Unit;
use crate::Result;

/// Everything an engine needs to compute one body at one instant
#[derive(Debug, Clone, PartialEq)]
pub struct BodyRequest {
    /// Instant, TT Julian day
    pub jd_tt: f64,
    pub body: Body,
    pub frame: Frame,
    pub expression: CoordinateExpression,
    /// Arcseconds
    pub precision: f64,
    pub velocities: bool,
    pub position_units: [Unit; 3],
    pub velocity_units: [Unit; 3],
}

impl BodyRequest {
    pub(crate) fn coordinate_request(&self) -> CoordinateRequest {
        let mut units = self.position_units.to_vec();
        units.extend_from_slice(&self.velocity_units);
        CoordinateRequest {
            frame: self.frame,
            expression: self.expression,
            precision: self.precision,
            velocities: self.velocities,
            units,
        }
    }
}

/// Computes one body in the requested frame, expression and units
pub trait EphemerisEngine: Send + Sync {
    fn name(&self) -> &str;

    fn compute_body(&self, request: &BodyRequest) -> Result<BodyState>;
}

/// Built-in engine: periodic-series theories and the frame pipeline
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesEngine;

impl EphemerisEngine for SeriesEngine {
    fn name(&self) -> &str {
        "series"
    }

    fn compute_body(&self, request: &BodyRequest) -> Result<BodyState> {
        let coordinate_request = request.coordinate_request();
        let (position_units, velocity_units) = coordinate_request.validate()?;
        let (mut states, _) = run_series_pipeline(
            request.jd_tt,
            &[request.body],
            &coordinate_request,
            position_units,
            velocity_units,
        )?;
        states.pop().ok_or_else(|| {
            crate::SolarfieldError::computation(format!(
                "series pipeline returned no state for {}",
                request.body
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::J2000;
    use approx::assert_relative_eq;

    #[test]
    fn test_series_engine_single_body() {
        let request = BodyRequest {
            jd_tt: J2000,
            body: Body::Venus,
            frame: Frame::Ecliptic,
            expression: CoordinateExpression::Spherical,
            precision: 0.0,
            velocities: false,
            position_units: [Unit::Au, Unit::Deg, Unit::Deg],
            velocity_units: [Unit::Unspecified; 3],
        };
        let state = SeriesEngine.compute_body(&request).unwrap();
        assert_eq!(state.body, Body::Venus);
        assert_eq!(state.frame, Some(Frame::Ecliptic));
        assert_relative_eq!(state.coords[0], 1.1376334506, epsilon = 1e-8);
        assert_relative_eq!(state.coords[1], 241.5652998248, epsilon = 1e-7);
        assert!(state.coords[3].is_nan());
    }
}
