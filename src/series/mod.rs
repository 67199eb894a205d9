//! Periodic-series theories of the solar-system bodies
//!
//! Each body with a theory is served by a static [`Theory`] value. Planets use
//! truncated VSOP87A series, Pluto and the Moon their own trigonometric
//! theories; the Sun is the origin of the heliocentric theories and is never
//! evaluated.
//!
//! The coefficient tables are `const` data, so evaluation is reentrant and may
//! run from several threads at once.

pub mod moon;
pub mod pluto;
pub mod vsop87;

use crate::constants::{DAYS_PER_MILLENNIUM, J2000};
use crate::planetlib::computation::ComputationErrorKind;
use crate::planetlib::Body;
use log::warn;
use nalgebra::Vector3;

/// One periodic term `(amplitude, phase, frequency)`, evaluated as
/// `amplitude * cos(phase + frequency * t)`
pub type Term = (f64, f64, f64);

/// Position and velocity produced by a theory, in its own frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TheoryState {
    /// Position in AU
    pub position: Vector3<f64>,
    /// Velocity in AU/day
    pub velocity: Vector3<f64>,
}

/// A theory giving cartesian coordinates of one body
pub trait Theory: Send + Sync {
    fn name(&self) -> &'static str;

    /// Julian days (TT) between which the theory was fitted
    fn valid_span(&self) -> (f64, f64);

    /// Best precision of the tabulated series, in arcseconds
    fn nominal_precision(&self) -> f64;

    /// Evaluates the theory at a TT Julian day. Velocities are only computed
    /// when asked for and are zero otherwise.
    fn compute(&self, jd_tt: f64, with_velocity: bool) -> TheoryState;
}

/// Output of [`evaluate`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub position: Vector3<f64>,
    pub velocity: Option<Vector3<f64>>,
    /// Known theory limitation met during this evaluation
    pub limitation: Option<ComputationErrorKind>,
}

/// Theory used for a body, `None` for the Sun
pub fn theory_for(body: Body) -> Option<&'static dyn Theory> {
    match body {
        Body::Sun => None,
        Body::Moon => Some(&moon::MOON),
        Body::Mercury => Some(&vsop87::MERCURY),
        Body::Venus => Some(&vsop87::VENUS),
        Body::Earth => Some(&vsop87::EARTH),
        Body::Mars => Some(&vsop87::MARS),
        Body::Jupiter => Some(&vsop87::JUPITER),
        Body::Saturn => Some(&vsop87::SATURN),
        Body::Uranus => Some(&vsop87::URANUS),
        Body::Neptune => Some(&vsop87::NEPTUNE),
        Body::Pluto => Some(&pluto::PLUTO),
    }
}

/// Evaluates the theory of `body` at `jd_tt`.
///
/// The tables are truncated once, offline: `precision` (arcsec, 0 for the
/// nominal precision) does not change which terms are summed. Asking for a
/// precision finer than the nominal one, or for a date outside the fitted
/// span, still returns the values and reports the limitation.
pub fn evaluate(body: Body, jd_tt: f64, precision: f64, with_velocity: bool) -> Evaluation {
    let theory = match theory_for(body) {
        Some(theory) => theory,
        None => {
            return Evaluation {
                position: Vector3::zeros(),
                velocity: with_velocity.then(Vector3::zeros),
                limitation: None,
            }
        }
    };

    let mut limitation = None;
    let (start, end) = theory.valid_span();
    if jd_tt < start || jd_tt > end {
        warn!(
            "{} evaluated at JD {} outside its valid span [{}, {}]",
            theory.name(),
            jd_tt,
            start,
            end
        );
        limitation = Some(ComputationErrorKind::OutsideValidSpan { start, end });
    } else if precision > 0.0 && precision < theory.nominal_precision() {
        warn!(
            "{} cannot reach {}\" (nominal {}\")",
            theory.name(),
            precision,
            theory.nominal_precision()
        );
        limitation = Some(ComputationErrorKind::PrecisionNotHandled {
            requested: precision,
            nominal: theory.nominal_precision(),
        });
    }

    let state = theory.compute(jd_tt, with_velocity);
    Evaluation {
        position: state.position,
        velocity: with_velocity.then_some(state.velocity),
        limitation,
    }
}

/// Valid span of a theory fitted over `years` on each side of J2000
pub(crate) fn span_around_j2000(years: f64) -> (f64, f64) {
    let days = years * DAYS_PER_MILLENNIUM / 1000.0;
    (J2000 - days, J2000 + days)
}

/// Value and time derivative of a polynomial `c[0] + c[1] t + c[2] t² + ...`
pub(crate) fn polynomial(t: f64, coefficients: &[f64]) -> (f64, f64) {
    let mut value = 0.0;
    let mut derivative = 0.0;
    for &c in coefficients.iter().rev() {
        derivative = derivative * t + value;
        value = value * t + c;
    }
    (value, derivative)
}

/// Cartesian position and velocity from spherical `(r, lon, lat)` and their
/// rates; angles in radians
pub(crate) fn spherical_state(
    r: f64,
    lon: f64,
    lat: f64,
    dr: f64,
    dlon: f64,
    dlat: f64,
) -> TheoryState {
    let (sl, cl) = lon.sin_cos();
    let (sb, cb) = lat.sin_cos();
    TheoryState {
        position: Vector3::new(r * cb * cl, r * cb * sl, r * sb),
        velocity: Vector3::new(
            dr * cb * cl - r * sb * dlat * cl - r * cb * sl * dlon,
            dr * cb * sl - r * sb * dlat * sl + r * cb * cl * dlon,
            dr * sb + r * cb * dlat,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sun_is_origin() {
        let eval = evaluate(Body::Sun, J2000, 1.0, true);
        assert_eq!(eval.position, Vector3::zeros());
        assert_eq!(eval.velocity, Some(Vector3::zeros()));
        assert!(eval.limitation.is_none());
    }

    #[test]
    fn test_velocity_absent_when_not_requested() {
        let eval = evaluate(Body::Mars, J2000, 0.0, false);
        assert!(eval.velocity.is_none());
        assert!(eval.position.norm() > 1.3);
    }

    #[test]
    fn test_outside_span_is_annotated_not_fatal() {
        let jd = J2000 + 5000.0 * 365.25;
        let eval = evaluate(Body::Saturn, jd, 0.0, false);
        assert!(eval.position.iter().all(|v| v.is_finite()));
        assert!(matches!(
            eval.limitation,
            Some(ComputationErrorKind::OutsideValidSpan { .. })
        ));
    }

    #[test]
    fn test_precision_finer_than_nominal_is_annotated() {
        let eval = evaluate(Body::Jupiter, J2000, 0.1, false);
        match eval.limitation {
            Some(ComputationErrorKind::PrecisionNotHandled { requested, nominal }) => {
                assert_eq!(requested, 0.1);
                assert_eq!(nominal, 2.0);
            }
            other => panic!("unexpected limitation {:?}", other),
        }
        assert!(evaluate(Body::Jupiter, J2000, 2.0, false).limitation.is_none());
        assert!(evaluate(Body::Jupiter, J2000, 0.0, false).limitation.is_none());
    }

    #[test]
    fn test_polynomial_and_derivative() {
        let (v, d) = polynomial(2.0, &[1.0, 3.0, 0.5, -1.0]);
        assert_relative_eq!(v, 1.0 + 6.0 + 2.0 - 8.0);
        assert_relative_eq!(d, 3.0 + 2.0 - 12.0);
    }

    #[test]
    fn test_every_theory_velocity_matches_finite_difference() {
        let h = 0.01;
        for body in Body::ALL {
            if let Some(theory) = theory_for(body) {
                let jd = 2448000.5;
                let mid = theory.compute(jd, true);
                let ahead = theory.compute(jd + h, false).position;
                let behind = theory.compute(jd - h, false).position;
                let numeric = (ahead - behind) / (2.0 * h);
                for i in 0..3 {
                    assert_relative_eq!(
                        mid.velocity[i],
                        numeric[i],
                        epsilon = 1e-8,
                        max_relative = 1e-5
                    );
                }
            }
        }
    }
}
