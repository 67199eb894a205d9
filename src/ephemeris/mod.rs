//! Batch ephemerides: many bodies over many instants
//!
//! [`compute_ephemeris`] runs one [`AstroContext`] per instant and gathers the
//! requested coordinates in a `[instant][body][coordinate]` grid. Instants are
//! independent of one another: a failed instant is logged, filled with NaN and
//! recorded, and the batch goes on.
//!
//! [`compute_one_instant`] is the reentrant unit of work. It shares nothing
//! mutable, so callers may spread instants over threads.

use crate::context::{AstroConfig, AstroContext, CoordinateRequest};
use crate::framelib::{contains_velocity, Coord, CoordinateExpression, Frame};
use crate::planetlib::{Body, BodyState, ComputationError};
use crate::time::TimeScale;
use crate::units::Unit;
use crate::{Result, SolarfieldError};
use log::{error, info};
use ndarray::Array3;
use std::fmt::Write;

/// Parameters of a batch computation
#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisRequest {
    pub bodies: Vec<Body>,
    /// Julian days, in `time_scale`
    pub instants: Vec<f64>,
    pub time_scale: TimeScale,
    /// Coordinates to tabulate, in output order
    pub coords: Vec<Coord>,
    /// One unit per entry of `coords`
    pub units: Vec<Unit>,
    pub frame: Frame,
    pub expression: CoordinateExpression,
    /// Arcseconds, 0 for the configured default
    pub precision: f64,
    pub collect_errors: bool,
}

impl EphemerisRequest {
    /// Request using the frame, expression, units and error collection of
    /// `config`. Velocities are tabulated when `config` gives six units.
    pub fn from_config(bodies: Vec<Body>, instants: Vec<f64>, config: &AstroConfig) -> Self {
        let coords = (0..config.units.len().min(6))
            .filter_map(Coord::from_index)
            .collect();
        Self {
            bodies,
            instants,
            time_scale: TimeScale::TtTdb,
            coords,
            units: config.units.iter().copied().take(6).collect(),
            frame: config.frame,
            expression: config.expression,
            precision: config.default_precision,
            collect_errors: config.collect_errors,
        }
    }

    /// Whether any requested coordinate is a velocity
    pub fn velocities(&self) -> bool {
        contains_velocity(&self.coords)
    }

    /// Per-instant request given to [`AstroContext::calc_body_coords`].
    /// Coordinates not tabulated get an unspecified unit.
    pub fn coordinate_request(&self) -> CoordinateRequest {
        let velocities = self.velocities();
        let mut units = vec![Unit::Unspecified; if velocities { 6 } else { 3 }];
        for (coord, unit) in self.coords.iter().zip(self.units.iter()) {
            units[coord.index()] = *unit;
        }
        CoordinateRequest {
            frame: self.frame,
            expression: self.expression,
            precision: self.precision,
            velocities,
            units,
        }
    }

    /// Checks the shape of the request. Nothing is computed when this fails.
    pub fn validate(&self) -> Result<()> {
        if self.bodies.is_empty() {
            return Err(SolarfieldError::Configuration(
                "at least one body is required".to_string(),
            ));
        }
        if self.instants.is_empty() {
            return Err(SolarfieldError::Configuration(
                "at least one instant is required".to_string(),
            ));
        }
        if let Some(jd) = self.instants.iter().find(|jd| !jd.is_finite()) {
            return Err(SolarfieldError::Configuration(format!(
                "instant {} is not a finite Julian day",
                jd
            )));
        }
        if self.coords.is_empty() {
            return Err(SolarfieldError::Configuration(
                "at least one coordinate is required".to_string(),
            ));
        }
        for (i, coord) in self.coords.iter().enumerate() {
            if self.coords[..i].contains(coord) {
                return Err(SolarfieldError::Configuration(format!(
                    "coordinate {:?} requested twice",
                    coord
                )));
            }
        }
        if self.units.len() != self.coords.len() {
            return Err(SolarfieldError::Configuration(format!(
                "{} units given for {} coordinates",
                self.units.len(),
                self.coords.len()
            )));
        }
        self.coordinate_request().validate()?;
        Ok(())
    }
}

/// An instant whose computation failed
#[derive(Debug, Clone, PartialEq)]
pub struct InstantFailure {
    pub instant: f64,
    pub message: String,
}

/// Result of [`compute_ephemeris`]
#[derive(Debug, Clone)]
pub struct Ephemeris {
    pub bodies: Vec<Body>,
    pub instants: Vec<f64>,
    pub coords: Vec<Coord>,
    pub units: Vec<Unit>,
    /// `[instant][body][coordinate]`, coordinates in the order requested
    pub data: Array3<f64>,
    /// Collected when the request asks for it
    pub errors: Vec<ComputationError>,
    pub failures: Vec<InstantFailure>,
}

impl Ephemeris {
    /// Value of `coord` for `body` at the `instant`-th instant
    pub fn value(&self, instant: usize, body: Body, coord: Coord) -> Option<f64> {
        let b = self.bodies.iter().position(|&x| x == body)?;
        let c = self.coords.iter().position(|&x| x == coord)?;
        self.data.get((instant, b, c)).copied()
    }

    /// Collected computation errors as text, grouped by body, then kind,
    /// then date
    pub fn error_report(&self) -> String {
        let mut errors = self.errors.clone();
        errors.sort_by(|a, b| {
            a.body
                .code()
                .cmp(&b.body.code())
                .then(a.kind.rank().cmp(&b.kind.rank()))
                .then(a.julian_day.total_cmp(&b.julian_day))
        });

        let mut report = String::new();
        let mut previous: Option<&ComputationError> = None;
        for e in &errors {
            let new_body = previous.map_or(true, |p| p.body != e.body);
            if new_body {
                let _ = writeln!(report, "{}", e.body);
            }
            if new_body || previous.map_or(true, |p| p.kind != e.kind) {
                let _ = writeln!(report, "  {}", e.kind);
            }
            let _ = writeln!(report, "    JD {}", e.julian_day);
            previous = Some(e);
        }
        report
    }
}

/// Computes every body of `request` at one instant.
///
/// `instant` is a Julian day in `request.time_scale`. The returned states are
/// finalized in the requested frame, expression and units.
pub fn compute_one_instant(
    request: &EphemerisRequest,
    instant: f64,
    config: &AstroConfig,
) -> Result<Vec<BodyState>> {
    let mut ctx = AstroContext::new(instant, request.time_scale, &request.bodies, config.clone())?;
    ctx.calc_body_coords(&request.coordinate_request())?;
    Ok(ctx.bodies().to_vec())
}

/// Computes the requested coordinates for every body and instant.
///
/// Shape problems fail before anything is computed. Afterwards one failing
/// instant does not stop the others; its row holds NaN and it is listed in
/// [`Ephemeris::failures`].
pub fn compute_ephemeris(request: &EphemerisRequest, config: &AstroConfig) -> Result<Ephemeris> {
    request.validate()?;
    config.validate()?;

    let shape = (
        request.instants.len(),
        request.bodies.len(),
        request.coords.len(),
    );
    let mut data = Array3::from_elem(shape, f64::NAN);
    let mut errors = Vec::new();
    let mut failures = Vec::new();

    for (i, &instant) in request.instants.iter().enumerate() {
        match compute_one_instant(request, instant, config) {
            Ok(states) => {
                for (b, state) in states.iter().enumerate() {
                    for (c, coord) in request.coords.iter().enumerate() {
                        data[[i, b, c]] = state.coords[coord.index()];
                    }
                    if request.collect_errors {
                        errors.extend(state.computation_error);
                    }
                }
            }
            Err(e) => {
                error!("Ephemeris at JD {} failed: {}", instant, e);
                failures.push(InstantFailure {
                    instant,
                    message: e.to_string(),
                });
            }
        }
    }
    info!(
        "Computed {} bodies at {} instants ({} failed)",
        shape.1,
        shape.0,
        failures.len()
    );

    Ok(Ephemeris {
        bodies: request.bodies.clone(),
        instants: request.instants.clone(),
        coords: request.coords.clone(),
        units: request.units.clone(),
        data,
        errors,
        failures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::J2000;
    use crate::context::{BodyRequest, EphemerisEngine, SeriesEngine};
    use crate::planetlib::ComputationErrorKind;
    use std::sync::Arc;

    fn request(bodies: Vec<Body>, instants: Vec<f64>) -> EphemerisRequest {
        EphemerisRequest {
            bodies,
            instants,
            time_scale: TimeScale::TtTdb,
            coords: vec![Coord::X0, Coord::X1, Coord::X2],
            units: vec![Unit::Au, Unit::Deg, Unit::Deg],
            frame: Frame::Ecliptic,
            expression: CoordinateExpression::Spherical,
            precision: 1.0,
            collect_errors: true,
        }
    }

    #[test]
    fn test_grid_shape_and_values() {
        let req = request(vec![Body::Mercury, Body::Venus], vec![J2000, J2000 + 1.0]);
        let eph = compute_ephemeris(&req, &AstroConfig::default()).unwrap();
        assert_eq!(eph.data.dim(), (2, 2, 3));
        assert!(eph.failures.is_empty());
        let lon = eph.value(0, Body::Venus, Coord::X1).unwrap();
        assert!((lon - 241.5652998248).abs() < 1e-8);
        assert_eq!(eph.value(0, Body::Venus, Coord::V0), None);
    }

    #[test]
    fn test_coordinate_subset_in_request_order() {
        let mut req = request(vec![Body::Mars], vec![J2000]);
        req.coords = vec![Coord::X2, Coord::X0];
        req.units = vec![Unit::Rad, Unit::Km];
        let eph = compute_ephemeris(&req, &AstroConfig::default()).unwrap();

        let full = compute_ephemeris(
            &request(vec![Body::Mars], vec![J2000]),
            &AstroConfig::default(),
        )
        .unwrap();
        let lat_deg = full.value(0, Body::Mars, Coord::X2).unwrap();
        let dist_au = full.value(0, Body::Mars, Coord::X0).unwrap();
        assert!((eph.data[[0, 0, 0]] - lat_deg.to_radians()).abs() < 1e-12);
        assert!((eph.data[[0, 0, 1]] / dist_au - crate::constants::KM_PER_AU).abs() < 1e-3);
    }

    #[test]
    fn test_shape_errors_fail_fast() {
        let config = AstroConfig::default();
        assert!(compute_ephemeris(&request(vec![], vec![J2000]), &config).is_err());
        assert!(compute_ephemeris(&request(vec![Body::Mars], vec![]), &config).is_err());

        let mut req = request(vec![Body::Mars], vec![J2000]);
        req.units.pop();
        assert!(matches!(
            compute_ephemeris(&req, &config),
            Err(SolarfieldError::Configuration(_))
        ));

        let mut req = request(vec![Body::Mars], vec![J2000]);
        req.frame = Frame::HorizontalTopocentric;
        assert!(matches!(
            compute_ephemeris(&req, &config),
            Err(SolarfieldError::Configuration(_))
        ));

        let mut req = request(vec![Body::Mars], vec![J2000]);
        req.units = vec![Unit::Au, Unit::Km, Unit::Deg];
        assert!(matches!(
            compute_ephemeris(&req, &config),
            Err(SolarfieldError::UnitMismatch(_))
        ));
    }

    #[test]
    fn test_velocity_columns() {
        let mut req = request(vec![Body::Earth, Body::Mars], vec![J2000]);
        req.coords = vec![Coord::X0, Coord::V0];
        req.units = vec![Unit::Au, Unit::AuPerDay];
        assert!(req.velocities());
        let eph = compute_ephemeris(&req, &AstroConfig::default()).unwrap();
        assert_eq!(eph.value(0, Body::Earth, Coord::V0), Some(0.0));
        assert!(eph.value(0, Body::Mars, Coord::V0).unwrap().is_finite());
    }

    #[test]
    fn test_errors_collected_on_request() {
        let far_future = J2000 + 365.25 * 3000.0;
        let mut req = request(vec![Body::Jupiter, Body::Moon], vec![J2000, far_future]);
        req.precision = 0.0;
        let eph = compute_ephemeris(&req, &AstroConfig::default()).unwrap();
        // Jupiter out of span once, Moon not transformed twice
        assert_eq!(eph.errors.len(), 3);
        assert!(eph
            .errors
            .iter()
            .any(|e| matches!(e.kind, ComputationErrorKind::OutsideValidSpan { .. })));

        req.collect_errors = false;
        let eph = compute_ephemeris(&req, &AstroConfig::default()).unwrap();
        assert!(eph.errors.is_empty());
    }

    #[test]
    fn test_error_report_grouping() {
        let frame_error = ComputationErrorKind::FrameNotApplied {
            frame: Frame::Ecliptic,
        };
        let span_error = ComputationErrorKind::OutsideValidSpan {
            start: 0.0,
            end: 1.0,
        };
        let eph = Ephemeris {
            bodies: vec![],
            instants: vec![],
            coords: vec![],
            units: vec![],
            data: Array3::zeros((0, 0, 0)),
            errors: vec![
                ComputationError::new(Body::Moon, 3.0, frame_error),
                ComputationError::new(Body::Mars, 2.0, span_error),
                ComputationError::new(Body::Moon, 2.0, frame_error),
                ComputationError::new(Body::Moon, 2.0, span_error),
            ],
            failures: vec![],
        };
        let expected = format!(
            "Moon\n  {}\n    JD 2\n  {}\n    JD 2\n    JD 3\nMars\n  {}\n    JD 2\n",
            span_error, frame_error, span_error
        );
        assert_eq!(eph.error_report(), expected);
    }

    /// Series engine refusing instants after a cutoff
    struct CutoffEngine {
        last_jd: f64,
    }

    impl EphemerisEngine for CutoffEngine {
        fn name(&self) -> &str {
            "cutoff"
        }

        fn compute_body(&self, request: &BodyRequest) -> Result<BodyState> {
            if request.jd_tt > self.last_jd {
                return Err(SolarfieldError::computation("beyond cutoff"));
            }
            SeriesEngine.compute_body(request)
        }
    }

    #[test]
    fn test_failed_instant_does_not_abort_batch() {
        let config =
            AstroConfig::default().with_external_engine(Arc::new(CutoffEngine { last_jd: J2000 }));
        let req = request(vec![Body::Venus], vec![J2000, J2000 + 10.0, J2000 - 10.0]);
        let eph = compute_ephemeris(&req, &config).unwrap();
        assert_eq!(eph.failures.len(), 1);
        assert_eq!(eph.failures[0].instant, J2000 + 10.0);
        assert!(eph.data[[1, 0, 0]].is_nan());
        assert!(eph.data[[0, 0, 0]].is_finite());
        assert!(eph.data[[2, 0, 0]].is_finite());
    }

    #[test]
    fn test_instants_computed_on_threads() {
        let req = request(
            vec![Body::Sun, Body::Mars, Body::Pluto],
            (0..8).map(|i| J2000 + 30.0 * i as f64).collect(),
        );
        let config = AstroConfig::default();
        let sequential = compute_ephemeris(&req, &config).unwrap();

        let threaded: Vec<Vec<BodyState>> = std::thread::scope(|s| {
            let handles: Vec<_> = req
                .instants
                .iter()
                .map(|&jd| {
                    let (req, config) = (&req, &config);
                    s.spawn(move || compute_one_instant(req, jd, config))
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap().unwrap())
                .collect()
        });

        for (i, states) in threaded.iter().enumerate() {
            for (b, state) in states.iter().enumerate() {
                for c in 0..3 {
                    assert_eq!(sequential.data[[i, b, c]], state.coords[c]);
                }
            }
        }
    }

    #[test]
    fn test_request_from_config() {
        let config = AstroConfig::default();
        let req = EphemerisRequest::from_config(vec![Body::Sun], vec![J2000], &config);
        assert_eq!(req.coords.len(), 6);
        assert!(req.velocities());
        assert!(req.validate().is_ok());
    }
}
