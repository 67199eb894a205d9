//! Ephemeris orchestration for one instant
//!
//! An [`AstroContext`] holds the bodies to compute at one TT instant. Its
//! single entry point, [`AstroContext::calc_body_coords`], drives the bodies
//! through the ordered pipeline stages:
//!
//! 1. theory evaluation (terminal for [`Frame::Theory`]);
//! 2. rotation from the theory frame (BRS) to FK5 (terminal for
//!    [`Frame::HeliocentricGeometric`]);
//! 3. light-time correction, single pass;
//! 4. heliocentric to geocentric;
//! 5. precession from J2000 to the date;
//! 6. nutation (terminal for [`Frame::Equatorial`]);
//! 7. true equator to true ecliptic (terminal for [`Frame::Ecliptic`]).
//!
//! A finalization step then converts every body to the requested coordinate
//! expression and units. The Moon's theory is already geocentric and of date:
//! no stage touches it, and it carries a
//! [`ComputationErrorKind::FrameNotApplied`] when another frame is asked for.
//!
//! When the configuration selects an external engine all stages are skipped
//! and each body is delegated to that engine.

pub mod config;
pub mod engine;

pub use config::{AstroConfig, EngineKind};
pub use engine::{BodyRequest, EphemerisEngine, SeriesEngine};

use crate::constants::{C_KM_S, DAY_S, J2000, KM_PER_AU};
use crate::framelib::{CoordinateExpression, Frame, BRS_TO_FK5};
use crate::planetlib::{Body, BodyState, ComputationError, ComputationErrorKind};
use crate::precession::MeanTrue;
use crate::series;
use crate::time::{jd_tt, TimeScale};
use crate::units::{Unit, UnitType};
use crate::{Result, SolarfieldError};
use log::debug;
use nalgebra::Vector3;
use std::fmt;

/// Units of the default spherical output: distance in AU, angles in degrees
pub const DEFAULT_SPHERICAL_UNITS: [Unit; 6] = [
    Unit::Au,
    Unit::Deg,
    Unit::Deg,
    Unit::AuPerDay,
    Unit::DegPerDay,
    Unit::DegPerDay,
];

/// Stages of the series pipeline, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    Theory,
    BrsToFk5,
    LightTime,
    Geocentric,
    Precession,
    Nutation,
    EquatorialToEcliptic,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Theory => "theory evaluation",
            Stage::BrsToFk5 => "BRS to FK5",
            Stage::LightTime => "light time",
            Stage::Geocentric => "heliocentric to geocentric",
            Stage::Precession => "precession",
            Stage::Nutation => "nutation",
            Stage::EquatorialToEcliptic => "equatorial to ecliptic",
        };
        write!(f, "{}", label)
    }
}

/// What [`AstroContext::calc_body_coords`] should produce
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateRequest {
    pub frame: Frame,
    pub expression: CoordinateExpression,
    /// Arcseconds, 0 for the configured default
    pub precision: f64,
    pub velocities: bool,
    /// Three position units, optionally followed by three velocity units.
    /// Six are required when velocities are requested.
    pub units: Vec<Unit>,
}

impl CoordinateRequest {
    /// Spherical output in AU and degrees (AU/d and deg/d for velocities)
    pub fn default_for(frame: Frame, velocities: bool) -> Self {
        let units = if velocities {
            DEFAULT_SPHERICAL_UNITS.to_vec()
        } else {
            DEFAULT_SPHERICAL_UNITS[..3].to_vec()
        };
        Self {
            frame,
            expression: CoordinateExpression::Spherical,
            precision: 0.0,
            velocities,
            units,
        }
    }

    /// Checks the request and splits its units into position and velocity
    /// units. Velocity units are unspecified when only three are given or
    /// when velocities are not requested.
    pub fn validate(&self) -> Result<([Unit; 3], [Unit; 3])> {
        if !self.frame.is_supported() {
            return Err(SolarfieldError::Configuration(format!(
                "frame '{}' is not handled by the ephemeris pipeline",
                self.frame
            )));
        }
        if !(self.precision >= 0.0) {
            return Err(SolarfieldError::Configuration(format!(
                "precision must be a non-negative number of arcseconds, got {}",
                self.precision
            )));
        }
        let (position, velocity) = match (self.units.len(), self.velocities) {
            (6, _) => (
                [self.units[0], self.units[1], self.units[2]],
                [self.units[3], self.units[4], self.units[5]],
            ),
            (3, false) => (
                [self.units[0], self.units[1], self.units[2]],
                [Unit::Unspecified; 3],
            ),
            (n, velocities) => {
                return Err(SolarfieldError::Configuration(format!(
                    "expected {} units, got {}",
                    if velocities { "6" } else { "3 or 6" },
                    n
                )))
            }
        };

        let (expected_position, expected_velocity) = match self.expression {
            CoordinateExpression::Cartesian => (
                [UnitType::Distance; 3],
                [UnitType::LinearSpeed; 3],
            ),
            CoordinateExpression::Spherical => (
                [UnitType::Distance, UnitType::Angular, UnitType::Angular],
                [
                    UnitType::LinearSpeed,
                    UnitType::AngularSpeed,
                    UnitType::AngularSpeed,
                ],
            ),
        };
        let mut wrong = Vec::new();
        for (units, expected) in [(position, expected_position), (velocity, expected_velocity)] {
            for (unit, want) in units.iter().zip(expected.iter()) {
                if let Some(got) = unit.unit_type() {
                    if got != *want {
                        wrong.push(format!("{} is not a {}", unit, want.label()));
                    }
                }
            }
        }
        if !wrong.is_empty() {
            return Err(SolarfieldError::UnitMismatch(format!(
                "{} coordinates: {}",
                self.expression.label(),
                wrong.join(", ")
            )));
        }
        if !self.velocities {
            return Ok((position, [Unit::Unspecified; 3]));
        }
        Ok((position, velocity))
    }
}

/// One ephemeris computation: a set of bodies at one instant
#[derive(Debug, Clone)]
pub struct AstroContext {
    jd_tt: f64,
    bodies: Vec<BodyState>,
    config: AstroConfig,
    stages_run: Vec<Stage>,
    computed: bool,
}

impl AstroContext {
    /// `jd` is converted to TT when given in UTC
    pub fn new(jd: f64, time_scale: TimeScale, bodies: &[Body], config: AstroConfig) -> Result<Self> {
        if !jd.is_finite() {
            return Err(SolarfieldError::Configuration(format!(
                "instant must be a finite Julian day, got {}",
                jd
            )));
        }
        if bodies.is_empty() {
            return Err(SolarfieldError::Configuration(
                "at least one body is required".to_string(),
            ));
        }
        for (i, body) in bodies.iter().enumerate() {
            if bodies[..i].contains(body) {
                return Err(SolarfieldError::Configuration(format!(
                    "{} requested twice",
                    body
                )));
            }
        }
        config.validate()?;

        Ok(Self {
            jd_tt: jd_tt(jd, time_scale),
            bodies: bodies.iter().map(|&b| BodyState::new(b)).collect(),
            config,
            stages_run: Vec::new(),
            computed: false,
        })
    }

    /// Instant of the computation, TT Julian day
    pub fn jd_tt(&self) -> f64 {
        self.jd_tt
    }

    pub fn bodies(&self) -> &[BodyState] {
        &self.bodies
    }

    pub fn body(&self, body: Body) -> Option<&BodyState> {
        self.bodies.iter().find(|b| b.body == body)
    }

    /// Position of the Moon in [`AstroContext::bodies`], if requested
    pub fn moon_index(&self) -> Option<usize> {
        self.bodies.iter().position(|b| b.body == Body::Moon)
    }

    pub fn config(&self) -> &AstroConfig {
        &self.config
    }

    /// Pipeline stages executed by the last computation
    pub fn stages_run(&self) -> &[Stage] {
        &self.stages_run
    }

    /// Per-body computation errors of the last computation
    pub fn computation_errors(&self) -> Vec<ComputationError> {
        self.bodies
            .iter()
            .filter_map(|b| b.computation_error)
            .collect()
    }

    /// Computes every body in the requested frame, expression and units.
    ///
    /// The request is validated before anything is computed. A context is
    /// computed once; a second call is a configuration error.
    pub fn calc_body_coords(&mut self, request: &CoordinateRequest) -> Result<()> {
        if self.computed {
            return Err(SolarfieldError::Configuration(
                "coordinates of this context were already computed".to_string(),
            ));
        }
        let (position_units, velocity_units) = request.validate()?;
        let mut request = request.clone();
        if request.precision == 0.0 {
            request.precision = self.config.default_precision;
        }

        let bodies: Vec<Body> = self.bodies.iter().map(|b| b.body).collect();
        let (states, stages) = match self.config.engine {
            EngineKind::Series => run_series_pipeline(
                self.jd_tt,
                &bodies,
                &request,
                position_units,
                velocity_units,
            )?,
            EngineKind::External => {
                let engine = self.config.external_engine()?;
                let mut states = Vec::with_capacity(bodies.len());
                for &body in &bodies {
                    let body_request = BodyRequest {
                        jd_tt: self.jd_tt,
                        body,
                        frame: request.frame,
                        expression: request.expression,
                        precision: request.precision,
                        velocities: request.velocities,
                        position_units,
                        velocity_units,
                    };
                    let state = engine.compute_body(&body_request)?;
                    check_external_state(engine.name(), &body_request, &state)?;
                    states.push(state);
                }
                (states, Vec::new())
            }
        };

        self.bodies = states;
        self.stages_run = stages;
        self.computed = true;
        Ok(())
    }

    /// [`AstroContext::calc_body_coords`] with spherical coordinates in AU and
    /// degrees
    pub fn calc_body_coords_default(&mut self, frame: Frame, velocities: bool) -> Result<()> {
        self.calc_body_coords(&CoordinateRequest::default_for(frame, velocities))
    }
}

fn check_external_state(engine: &str, request: &BodyRequest, state: &BodyState) -> Result<()> {
    if state.body != request.body
        || state.frame != Some(request.frame)
        || state.expression != request.expression
    {
        return Err(SolarfieldError::computation(format!(
            "engine '{}' returned {} in {:?} {} for a request of {} in {} {}",
            engine,
            state.body,
            state.frame,
            state.expression.label(),
            request.body,
            request.frame,
            request.expression.label()
        )));
    }
    Ok(())
}

/// Light travel time, in days, over a distance in AU
fn light_time(distance_au: f64) -> f64 {
    distance_au * KM_PER_AU / C_KM_S / DAY_S
}

/// Runs the series pipeline for `bodies`. Returns finalized states in the
/// order of `bodies`, and the stages executed.
pub(crate) fn run_series_pipeline(
    jd_tt: f64,
    bodies: &[Body],
    request: &CoordinateRequest,
    position_units: [Unit; 3],
    velocity_units: [Unit; 3],
) -> Result<(Vec<BodyState>, Vec<Stage>)> {
    let velocities = request.velocities;
    let precision = request.precision;
    let mut stages = Vec::new();
    let mut enter = |stage: Stage| {
        debug!("JD {}: {}", jd_tt, stage);
        stages.push(stage);
    };

    // 1. theory evaluation
    enter(Stage::Theory);
    let mut states: Vec<BodyState> = bodies
        .iter()
        .map(|&body| evaluate_state(body, jd_tt, precision, velocities))
        .collect();

    let frame = request.frame;
    if frame != Frame::Theory {
        // Earth's geometric heliocentric position, needed for light time
        let earth = series::evaluate(Body::Earth, jd_tt, precision, false).position;

        // 2. BRS to FK5
        enter(Stage::BrsToFk5);
        for state in states.iter_mut().filter(|s| s.body != Body::Moon) {
            state.rotate(&BRS_TO_FK5);
            state.frame = Some(Frame::HeliocentricGeometric);
        }

        if frame != Frame::HeliocentricGeometric {
            // 3. light time
            enter(Stage::LightTime);
            let dt_earth = light_time(earth.norm());
            let mut apparent_earth =
                evaluate_state(Body::Earth, jd_tt - dt_earth, precision, velocities);
            apparent_earth.rotate(&BRS_TO_FK5);

            for state in states.iter_mut() {
                match state.body {
                    Body::Sun | Body::Moon => {}
                    Body::Earth => {
                        state.coords = apparent_earth.coords;
                    }
                    body => {
                        let geometric = series::evaluate(body, jd_tt, precision, false).position;
                        let dt = light_time((geometric - earth).norm());
                        debug!("{} re-evaluated {} days earlier", body, dt);
                        let mut apparent = evaluate_state(body, jd_tt - dt, precision, velocities);
                        apparent.rotate(&BRS_TO_FK5);
                        state.coords = apparent.coords;
                    }
                }
            }

            // 4. heliocentric to geocentric
            enter(Stage::Geocentric);
            let earth_position = apparent_earth.position_vector();
            let earth_velocity = apparent_earth.velocity_vector();
            for state in states.iter_mut() {
                match state.body {
                    Body::Moon => {}
                    Body::Earth => {
                        state.set_position([0.0; 3]);
                        state.set_velocity([0.0; 3]);
                    }
                    Body::Sun => {
                        state.set_position((-earth_position).into());
                        state.set_velocity((-earth_velocity).into());
                    }
                    _ => {
                        let position = state.position_vector() - earth_position;
                        let velocity = state.velocity_vector() - earth_velocity;
                        state.set_position(position.into());
                        state.set_velocity(velocity.into());
                    }
                }
            }

            let mean_true = MeanTrue::new(jd_tt, J2000);

            // 5. precession
            enter(Stage::Precession);
            let precession = mean_true.precession_matrix();
            rotate_planets(&mut states, &precession);

            // 6. nutation
            enter(Stage::Nutation);
            let nutation = mean_true.nutation_matrix();
            rotate_planets(&mut states, &nutation);

            if frame == Frame::Ecliptic {
                // 7. equatorial to ecliptic
                enter(Stage::EquatorialToEcliptic);
                let to_ecliptic = mean_true.true_eq_to_ecliptic_matrix();
                rotate_planets(&mut states, &to_ecliptic);
            }
        }
    }

    for state in states.iter_mut() {
        finalize(state, jd_tt, request, position_units, velocity_units)?;
    }
    Ok((states, stages))
}

fn rotate_planets(states: &mut [BodyState], matrix: &nalgebra::Matrix3<f64>) {
    for state in states.iter_mut().filter(|s| s.body != Body::Moon) {
        state.rotate(matrix);
    }
}

/// Theory output as a cartesian state in AU and AU/d
fn evaluate_state(body: Body, jd_tt: f64, precision: f64, velocities: bool) -> BodyState {
    let evaluation = series::evaluate(body, jd_tt, precision, velocities);
    let mut state = BodyState::cartesian_au(
        body,
        Frame::Theory,
        evaluation.position,
        evaluation.velocity.unwrap_or_else(Vector3::zeros),
    );
    state.computation_error = evaluation
        .limitation
        .map(|kind| ComputationError::new(body, jd_tt, kind));
    state
}

/// Sets the frame tag, then converts to the requested expression and units
fn finalize(
    state: &mut BodyState,
    jd_tt: f64,
    request: &CoordinateRequest,
    position_units: [Unit; 3],
    velocity_units: [Unit; 3],
) -> Result<()> {
    if state.body == Body::Moon {
        state.frame = Some(Frame::Theory);
        if request.frame != Frame::Theory && state.computation_error.is_none() {
            state.computation_error = Some(ComputationError::new(
                Body::Moon,
                jd_tt,
                ComputationErrorKind::FrameNotApplied {
                    frame: request.frame,
                },
            ));
        }
    } else {
        state.frame = Some(request.frame);
    }

    // a body at the origin has no direction: spherical angles are set to 0
    state.set_expression(request.expression, request.velocities)?;
    state.convert_units(position_units, velocity_units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;
    use std::sync::Arc;

    fn context(bodies: &[Body]) -> AstroContext {
        AstroContext::new(J2000, TimeScale::TtTdb, bodies, AstroConfig::default()).unwrap()
    }

    #[rstest]
    #[case(Frame::Theory, vec![Stage::Theory])]
    #[case(Frame::HeliocentricGeometric, vec![Stage::Theory, Stage::BrsToFk5])]
    #[case(Frame::Equatorial, vec![
        Stage::Theory, Stage::BrsToFk5, Stage::LightTime, Stage::Geocentric,
        Stage::Precession, Stage::Nutation,
    ])]
    #[case(Frame::Ecliptic, vec![
        Stage::Theory, Stage::BrsToFk5, Stage::LightTime, Stage::Geocentric,
        Stage::Precession, Stage::Nutation, Stage::EquatorialToEcliptic,
    ])]
    fn test_stage_termination(#[case] frame: Frame, #[case] expected: Vec<Stage>) {
        let mut ctx = context(&[Body::Mars]);
        ctx.calc_body_coords_default(frame, false).unwrap();
        assert_eq!(ctx.stages_run(), expected.as_slice());
        assert_eq!(ctx.bodies()[0].frame, Some(frame));
    }

    #[test]
    fn test_construction_checks() {
        let config = AstroConfig::default();
        assert!(AstroContext::new(J2000, TimeScale::Utc, &[], config.clone()).is_err());
        assert!(
            AstroContext::new(J2000, TimeScale::Utc, &[Body::Mars, Body::Mars], config.clone())
                .is_err()
        );
        assert!(AstroContext::new(f64::NAN, TimeScale::Utc, &[Body::Mars], config).is_err());
    }

    #[test]
    fn test_utc_instant_converted_to_tt() {
        let ctx =
            AstroContext::new(J2000, TimeScale::Utc, &[Body::Sun], AstroConfig::default())
                .unwrap();
        assert_relative_eq!((ctx.jd_tt() - J2000) * DAY_S, 64.184, epsilon = 1e-4);
    }

    #[test]
    fn test_unsupported_frame_is_rejected_before_computing() {
        let mut ctx = context(&[Body::Venus]);
        let err = ctx
            .calc_body_coords_default(Frame::Galactic, false)
            .unwrap_err();
        assert!(matches!(err, SolarfieldError::Configuration(_)));
        assert!(ctx.stages_run().is_empty());
        assert_eq!(ctx.bodies()[0].frame, None);
    }

    #[rstest]
    #[case(CoordinateExpression::Spherical, vec![Unit::Au, Unit::Deg, Unit::Km], false)]
    #[case(CoordinateExpression::Cartesian, vec![Unit::Au, Unit::Deg, Unit::Au], false)]
    #[case(CoordinateExpression::Cartesian, vec![Unit::Au, Unit::Au, Unit::Au, Unit::Au, Unit::AuPerDay, Unit::AuPerDay], true)]
    fn test_unit_types_checked(
        #[case] expression: CoordinateExpression,
        #[case] units: Vec<Unit>,
        #[case] velocities: bool,
    ) {
        let request = CoordinateRequest {
            frame: Frame::Ecliptic,
            expression,
            precision: 1.0,
            velocities,
            units,
        };
        assert!(matches!(
            request.validate(),
            Err(SolarfieldError::UnitMismatch(_))
        ));
    }

    #[test]
    fn test_unit_count_checked() {
        let mut request = CoordinateRequest::default_for(Frame::Ecliptic, true);
        request.units.truncate(3);
        assert!(matches!(
            request.validate(),
            Err(SolarfieldError::Configuration(_))
        ));
        request.units.truncate(2);
        request.velocities = false;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_computed_once() {
        let mut ctx = context(&[Body::Sun]);
        ctx.calc_body_coords_default(Frame::Theory, false).unwrap();
        assert!(ctx.calc_body_coords_default(Frame::Theory, false).is_err());
    }

    #[test]
    fn test_sun_and_earth_invariants() {
        for frame in Frame::supported() {
            let mut ctx = context(&[Body::Sun, Body::Earth]);
            ctx.calc_body_coords(&CoordinateRequest {
                frame,
                expression: CoordinateExpression::Cartesian,
                precision: 0.0,
                velocities: true,
                units: vec![Unit::Au, Unit::Au, Unit::Au, Unit::AuPerDay, Unit::AuPerDay, Unit::AuPerDay],
            })
            .unwrap();
            let sun = ctx.body(Body::Sun).unwrap();
            let earth = ctx.body(Body::Earth).unwrap();
            match frame {
                Frame::Theory | Frame::HeliocentricGeometric => {
                    assert_eq!(sun.position(), [0.0; 3]);
                }
                _ => {
                    assert_eq!(earth.position(), [0.0; 3]);
                    assert_eq!(earth.velocity(), [0.0; 3]);
                    assert_relative_eq!(sun.position_vector().norm(), 0.98332, epsilon = 1e-4);
                }
            }
        }
    }

    #[test]
    fn test_sun_is_negated_apparent_earth() {
        let mut ctx = context(&[Body::Sun]);
        ctx.calc_body_coords(&CoordinateRequest {
            frame: Frame::Equatorial,
            expression: CoordinateExpression::Cartesian,
            precision: 0.0,
            velocities: false,
            units: vec![Unit::Au; 3],
        })
        .unwrap();

        let dt = light_time(series::evaluate(Body::Earth, J2000, 0.0, false).position.norm());
        let apparent = series::evaluate(Body::Earth, J2000 - dt, 0.0, false).position;
        let mean_true = MeanTrue::new(J2000, J2000);
        let expected = mean_true.nutation_matrix()
            * mean_true.precession_matrix()
            * (*BRS_TO_FK5 * -apparent);
        let sun = ctx.bodies()[0].position_vector();
        for i in 0..3 {
            assert_relative_eq!(sun[i], expected[i], epsilon = 1e-14);
        }
    }

    #[test]
    fn test_moon_left_in_theory_frame() {
        let mut ctx = context(&[Body::Moon, Body::Mars]);
        assert_eq!(ctx.moon_index(), Some(0));
        ctx.calc_body_coords_default(Frame::Ecliptic, false).unwrap();
        let moon = ctx.body(Body::Moon).unwrap();
        assert_eq!(moon.frame, Some(Frame::Theory));
        assert_eq!(
            moon.computation_error.map(|e| e.kind),
            Some(ComputationErrorKind::FrameNotApplied {
                frame: Frame::Ecliptic
            })
        );
        // geocentric distance of the theory, unchanged by the pipeline
        assert_relative_eq!(moon.coords[0] * KM_PER_AU, 402444.8, epsilon = 0.1);
        assert_eq!(ctx.computation_errors().len(), 1);
    }

    #[test]
    fn test_moon_in_theory_frame_has_no_error() {
        let mut ctx = context(&[Body::Moon]);
        ctx.calc_body_coords_default(Frame::Theory, false).unwrap();
        assert!(ctx.bodies()[0].computation_error.is_none());
    }

    #[test]
    fn test_velocities_not_requested_are_nan() {
        let mut ctx = context(&[Body::Venus]);
        ctx.calc_body_coords_default(Frame::Ecliptic, false).unwrap();
        let venus = ctx.bodies()[0];
        assert!(venus.position().iter().all(|v| v.is_finite()));
        assert!(venus.velocity().iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_six_units_without_velocities() {
        let request = CoordinateRequest {
            velocities: false,
            ..CoordinateRequest::default_for(Frame::Ecliptic, true)
        };
        assert_eq!(request.units.len(), 6);
        let (_, velocity_units) = request.validate().unwrap();
        assert_eq!(velocity_units, [Unit::Unspecified; 3]);

        let mut ctx = context(&[Body::Mars]);
        ctx.calc_body_coords(&request).unwrap();
        let mars = ctx.bodies()[0];
        assert_eq!(mars.position_units, [Unit::Au, Unit::Deg, Unit::Deg]);
        assert!(mars.position().iter().all(|v| v.is_finite()));
        assert!(mars.velocity().iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_default_velocity_units() {
        let mut ctx = context(&[Body::Jupiter]);
        ctx.calc_body_coords_default(Frame::Ecliptic, true).unwrap();
        let jupiter = ctx.bodies()[0];
        assert_eq!(jupiter.position_units, [Unit::Au, Unit::Deg, Unit::Deg]);
        assert_eq!(
            jupiter.velocity_units,
            [Unit::AuPerDay, Unit::DegPerDay, Unit::DegPerDay]
        );
        // apparent geocentric motion of Jupiter stays below a quarter degree a day
        assert!(jupiter.coords[4].abs() < 0.25);
    }

    #[test]
    fn test_precision_default_from_config() {
        let mut config = AstroConfig::default();
        config.default_precision = 0.5;
        let mut ctx = AstroContext::new(J2000, TimeScale::TtTdb, &[Body::Saturn], config).unwrap();
        ctx.calc_body_coords_default(Frame::Ecliptic, false).unwrap();
        assert!(matches!(
            ctx.bodies()[0].computation_error.map(|e| e.kind),
            Some(ComputationErrorKind::PrecisionNotHandled { .. })
        ));
    }

    /// Engine returning fixed coordinates, optionally for the wrong frame
    struct FixedEngine {
        wrong_frame: bool,
    }

    impl EphemerisEngine for FixedEngine {
        fn name(&self) -> &str {
            "fixed"
        }

        fn compute_body(&self, request: &BodyRequest) -> Result<BodyState> {
            let mut state = BodyState::new(request.body);
            state.coords = [1.0, 2.0, 3.0, 0.0, 0.0, 0.0];
            state.frame = Some(if self.wrong_frame {
                Frame::Theory
            } else {
                request.frame
            });
            state.expression = request.expression;
            state.position_units = request.position_units;
            state.velocity_units = request.velocity_units;
            Ok(state)
        }
    }

    #[test]
    fn test_external_engine_delegation() {
        let config = AstroConfig::default().with_external_engine(Arc::new(FixedEngine {
            wrong_frame: false,
        }));
        let mut ctx =
            AstroContext::new(J2000, TimeScale::TtTdb, &[Body::Mars, Body::Moon], config).unwrap();
        ctx.calc_body_coords_default(Frame::Ecliptic, false).unwrap();
        assert!(ctx.stages_run().is_empty());
        assert_eq!(ctx.bodies()[1].position(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_external_engine_checked() {
        let config = AstroConfig::default().with_external_engine(Arc::new(FixedEngine {
            wrong_frame: true,
        }));
        let mut ctx = AstroContext::new(J2000, TimeScale::TtTdb, &[Body::Mars], config).unwrap();
        let err = ctx
            .calc_body_coords_default(Frame::Ecliptic, false)
            .unwrap_err();
        assert!(matches!(err, SolarfieldError::ComputationFailure { .. }));
    }

    #[test]
    fn test_external_series_engine_matches_internal() {
        let config = AstroConfig::default().with_external_engine(Arc::new(SeriesEngine));
        let mut external =
            AstroContext::new(J2000, TimeScale::TtTdb, &[Body::Venus, Body::Mars], config)
                .unwrap();
        external
            .calc_body_coords_default(Frame::Equatorial, true)
            .unwrap();
        let mut internal = context(&[Body::Venus, Body::Mars]);
        internal
            .calc_body_coords_default(Frame::Equatorial, true)
            .unwrap();
        assert_eq!(external.bodies(), internal.bodies());
    }
}
