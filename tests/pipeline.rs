use approx::assert_abs_diff_eq;
use solarfield::constants::{DAY_S, J2000};
use solarfield::context::{AstroConfig, AstroContext, CoordinateRequest, Stage};
use solarfield::framelib::{Coord, CoordinateExpression, Frame};
use solarfield::planetlib::Body;
use solarfield::time::{to_tt, to_utc, TimeScale};
use solarfield::units::Unit;
use solarfield::{compute_ephemeris, EphemerisRequest, SolarfieldError};

/// Geocentric apparent ecliptic coordinates at J2000 from the complete VSOP87A
/// series: distance (AU), longitude and latitude (deg)
const MERCURY_J2000: [f64; 3] = [1.4154808013, 271.8898778519, -0.9947598522];
const VENUS_J2000: [f64; 3] = [1.1376367167, 241.5655042080, 2.0663853394];

fn ecliptic_request(precision: f64) -> CoordinateRequest {
    CoordinateRequest {
        frame: Frame::Ecliptic,
        expression: CoordinateExpression::Spherical,
        precision,
        velocities: false,
        units: vec![Unit::Au, Unit::Deg, Unit::Deg],
    }
}

#[test]
fn mercury_and_venus_match_full_series_at_j2000() {
    let mut ctx = AstroContext::new(
        J2000,
        TimeScale::TtTdb,
        &[Body::Mercury, Body::Venus],
        AstroConfig::default(),
    )
    .unwrap();
    ctx.calc_body_coords(&ecliptic_request(1.0)).unwrap();

    let two_arcsec = 2.0 / 3600.0;
    for (state, expected) in ctx.bodies().iter().zip([MERCURY_J2000, VENUS_J2000]) {
        let [distance, lon, lat] = state.position();
        assert_abs_diff_eq!(distance, expected[0], epsilon = 2e-5);
        assert_abs_diff_eq!(lon, expected[1], epsilon = two_arcsec);
        assert_abs_diff_eq!(lat, expected[2], epsilon = two_arcsec);
        assert_eq!(state.frame, Some(Frame::Ecliptic));
        assert!(state.computation_error.is_none());
    }
    assert_eq!(ctx.stages_run().len(), 7);
}

#[test]
fn batch_results_match_single_instants() {
    let config = AstroConfig::default();
    let bodies = vec![Body::Sun, Body::Moon, Body::Mars, Body::Neptune];
    let t1 = J2000 + 100.25;
    let t2 = J2000 - 3650.0;

    let request = |instants: Vec<f64>| EphemerisRequest {
        bodies: bodies.clone(),
        instants,
        time_scale: TimeScale::Utc,
        coords: Coord::ALL.to_vec(),
        units: vec![
            Unit::Km,
            Unit::Rad,
            Unit::Rad,
            Unit::KmPerDay,
            Unit::RadPerDay,
            Unit::RadPerDay,
        ],
        frame: Frame::Equatorial,
        expression: CoordinateExpression::Spherical,
        precision: 0.0,
        collect_errors: true,
    };

    let both = compute_ephemeris(&request(vec![t1, t2]), &config).unwrap();
    let first = compute_ephemeris(&request(vec![t1]), &config).unwrap();
    let second = compute_ephemeris(&request(vec![t2]), &config).unwrap();

    for (i, single) in [first, second].iter().enumerate() {
        for b in 0..bodies.len() {
            for c in 0..6 {
                assert_eq!(both.data[[i, b, c]], single.data[[0, b, c]]);
            }
        }
    }
    assert_eq!(both.errors.len(), 2);
}

#[test]
fn sun_at_origin_until_geocentric_stage() {
    for jd in [J2000 - 20000.0, J2000, J2000 + 7777.7] {
        for frame in [Frame::Theory, Frame::HeliocentricGeometric] {
            let mut ctx =
                AstroContext::new(jd, TimeScale::TtTdb, &[Body::Sun], AstroConfig::default())
                    .unwrap();
            ctx.calc_body_coords(&CoordinateRequest {
                frame,
                expression: CoordinateExpression::Cartesian,
                precision: 0.0,
                velocities: false,
                units: vec![Unit::Km; 3],
            })
            .unwrap();
            assert_eq!(ctx.bodies()[0].position(), [0.0; 3]);
        }
    }
}

#[test]
fn earth_at_origin_in_geocentric_frames() {
    for frame in [Frame::Equatorial, Frame::Ecliptic] {
        let mut ctx = AstroContext::new(
            J2000 + 500.0,
            TimeScale::Utc,
            &[Body::Earth, Body::Sun],
            AstroConfig::default(),
        )
        .unwrap();
        ctx.calc_body_coords(&CoordinateRequest {
            frame,
            expression: CoordinateExpression::Cartesian,
            precision: 0.0,
            velocities: true,
            units: vec![Unit::Au, Unit::Au, Unit::Au, Unit::AuPerDay, Unit::AuPerDay, Unit::AuPerDay],
        })
        .unwrap();
        let earth = ctx.body(Body::Earth).unwrap();
        assert_eq!(earth.position(), [0.0; 3]);
        assert_eq!(earth.velocity(), [0.0; 3]);
        // the Sun then moves about a degree a day around the Earth
        let sun = ctx.body(Body::Sun).unwrap();
        let speed = sun.velocity_vector().norm() / sun.position_vector().norm();
        assert!(speed > 0.016 && speed < 0.018);
    }
}

#[test]
fn sun_longitude_in_ecliptic_frame() {
    let mut ctx =
        AstroContext::new(J2000, TimeScale::TtTdb, &[Body::Sun], AstroConfig::default()).unwrap();
    ctx.calc_body_coords(&ecliptic_request(0.0)).unwrap();
    let [distance, lon, lat] = ctx.bodies()[0].position();
    assert_abs_diff_eq!(distance, 0.983321573, epsilon = 1e-8);
    assert_abs_diff_eq!(lon, 280.367988, epsilon = 1e-5);
    assert_abs_diff_eq!(lat, 0.000165434, epsilon = 1e-7);
}

#[test]
fn theory_frame_skips_precession_and_nutation() {
    let mut ctx = AstroContext::new(
        J2000,
        TimeScale::TtTdb,
        &[Body::Jupiter],
        AstroConfig::default(),
    )
    .unwrap();
    ctx.calc_body_coords_default(Frame::Theory, true).unwrap();
    assert_eq!(ctx.stages_run(), &[Stage::Theory]);
    assert!(!ctx.stages_run().contains(&Stage::Precession));
    assert!(!ctx.stages_run().contains(&Stage::Nutation));
}

#[test]
fn unsupported_frames_are_configuration_errors() {
    for frame in [Frame::HorizontalTopocentric, Frame::Galactic] {
        let mut ctx =
            AstroContext::new(J2000, TimeScale::TtTdb, &[Body::Mars], AstroConfig::default())
                .unwrap();
        let result = ctx.calc_body_coords(&CoordinateRequest {
            frame,
            ..ecliptic_request(0.0)
        });
        assert!(matches!(result, Err(SolarfieldError::Configuration(_))));
        assert!(ctx.stages_run().is_empty());
    }
}

#[test]
fn utc_tt_roundtrip_over_the_table() {
    // mid-March of years spanning the drift, leap-second, biennial and quadratic ranges
    for year in (1700..=2030).step_by(7) {
        let utc = J2000 + (year as f64 - 2000.0) * 365.25 + 73.5;
        let back = to_utc(to_tt(utc));
        assert_abs_diff_eq!(back, utc, epsilon = 1e-9);
    }
    assert_abs_diff_eq!((to_tt(J2000) - J2000) * DAY_S, 64.184, epsilon = 1e-4);
}
