//! Pluto: periodic theory of Meeus, *Astronomical Algorithms* ch. 37
//!
//! Heliocentric coordinates referred to the ecliptic and equinox J2000, fitted
//! over 1885–2099. Arguments are linear combinations of the mean longitudes of
//! Jupiter, Saturn and Pluto.

use super::{spherical_state, Theory, TheoryState};
use crate::constants::{DAYS_PER_CENTURY, DEG2RAD};
use crate::time::julian_centuries;

/// Periodic term: argument multipliers of Jupiter, Saturn and Pluto, and the
/// (sine, cosine) amplitudes of longitude and latitude (degrees) and radius
/// vector (AU)
#[derive(Debug, Clone, Copy)]
pub struct PlutoTerm {
    pub j: i32,
    pub s: i32,
    pub p: i32,
    pub lon: (f64, f64),
    pub lat: (f64, f64),
    pub rad: (f64, f64),
}

/// Mean longitudes (degrees) at J2000 and their rates (degrees per century)
const JUPITER_LONGITUDE: (f64, f64) = (34.35, 3034.9057);
const SATURN_LONGITUDE: (f64, f64) = (50.08, 1222.1138);
const PLUTO_LONGITUDE: (f64, f64) = (238.96, 144.96);

const BASE_LONGITUDE: (f64, f64) = (238.958116, 144.96);
const BASE_LATITUDE: f64 = -3.908239;
const BASE_RADIUS: f64 = 40.7241346;

#[derive(Debug)]
pub struct Pluto;

pub static PLUTO: Pluto = Pluto;

impl Theory for Pluto {
    fn name(&self) -> &'static str {
        "Meeus Pluto"
    }

    /// 1885-01-01 to 2099-12-31
    fn valid_span(&self) -> (f64, f64) {
        (2409177.5, 2488068.5)
    }

    fn nominal_precision(&self) -> f64 {
        1.0
    }

    fn compute(&self, jd_tt: f64, with_velocity: bool) -> TheoryState {
        let t = julian_centuries(jd_tt);
        let mean = |(at_epoch, rate): (f64, f64)| at_epoch + rate * t;
        let (jupiter, saturn, pluto) = (
            mean(JUPITER_LONGITUDE),
            mean(SATURN_LONGITUDE),
            mean(PLUTO_LONGITUDE),
        );

        // degrees, AU, and their rates per century
        let mut lon = mean(BASE_LONGITUDE);
        let mut lat = BASE_LATITUDE;
        let mut rad = BASE_RADIUS;
        let mut dlon = BASE_LONGITUDE.1;
        let mut dlat = 0.0;
        let mut drad = 0.0;

        for term in TERMS.iter() {
            let (j, s, p) = (term.j as f64, term.s as f64, term.p as f64);
            let alpha = (j * jupiter + s * saturn + p * pluto) * DEG2RAD;
            let (sin, cos) = alpha.sin_cos();

            lon += term.lon.0 * sin + term.lon.1 * cos;
            lat += term.lat.0 * sin + term.lat.1 * cos;
            rad += term.rad.0 * sin + term.rad.1 * cos;
            if !with_velocity {
                continue;
            }
            let dalpha = (j * JUPITER_LONGITUDE.1 + s * SATURN_LONGITUDE.1 + p * PLUTO_LONGITUDE.1)
                * DEG2RAD;
            dlon += (term.lon.0 * cos - term.lon.1 * sin) * dalpha;
            dlat += (term.lat.0 * cos - term.lat.1 * sin) * dalpha;
            drad += (term.rad.0 * cos - term.rad.1 * sin) * dalpha;
        }

        if !with_velocity {
            return spherical_state(rad, lon * DEG2RAD, lat * DEG2RAD, 0.0, 0.0, 0.0);
        }
        let per_day = DEG2RAD / DAYS_PER_CENTURY;
        spherical_state(
            rad,
            lon * DEG2RAD,
            lat * DEG2RAD,
            drad / DAYS_PER_CENTURY,
            dlon * per_day,
            dlat * per_day,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RAD2DEG;
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector3;

    #[test]
    fn test_meeus_example_37a() {
        // 1992 October 13.0 TD
        let state = PLUTO.compute(2448908.5, false);
        let p = state.position;
        let r = p.norm();
        let l = p[1].atan2(p[0]).rem_euclid(std::f64::consts::TAU) * RAD2DEG;
        let b = (p[2] / r).asin() * RAD2DEG;
        assert_abs_diff_eq!(l, 232.74071, epsilon = 1e-5);
        assert_abs_diff_eq!(b, 14.58782, epsilon = 1e-5);
        assert_abs_diff_eq!(r, 29.711111, epsilon = 1e-6);
    }

    #[test]
    fn test_term_count() {
        assert_eq!(TERMS.len(), 43);
    }

    #[test]
    fn test_velocity_only_when_requested() {
        let jd = 2448908.5;
        let without = PLUTO.compute(jd, false);
        let with = PLUTO.compute(jd, true);
        assert_eq!(without.velocity, Vector3::zeros());
        assert_eq!(without.position, with.position);
        assert!(with.velocity.norm() > 0.0);
    }
}

#[rustfmt::skip]
const TERMS: [PlutoTerm; 43] = [
    PlutoTerm { j: 0, s: 0, p: 1, lon: (-19.799805, 19.850055), lat: (-5.452852, -14.974862), rad: (6.6865439, 6.8951812) },
    PlutoTerm { j: 0, s: 0, p: 2, lon: (0.897144, -4.954829), lat: (3.527812, 1.67279), rad: (-1.1827535, -0.0332538) },
    PlutoTerm { j: 0, s: 0, p: 3, lon: (0.611149, 1.211027), lat: (-1.050748, 0.327647), rad: (0.1593179, -0.143889) },
    PlutoTerm { j: 0, s: 0, p: 4, lon: (-0.341243, -0.189585), lat: (0.17869, -0.292153), rad: (-0.0018444, 0.048322) },
    PlutoTerm { j: 0, s: 0, p: 5, lon: (0.129287, -0.034992), lat: (0.01865, 0.10034), rad: (-0.0065977, -0.0085431) },
    PlutoTerm { j: 0, s: 0, p: 6, lon: (-0.038164, 0.030893), lat: (-0.030697, -0.025823), rad: (0.0031174, -0.0006032) },
    PlutoTerm { j: 0, s: 1, p: -1, lon: (0.020442, -0.009987), lat: (0.004878, 0.011248), rad: (-0.0005794, 0.0022161) },
    PlutoTerm { j: 0, s: 1, p: 0, lon: (-0.004063, -0.005071), lat: (0.000226, -6.4e-05), rad: (0.0004601, 0.0004032) },
    PlutoTerm { j: 0, s: 1, p: 1, lon: (-0.006016, -0.003336), lat: (0.00203, -0.000836), rad: (-0.0001729, 2.34e-05) },
    PlutoTerm { j: 0, s: 1, p: 2, lon: (-0.003956, 0.003039), lat: (6.9e-05, -0.000604), rad: (-4.15e-05, 7.02e-05) },
    PlutoTerm { j: 0, s: 1, p: 3, lon: (-0.000667, 0.003572), lat: (-0.000247, -0.000567), rad: (2.39e-05, 7.23e-05) },
    PlutoTerm { j: 0, s: 2, p: -2, lon: (0.001276, 0.000501), lat: (-5.7e-05, 1e-06), rad: (6.7e-06, -6.7e-06) },
    PlutoTerm { j: 0, s: 2, p: -1, lon: (0.001152, -0.000917), lat: (-0.000122, 0.000175), rad: (0.0001034, -4.51e-05) },
    PlutoTerm { j: 0, s: 2, p: 0, lon: (0.00063, -0.001277), lat: (-4.9e-05, -0.000164), rad: (-1.29e-05, 5.04e-05) },
    PlutoTerm { j: 1, s: -1, p: 0, lon: (0.002571, -0.000459), lat: (-0.000197, 0.000199), rad: (4.8e-05, -2.31e-05) },
    PlutoTerm { j: 1, s: -1, p: 1, lon: (0.000899, -0.001449), lat: (-2.5e-05, 0.000217), rad: (2e-07, -4.41e-05) },
    PlutoTerm { j: 1, s: 0, p: -3, lon: (-0.001016, 0.001043), lat: (0.000589, -0.000248), rad: (-0.0003359, 2.65e-05) },
    PlutoTerm { j: 1, s: 0, p: -2, lon: (-0.002343, -0.001012), lat: (-0.000269, 0.000711), rad: (0.0007856, -0.0007832) },
    PlutoTerm { j: 1, s: 0, p: -1, lon: (0.007042, 0.000788), lat: (0.000185, 0.000193), rad: (3.6e-06, 0.0045763) },
    PlutoTerm { j: 1, s: 0, p: 0, lon: (0.001199, -0.000338), lat: (0.000315, 0.000807), rad: (0.0008663, 0.0008547) },
    PlutoTerm { j: 1, s: 0, p: 1, lon: (0.000418, -6.7e-05), lat: (-0.00013, -4.3e-05), rad: (-8.09e-05, -7.69e-05) },
    PlutoTerm { j: 1, s: 0, p: 2, lon: (0.00012, -0.000274), lat: (5e-06, 3e-06), rad: (2.63e-05, -1.44e-05) },
    PlutoTerm { j: 1, s: 0, p: 3, lon: (-6e-05, -0.000159), lat: (2e-06, 1.7e-05), rad: (-1.26e-05, 3.2e-06) },
    PlutoTerm { j: 1, s: 0, p: 4, lon: (-8.2e-05, -2.9e-05), lat: (2e-06, 5e-06), rad: (-3.5e-06, -1.6e-06) },
    PlutoTerm { j: 1, s: 1, p: -3, lon: (-3.6e-05, -2.9e-05), lat: (2e-06, 3e-06), rad: (-1.9e-06, -4e-07) },
    PlutoTerm { j: 1, s: 1, p: -2, lon: (-4e-05, 7e-06), lat: (3e-06, 1e-06), rad: (-1.5e-06, 8e-07) },
    PlutoTerm { j: 1, s: 1, p: -1, lon: (-1.4e-05, 2.2e-05), lat: (2e-06, -1e-06), rad: (-4e-07, 1.2e-06) },
    PlutoTerm { j: 1, s: 1, p: 0, lon: (4e-06, 1.3e-05), lat: (1e-06, -1e-06), rad: (5e-07, 6e-07) },
    PlutoTerm { j: 1, s: 1, p: 1, lon: (5e-06, 2e-06), lat: (0.0, -1e-06), rad: (3e-07, 1e-07) },
    PlutoTerm { j: 1, s: 1, p: 3, lon: (-1e-06, 0.0), lat: (0.0, 0.0), rad: (6e-07, -2e-07) },
    PlutoTerm { j: 2, s: 0, p: -6, lon: (2e-06, 0.0), lat: (0.0, -2e-06), rad: (2e-07, 2e-07) },
    PlutoTerm { j: 2, s: 0, p: -5, lon: (-4e-06, 5e-06), lat: (2e-06, 2e-06), rad: (-2e-07, -2e-07) },
    PlutoTerm { j: 2, s: 0, p: -4, lon: (4e-06, -7e-06), lat: (-7e-06, 0.0), rad: (1.4e-06, 1.3e-06) },
    PlutoTerm { j: 2, s: 0, p: -3, lon: (1.4e-05, 2.4e-05), lat: (1e-05, -8e-06), rad: (-6.3e-06, 1.3e-06) },
    PlutoTerm { j: 2, s: 0, p: -2, lon: (-4.9e-05, -3.4e-05), lat: (-3e-06, 2e-05), rad: (1.36e-05, -2.36e-05) },
    PlutoTerm { j: 2, s: 0, p: -1, lon: (0.000163, -4.8e-05), lat: (6e-06, 5e-06), rad: (2.73e-05, 0.0001065) },
    PlutoTerm { j: 2, s: 0, p: 0, lon: (9e-06, -2.4e-05), lat: (1.4e-05, 1.7e-05), rad: (2.51e-05, 1.49e-05) },
    PlutoTerm { j: 2, s: 0, p: 1, lon: (-4e-06, 1e-06), lat: (-2e-06, 0.0), rad: (-2.5e-06, -9e-07) },
    PlutoTerm { j: 2, s: 0, p: 2, lon: (-3e-06, 1e-06), lat: (0.0, 0.0), rad: (9e-07, -2e-07) },
    PlutoTerm { j: 2, s: 0, p: 3, lon: (1e-06, 3e-06), lat: (0.0, 0.0), rad: (-8e-07, 7e-07) },
    PlutoTerm { j: 3, s: 0, p: -2, lon: (-3e-06, -1e-06), lat: (0.0, 1e-06), rad: (2e-07, -1e-06) },
    PlutoTerm { j: 3, s: 0, p: -1, lon: (5e-06, -3e-06), lat: (0.0, 0.0), rad: (1.9e-06, 3.5e-06) },
    PlutoTerm { j: 3, s: 0, p: 0, lon: (0.0, 0.0), lat: (1e-06, 0.0), rad: (1e-06, 3e-07) },
];
