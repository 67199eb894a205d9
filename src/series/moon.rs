//! Moon: truncated ELP-2000/82 series as given by Meeus, *Astronomical
//! Algorithms* ch. 47
//!
//! Unlike the planetary theories this one is geocentric, referred to the mean
//! ecliptic and equinox of date.

use super::{polynomial, span_around_j2000, spherical_state, Theory, TheoryState};
use crate::constants::{DAYS_PER_CENTURY, DEG2RAD, KM_PER_AU};
use crate::time::julian_centuries;

/// Term of longitude (`sl`, 1e-6 degree, sine) and distance (`sr`, 1e-3 km,
/// cosine)
#[derive(Debug, Clone, Copy)]
pub struct LrTerm {
    pub d: i32,
    pub m: i32,
    pub mp: i32,
    pub f: i32,
    pub sl: f64,
    pub sr: f64,
}

/// Term of latitude (`sb`, 1e-6 degree, sine)
#[derive(Debug, Clone, Copy)]
pub struct BTerm {
    pub d: i32,
    pub m: i32,
    pub mp: i32,
    pub f: i32,
    pub sb: f64,
}

// Fundamental arguments, degrees and powers of Julian centuries
const MEAN_LONGITUDE: [f64; 5] = [
    218.3164477,
    481267.88123421,
    -0.0015786,
    1.0 / 538841.0,
    -1.0 / 65194000.0,
];
const ELONGATION: [f64; 5] = [
    297.8501921,
    445267.1114034,
    -0.0018819,
    1.0 / 545868.0,
    -1.0 / 113065000.0,
];
const SUN_ANOMALY: [f64; 4] = [357.5291092, 35999.0502909, -0.0001536, 1.0 / 24490000.0];
const MOON_ANOMALY: [f64; 5] = [
    134.9633964,
    477198.8675055,
    0.0087414,
    1.0 / 69699.0,
    -1.0 / 14712000.0,
];
const LATITUDE_ARGUMENT: [f64; 5] = [
    93.2720950,
    483202.0175233,
    -0.0036539,
    -1.0 / 3526000.0,
    1.0 / 863310000.0,
];
// Venus, Jupiter and flattening perturbations
const A1: [f64; 2] = [119.75, 131.849];
const A2: [f64; 2] = [53.09, 479264.290];
const A3: [f64; 2] = [313.45, 481266.484];
/// Eccentricity of the Earth's orbit relative to J2000
const ECCENTRICITY: [f64; 3] = [1.0, -0.002516, -0.0000074];

const MEAN_DISTANCE_KM: f64 = 385000.56;

/// Angle in radians and its rate in radians per century
#[derive(Debug, Clone, Copy)]
struct Arg(f64, f64);

impl Arg {
    fn of(t: f64, coefficients: &[f64]) -> Self {
        let (value, rate) = polynomial(t, coefficients);
        Arg(value * DEG2RAD, rate * DEG2RAD)
    }

    fn combine(d: i32, m: i32, mp: i32, f: i32, args: &[Arg; 4]) -> Self {
        let k = [d as f64, m as f64, mp as f64, f as f64];
        (0..4).fold(Arg(0.0, 0.0), |acc, i| {
            Arg(acc.0 + k[i] * args[i].0, acc.1 + k[i] * args[i].1)
        })
    }

    /// `amplitude * sin(self)` and its rate
    fn sin(self, amplitude: f64) -> (f64, f64) {
        let (s, c) = self.0.sin_cos();
        (amplitude * s, amplitude * c * self.1)
    }
}

/// Factor `E^|m|` applied to terms involving the Sun's anomaly, and its rate
fn eccentricity_factor(m: i32, e: (f64, f64)) -> (f64, f64) {
    match m.abs() {
        0 => (1.0, 0.0),
        1 => e,
        _ => (e.0 * e.0, 2.0 * e.0 * e.1),
    }
}

#[derive(Debug)]
pub struct Moon;

pub static MOON: Moon = Moon;

impl Theory for Moon {
    fn name(&self) -> &'static str {
        "ELP-2000/82 (Meeus) Moon"
    }

    fn valid_span(&self) -> (f64, f64) {
        span_around_j2000(4000.0)
    }

    fn nominal_precision(&self) -> f64 {
        10.0
    }

    fn compute(&self, jd_tt: f64, with_velocity: bool) -> TheoryState {
        let t = julian_centuries(jd_tt);
        let l1 = Arg::of(t, &MEAN_LONGITUDE);
        let args = [
            Arg::of(t, &ELONGATION),
            Arg::of(t, &SUN_ANOMALY),
            Arg::of(t, &MOON_ANOMALY),
            Arg::of(t, &LATITUDE_ARGUMENT),
        ];
        let (mp, f) = (args[2], args[3]);
        let e = polynomial(t, &ECCENTRICITY);

        // 1e-6 degree for the angles, 1e-3 km for the distance
        let (mut sl, mut dsl) = (0.0, 0.0);
        let (mut sr, mut dsr) = (0.0, 0.0);
        for term in LR_TERMS.iter() {
            let arg = Arg::combine(term.d, term.m, term.mp, term.f, &args);
            let (ef, def) = eccentricity_factor(term.m, e);
            let (s, c) = arg.0.sin_cos();
            sl += term.sl * ef * s;
            sr += term.sr * ef * c;
            if with_velocity {
                dsl += term.sl * (def * s + ef * c * arg.1);
                dsr += term.sr * (def * c - ef * s * arg.1);
            }
        }

        let (mut sb, mut dsb) = (0.0, 0.0);
        for term in B_TERMS.iter() {
            let arg = Arg::combine(term.d, term.m, term.mp, term.f, &args);
            let (ef, def) = eccentricity_factor(term.m, e);
            let (s, c) = arg.0.sin_cos();
            sb += term.sb * ef * s;
            if with_velocity {
                dsb += term.sb * (def * s + ef * c * arg.1);
            }
        }

        let (a1, a2, a3) = (Arg::of(t, &A1), Arg::of(t, &A2), Arg::of(t, &A3));
        let diff = |x: Arg, y: Arg| Arg(x.0 - y.0, x.1 - y.1);
        let sum = |x: Arg, y: Arg| Arg(x.0 + y.0, x.1 + y.1);
        for (value, rate) in [
            a1.sin(3958.0),
            diff(l1, f).sin(1962.0),
            a2.sin(318.0),
        ] {
            sl += value;
            dsl += rate;
        }
        for (value, rate) in [
            l1.sin(-2235.0),
            a3.sin(382.0),
            diff(a1, f).sin(175.0),
            sum(a1, f).sin(175.0),
            diff(l1, mp).sin(127.0),
            sum(l1, mp).sin(-115.0),
        ] {
            sb += value;
            dsb += rate;
        }

        let micro_deg = 1.0e-6 * DEG2RAD;
        let lon = l1.0 + sl * micro_deg;
        let lat = sb * micro_deg;
        let distance = (MEAN_DISTANCE_KM + sr * 1.0e-3) / KM_PER_AU;
        if !with_velocity {
            return spherical_state(distance, lon, lat, 0.0, 0.0, 0.0);
        }
        spherical_state(
            distance,
            lon,
            lat,
            dsr * 1.0e-3 / KM_PER_AU / DAYS_PER_CENTURY,
            (l1.1 + dsl * micro_deg) / DAYS_PER_CENTURY,
            dsb * micro_deg / DAYS_PER_CENTURY,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RAD2DEG;
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector3;
    use rstest::rstest;

    #[rstest]
    // Meeus example 47.a, 1992 April 12.0 TD
    #[case(2448724.5, 133.162655, -3.229126, 368409.7)]
    #[case(2451545.0, 223.3187, 5.1713, 402444.8)]
    fn test_positions(
        #[case] jd: f64,
        #[case] lon_deg: f64,
        #[case] lat_deg: f64,
        #[case] distance_km: f64,
    ) {
        let p = MOON.compute(jd, false).position;
        let r = p.norm();
        let lon = p[1].atan2(p[0]).rem_euclid(std::f64::consts::TAU) * RAD2DEG;
        let lat = (p[2] / r).asin() * RAD2DEG;
        assert_abs_diff_eq!(lon, lon_deg, epsilon = 1e-4);
        assert_abs_diff_eq!(lat, lat_deg, epsilon = 1e-4);
        assert_abs_diff_eq!(r * KM_PER_AU, distance_km, epsilon = 0.1);
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(LR_TERMS.len(), 60);
        assert_eq!(B_TERMS.len(), 60);
    }

    #[rstest]
    #[case(2448724.5)]
    #[case(2451545.0)]
    fn test_velocity_only_when_requested(#[case] jd: f64) {
        let without = MOON.compute(jd, false);
        let with = MOON.compute(jd, true);
        assert_eq!(without.velocity, Vector3::zeros());
        assert_eq!(without.position, with.position);
        // roughly 1 km/s relative to the Earth
        let km_per_s = with.velocity.norm() * KM_PER_AU / 86400.0;
        assert!(km_per_s > 0.9 && km_per_s < 1.1, "{km_per_s}");
    }
}

#[rustfmt::skip]
const LR_TERMS: [LrTerm; 60] = [
    LrTerm { d: 0, m: 0, mp: 1, f: 0, sl: 6288774.0, sr: -20905355.0 },
    LrTerm { d: 2, m: 0, mp: -1, f: 0, sl: 1274027.0, sr: -3699111.0 },
    LrTerm { d: 2, m: 0, mp: 0, f: 0, sl: 658314.0, sr: -2955968.0 },
    LrTerm { d: 0, m: 0, mp: 2, f: 0, sl: 213618.0, sr: -569925.0 },
    LrTerm { d: 0, m: 1, mp: 0, f: 0, sl: -185116.0, sr: 48888.0 },
    LrTerm { d: 0, m: 0, mp: 0, f: 2, sl: -114332.0, sr: -3149.0 },
    LrTerm { d: 2, m: 0, mp: -2, f: 0, sl: 58793.0, sr: 246158.0 },
    LrTerm { d: 2, m: -1, mp: -1, f: 0, sl: 57066.0, sr: -152138.0 },
    LrTerm { d: 2, m: 0, mp: 1, f: 0, sl: 53322.0, sr: -170733.0 },
    LrTerm { d: 2, m: -1, mp: 0, f: 0, sl: 45758.0, sr: -204586.0 },
    LrTerm { d: 0, m: 1, mp: -1, f: 0, sl: -40923.0, sr: -129620.0 },
    LrTerm { d: 1, m: 0, mp: 0, f: 0, sl: -34720.0, sr: 108743.0 },
    LrTerm { d: 0, m: 1, mp: 1, f: 0, sl: -30383.0, sr: 104755.0 },
    LrTerm { d: 2, m: 0, mp: 0, f: -2, sl: 15327.0, sr: 10321.0 },
    LrTerm { d: 0, m: 0, mp: 1, f: 2, sl: -12528.0, sr: 0.0 },
    LrTerm { d: 0, m: 0, mp: 1, f: -2, sl: 10980.0, sr: 79661.0 },
    LrTerm { d: 4, m: 0, mp: -1, f: 0, sl: 10675.0, sr: -34782.0 },
    LrTerm { d: 0, m: 0, mp: 3, f: 0, sl: 10034.0, sr: -23210.0 },
    LrTerm { d: 4, m: 0, mp: -2, f: 0, sl: 8548.0, sr: -21636.0 },
    LrTerm { d: 2, m: 1, mp: -1, f: 0, sl: -7888.0, sr: 24208.0 },
    LrTerm { d: 2, m: 1, mp: 0, f: 0, sl: -6766.0, sr: 30824.0 },
    LrTerm { d: 1, m: 0, mp: -1, f: 0, sl: -5163.0, sr: -8379.0 },
    LrTerm { d: 1, m: 1, mp: 0, f: 0, sl: 4987.0, sr: -16675.0 },
    LrTerm { d: 2, m: -1, mp: 1, f: 0, sl: 4036.0, sr: -12831.0 },
    LrTerm { d: 2, m: 0, mp: 2, f: 0, sl: 3994.0, sr: -10445.0 },
    LrTerm { d: 4, m: 0, mp: 0, f: 0, sl: 3861.0, sr: -11650.0 },
    LrTerm { d: 2, m: 0, mp: -3, f: 0, sl: 3665.0, sr: 14403.0 },
    LrTerm { d: 0, m: 1, mp: -2, f: 0, sl: -2689.0, sr: -7003.0 },
    LrTerm { d: 2, m: 0, mp: -1, f: 2, sl: -2602.0, sr: 0.0 },
    LrTerm { d: 2, m: -1, mp: -2, f: 0, sl: 2390.0, sr: 10056.0 },
    LrTerm { d: 1, m: 0, mp: 1, f: 0, sl: -2348.0, sr: 6322.0 },
    LrTerm { d: 2, m: -2, mp: 0, f: 0, sl: 2236.0, sr: -9884.0 },
    LrTerm { d: 0, m: 1, mp: 2, f: 0, sl: -2120.0, sr: 5751.0 },
    LrTerm { d: 0, m: 2, mp: 0, f: 0, sl: -2069.0, sr: 0.0 },
    LrTerm { d: 2, m: -2, mp: -1, f: 0, sl: 2048.0, sr: -4950.0 },
    LrTerm { d: 2, m: 0, mp: 1, f: -2, sl: -1773.0, sr: 4130.0 },
    LrTerm { d: 2, m: 0, mp: 0, f: 2, sl: -1595.0, sr: 0.0 },
    LrTerm { d: 4, m: -1, mp: -1, f: 0, sl: 1215.0, sr: -3958.0 },
    LrTerm { d: 0, m: 0, mp: 2, f: 2, sl: -1110.0, sr: 0.0 },
    LrTerm { d: 3, m: 0, mp: -1, f: 0, sl: -892.0, sr: 3258.0 },
    LrTerm { d: 2, m: 1, mp: 1, f: 0, sl: -810.0, sr: 2616.0 },
    LrTerm { d: 4, m: -1, mp: -2, f: 0, sl: 759.0, sr: -1897.0 },
    LrTerm { d: 0, m: 2, mp: -1, f: 0, sl: -713.0, sr: -2117.0 },
    LrTerm { d: 2, m: 2, mp: -1, f: 0, sl: -700.0, sr: 2354.0 },
    LrTerm { d: 2, m: 1, mp: -2, f: 0, sl: 691.0, sr: 0.0 },
    LrTerm { d: 2, m: -1, mp: 0, f: -2, sl: 596.0, sr: 0.0 },
    LrTerm { d: 4, m: 0, mp: 1, f: 0, sl: 549.0, sr: -1423.0 },
    LrTerm { d: 0, m: 0, mp: 4, f: 0, sl: 537.0, sr: -1117.0 },
    LrTerm { d: 4, m: -1, mp: 0, f: 0, sl: 520.0, sr: -1571.0 },
    LrTerm { d: 1, m: 0, mp: -2, f: 0, sl: -487.0, sr: -1739.0 },
    LrTerm { d: 2, m: 1, mp: 0, f: -2, sl: -399.0, sr: 0.0 },
    LrTerm { d: 0, m: 0, mp: 2, f: -2, sl: -381.0, sr: -4421.0 },
    LrTerm { d: 1, m: 1, mp: 1, f: 0, sl: 351.0, sr: 0.0 },
    LrTerm { d: 3, m: 0, mp: -2, f: 0, sl: -340.0, sr: 0.0 },
    LrTerm { d: 4, m: 0, mp: -3, f: 0, sl: 330.0, sr: 0.0 },
    LrTerm { d: 2, m: -1, mp: 2, f: 0, sl: 327.0, sr: 0.0 },
    LrTerm { d: 0, m: 2, mp: 1, f: 0, sl: -323.0, sr: 1165.0 },
    LrTerm { d: 1, m: 1, mp: -1, f: 0, sl: 299.0, sr: 0.0 },
    LrTerm { d: 2, m: 0, mp: 3, f: 0, sl: 294.0, sr: 0.0 },
    LrTerm { d: 2, m: 0, mp: -1, f: -2, sl: 0.0, sr: 8752.0 },
];

#[rustfmt::skip]
const B_TERMS: [BTerm; 60] = [
    BTerm { d: 0, m: 0, mp: 0, f: 1, sb: 5128122.0 },
    BTerm { d: 0, m: 0, mp: 1, f: 1, sb: 280602.0 },
    BTerm { d: 0, m: 0, mp: 1, f: -1, sb: 277693.0 },
    BTerm { d: 2, m: 0, mp: 0, f: -1, sb: 173237.0 },
    BTerm { d: 2, m: 0, mp: -1, f: 1, sb: 55413.0 },
    BTerm { d: 2, m: 0, mp: -1, f: -1, sb: 46271.0 },
    BTerm { d: 2, m: 0, mp: 0, f: 1, sb: 32573.0 },
    BTerm { d: 0, m: 0, mp: 2, f: 1, sb: 17198.0 },
    BTerm { d: 2, m: 0, mp: 1, f: -1, sb: 9266.0 },
    BTerm { d: 0, m: 0, mp: 2, f: -1, sb: 8822.0 },
    BTerm { d: 2, m: -1, mp: 0, f: -1, sb: 8216.0 },
    BTerm { d: 2, m: 0, mp: -2, f: -1, sb: 4324.0 },
    BTerm { d: 2, m: 0, mp: 1, f: 1, sb: 4200.0 },
    BTerm { d: 2, m: 1, mp: 0, f: -1, sb: -3359.0 },
    BTerm { d: 2, m: -1, mp: -1, f: 1, sb: 2463.0 },
    BTerm { d: 2, m: -1, mp: 0, f: 1, sb: 2211.0 },
    BTerm { d: 2, m: -1, mp: -1, f: -1, sb: 2065.0 },
    BTerm { d: 0, m: 1, mp: -1, f: -1, sb: -1870.0 },
    BTerm { d: 4, m: 0, mp: -1, f: -1, sb: 1828.0 },
    BTerm { d: 0, m: 1, mp: 0, f: 1, sb: -1794.0 },
    BTerm { d: 0, m: 0, mp: 0, f: 3, sb: -1749.0 },
    BTerm { d: 0, m: 1, mp: -1, f: 1, sb: -1565.0 },
    BTerm { d: 1, m: 0, mp: 0, f: 1, sb: -1491.0 },
    BTerm { d: 0, m: 1, mp: 1, f: 1, sb: -1475.0 },
    BTerm { d: 0, m: 1, mp: 1, f: -1, sb: -1410.0 },
    BTerm { d: 0, m: 1, mp: 0, f: -1, sb: -1344.0 },
    BTerm { d: 1, m: 0, mp: 0, f: -1, sb: -1335.0 },
    BTerm { d: 0, m: 0, mp: 3, f: 1, sb: 1107.0 },
    BTerm { d: 4, m: 0, mp: 0, f: -1, sb: 1021.0 },
    BTerm { d: 4, m: 0, mp: -1, f: 1, sb: 833.0 },
    BTerm { d: 0, m: 0, mp: 1, f: -3, sb: 777.0 },
    BTerm { d: 4, m: 0, mp: -2, f: 1, sb: 671.0 },
    BTerm { d: 2, m: 0, mp: 0, f: -3, sb: 607.0 },
    BTerm { d: 2, m: 0, mp: 2, f: -1, sb: 596.0 },
    BTerm { d: 2, m: -1, mp: 1, f: -1, sb: 491.0 },
    BTerm { d: 2, m: 0, mp: -2, f: 1, sb: -451.0 },
    BTerm { d: 0, m: 0, mp: 3, f: -1, sb: 439.0 },
    BTerm { d: 2, m: 0, mp: 2, f: 1, sb: 422.0 },
    BTerm { d: 2, m: 0, mp: -3, f: -1, sb: 421.0 },
    BTerm { d: 2, m: 1, mp: -1, f: 1, sb: -366.0 },
    BTerm { d: 2, m: 1, mp: 0, f: 1, sb: -351.0 },
    BTerm { d: 4, m: 0, mp: 0, f: 1, sb: 331.0 },
    BTerm { d: 2, m: -1, mp: 1, f: 1, sb: 315.0 },
    BTerm { d: 2, m: -2, mp: 0, f: -1, sb: 302.0 },
    BTerm { d: 0, m: 0, mp: 1, f: 3, sb: -283.0 },
    BTerm { d: 2, m: 1, mp: 1, f: -1, sb: -229.0 },
    BTerm { d: 1, m: 1, mp: 0, f: -1, sb: 223.0 },
    BTerm { d: 1, m: 1, mp: 0, f: 1, sb: 223.0 },
    BTerm { d: 0, m: 1, mp: -2, f: -1, sb: -220.0 },
    BTerm { d: 2, m: 1, mp: -1, f: -1, sb: -220.0 },
    BTerm { d: 1, m: 0, mp: 1, f: 1, sb: -185.0 },
    BTerm { d: 2, m: -1, mp: -2, f: -1, sb: 181.0 },
    BTerm { d: 0, m: 1, mp: 2, f: 1, sb: -177.0 },
    BTerm { d: 4, m: 0, mp: -2, f: -1, sb: 176.0 },
    BTerm { d: 4, m: -1, mp: -1, f: -1, sb: 166.0 },
    BTerm { d: 1, m: 0, mp: 1, f: -1, sb: -164.0 },
    BTerm { d: 4, m: 0, mp: 1, f: -1, sb: 132.0 },
    BTerm { d: 1, m: 0, mp: -1, f: -1, sb: -119.0 },
    BTerm { d: 4, m: -1, mp: 0, f: -1, sb: 115.0 },
    BTerm { d: 2, m: -2, mp: 0, f: 1, sb: 107.0 },
];
