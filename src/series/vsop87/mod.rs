//! VSOP87A planetary theory
//!
//! Heliocentric rectangular coordinates referred to the dynamical ecliptic and
//! equinox J2000. For each axis the series is a polynomial in `t` (Julian
//! millennia from J2000 TDB) whose coefficients are sums of periodic terms:
//!
//! `X = Σ_p t^p Σ_k A_k cos(B_k + C_k t)`
//!
//! The tables hold only the terms needed for the nominal precision of each
//! planet; they were truncated offline with the `vsop87_truncate` tool.

mod earth;
mod jupiter;
mod mars;
mod mercury;
mod neptune;
mod saturn;
mod uranus;
mod venus;

use super::{span_around_j2000, Term, Theory, TheoryState};
use crate::constants::DAYS_PER_MILLENNIUM;
use crate::time::julian_millennia;
use nalgebra::Vector3;

/// Series of one planet, indexed by axis then power of time
pub type Series = [[&'static [Term]; 6]; 3];

/// One planet of the VSOP87A theory
#[derive(Debug)]
pub struct Vsop87 {
    name: &'static str,
    series: &'static Series,
    span_years: f64,
    precision: f64,
}

pub static MERCURY: Vsop87 = Vsop87 {
    name: "VSOP87A Mercury",
    series: &mercury::SERIES,
    span_years: 4000.0,
    precision: 1.0,
};
pub static VENUS: Vsop87 = Vsop87 {
    name: "VSOP87A Venus",
    series: &venus::SERIES,
    span_years: 4000.0,
    precision: 1.0,
};
pub static EARTH: Vsop87 = Vsop87 {
    name: "VSOP87A Earth",
    series: &earth::SERIES,
    span_years: 4000.0,
    precision: 1.0,
};
pub static MARS: Vsop87 = Vsop87 {
    name: "VSOP87A Mars",
    series: &mars::SERIES,
    span_years: 4000.0,
    precision: 1.0,
};
pub static JUPITER: Vsop87 = Vsop87 {
    name: "VSOP87A Jupiter",
    series: &jupiter::SERIES,
    span_years: 2000.0,
    precision: 2.0,
};
pub static SATURN: Vsop87 = Vsop87 {
    name: "VSOP87A Saturn",
    series: &saturn::SERIES,
    span_years: 2000.0,
    precision: 2.0,
};
pub static URANUS: Vsop87 = Vsop87 {
    name: "VSOP87A Uranus",
    series: &uranus::SERIES,
    span_years: 6000.0,
    precision: 2.0,
};
pub static NEPTUNE: Vsop87 = Vsop87 {
    name: "VSOP87A Neptune",
    series: &neptune::SERIES,
    span_years: 6000.0,
    precision: 2.0,
};

impl Vsop87 {
    /// Number of periodic terms kept for this planet
    pub fn term_count(&self) -> usize {
        self.series.iter().flatten().map(|terms| terms.len()).sum()
    }
}

impl Theory for Vsop87 {
    fn name(&self) -> &'static str {
        self.name
    }

    fn valid_span(&self) -> (f64, f64) {
        span_around_j2000(self.span_years)
    }

    fn nominal_precision(&self) -> f64 {
        self.precision
    }

    fn compute(&self, jd_tt: f64, with_velocity: bool) -> TheoryState {
        let t = julian_millennia(jd_tt);
        let mut position = Vector3::zeros();
        let mut velocity = Vector3::zeros();

        for (axis, powers) in self.series.iter().enumerate() {
            // t^(p-1) and t^p, advanced together
            let mut t_prev = 0.0;
            let mut t_pow = 1.0;
            for (p, terms) in powers.iter().enumerate() {
                let mut sum = 0.0;
                let mut dsum = 0.0;
                for &(a, b, c) in terms.iter() {
                    let (sin, cos) = (b + c * t).sin_cos();
                    sum += a * cos;
                    if with_velocity {
                        dsum -= a * c * sin;
                    }
                }
                position[axis] += sum * t_pow;
                if with_velocity {
                    velocity[axis] += p as f64 * t_prev * sum + t_pow * dsum;
                }
                t_prev = t_pow;
                t_pow *= t;
            }
        }

        TheoryState {
            position,
            velocity: velocity / DAYS_PER_MILLENNIUM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::J2000;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_term_counts() {
        let total: usize = [
            &MERCURY, &VENUS, &EARTH, &MARS, &JUPITER, &SATURN, &URANUS, &NEPTUNE,
        ]
        .iter()
        .map(|planet| planet.term_count())
        .sum();
        assert_eq!(MERCURY.term_count(), 135);
        assert_eq!(EARTH.term_count(), 120);
        assert_eq!(JUPITER.term_count(), 360);
        assert_eq!(total, 2094);
    }

    #[test]
    fn test_earth_at_j2000() {
        // Full VSOP87A: X = -0.1771354, Y = 0.9672416, Z = -0.0000039 AU;
        // 1e-5 AU is about 2" seen from the Sun
        let state = EARTH.compute(J2000, true);
        assert_abs_diff_eq!(state.position[0], -0.1771354, epsilon = 1e-5);
        assert_abs_diff_eq!(state.position[1], 0.9672416, epsilon = 1e-5);
        assert_abs_diff_eq!(state.position[2], 0.0, epsilon = 1e-5);
        // about 1 degree per day on a unit circle
        assert_abs_diff_eq!(state.velocity.norm(), 0.0172, epsilon = 3e-4);
    }

    #[test]
    fn test_spans() {
        let (start, end) = JUPITER.valid_span();
        assert_abs_diff_eq!(end - start, 4000.0 * 365.25, epsilon = 1e-6);
        let (start, _) = NEPTUNE.valid_span();
        assert_abs_diff_eq!(start, J2000 - 6000.0 * 365.25, epsilon = 1e-6);
    }
}
