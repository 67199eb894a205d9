//! IAU 1980 nutation series

use crate::constants::ASEC2RAD;
use crate::time::julian_centuries;

/// One term of the series: multipliers of the Delaunay arguments
/// (l, l', F, D, Ω) and the constant and secular amplitudes of Δψ (sine) and
/// Δε (cosine). Constant parts are in 0.0001", secular parts in 0.00001" per
/// Julian century.
#[derive(Debug, Clone, Copy)]
pub struct NutationTerm {
    pub args: [i8; 5],
    pub psi: (f64, f64),
    pub eps: (f64, f64),
}

/// Delaunay arguments in arcseconds, as polynomials of Julian centuries:
/// mean anomalies of the Moon and Sun, Moon's argument of latitude, mean
/// elongation of the Moon and longitude of its ascending node
const DELAUNAY: [[f64; 5]; 5] = [
    [485868.249036, 1717915923.2178, 31.8792, 0.051635, 0.00024470],
    [1287104.793048, 129596581.0481, -0.5532, 0.000136, -0.00001149],
    [335779.526232, 1739527262.84, -12.7512, -0.001037, 0.00000417],
    [1072260.73512, 1602961601.209, -6.3706, 0.006593, 0.00003169],
    [450160.398036, -6962890.5431, 7.4722, 0.007702, 0.00005939],
];

/// Delaunay arguments at `t` Julian centuries from J2000, in radians
pub fn delaunay_arguments(t: f64) -> [f64; 5] {
    let mut out = [0.0; 5];
    for (arg, c) in out.iter_mut().zip(DELAUNAY.iter()) {
        let arcsec = c.iter().rev().fold(0.0, |acc, &a| acc * t + a);
        *arg = arcsec * ASEC2RAD;
    }
    out
}

/// Nutation in longitude and obliquity `(Δψ, Δε)`, in arcseconds, for a TT
/// Julian day
pub fn nutation(jd_tt: f64) -> (f64, f64) {
    let t = julian_centuries(jd_tt);
    let args = delaunay_arguments(t);

    let mut delta_psi = 0.0;
    let mut delta_epsilon = 0.0;
    for term in TERMS.iter() {
        let angle: f64 = term
            .args
            .iter()
            .zip(args.iter())
            .map(|(&k, &a)| k as f64 * a)
            .sum();
        let (sin, cos) = angle.sin_cos();
        delta_psi += (term.psi.0 + term.psi.1 * t / 10.0) * sin;
        delta_epsilon += (term.eps.0 + term.eps.1 * t / 10.0) * cos;
    }
    (delta_psi * 1.0e-4, delta_epsilon * 1.0e-4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::J2000;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_nutation_at_j2000() {
        let (dpsi, deps) = nutation(J2000);
        assert_abs_diff_eq!(dpsi, -13.923, epsilon = 1e-3);
        assert_abs_diff_eq!(deps, -5.774, epsilon = 1e-3);
    }

    #[test]
    fn test_dominant_term_is_the_node() {
        let first = &TERMS[0];
        assert_eq!(first.args, [0, 0, 0, 0, 1]);
        assert_abs_diff_eq!(first.psi.0 * 1e-4, -17.1996, epsilon = 1e-12);
        assert_abs_diff_eq!(first.eps.0 * 1e-4, 9.2025, epsilon = 1e-12);
    }

    #[test]
    fn test_amplitude_over_a_node_cycle() {
        // 18.6 years sampled every 10 days
        let max = (0..680)
            .map(|i| nutation(J2000 + i as f64 * 10.0).0.abs())
            .fold(0.0, f64::max);
        assert!(max > 17.0 && max < 19.5, "max |dpsi| = {}", max);
    }

    #[test]
    fn test_term_count() {
        assert_eq!(TERMS.len(), 106);
    }
}

#[rustfmt::skip]
const TERMS: [NutationTerm; 106] = [
    NutationTerm { args: [0, 0, 0, 0, 1], psi: (-171996.0, -1742.0), eps: (92025.0, 89.0) },
    NutationTerm { args: [0, 0, 0, 0, 2], psi: (2062.0, 2.0), eps: (-895.0, 5.0) },
    NutationTerm { args: [-2, 0, 2, 0, 1], psi: (46.0, 0.0), eps: (-24.0, 0.0) },
    NutationTerm { args: [2, 0, -2, 0, 0], psi: (11.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [-2, 0, 2, 0, 2], psi: (-3.0, 0.0), eps: (1.0, 0.0) },
    NutationTerm { args: [1, -1, 0, -1, 0], psi: (-3.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [0, -2, 2, -2, 1], psi: (-2.0, 0.0), eps: (1.0, 0.0) },
    NutationTerm { args: [2, 0, -2, 0, 1], psi: (1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [0, 0, 2, -2, 2], psi: (-13187.0, -16.0), eps: (5736.0, -31.0) },
    NutationTerm { args: [0, 1, 0, 0, 0], psi: (1426.0, -34.0), eps: (54.0, -1.0) },
    NutationTerm { args: [0, 1, 2, -2, 2], psi: (-517.0, 12.0), eps: (224.0, -6.0) },
    NutationTerm { args: [0, -1, 2, -2, 2], psi: (217.0, -5.0), eps: (-95.0, 3.0) },
    NutationTerm { args: [0, 0, 2, -2, 1], psi: (129.0, 1.0), eps: (-70.0, 0.0) },
    NutationTerm { args: [2, 0, 0, -2, 0], psi: (48.0, 0.0), eps: (1.0, 0.0) },
    NutationTerm { args: [0, 0, 2, -2, 0], psi: (-22.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [0, 2, 0, 0, 0], psi: (17.0, -1.0), eps: (0.0, 0.0) },
    NutationTerm { args: [0, 1, 0, 0, 1], psi: (-15.0, 0.0), eps: (9.0, 0.0) },
    NutationTerm { args: [0, 2, 2, -2, 2], psi: (-16.0, 1.0), eps: (7.0, 0.0) },
    NutationTerm { args: [0, -1, 0, 0, 1], psi: (-12.0, 0.0), eps: (6.0, 0.0) },
    NutationTerm { args: [-2, 0, 0, 2, 1], psi: (-6.0, 0.0), eps: (3.0, 0.0) },
    NutationTerm { args: [0, -1, 2, -2, 1], psi: (-5.0, 0.0), eps: (3.0, 0.0) },
    NutationTerm { args: [2, 0, 0, -2, 1], psi: (4.0, 0.0), eps: (-2.0, 0.0) },
    NutationTerm { args: [0, 1, 2, -2, 1], psi: (4.0, 0.0), eps: (-2.0, 0.0) },
    NutationTerm { args: [1, 0, 0, -1, 0], psi: (-4.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [2, 1, 0, -2, 0], psi: (1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [0, 0, -2, 2, 1], psi: (1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [0, 1, -2, 2, 0], psi: (-1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [0, 1, 0, 0, 2], psi: (1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [-1, 0, 0, 1, 1], psi: (1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [0, 1, 2, -2, 0], psi: (-1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [0, 0, 2, 0, 2], psi: (-2274.0, -2.0), eps: (977.0, -5.0) },
    NutationTerm { args: [1, 0, 0, 0, 0], psi: (712.0, 1.0), eps: (-7.0, 0.0) },
    NutationTerm { args: [0, 0, 2, 0, 1], psi: (-386.0, -4.0), eps: (200.0, 0.0) },
    NutationTerm { args: [1, 0, 2, 0, 2], psi: (-301.0, 0.0), eps: (129.0, -1.0) },
    NutationTerm { args: [1, 0, 0, -2, 0], psi: (-158.0, 0.0), eps: (-1.0, 0.0) },
    NutationTerm { args: [-1, 0, 2, 0, 2], psi: (123.0, 0.0), eps: (-53.0, 0.0) },
    NutationTerm { args: [0, 0, 0, 2, 0], psi: (63.0, 0.0), eps: (-2.0, 0.0) },
    NutationTerm { args: [1, 0, 0, 0, 1], psi: (63.0, 1.0), eps: (-33.0, 0.0) },
    NutationTerm { args: [-1, 0, 0, 0, 1], psi: (-58.0, -1.0), eps: (32.0, 0.0) },
    NutationTerm { args: [-1, 0, 2, 2, 2], psi: (-59.0, 0.0), eps: (26.0, 0.0) },
    NutationTerm { args: [1, 0, 2, 0, 1], psi: (-51.0, 0.0), eps: (27.0, 0.0) },
    NutationTerm { args: [0, 0, 2, 2, 2], psi: (-38.0, 0.0), eps: (16.0, 0.0) },
    NutationTerm { args: [2, 0, 0, 0, 0], psi: (29.0, 0.0), eps: (-1.0, 0.0) },
    NutationTerm { args: [1, 0, 2, -2, 2], psi: (29.0, 0.0), eps: (-12.0, 0.0) },
    NutationTerm { args: [2, 0, 2, 0, 2], psi: (-31.0, 0.0), eps: (13.0, 0.0) },
    NutationTerm { args: [0, 0, 2, 0, 0], psi: (26.0, 0.0), eps: (-1.0, 0.0) },
    NutationTerm { args: [-1, 0, 2, 0, 1], psi: (21.0, 0.0), eps: (-10.0, 0.0) },
    NutationTerm { args: [-1, 0, 0, 2, 1], psi: (16.0, 0.0), eps: (-8.0, 0.0) },
    NutationTerm { args: [1, 0, 0, -2, 1], psi: (-13.0, 0.0), eps: (7.0, 0.0) },
    NutationTerm { args: [-1, 0, 2, 2, 1], psi: (-10.0, 0.0), eps: (5.0, 0.0) },
    NutationTerm { args: [1, 1, 0, -2, 0], psi: (-7.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [0, 1, 2, 0, 2], psi: (7.0, 0.0), eps: (-3.0, 0.0) },
    NutationTerm { args: [0, -1, 2, 0, 2], psi: (-7.0, 0.0), eps: (3.0, 0.0) },
    NutationTerm { args: [1, 0, 2, 2, 2], psi: (-8.0, 0.0), eps: (3.0, 0.0) },
    NutationTerm { args: [1, 0, 0, 2, 0], psi: (6.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [2, 0, 2, -2, 2], psi: (6.0, 0.0), eps: (-3.0, 0.0) },
    NutationTerm { args: [0, 0, 0, 2, 1], psi: (-6.0, 0.0), eps: (3.0, 0.0) },
    NutationTerm { args: [0, 0, 2, 2, 1], psi: (-7.0, 0.0), eps: (3.0, 0.0) },
    NutationTerm { args: [1, 0, 2, -2, 1], psi: (6.0, 0.0), eps: (-3.0, 0.0) },
    NutationTerm { args: [0, 0, 0, -2, 1], psi: (-5.0, 0.0), eps: (3.0, 0.0) },
    NutationTerm { args: [1, -1, 0, 0, 0], psi: (5.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [2, 0, 2, 0, 1], psi: (-5.0, 0.0), eps: (3.0, 0.0) },
    NutationTerm { args: [0, 1, 0, -2, 0], psi: (-4.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [1, 0, -2, 0, 0], psi: (4.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [0, 0, 0, 1, 0], psi: (-4.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [1, 1, 0, 0, 0], psi: (-3.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [1, 0, 2, 0, 0], psi: (3.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [1, -1, 2, 0, 2], psi: (-3.0, 0.0), eps: (1.0, 0.0) },
    NutationTerm { args: [-1, -1, 2, 2, 2], psi: (-3.0, 0.0), eps: (1.0, 0.0) },
    NutationTerm { args: [-2, 0, 0, 0, 1], psi: (-2.0, 0.0), eps: (1.0, 0.0) },
    NutationTerm { args: [3, 0, 2, 0, 2], psi: (-3.0, 0.0), eps: (1.0, 0.0) },
    NutationTerm { args: [0, -1, 2, 2, 2], psi: (-3.0, 0.0), eps: (1.0, 0.0) },
    NutationTerm { args: [1, 1, 2, 0, 2], psi: (2.0, 0.0), eps: (-1.0, 0.0) },
    NutationTerm { args: [-1, 0, 2, -2, 1], psi: (-2.0, 0.0), eps: (1.0, 0.0) },
    NutationTerm { args: [2, 0, 0, 0, 1], psi: (2.0, 0.0), eps: (-1.0, 0.0) },
    NutationTerm { args: [1, 0, 0, 0, 2], psi: (-2.0, 0.0), eps: (1.0, 0.0) },
    NutationTerm { args: [3, 0, 0, 0, 0], psi: (2.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [0, 0, 2, 1, 2], psi: (2.0, 0.0), eps: (-1.0, 0.0) },
    NutationTerm { args: [-1, 0, 0, 0, 2], psi: (1.0, 0.0), eps: (-1.0, 0.0) },
    NutationTerm { args: [1, 0, 0, -4, 0], psi: (-1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [-2, 0, 2, 2, 2], psi: (1.0, 0.0), eps: (-1.0, 0.0) },
    NutationTerm { args: [-1, 0, 2, 4, 2], psi: (-2.0, 0.0), eps: (1.0, 0.0) },
    NutationTerm { args: [2, 0, 0, -4, 0], psi: (-1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [1, 1, 2, -2, 2], psi: (1.0, 0.0), eps: (-1.0, 0.0) },
    NutationTerm { args: [1, 0, 2, 2, 1], psi: (-1.0, 0.0), eps: (1.0, 0.0) },
    NutationTerm { args: [-2, 0, 2, 4, 2], psi: (-1.0, 0.0), eps: (1.0, 0.0) },
    NutationTerm { args: [-1, 0, 4, 0, 2], psi: (1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [1, -1, 0, -2, 0], psi: (1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [2, 0, 2, -2, 1], psi: (1.0, 0.0), eps: (-1.0, 0.0) },
    NutationTerm { args: [2, 0, 2, 2, 2], psi: (-1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [1, 0, 0, 2, 1], psi: (-1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [0, 0, 4, -2, 2], psi: (1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [3, 0, 2, -2, 2], psi: (1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [1, 0, 2, -2, 0], psi: (-1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [0, 1, 2, 0, 1], psi: (1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [-1, -1, 0, 2, 1], psi: (1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [0, 0, -2, 0, 1], psi: (-1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [0, 0, 2, -1, 2], psi: (-1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [0, 1, 0, 2, 0], psi: (-1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [1, 0, -2, -2, 0], psi: (-1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [0, -1, 2, 0, 1], psi: (-1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [1, 1, 0, -2, 1], psi: (-1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [1, 0, -2, 2, 0], psi: (-1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [2, 0, 0, 2, 0], psi: (1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [0, 0, 2, 4, 2], psi: (-1.0, 0.0), eps: (0.0, 0.0) },
    NutationTerm { args: [0, 1, 0, 1, 0], psi: (1.0, 0.0), eps: (0.0, 0.0) },
];
