//! Precession and nutation
//!
//! [`MeanTrue`] evaluates, for a date and a fixed epoch, the precession
//! quantities of Simon et al. (1994) fitted to the 1992 IERS planetary masses, and the
//! IAU 1980 nutation in longitude and obliquity. It produces the rotation
//! matrices taking mean equatorial coordinates of the fixed epoch to true
//! equatorial (or true ecliptic) coordinates of the date.
//!
//! All quantities are computed once, at construction, and kept in arcseconds.

pub mod nutation;

use crate::constants::{ASEC2RAD, DAYS_PER_MILLENNIUM, J2000};
use nalgebra::Matrix3;

/// Named precession and nutation quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Ecliptic pole, sine component
    SsA,
    /// Ecliptic pole, cosine component
    ScA,
    /// Inclination of the ecliptic of date on the fixed ecliptic
    PiA,
    /// Longitude of the ascending node of the ecliptic of date
    BigPiA,
    /// General precession in longitude
    PA,
    ThetaA,
    ZetaA,
    ZA,
    /// Mean obliquity of the date
    EpsilonA,
    /// Inclination of the equator of date on the fixed ecliptic
    OmegaA,
    /// Luni-solar precession
    PsiA,
    /// Planetary precession
    ChiA,
    /// Nutation in longitude
    DeltaPsi,
    /// Nutation in obliquity
    DeltaEpsilon,
}

impl Quantity {
    pub const ALL: [Quantity; 14] = [
        Quantity::SsA,
        Quantity::ScA,
        Quantity::PiA,
        Quantity::BigPiA,
        Quantity::PA,
        Quantity::ThetaA,
        Quantity::ZetaA,
        Quantity::ZA,
        Quantity::EpsilonA,
        Quantity::OmegaA,
        Quantity::PsiA,
        Quantity::ChiA,
        Quantity::DeltaPsi,
        Quantity::DeltaEpsilon,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Precession and nutation between a fixed epoch and a date
#[derive(Debug, Clone, PartialEq)]
pub struct MeanTrue {
    date: f64,
    fixed_epoch: f64,
    quantities: [f64; 14],
}

impl MeanTrue {
    /// `date` and `fixed_epoch` are TT Julian days
    pub fn new(date: f64, fixed_epoch: f64) -> Self {
        let t = (date - fixed_epoch) / DAYS_PER_MILLENNIUM;
        let epoch = (fixed_epoch - J2000) / DAYS_PER_MILLENNIUM;
        let from_j2000 = fixed_epoch == J2000;

        let mut quantities = [0.0; 14];
        for (slot, rows) in quantities.iter_mut().zip(PRECESSION.iter()) {
            *slot = if from_j2000 {
                closed_form(rows, t)
            } else {
                bivariate(rows, t, epoch)
            };
        }
        let (delta_psi, delta_epsilon) = nutation::nutation(date);
        quantities[Quantity::DeltaPsi.index()] = delta_psi;
        quantities[Quantity::DeltaEpsilon.index()] = delta_epsilon;

        Self {
            date,
            fixed_epoch,
            quantities,
        }
    }

    pub fn date(&self) -> f64 {
        self.date
    }

    pub fn fixed_epoch(&self) -> f64 {
        self.fixed_epoch
    }

    /// A quantity in arcseconds
    pub fn quantity(&self, quantity: Quantity) -> f64 {
        self.quantities[quantity.index()]
    }

    /// True obliquity of the date, `ε_A + Δε`, in arcseconds
    pub fn true_obliquity(&self) -> f64 {
        self.quantity(Quantity::EpsilonA) + self.quantity(Quantity::DeltaEpsilon)
    }

    /// Rotation from mean equatorial coordinates of the fixed epoch to mean
    /// equatorial coordinates of the date
    pub fn precession_matrix(&self) -> Matrix3<f64> {
        let theta = self.quantity(Quantity::ThetaA) * ASEC2RAD;
        let zeta = self.quantity(Quantity::ZetaA) * ASEC2RAD;
        let z = self.quantity(Quantity::ZA) * ASEC2RAD;

        let (s_zzeta, c_zzeta) = (z + zeta).sin_cos();
        let (s_z, c_z) = z.sin_cos();
        let (s_zeta, c_zeta) = zeta.sin_cos();
        let (s_theta, c_theta) = theta.sin_cos();
        // 1 - cos(theta) without cancellation
        let s2_half = (theta / 2.0).sin().powi(2);

        Matrix3::new(
            c_zzeta - 2.0 * s2_half * c_z * c_zeta,
            -s_zzeta + 2.0 * s2_half * c_z * s_zeta,
            -c_z * s_theta,
            s_zzeta - 2.0 * s2_half * s_z * c_zeta,
            c_zzeta + 2.0 * s2_half * s_z * s_zeta,
            -s_z * s_theta,
            c_zeta * s_theta,
            -s_zeta * s_theta,
            c_theta,
        )
    }

    /// Rotation from mean equatorial to true equatorial coordinates of the date
    pub fn nutation_matrix(&self) -> Matrix3<f64> {
        let delta_psi = self.quantity(Quantity::DeltaPsi) * ASEC2RAD;
        let delta_epsilon = self.quantity(Quantity::DeltaEpsilon) * ASEC2RAD;
        let epsilon = self.quantity(Quantity::EpsilonA) * ASEC2RAD;
        let epsilon_true = epsilon + delta_epsilon;

        let (se, ce) = epsilon.sin_cos();
        let (sep, cep) = epsilon_true.sin_cos();
        let (sde, cde) = delta_epsilon.sin_cos();
        let (sdp, cdp) = delta_psi.sin_cos();
        let s2_half = (delta_psi / 2.0).sin().powi(2);

        Matrix3::new(
            cdp,
            -sdp * ce,
            -sdp * se,
            cep * sdp,
            cde - 2.0 * s2_half * ce * cep,
            -sde - 2.0 * s2_half * se * cep,
            sep * sdp,
            sde - 2.0 * s2_half * ce * sep,
            cde - 2.0 * s2_half * se * sep,
        )
    }

    /// Rotation from true equatorial to true ecliptic coordinates of the date
    pub fn true_eq_to_ecliptic_matrix(&self) -> Matrix3<f64> {
        let (sep, cep) = (self.true_obliquity() * ASEC2RAD).sin_cos();
        Matrix3::new(1.0, 0.0, 0.0, 0.0, cep, sep, 0.0, -sep, cep)
    }
}

/// `Σ_k rows[k][0] t^k`, the form taken when the fixed epoch is J2000
fn closed_form(rows: &[&[f64]], t: f64) -> f64 {
    rows.iter().rev().fold(0.0, |acc, row| {
        acc * t + row.first().copied().unwrap_or(0.0)
    })
}

/// `Σ_k Σ_j rows[k][j] T^j t^k`
fn bivariate(rows: &[&[f64]], t: f64, epoch: f64) -> f64 {
    rows.iter().rev().fold(0.0, |acc, row| {
        let coefficient = row.iter().rev().fold(0.0, |c, &a| c * epoch + a);
        acc * t + coefficient
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rstest::rstest;

    fn assert_orthonormal(m: &Matrix3<f64>) {
        let product = m * m.transpose();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_abs_diff_eq!(product[(i, j)], expected, epsilon = 1e-14);
            }
        }
    }

    #[rstest]
    #[case(Quantity::SsA, 24.2220)]
    #[case(Quantity::ScA, -127.1383)]
    #[case(Quantity::PiA, 129.4251)]
    #[case(Quantity::BigPiA, 609168.4721)]
    #[case(Quantity::PA, 13743.1819)]
    #[case(Quantity::ThetaA, 5495.9265)]
    #[case(Quantity::ZetaA, 6295.4464)]
    #[case(Quantity::ZA, 6301.3631)]
    #[case(Quantity::EpsilonA, 84509.5274)]
    #[case(Quantity::OmegaA, 84637.9977)]
    #[case(Quantity::PsiA, 13779.2840)]
    #[case(Quantity::ChiA, 39.3650)]
    fn test_arbitrary_epoch(#[case] quantity: Quantity, #[case] expected: f64) {
        // 273 years after an epoch 546 years before J2000
        let mt = MeanTrue::new(2351545.0, 2251545.0);
        assert_abs_diff_eq!(mt.quantity(quantity), expected, epsilon = 1e-3);
    }

    #[rstest]
    #[case(Quantity::ThetaA, 200.41589)]
    #[case(Quantity::ZetaA, 230.612139)]
    #[case(Quantity::ZA, 230.62007)]
    #[case(Quantity::EpsilonA, 84376.731044)]
    fn test_from_j2000(#[case] quantity: Quantity, #[case] expected: f64) {
        let mt = MeanTrue::new(J2000 + 3652.5, J2000);
        assert_abs_diff_eq!(mt.quantity(quantity), expected, epsilon = 1e-6);
    }

    #[test]
    fn test_closed_form_matches_bivariate_at_j2000() {
        for rows in PRECESSION.iter() {
            assert_relative_eq!(closed_form(rows, 0.37), bivariate(rows, 0.37, 0.0));
        }
    }

    #[test]
    fn test_no_precession_at_fixed_epoch() {
        let mt = MeanTrue::new(J2000, J2000);
        assert_eq!(mt.precession_matrix(), Matrix3::identity());
        assert_relative_eq!(mt.quantity(Quantity::EpsilonA), 84381.412);
    }

    #[test]
    fn test_matrices_are_rotations() {
        let mt = MeanTrue::new(2460000.5, J2000);
        assert_orthonormal(&mt.precession_matrix());
        assert_orthonormal(&mt.nutation_matrix());
        assert_orthonormal(&mt.true_eq_to_ecliptic_matrix());
    }

    #[test]
    fn test_nutation_matrix_first_order() {
        let mt = MeanTrue::new(J2000, J2000);
        let n = mt.nutation_matrix();
        let dpsi = mt.quantity(Quantity::DeltaPsi) * ASEC2RAD;
        let eps = mt.quantity(Quantity::EpsilonA) * ASEC2RAD;
        assert_abs_diff_eq!(n[(0, 1)], -dpsi * eps.cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(n[(0, 2)], -dpsi * eps.sin(), epsilon = 1e-12);
    }
}

/// Precession quantities `SsA` to `ChiA`, in arcseconds. Row `k` holds the
/// coefficients of `t^k` (millennia from the fixed epoch), column `j` those of
/// `T^j` (millennia from J2000 to the fixed epoch). The IERS 1992 mass
/// corrections are folded in.
#[rustfmt::skip]
const PRECESSION: [&[&[f64]]; 12] = [
    // ss_a
    &[
        &[],
        &[41.9961, -75.3294, 0.3179, 0.3178, 0.0007, -0.0004],
        &[19.3971, 0.574, -0.2541, -0.0005, 0.0006],
        &[-0.2235, 0.0859, 0.0033, -0.0003],
        &[-0.0104, -0.0004, 0.0002],
        &[0.0002],
    ],
    // sc_a
    &[
        &[],
        &[-468.0956, -0.0303, 5.9967, -0.0205, -0.0125, -0.0002],
        &[5.1043, -3.1633, -0.0326, 0.0138, -0.0002],
        &[0.5223, 0.0318, -0.0066, -0.0004],
        &[-0.0057, 0.0019, -0.0001],
        &[-0.0001],
    ],
    // pi_a
    &[
        &[],
        &[469.9756, -6.7011, 0.0448, -0.0019, -0.0001],
        &[-3.3505, 0.0448, -0.0028, -0.0002, 0.0001],
        &[-0.1237, -0.0004, -0.0002, 0.0001],
        &[0.0003, -0.0001, 0.0001],
    ],
    // PI_a
    &[
        &[629543.988, 32929.763, 95.352, -0.005, -0.459, -0.01],
        &[-8679.218, -15.851, -0.113, -0.448, -0.019],
        &[15.342, -0.019, -0.432, -0.023],
        &[0.005, -0.208, -0.015],
        &[-0.037, -0.005],
        &[-0.001],
    ],
    // P_a
    &[
        &[],
        &[50288.2, 222.4064, 0.2095, -0.9408, -0.009, 0.001],
        &[111.2033, 0.2095, -1.4111, -0.018, 0.0026],
        &[0.0773, -0.941, -0.018, 0.0035],
        &[-0.2353, -0.009, 0.0026],
        &[-0.0018, 0.001],
        &[0.0002],
    ],
    // theta_a
    &[
        &[],
        &[20042.0198, -85.3137, -0.2111, 0.3642, 0.0008, -0.0005],
        &[-42.6568, -0.2111, 0.5463, 0.0017, -0.0012],
        &[-41.8238, 0.0359, 0.0027, -0.0001],
        &[-0.0731, 0.0019, 0.0009],
        &[-0.0127, 0.0011],
        &[0.0004],
    ],
    // zeta_a
    &[
        &[],
        &[23060.9099, 139.7508, -0.0038, -0.5918, -0.0037, 0.0007],
        &[30.2228, -0.2523, -0.384, -0.0014, 0.0007],
        &[18.0183, -0.1326, 0.0006, 0.0005],
        &[-0.0583, -0.0001, 0.0007],
        &[-0.0285],
        &[-0.0002],
    ],
    // z_a
    &[
        &[],
        &[23060.9099, 139.7508, -0.0038, -0.5918, -0.0037, 0.0007],
        &[109.528, 0.2446, -1.3913, -0.0134, 0.0026],
        &[18.2667, -1.14, -0.0173, 0.0044],
        &[-0.2821, -0.0093, 0.0032],
        &[-0.0301, 0.0006],
        &[-0.0001],
    ],
    // epsilon_a
    &[
        &[84381.412, -468.0956, -0.0152, 1.9989, -0.0051, -0.0025],
        &[-468.0956, -0.0303, 5.9967, -0.0205, -0.0125, -0.0002],
        &[-0.0152, 5.9967, -0.0308, -0.025, -0.0006],
        &[1.9989, -0.0205, -0.025, -0.0008],
        &[-0.0051, -0.0125, -0.0006],
        &[-0.0025, -0.0002],
    ],
    // omega_a
    &[
        &[84381.412, -468.0956, -0.0152, 1.9989, -0.0051, -0.0025],
        &[],
        &[5.1294, -9.1954, 0.0298, 0.0389, 0.0002],
        &[-7.7276, 0.0235, 0.0987, -0.0001],
        &[-0.0048, 0.0954, -0.0007],
        &[0.0333, -0.0009],
        &[-0.0003],
    ],
    // psi_a
    &[
        &[],
        &[50385.0649, 49.2597, -0.1344, -0.2115, 0.0017, 0.0003],
        &[-107.2381, -1.0919, 1.3673, 0.0137, -0.0028],
        &[-1.1424, 2.6425, 0.0087, -0.0111],
        &[1.3279, -0.011, -0.017],
        &[-0.0094, -0.0123],
        &[-0.0035],
    ],
    // chi_a
    &[
        &[],
        &[105.5769, -188.8231, -0.1888, 0.795, 0.0101, -0.0009],
        &[-238.1396, -1.091, 3.0291, 0.029, -0.0059],
        &[-1.2117, 3.9055, 0.0229, -0.0159],
        &[1.7024, -0.0038, -0.0214],
        &[-0.0077, -0.0145],
        &[-0.004],
    ],
];
