//! Reference frames, coordinate expressions and coordinate labels
//!
//! Every enumeration here carries a stable integer code shared with callers
//! that select frames and coordinates by number.

use lazy_static::lazy_static;
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference frame the coordinates of a body are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frame {
    /// Native frame of the body's theory (heliocentric ecliptic J2000 for the
    /// planets, geocentric ecliptic of date for the Moon)
    Theory,
    /// Heliocentric, geometric, rotated to FK5 J2000
    HeliocentricGeometric,
    /// Geocentric apparent, true ecliptic and equinox of date
    Ecliptic,
    /// Geocentric apparent, true equator and equinox of date
    Equatorial,
    HorizontalTopocentric,
    Galactic,
}

impl Frame {
    pub const ALL: [Frame; 6] = [
        Frame::Theory,
        Frame::HeliocentricGeometric,
        Frame::Ecliptic,
        Frame::Equatorial,
        Frame::HorizontalTopocentric,
        Frame::Galactic,
    ];

    pub fn code(&self) -> i32 {
        match self {
            Frame::Theory => 0,
            Frame::HeliocentricGeometric => 1,
            Frame::Ecliptic => 2,
            Frame::Equatorial => 3,
            Frame::HorizontalTopocentric => 5,
            Frame::Galactic => 6,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Frame::ALL.iter().copied().find(|f| f.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frame::Theory => "Frame of theory",
            Frame::HeliocentricGeometric => "Heliocentric geometric",
            Frame::Ecliptic => "Ecliptic geocentric",
            Frame::Equatorial => "Equatorial geocentric",
            Frame::HorizontalTopocentric => "Horizontal topocentric",
            Frame::Galactic => "Galactic",
        }
    }

    /// Whether the ephemeris pipeline can produce this frame
    pub fn is_supported(&self) -> bool {
        !matches!(self, Frame::HorizontalTopocentric | Frame::Galactic)
    }

    /// Frames the pipeline can produce
    pub fn supported() -> impl Iterator<Item = Frame> {
        Frame::ALL.into_iter().filter(|f| f.is_supported())
    }

    /// Labels of the three position axes in this frame
    pub fn coord_group(&self, expression: CoordinateExpression) -> CoordGroup {
        match (expression, self) {
            (CoordinateExpression::Cartesian, _) => CoordGroup::Xyz,
            (_, Frame::HeliocentricGeometric) => CoordGroup::DelBetLam,
            (_, Frame::Equatorial) => CoordGroup::DistAlphaDelta,
            _ => CoordGroup::Rlb,
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Cartesian or spherical representation of the six coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoordinateExpression {
    Cartesian,
    Spherical,
}

impl CoordinateExpression {
    pub fn code(&self) -> i32 {
        match self {
            CoordinateExpression::Cartesian => 0,
            CoordinateExpression::Spherical => 1,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(CoordinateExpression::Cartesian),
            1 => Some(CoordinateExpression::Spherical),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CoordinateExpression::Cartesian => "cartesian",
            CoordinateExpression::Spherical => "spherical",
        }
    }
}

/// Index of one of the six coordinates of a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Coord {
    X0,
    X1,
    X2,
    V0,
    V1,
    V2,
}

impl Coord {
    pub const ALL: [Coord; 6] = [
        Coord::X0,
        Coord::X1,
        Coord::X2,
        Coord::V0,
        Coord::V1,
        Coord::V2,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Coord::ALL.get(index).copied()
    }

    pub fn is_velocity(&self) -> bool {
        self.index() >= 3
    }

    /// Axis this coordinate belongs to (0, 1 or 2)
    pub fn axis(&self) -> usize {
        self.index() % 3
    }
}

/// Whether a coordinate selection needs velocities to be computed
pub fn contains_velocity(coords: &[Coord]) -> bool {
    coords.iter().any(Coord::is_velocity)
}

/// Naming convention for the three position axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordGroup {
    Xyz,
    DelBetLam,
    Rlb,
    DistAlphaDelta,
}

impl CoordGroup {
    pub fn labels(&self) -> [&'static str; 3] {
        match self {
            CoordGroup::Xyz => ["X", "Y", "Z"],
            CoordGroup::DelBetLam => ["del", "bet", "lam"],
            CoordGroup::Rlb => ["r", "l", "b"],
            CoordGroup::DistAlphaDelta => ["dist.", "alpha", "delta"],
        }
    }

    /// Label of a coordinate, velocities get a trailing prime
    pub fn label(&self, coord: Coord) -> String {
        let base = self.labels()[coord.axis()];
        if coord.is_velocity() {
            format!("{}'", base)
        } else {
            base.to_string()
        }
    }
}

lazy_static! {
    /// Rotation from the VSOP87 dynamical ecliptic frame (BRS) to FK5 J2000
    /// equatorial coordinates.
    ///
    /// The off-diagonal terms differ slightly from the textbook matrix; these
    /// are the values the reference outputs were produced with.
    pub static ref BRS_TO_FK5: Matrix3<f64> = Matrix3::new(
        1.0, 0.000000440360, -0.000000190919,
        -0.000000479966, 0.917482137087, -0.397776982902,
        0.0, 0.397776982902, 0.917482137087,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[test]
    fn test_frame_codes() {
        for frame in Frame::ALL {
            assert_eq!(Frame::from_code(frame.code()), Some(frame));
        }
        assert_eq!(Frame::from_code(4), None);
        assert_eq!(Frame::supported().count(), 4);
        assert!(!Frame::Galactic.is_supported());
    }

    #[rstest]
    #[case(Frame::Ecliptic, CoordinateExpression::Spherical, Coord::X1, "l")]
    #[case(Frame::Equatorial, CoordinateExpression::Spherical, Coord::V1, "alpha'")]
    #[case(Frame::HeliocentricGeometric, CoordinateExpression::Spherical, Coord::X0, "del")]
    #[case(Frame::Equatorial, CoordinateExpression::Cartesian, Coord::V2, "Z'")]
    fn test_coord_labels(
        #[case] frame: Frame,
        #[case] expression: CoordinateExpression,
        #[case] coord: Coord,
        #[case] expected: &str,
    ) {
        assert_eq!(frame.coord_group(expression).label(coord), expected);
    }

    #[test]
    fn test_contains_velocity() {
        assert!(!contains_velocity(&[Coord::X0, Coord::X2]));
        assert!(contains_velocity(&[Coord::X0, Coord::V2]));
        assert!(!contains_velocity(&[]));
    }

    #[test]
    fn test_brs_to_fk5_is_nearly_orthonormal() {
        let product = *BRS_TO_FK5 * BRS_TO_FK5.transpose();
        let identity = Matrix3::<f64>::identity();
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(product[(i, j)], identity[(i, j)], epsilon = 1e-8);
            }
        }
    }
}
