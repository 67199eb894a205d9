//! Unit taxonomy and conversions
//!
//! Units are grouped in four types (distances, linear speeds, angles and
//! angular speeds). Their stable integer codes are `type * 100 + offset`, so the
//! type of a unit can be read back from its code. Conversions only happen
//! between units of the same type; the [`Unit::Unspecified`] sentinel never
//! fails and yields NaN instead.

use crate::constants::{ASEC2RAD, DAY_H, DAY_S, DEG2RAD, KM_PER_AU};
use crate::{Result, SolarfieldError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four families of units a coordinate can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    Distance,
    LinearSpeed,
    Angular,
    AngularSpeed,
}

impl UnitType {
    /// Stable code, also the hundreds digit of every unit of this type
    pub fn code(&self) -> i32 {
        match self {
            UnitType::Distance => 0,
            UnitType::LinearSpeed => 1,
            UnitType::Angular => 2,
            UnitType::AngularSpeed => 3,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(UnitType::Distance),
            1 => Some(UnitType::LinearSpeed),
            2 => Some(UnitType::Angular),
            3 => Some(UnitType::AngularSpeed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UnitType::Distance => "distance",
            UnitType::LinearSpeed => "linear speed",
            UnitType::Angular => "angle",
            UnitType::AngularSpeed => "angular speed",
        }
    }
}

/// A unit tag attached to one coordinate axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    // Distances
    Au,
    Km,
    M,
    // Linear speeds
    AuPerDay,
    KmPerDay,
    KmPerHour,
    MPerS,
    // Angles
    Arcsec,
    Deg,
    Rad,
    // Angular speeds
    ArcsecPerS,
    DegPerS,
    ArcsecPerDay,
    DegPerDay,
    RadPerDay,
    /// No unit given; conversions from or to it produce NaN
    Unspecified,
}

const DISTANCES: [Unit; 3] = [Unit::Au, Unit::Km, Unit::M];
const LINEAR_SPEEDS: [Unit; 4] = [Unit::AuPerDay, Unit::KmPerDay, Unit::KmPerHour, Unit::MPerS];
const ANGLES: [Unit; 3] = [Unit::Arcsec, Unit::Deg, Unit::Rad];
const ANGULAR_SPEEDS: [Unit; 5] = [
    Unit::ArcsecPerS,
    Unit::DegPerS,
    Unit::ArcsecPerDay,
    Unit::DegPerDay,
    Unit::RadPerDay,
];

impl Unit {
    /// Every specified unit, in code order
    pub const ALL: [Unit; 15] = [
        Unit::Au,
        Unit::Km,
        Unit::M,
        Unit::AuPerDay,
        Unit::KmPerDay,
        Unit::KmPerHour,
        Unit::MPerS,
        Unit::Arcsec,
        Unit::Deg,
        Unit::Rad,
        Unit::ArcsecPerS,
        Unit::DegPerS,
        Unit::ArcsecPerDay,
        Unit::DegPerDay,
        Unit::RadPerDay,
    ];

    /// Stable integer code (`type * 100 + offset`, -1 for unspecified)
    pub fn code(&self) -> i32 {
        match self {
            Unit::Au => 0,
            Unit::Km => 1,
            Unit::M => 2,
            Unit::AuPerDay => 100,
            Unit::KmPerDay => 101,
            Unit::KmPerHour => 102,
            Unit::MPerS => 103,
            Unit::Arcsec => 200,
            Unit::Deg => 201,
            Unit::Rad => 202,
            Unit::ArcsecPerS => 300,
            Unit::DegPerS => 301,
            Unit::ArcsecPerDay => 302,
            Unit::DegPerDay => 303,
            Unit::RadPerDay => 304,
            Unit::Unspecified => -1,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        if code == -1 {
            return Some(Unit::Unspecified);
        }
        Unit::ALL.iter().copied().find(|u| u.code() == code)
    }

    /// Type of the unit, `None` for [`Unit::Unspecified`]
    pub fn unit_type(&self) -> Option<UnitType> {
        match self {
            Unit::Unspecified => None,
            _ => UnitType::from_code(self.code() / 100),
        }
    }

    /// Short label used in tables
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Au => "a.u.",
            Unit::Km => "km",
            Unit::M => "m",
            Unit::AuPerDay => "a.u./d",
            Unit::KmPerDay => "km/d",
            Unit::KmPerHour => "km/h",
            Unit::MPerS => "m/s",
            Unit::Arcsec => "arcsec",
            Unit::Deg => "deg",
            Unit::Rad => "rad",
            Unit::ArcsecPerS => "arcsec/s",
            Unit::DegPerS => "deg/s",
            Unit::ArcsecPerDay => "arcsec/d",
            Unit::DegPerDay => "deg/d",
            Unit::RadPerDay => "rad/d",
            Unit::Unspecified => "",
        }
    }

    /// Value of one of this unit in the base unit of its type
    /// (km, km/d, rad, rad/d)
    fn factor(&self) -> f64 {
        match self {
            Unit::Au => KM_PER_AU,
            Unit::Km => 1.0,
            Unit::M => 1.0e-3,
            Unit::AuPerDay => KM_PER_AU,
            Unit::KmPerDay => 1.0,
            Unit::KmPerHour => DAY_H,
            Unit::MPerS => DAY_S * 1.0e-3,
            Unit::Arcsec => ASEC2RAD,
            Unit::Deg => DEG2RAD,
            Unit::Rad => 1.0,
            Unit::ArcsecPerS => ASEC2RAD * DAY_S,
            Unit::DegPerS => DEG2RAD * DAY_S,
            Unit::ArcsecPerDay => ASEC2RAD,
            Unit::DegPerDay => DEG2RAD,
            Unit::RadPerDay => 1.0,
            Unit::Unspecified => f64::NAN,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// All units belonging to a type
pub fn units_of_type(unit_type: UnitType) -> &'static [Unit] {
    match unit_type {
        UnitType::Distance => &DISTANCES,
        UnitType::LinearSpeed => &LINEAR_SPEEDS,
        UnitType::Angular => &ANGLES,
        UnitType::AngularSpeed => &ANGULAR_SPEEDS,
    }
}

/// Converts a single value.
///
/// Returns NaN if either unit is unspecified and an error if the two units
/// have different types.
pub fn convert_value(value: f64, from: Unit, to: Unit) -> Result<f64> {
    match (from.unit_type(), to.unit_type()) {
        (Some(a), Some(b)) if a != b => Err(SolarfieldError::UnitMismatch(format!(
            "{} ({}) -> {} ({})",
            from,
            a.label(),
            to,
            b.label()
        ))),
        (Some(_), Some(_)) if from == to => Ok(value),
        (Some(_), Some(_)) => Ok(value * from.factor() / to.factor()),
        _ => Ok(f64::NAN),
    }
}

/// Converts three values axis by axis.
///
/// Every axis is checked before anything is converted; the error message
/// lists all mismatching pairs.
///
/// # Examples
///
/// ```
/// use solarfield::units::{convert, Unit};
///
/// let out = convert(
///     [1.0, 180.0, 90.0],
///     [Unit::Au, Unit::Deg, Unit::Deg],
///     [Unit::Km, Unit::Rad, Unit::Unspecified],
/// ).unwrap();
/// assert_eq!(out[0], 149_597_870.61);
/// assert!((out[1] - std::f64::consts::PI).abs() < 1e-15);
/// assert!(out[2].is_nan());
/// ```
pub fn convert(values: [f64; 3], from: [Unit; 3], to: [Unit; 3]) -> Result<[f64; 3]> {
    let mismatches: Vec<String> = (0..3)
        .filter_map(|i| match (from[i].unit_type(), to[i].unit_type()) {
            (Some(a), Some(b)) if a != b => Some(format!("axis {}: {} -> {}", i, from[i], to[i])),
            _ => None,
        })
        .collect();
    if !mismatches.is_empty() {
        return Err(SolarfieldError::UnitMismatch(mismatches.join(", ")));
    }

    let mut out = [0.0; 3];
    for i in 0..3 {
        out[i] = convert_value(values[i], from[i], to[i])?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::Rng;
    use rstest::rstest;

    #[test]
    fn test_codes_roundtrip() {
        for unit in Unit::ALL {
            assert_eq!(Unit::from_code(unit.code()), Some(unit));
            let unit_type = unit.unit_type().unwrap();
            assert!(units_of_type(unit_type).contains(&unit));
        }
        assert_eq!(Unit::from_code(-1), Some(Unit::Unspecified));
        assert_eq!(Unit::from_code(4), None);
        assert_eq!(Unit::Unspecified.unit_type(), None);
    }

    #[rstest]
    #[case(Unit::Au, UnitType::Distance)]
    #[case(Unit::MPerS, UnitType::LinearSpeed)]
    #[case(Unit::Rad, UnitType::Angular)]
    #[case(Unit::DegPerDay, UnitType::AngularSpeed)]
    fn test_unit_type_from_code(#[case] unit: Unit, #[case] expected: UnitType) {
        assert_eq!(unit.unit_type(), Some(expected));
    }

    #[rstest]
    #[case(1.0, Unit::Au, Unit::Km, 149_597_870.61)]
    #[case(1500.0, Unit::M, Unit::Km, 1.5)]
    #[case(1.0, Unit::KmPerHour, Unit::KmPerDay, 24.0)]
    #[case(1.0, Unit::MPerS, Unit::KmPerDay, 86.4)]
    #[case(3600.0, Unit::Arcsec, Unit::Deg, 1.0)]
    #[case(1.0, Unit::DegPerS, Unit::DegPerDay, 86_400.0)]
    #[case(1.0, Unit::ArcsecPerS, Unit::ArcsecPerDay, 86_400.0)]
    fn test_convert_value(
        #[case] value: f64,
        #[case] from: Unit,
        #[case] to: Unit,
        #[case] expected: f64,
    ) {
        assert_relative_eq!(
            convert_value(value, from, to).unwrap(),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_unspecified_gives_nan_not_error() {
        let out = convert(
            [1.0, 2.0, 3.0],
            [Unit::Au, Unit::Unspecified, Unit::Deg],
            [Unit::Km, Unit::Deg, Unit::Unspecified],
        )
        .unwrap();
        assert_relative_eq!(out[0], 149_597_870.61);
        assert!(out[1].is_nan());
        assert!(out[2].is_nan());
    }

    #[test]
    fn test_mismatch_lists_every_pair() {
        let err = convert(
            [1.0, 2.0, 3.0],
            [Unit::Au, Unit::Deg, Unit::Deg],
            [Unit::Deg, Unit::Deg, Unit::Km],
        )
        .unwrap_err();
        match err {
            SolarfieldError::UnitMismatch(msg) => {
                assert!(msg.contains("axis 0: a.u. -> deg"), "{}", msg);
                assert!(msg.contains("axis 2: deg -> km"), "{}", msg);
                assert!(!msg.contains("axis 1"), "{}", msg);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_roundtrip_within_each_type() {
        let mut rng = rand::thread_rng();
        for unit_type in [
            UnitType::Distance,
            UnitType::LinearSpeed,
            UnitType::Angular,
            UnitType::AngularSpeed,
        ] {
            for &a in units_of_type(unit_type) {
                for &b in units_of_type(unit_type) {
                    let v: f64 = rng.gen_range(-1.0e3..1.0e3);
                    let there = convert_value(v, a, b).unwrap();
                    let back = convert_value(there, b, a).unwrap();
                    assert_relative_eq!(back, v, max_relative = 1e-12);
                }
            }
        }
    }
}
