//! Constants module for ephemeris calculations

use std::f64::consts::PI;

// Astronomical distances
/// Astronomical Unit in kilometers, as used by the series theories
pub const KM_PER_AU: f64 = 149_597_870.61;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// Hours in a day
pub const DAY_H: f64 = 24.0;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Offset between Julian date and modified Julian date
pub const MJD_OFFSET: f64 = 2_400_000.5;
/// Days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;
/// Days in a Julian millennium
pub const DAYS_PER_MILLENNIUM: f64 = 365_250.0;
/// TT minus TAI in seconds
pub const TT_MINUS_TAI_S: f64 = 32.184;

// Angles
/// Arcseconds to radians conversion factor
pub const ASEC2RAD: f64 = 4.848_136_811_095_36e-6;
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Physics
/// Speed of light in km/s
pub const C_KM_S: f64 = 299_792.458;
