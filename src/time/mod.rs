//! Time scales and Julian-day arithmetic
//!
//! Theories are evaluated in uniform dynamical time (TT, taken equal to TDB);
//! callers usually supply civil time (UTC). The two are related by
//! `TT = UTC + 32.184 s + ΔT`, where ΔT = TAI − UTC is a step function of the
//! date with linear drifts before 1972. Before 1961 there is no UTC: ΔT is
//! then TT − UT − 32.184 s, interpolated in a biennial table back to 1810 and
//! given by a quadratic approximation before that.
//!
//! TAI − UTC decreased twice (0.05 s on 1961-08-01, 0.1 s on 1968-02-01).
//! UTC instants within those fractions of a second before the steps share
//! their TT instant with instants just after, and [`to_utc`] returns the
//! later one.

use crate::constants::{
    DAYS_PER_CENTURY, DAYS_PER_MILLENNIUM, DAY_S, J2000, MJD_OFFSET, TT_MINUS_TAI_S,
};
use crate::{Result, SolarfieldError};
use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time scale of a Julian day supplied by a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeScale {
    Utc,
    TtTdb,
}

impl TimeScale {
    pub fn code(&self) -> i32 {
        match self {
            TimeScale::Utc => 0,
            TimeScale::TtTdb => 1,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(TimeScale::Utc),
            1 => Some(TimeScale::TtTdb),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeScale::Utc => "UTC",
            TimeScale::TtTdb => "TT/TDB",
        }
    }
}

impl fmt::Display for TimeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Integer TAI − UTC steps, most recent first: (UTC Julian day after which the
/// value applies, seconds).
///
/// The values follow the IERS leap-second list (Bulletin C), including 2006
/// and later, rather than holding 33 s from 2003 onward.
const LEAP_STEPS: [(f64, f64); 28] = [
    (2457754.5, 37.0), // 2017-01-01
    (2457204.5, 36.0), // 2015-07-01
    (2456109.5, 35.0), // 2012-07-01
    (2454832.5, 34.0), // 2009-01-01
    (2453736.5, 33.0), // 2006-01-01
    (2451179.5, 32.0), // 1999-01-01
    (2450630.5, 31.0),
    (2450083.5, 30.0),
    (2449534.5, 29.0),
    (2449169.5, 28.0),
    (2448804.5, 27.0),
    (2448257.5, 26.0),
    (2447892.5, 25.0),
    (2447161.5, 24.0),
    (2446247.5, 23.0),
    (2445516.5, 22.0),
    (2445151.5, 21.0),
    (2444786.5, 20.0),
    (2444239.5, 19.0),
    (2443874.5, 18.0),
    (2443509.5, 17.0),
    (2443144.5, 16.0),
    (2442778.5, 15.0),
    (2442413.5, 14.0),
    (2442048.5, 13.0),
    (2441683.5, 12.0),
    (2441499.5, 11.0),
    (2441317.5, 10.0), // 1972-01-01
];

/// Drifting TAI − UTC between 1961 and 1972: (UTC Julian day after which the
/// formula applies, offset in seconds, reference MJD, drift in seconds/day)
const DRIFT_STEPS: [(f64, f64, f64, f64); 13] = [
    (2439887.5, 4.2131700, 39126.0, 0.002592),
    (2439126.5, 4.3131700, 39126.0, 0.002592),
    (2439004.5, 3.8401300, 38761.0, 0.001296),
    (2438942.5, 3.7401300, 38761.0, 0.001296),
    (2438820.5, 3.6401300, 38761.0, 0.001296),
    (2438761.5, 3.5401300, 38761.0, 0.001296),
    (2438639.5, 3.4401300, 38761.0, 0.001296),
    (2438486.5, 3.3401300, 38761.0, 0.001296),
    (2438395.5, 3.2401300, 38761.0, 0.001296),
    (2438334.5, 1.9458580, 37665.0, 0.0011232),
    (2437665.5, 1.8458580, 37665.0, 0.0011232),
    (2437512.5, 1.3728180, 37300.0, 0.001296),
    (2437300.5, 1.4228180, 37300.0, 0.001296), // 1961-01-01
];

/// TT − UT in seconds every two years from 1810 to 1962 (Meeus,
/// *Astronomical Algorithms*, ch. 10)
#[rustfmt::skip]
const BIENNIAL_TT_MINUS_UT: [f64; 77] = [
    12.5, 12.5, 12.5, 12.5, 12.3, 12.0, 11.4, 10.6,  9.6,  8.6,
     7.5,  6.6,  6.0,  5.7,  5.6,  5.7,  5.9,  6.2,  6.5,  6.8,
     7.1,  7.3,  7.5,  7.7,  7.8,  7.9,  7.5,  6.4,  5.4,  2.9,
     1.6, -1.0, -2.7, -3.6, -4.7, -5.4, -5.2, -5.5, -5.6, -5.8,
    -5.9, -6.2, -6.4, -6.1, -4.7, -2.7,  0.0,  2.6,  5.4,  7.7,
    10.5, 13.4, 16.0, 18.2, 20.2, 21.2, 22.4, 23.5, 23.9, 24.3,
    24.0, 23.9, 23.9, 23.7, 24.0, 24.3, 25.3, 26.2, 27.3, 28.2,
    29.1, 30.0, 30.7, 31.4, 32.2, 33.1, 34.0,
];
/// Days between two entries of [`BIENNIAL_TT_MINUS_UT`]
const BIENNIAL_STEP: f64 = 730.5;

/// 1670-07-01, before which ΔT is taken as 0
const QUADRATIC_FLOOR: f64 = 2331196.5;
/// 1810-01-01 12:00, centre of the quadratic approximation and first entry of
/// the biennial table
const QUADRATIC_CENTRE: f64 = 2382149.0;

/// ΔT = TAI − UTC in seconds for a UTC Julian day.
///
/// Dates after the last tabulated leap second keep its value. Before 1961 the
/// value is TT − UT − 32.184 s, so that [`to_tt`] applies to every date.
pub fn delta_t(utc: f64) -> f64 {
    if let Some(&(_, value)) = LEAP_STEPS.iter().find(|(start, _)| utc > *start) {
        return value;
    }
    if let Some(&(_, offset, mjd_ref, drift)) =
        DRIFT_STEPS.iter().find(|(start, _, _, _)| utc > *start)
    {
        return offset + (modified_julian_day(utc) - mjd_ref) * drift;
    }
    if utc > QUADRATIC_CENTRE {
        return biennial_tt_minus_ut(utc) - TT_MINUS_TAI_S;
    }
    if utc > QUADRATIC_FLOOR {
        let t = (utc - QUADRATIC_CENTRE) / DAYS_PER_CENTURY;
        return -15.0 + 32.5 * t * t - TT_MINUS_TAI_S;
    }
    0.0
}

/// Linear interpolation in the biennial table, for dates after 1810
fn biennial_tt_minus_ut(utc: f64) -> f64 {
    let n = (utc - QUADRATIC_CENTRE) / BIENNIAL_STEP;
    let i = (n.floor() as usize).min(BIENNIAL_TT_MINUS_UT.len() - 2);
    let (a, b) = (BIENNIAL_TT_MINUS_UT[i], BIENNIAL_TT_MINUS_UT[i + 1]);
    a + (n - i as f64) * (b - a)
}

/// TT Julian day from a UTC Julian day
pub fn to_tt(utc: f64) -> f64 {
    utc + (TT_MINUS_TAI_S + delta_t(utc)) / DAY_S
}

/// UTC Julian day from a TT Julian day.
///
/// ΔT is a function of UTC, so the inverse is found by fixed-point iteration.
pub fn to_utc(tt: f64) -> f64 {
    let mut utc = tt - (TT_MINUS_TAI_S + delta_t(tt)) / DAY_S;
    for _ in 0..8 {
        let next = tt - (TT_MINUS_TAI_S + delta_t(utc)) / DAY_S;
        if next == utc {
            break;
        }
        utc = next;
    }
    utc
}

/// Julian day in TT for an instant given in `scale`
pub fn jd_tt(jd: f64, scale: TimeScale) -> f64 {
    match scale {
        TimeScale::Utc => to_tt(jd),
        TimeScale::TtTdb => jd,
    }
}

/// Julian day expressed in `scale` for an instant given in TT
pub fn jd_in_scale(jd_tt: f64, scale: TimeScale) -> f64 {
    match scale {
        TimeScale::Utc => to_utc(jd_tt),
        TimeScale::TtTdb => jd_tt,
    }
}

pub fn modified_julian_day(jd: f64) -> f64 {
    jd - MJD_OFFSET
}

/// Julian centuries elapsed since J2000
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}

/// Julian millennia elapsed since J2000
pub fn julian_millennia(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_MILLENNIUM
}

/// Julian day number (noon) of a Gregorian calendar date.
///
/// This follows the algorithm in the Explanatory Supplement to the
/// Astronomical Almanac 15.11.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let janfeb = month <= 2;
    let g = year as i64 + 4716 - if janfeb { 1 } else { 0 };
    let f = (month as i64 + 9) % 12;
    let e = 1461 * g / 4 + day as i64 - 1402;
    let j = e + (153 * f + 2) / 5;
    j + 38 - (g + 184) / 100 * 3 / 4
}

/// Gregorian calendar date of a Julian day number (Explanatory Supplement 15.11)
pub fn calendar_date(jdn: i64) -> (i32, u32, u32) {
    let f = jdn + 1401 + (4 * jdn + 274277) / 146097 * 3 / 4 - 38;
    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;

    let day = (h % 153) / 5 + 1;
    let month = ((h / 153) + 2) % 12 + 1;
    let year = e / 1461 - 4716 + (12 + 2 - month) / 12;

    (year as i32, month as u32, day as u32)
}

/// Julian day of a UTC date-time
pub fn julian_day_from_datetime(dt: &DateTime<Utc>) -> f64 {
    let jdn = julian_day_number(dt.year(), dt.month(), dt.day());
    let seconds = dt.num_seconds_from_midnight() as f64 + dt.nanosecond() as f64 * 1e-9;
    jdn as f64 - 0.5 + seconds / DAY_S
}

/// UTC date-time of a Julian day, to the nearest millisecond
pub fn datetime_from_julian_day(jd: f64) -> Result<DateTime<Utc>> {
    if !jd.is_finite() {
        return Err(SolarfieldError::Configuration(format!(
            "Julian day {} is not a finite number",
            jd
        )));
    }
    let shifted = jd + 0.5;
    let mut jdn = shifted.floor() as i64;
    let mut millis = ((shifted - jdn as f64) * DAY_S * 1000.0).round() as i64;
    if millis >= 86_400_000 {
        jdn += 1;
        millis -= 86_400_000;
    }
    let (year, month, day) = calendar_date(jdn);
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        SolarfieldError::Configuration(format!("Julian day {} has no calendar date", jd))
    })?;
    let secs = (millis / 1000) as u32;
    let time = date
        .and_hms_milli_opt(secs / 3600, (secs / 60) % 60, secs % 60, (millis % 1000) as u32)
        .ok_or_else(|| SolarfieldError::Configuration(format!("Julian day {} out of range", jd)))?;
    Ok(time.and_utc())
}

/// Parses an instant given either as a Julian day ("2451545.0") or as an
/// RFC 3339 date-time ("2000-01-01T12:00:00Z")
pub fn parse_instant(text: &str) -> Result<f64> {
    let text = text.trim();
    if let Ok(jd) = text.parse::<f64>() {
        return Ok(jd);
    }
    DateTime::parse_from_rfc3339(text)
        .map(|dt| julian_day_from_datetime(&dt.with_timezone(&Utc)))
        .map_err(|e| {
            SolarfieldError::Configuration(format!("cannot read instant '{}': {}", text, e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    #[rstest]
    #[case(2451545.0, 32.0)] // J2000
    #[case(2453000.5, 32.0)] // 2003, before the 2006 leap second
    #[case(2455000.5, 34.0)] // mid 2009
    #[case(2460000.5, 37.0)] // 2023
    #[case(2441317.6, 10.0)] // just after 1972-01-01
    #[case(2000000.0, 0.0)] // before the floor
    fn test_delta_t_steps(#[case] utc: f64, #[case] expected: f64) {
        assert_eq!(delta_t(utc), expected);
    }

    #[test]
    fn test_delta_t_drift_before_1972() {
        // 1965-01-01, drifting segment referenced to MJD 38761
        let utc = 2438761.5 + 10.0;
        assert_relative_eq!(delta_t(utc), 3.54013 + 10.0 * 0.001296, epsilon = 1e-12);
    }

    #[test]
    fn test_delta_t_quadratic() {
        assert_relative_eq!(delta_t(QUADRATIC_CENTRE), -15.0 - TT_MINUS_TAI_S);
        // one Julian century before 1810
        assert_relative_eq!(
            delta_t(QUADRATIC_CENTRE - DAYS_PER_CENTURY),
            -15.0 + 32.5 - TT_MINUS_TAI_S,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_delta_t_biennial_table() {
        // table node of 1900
        let utc = QUADRATIC_CENTRE + 45.0 * BIENNIAL_STEP;
        assert_relative_eq!(delta_t(utc), -2.7 - TT_MINUS_TAI_S, epsilon = 1e-12);
        // half way between 1956 (31.4 s) and 1958 (32.2 s)
        let utc = QUADRATIC_CENTRE + 73.5 * BIENNIAL_STEP;
        assert_relative_eq!(delta_t(utc), 31.8 - TT_MINUS_TAI_S, epsilon = 1e-9);
        // late 1960 stays within seconds of the 1961 drift, not days
        assert!(delta_t(2437300.0).abs() < 2.0);
    }

    #[test]
    fn test_delta_t_rises_into_1961() {
        let start_1961 = DRIFT_STEPS[DRIFT_STEPS.len() - 1].0;
        let before = delta_t(start_1961);
        let after = delta_t(start_1961 + 1e-6);
        assert!(after >= before);
        assert!(after - before < 0.1);
    }

    #[test]
    fn test_to_tt_at_j2000() {
        let tt = to_tt(J2000);
        assert_relative_eq!((tt - J2000) * DAY_S, 64.184, epsilon = 1e-4);
        assert_eq!(jd_tt(J2000, TimeScale::TtTdb), J2000);
    }

    #[test]
    fn test_utc_tt_roundtrip() {
        let mut rng = StdRng::seed_from_u64(1961);
        for _ in 0..2000 {
            let utc: f64 = rng.gen_range(2331200.0..2470000.0);
            let back = to_utc(to_tt(utc));
            assert_abs_diff_eq!(back, utc, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_utc_tt_roundtrip_1955_to_1962() {
        // quarter-day sweep, offset from midnight so no sample sits on a step
        let mut utc = 2435108.6;
        while utc < 2437850.5 {
            assert_abs_diff_eq!(to_utc(to_tt(utc)), utc, epsilon = 1e-9);
            utc += 0.25;
        }
    }

    #[test]
    fn test_utc_tt_roundtrip_around_steps() {
        let steps = LEAP_STEPS
            .iter()
            .map(|s| s.0)
            .chain(DRIFT_STEPS.iter().map(|s| s.0))
            .chain([QUADRATIC_CENTRE, QUADRATIC_FLOOR]);
        for step in steps {
            let rises = delta_t(step + 1e-7) >= delta_t(step);
            for offset_s in [-3600.0, -1.0, -1e-3, 1e-3, 1.0, 3600.0] {
                if offset_s == -1e-3 && !rises {
                    // UTC labels repeated by a negative step
                    continue;
                }
                let utc = step + offset_s / DAY_S;
                assert_abs_diff_eq!(to_utc(to_tt(utc)), utc, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_time_arguments() {
        assert_eq!(julian_centuries(J2000 + 36525.0), 1.0);
        assert_eq!(julian_millennia(J2000 - 365250.0), -1.0);
        assert_eq!(modified_julian_day(2400000.5), 0.0);
    }

    #[test]
    fn test_julian_day_number() {
        assert_eq!(julian_day_number(2000, 1, 1), 2451545);
        assert_eq!(julian_day_number(1992, 10, 13), 2448909);
        assert_eq!(calendar_date(2451545), (2000, 1, 1));
        assert_eq!(calendar_date(2448909), (1992, 10, 13));
    }

    #[test]
    fn test_datetime_roundtrip() {
        let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(julian_day_from_datetime(&dt), J2000);

        let dt = Utc.with_ymd_and_hms(1992, 4, 12, 0, 0, 0).unwrap();
        assert_eq!(julian_day_from_datetime(&dt), 2448724.5);

        let back = datetime_from_julian_day(2448724.75).unwrap();
        assert_eq!(back, Utc.with_ymd_and_hms(1992, 4, 12, 6, 0, 0).unwrap());
        assert!(datetime_from_julian_day(f64::NAN).is_err());
    }

    #[test]
    fn test_parse_instant() {
        assert_eq!(parse_instant("2451545.0").unwrap(), J2000);
        assert_eq!(parse_instant("2000-01-01T12:00:00Z").unwrap(), J2000);
        assert!(parse_instant("yesterday").is_err());
    }

    #[test]
    fn test_time_scale_codes() {
        assert_eq!(TimeScale::from_code(0), Some(TimeScale::Utc));
        assert_eq!(TimeScale::TtTdb.label(), "TT/TDB");
        assert_eq!(TimeScale::from_code(2), None);
    }
}
