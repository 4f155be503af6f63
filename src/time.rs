use hifitime::{Epoch, TimeScale};

use crate::constants::{JulianDay, Radian, DPI, J2000, JDTOMJD, JULIAN_CENTURY, MJD};
use crate::maths::horner;

/// Number of Julian centuries elapsed since J2000.0.
///
/// This quantity appears as T in a number of time series; the VSOP87
/// evaluator consumes it scaled by 0.1.
pub fn j2000_century(jde: JulianDay) -> f64 {
    (jde - J2000) / JULIAN_CENTURY
}

/// Transformation from julian date (JD) to modified julian date (MJD)
pub fn jd_to_mjd(jd: JulianDay) -> MJD {
    jd - JDTOMJD
}

/// Transformation from modified julian date (MJD) to julian date (JD)
pub fn mjd_to_jd(mjd: MJD) -> JulianDay {
    mjd + JDTOMJD
}

/// Transformation from a Gregorian calendar date with fractional day to a Julian date
///
/// Arguments
/// ---------
/// * `year`: Gregorian calendar year
/// * `month`: calendar month (1–12)
/// * `day`: day of month with fraction (e.g. `1.5` is the 1st at 12:00 UTC)
///
/// Return
/// ------
/// * the corresponding Julian date (UTC)
pub fn calendar_gregorian_to_jd(year: i32, month: u8, day: f64) -> JulianDay {
    let whole_day = day.trunc() as u8;
    let fraction = day - whole_day as f64;

    // Separation of the day fraction into clock components
    let hour = (fraction * 24.0).trunc() as u8;
    let minute = ((fraction * 24.0 - hour as f64) * 60.0).trunc() as u8;
    let second = (((fraction * 24.0 - hour as f64) * 60.0 - minute as f64) * 60.0) as u8;
    let nano = ((((fraction * 24.0 - hour as f64) * 60.0 - minute as f64) * 60.0 - second as f64)
        * 1e9) as u32;

    let epoch = Epoch::from_gregorian(
        year,
        month,
        whole_day,
        hour,
        minute,
        second,
        nano,
        TimeScale::UTC,
    );

    epoch.to_jde_utc_days()
}

/// Compute the approximate local sidereal time for a given Modified Julian Date.
///
/// Arguments
/// ---------
/// * `mjd`: Modified Julian Date (UT1 time scale)
/// * `longitude`: observer longitude expressed in circles (fraction of a full turn)
///
/// Return
/// ------
/// * local sidereal time in radians, in the interval [0, 2π) where one
///   sidereal day spans 2π
pub fn local_sidereal_time(mjd: MJD, longitude: f64) -> Radian {
    // Polynomial coefficients for mean sidereal time at 0h UT (in hours)
    const C0: f64 = 6.6460656;
    const C1: f64 = 2400.051262;
    const C2: f64 = 0.00002581;

    let t = (mjd - 15019.5) / JULIAN_CENTURY;
    let theta = horner(t, &[C0, C1, C2]) / 24.0;

    let mut ut = mjd.fract();
    if ut < 0.0 {
        ut += 1.0;
    }

    let mut sidereal = (theta + ut + longitude).fract();
    if sidereal < 0.0 {
        sidereal += 1.0;
    }

    sidereal * DPI
}
