//! Rectangular coordinates of the Sun.
//!
//! Two routes with very different accuracy/cost profiles: the full VSOP87B
//! Earth theory rotated into the equatorial J2000 frame, and the USNO
//! low-precision polynomial approximation (equatorial of date).

use nalgebra::Vector3;

use crate::constants::{JulianDay, MJD};
use crate::frames::equatorial_rectangular;
use crate::vsop87::Vsop87Model;

/// Sun-Earth vector referenced to equinox J2000, from the Earth VSOP87B
/// model (Meeus chapter 26).
///
/// Arguments
/// ---------
/// * `earth`: a model loaded for [`Body::Earth`](crate::vsop87::Body)
/// * `jde`: Julian ephemeris date
///
/// Return
/// ------
/// * the Sun-Earth rectangular vector in AU and the Sun-Earth distance
pub fn solar_position_j2000(earth: &Vsop87Model, jde: JulianDay) -> (Vector3<f64>, f64) {
    equatorial_rectangular(&earth.spherical_position(jde))
}

/// Approximate solar ephemeris, per USNO.
///
/// Arguments
/// ---------
/// * `mjd`: Modified Julian Date of the query
///
/// Return
/// ------
/// * the Sun-Earth vector in equatorial coordinates of date (AU), and the
///   sine and cosine of the obliquity of the ecliptic of date
///
/// The USNO algorithm is formulated in degrees; the routine works in
/// degrees throughout and converts to radians only at the trigonometric
/// calls.
pub fn approx_solar_equatorial(mjd: MJD) -> (Vector3<f64>, f64, f64) {
    let d = mjd - 51_544.5;
    // mean anomaly and mean longitude of the Sun, in degrees
    let g = 357.529 + 0.98560028 * d;
    let q = 280.459 + 0.98564736 * d;
    let g2 = g + g;

    let (sin_g, cos_g) = g.to_radians().sin_cos();
    let (sin_g2, cos_g2) = g2.to_radians().sin_cos();

    // ecliptic longitude, in degrees still
    let l = q + 1.915 * sin_g + 0.020 * sin_g2;

    // distance in AU
    let r = 1.00014 - 0.01671 * cos_g - 0.00014 * cos_g2;

    // obliquity of the ecliptic, in degrees
    let e = 23.439 - 0.00000036 * d;
    let (sin_obl, cos_obl) = e.to_radians().sin_cos();

    let (sin_l, cos_l) = l.to_radians().sin_cos();
    let rsl = r * sin_l;
    (
        Vector3::new(r * cos_l, rsl * cos_obl, rsl * sin_obl),
        sin_obl,
        cos_obl,
    )
}
