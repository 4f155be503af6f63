//! Coordinate transforms from heliocentric spherical coordinates to
//! rectangular coordinates in the FK5 equatorial J2000 frame.

use nalgebra::Vector3;
use std::f64::consts::PI;

use crate::vsop87::SphericalPosition;

/// Convert a heliocentric spherical position to rectangular equatorial
/// coordinates, J2000.
///
/// The latitude is negated and π added to the longitude before the standard
/// spherical-to-Cartesian formulas: this turns the heliocentric direction of
/// the body into the direction of the Sun as seen from the body, which is
/// the sign convention the solar-position routines build on. The radius is
/// preserved as the norm of the returned vector.
///
/// The subsequent frame rotation from the dynamical ecliptic J2000 to the
/// FK5 equatorial J2000 is carried out as three fixed dot products
/// (Meeus 26.3); the secular correction is good to sub-arcsecond accuracy
/// over several centuries around J2000. The nine coefficients, exactly as
/// applied:
///
/// ```text
/// x' =             x + 0.00000044036·y − 0.000000190919·z
/// y' = −0.000000479966·x + 0.917482137087·y − 0.397776982902·z
/// z' =                     0.397776982902·y + 0.917482137087·z
/// ```
///
/// Return
/// ------
/// * the rectangular position in AU and the unchanged radius
pub fn equatorial_rectangular(position: &SphericalPosition) -> (Vector3<f64>, f64) {
    let (x, y, z) = ecliptic_rectangular(position);
    (
        Vector3::new(
            x + 0.00000044036 * y - 0.000000190919 * z,
            -0.000000479966 * x + 0.917482137087 * y - 0.397776982902 * z,
            0.397776982902 * y + 0.917482137087 * z,
        ),
        position.radius,
    )
}

/// Spherical to rectangular in the ecliptic frame, with the view-change
/// sign convention described on [`equatorial_rectangular`] (Meeus 26.2).
fn ecliptic_rectangular(position: &SphericalPosition) -> (f64, f64, f64) {
    let s = position.longitude + PI;
    let beta = -position.latitude;
    let (sin_s, cos_s) = s.sin_cos();
    let (sin_beta, cos_beta) = beta.sin_cos();
    (
        position.radius * cos_beta * cos_s,
        position.radius * cos_beta * sin_s,
        position.radius * sin_beta,
    )
}
