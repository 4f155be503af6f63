//! Absolute magnitude estimation from observed V magnitude.

use nalgebra::Vector3;

/// Compute the absolute magnitude H from an observed V magnitude.
///
/// Uses the standard two-term phase function (phase slope fixed at
/// G = 0.15) over the observer-object-sun geometry.
///
/// Arguments
/// ---------
/// * `observer_object`: observer-to-object vector in AU
/// * `sun_object`: sun-to-object vector in AU
/// * `v_mag`: observed V magnitude
/// * `observer_distance`: observer-object distance, precomputed
/// * `sun_distance`: sun-object distance, precomputed
///
/// Return
/// ------
/// * the absolute magnitude H; a fixed H = 30 is returned for the
///   degenerate anti-solar geometry where the phase angle formula breaks
///   down
pub fn h_mag(
    observer_object: &Vector3<f64>,
    sun_object: &Vector3<f64>,
    v_mag: f64,
    observer_distance: f64,
    sun_distance: f64,
) -> f64 {
    let rdelta = observer_distance * sun_distance;
    let cos_psi = observer_object.dot(sun_object) / rdelta;

    if cos_psi < -0.9999 {
        // object is straight into the sun; not too likely, but this keeps
        // the return value valid
        return 30.0;
    }

    let tan_half = (1.0 - cos_psi * cos_psi).sqrt() / (1.0 + cos_psi);
    let phi1 = (-3.33 * tan_half.powf(0.63)).exp();
    let phi2 = (-1.87 * tan_half.powf(1.22)).exp();

    v_mag - 5.0 * rdelta.log10() + 2.5 * (0.85 * phi1 + 0.15 * phi2).log10()
}
