//! # Keplerian orbit propagation
//!
//! Position of a body on a fixed elliptical orbit, directly in equatorial
//! rectangular coordinates.
//!
//! ## Overview
//!
//! An [`Orbit`] is built once from a set of [`Elements`]; construction
//! derives the mean daily motion and three (orientation angle, magnitude)
//! pairs that map motion in the orbital plane straight onto the equatorial
//! axes (Meeus 33.7/33.8), so no rotation-matrix composition is needed per
//! query. Each position query solves Kepler's equation once.
//!
//! ## Units & Conventions
//!
//! - Lengths in **AU**, angles in **radians**, epochs as Julian dates.
//! - The derived geometry is a pure function of the elements: rebuilding an
//!   orbit from equal elements reproduces identical derived values.
//! - No bounds are enforced on eccentricity or semimajor axis. Supplying
//!   `e >= 1` or `a <= 0` yields mathematically undefined, non-physical
//!   results; the library neither clamps nor reports this.

use nalgebra::Vector3;

use crate::constants::{
    Degree, JulianDay, Radian, COBL_J2000, GAUSS_GRAV, SOBL_J2000,
};
use crate::kepler::solve_kepler;

/// Decimal places requested from the Kepler solver for position queries.
const SOLVER_PLACES: usize = 15;

/// Classical Keplerian orbital elements.
///
/// Units:
/// * `semi_major_axis`: AU (Astronomical Units)
/// * `eccentricity`: unitless, `0 <= e < 1` expected
/// * `inclination`: radians
/// * `periapsis_argument`: radians
/// * `ascending_node_longitude`: radians
/// * `perihelion_time`: Julian date, same time scale as position queries
#[derive(Debug, Clone, PartialEq)]
pub struct Elements {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub periapsis_argument: Radian,
    pub ascending_node_longitude: Radian,
    pub perihelion_time: JulianDay,
}

/// An orbit with geometry derived once from its elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Orbit {
    elements: Elements,
    /// Mean daily motion in radians per day.
    mean_motion: Radian,
    angle_a: Radian,
    angle_b: Radian,
    angle_c: Radian,
    scale_a: f64,
    scale_b: f64,
    scale_c: f64,
}

impl Orbit {
    /// Derive the fixed orbit geometry from a set of elements.
    pub fn new(elements: Elements) -> Self {
        let mean_motion =
            GAUSS_GRAV / (elements.semi_major_axis * elements.semi_major_axis.sqrt());

        let (sin_node, cos_node) = elements.ascending_node_longitude.sin_cos();
        let (sin_incl, cos_incl) = elements.inclination.sin_cos();

        // Meeus (33.7): spherical-trigonometry mix of node, inclination and
        // the J2000 obliquity, one component pair per equatorial axis
        let f = cos_node;
        let g = sin_node * COBL_J2000;
        let h = sin_node * SOBL_J2000;
        let p = -sin_node * cos_incl;
        let q = cos_node * cos_incl * COBL_J2000 - sin_incl * SOBL_J2000;
        let r = cos_node * cos_incl * SOBL_J2000 + sin_incl * COBL_J2000;

        // Meeus (33.8)
        Orbit {
            elements,
            mean_motion,
            angle_a: f.atan2(p),
            angle_b: g.atan2(q),
            angle_c: h.atan2(r),
            scale_a: f.hypot(p),
            scale_b: g.hypot(q),
            scale_c: h.hypot(r),
        }
    }

    /// The elements this orbit was built from.
    pub fn elements(&self) -> &Elements {
        &self.elements
    }

    /// Equatorial rectangular position at the given Julian date.
    ///
    /// Arguments
    /// ---------
    /// * `jde`: Julian ephemeris date of the query, same time scale as the
    ///   elements' perihelion time
    ///
    /// Return
    /// ------
    /// * the heliocentric equatorial position in AU and the orbital radius
    ///
    /// The embedded Kepler solve never fails: its bisection fallback is
    /// total, so this method is total as well.
    pub fn position(&self, jde: JulianDay) -> (Vector3<f64>, f64) {
        let eccentricity = self.elements.eccentricity;
        let mean_anomaly = self.mean_motion * (jde - self.elements.perihelion_time);
        let eccentric_anomaly = solve_kepler(eccentricity, mean_anomaly, SOLVER_PLACES);

        let radius = orbital_radius(
            eccentric_anomaly,
            eccentricity,
            self.elements.semi_major_axis,
        );
        let nu = true_anomaly(eccentric_anomaly, eccentricity);

        // Meeus (33.9)
        let arg = self.elements.periapsis_argument + nu;
        let position = Vector3::new(
            radius * self.scale_a * (self.angle_a + arg).sin(),
            radius * self.scale_b * (self.angle_b + arg).sin(),
            radius * self.scale_c * (self.angle_c + arg).sin(),
        );
        (position, radius)
    }
}

/// True anomaly ν for a given eccentric anomaly (Meeus 30.1).
fn true_anomaly(eccentric_anomaly: Radian, eccentricity: f64) -> Radian {
    2.0 * (((1.0 + eccentricity) / (1.0 - eccentricity)).sqrt()
        * (eccentric_anomaly * 0.5).tan())
    .atan()
}

/// Radius distance r for a given eccentric anomaly (Meeus 30.2).
///
/// The result carries the unit of the semimajor axis (typically AU).
fn orbital_radius(eccentric_anomaly: Radian, eccentricity: f64, axis: f64) -> f64 {
    axis * (1.0 - eccentricity * eccentric_anomaly.cos())
}

/// Keplerian a, e, i and the momentum vector from a state-vector pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateElements {
    /// Semimajor axis in AU.
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    /// Inclination in degrees.
    pub inclination: Degree,
    /// Momentum vector (position × velocity).
    pub momentum: Vector3<f64>,
}

/// Solve Keplerian elements from state vectors.
///
/// Arguments
/// ---------
/// * `position`: sun-to-object vector in AU
/// * `velocity`: object velocity scaled by the gravitational constant
///   (units where the gravitational parameter is 1)
/// * `distance`: sun-object distance, precomputed from `position`
///
/// Return
/// ------
/// * the derived elements, or `None` where the algorithm turns unstable:
///   near-parabolic orbits (`e > 0.99`) and very large axes (`a > 100` AU)
///   are rejected rather than reported with degraded accuracy
pub fn elements_from_state(
    position: &Vector3<f64>,
    velocity: &Vector3<f64>,
    distance: f64,
) -> Option<StateElements> {
    let momentum = position.cross(velocity);
    let momentum_squared = momentum.norm_squared();
    let momentum_norm = momentum_squared.sqrt();

    let speed_squared = velocity.norm_squared();
    let temp = 2.0 - distance * speed_squared;

    if distance > temp * 100.0 {
        return None;
    }
    let semi_major_axis = distance / temp;
    let inv_axis = temp / distance;

    // the axis cutoff above keeps the radicand non-negative
    let eccentricity = (1.0 - momentum_squared * inv_axis).sqrt();
    if eccentricity > 0.99 {
        return None;
    }

    // momentum z can only reach |h| through rounding; that is i = 0
    let inclination = if momentum.z >= momentum_norm {
        0.0
    } else {
        (momentum.z / momentum_norm).acos().to_degrees()
    };

    Some(StateElements {
        semi_major_axis,
        eccentricity,
        inclination,
        momentum,
    })
}
