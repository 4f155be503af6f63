//! # VSOP87B planetary theory
//!
//! Truncated periodic-series representation of the heliocentric spherical
//! coordinates of the eight major planets.
//!
//! ## Overview
//!
//! A [`Vsop87Model`] owns three coefficient tables (longitude, latitude,
//! radius) for one body, loaded once from a VSOP87B data file by the
//! fixed-column parser in [`parser`]. Evaluation at an ephemeris date sums
//! each table's periodic terms and combines the per-power sums through
//! Horner's method in the reduced time variable τ.
//!
//! ## Units & Conventions
//!
//! - Longitude and latitude are heliocentric, dynamical ecliptic and equinox
//!   J2000, in **radians**; longitude is reduced to [0, 2π).
//! - Radius is the heliocentric distance in **AU**.
//! - The time argument is a Julian ephemeris date; τ is Julian **millennia**
//!   since J2000.
//!
//! ## Accuracy
//!
//! Within one power, terms are summed from the last-parsed entry back to the
//! first so the many small high-order terms accumulate before the dominant
//! leading terms are added. This ordering bounds floating-point rounding
//! error and is part of the evaluation contract, not an optimization; it
//! must not be reordered or parallelized.

mod parser;

use crate::constants::{JulianDay, Radian};
use crate::kepler::principal_angle;
use crate::maths::horner;
use crate::time::j2000_century;

/// One of the eight major planets covered by the VSOP87 theory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Body {
    /// Body name as recorded in VSOP87B files: 7 characters, space padded.
    pub(crate) fn record_name(&self) -> &'static str {
        match self {
            Body::Mercury => "MERCURY",
            Body::Venus => "VENUS  ",
            Body::Earth => "EARTH  ",
            Body::Mars => "MARS   ",
            Body::Jupiter => "JUPITER",
            Body::Saturn => "SATURN ",
            Body::Uranus => "URANUS ",
            Body::Neptune => "NEPTUNE",
        }
    }

    /// File extension of the body's VSOP87B distribution file.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Body::Mercury => "mer",
            Body::Venus => "ven",
            Body::Earth => "ear",
            Body::Mars => "mar",
            Body::Jupiter => "jup",
            Body::Saturn => "sat",
            Body::Uranus => "ura",
            Body::Neptune => "nep",
        }
    }
}

/// A single periodic term: `amplitude × cos(phase + frequency·τ)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub amplitude: f64,
    pub phase: f64,
    pub frequency: f64,
}

/// Per-power coefficient table for one quantity, indexed by the power of τ.
///
/// Slots stay empty when the file declares no terms for that power. The
/// per-slot term order is the file order and is never rearranged.
pub(crate) type SeriesTable = [Vec<Term>; 6];

/// VSOP87B coefficients for computing one planet's position in spherical
/// coordinates.
///
/// Immutable after loading; sharing a model across threads for concurrent
/// evaluations is safe because nothing mutates past construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Vsop87Model {
    pub(crate) longitude: SeriesTable,
    pub(crate) latitude: SeriesTable,
    pub(crate) radius: SeriesTable,
}

/// Heliocentric spherical position produced by series evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalPosition {
    /// Heliocentric longitude in radians, reduced to [0, 2π).
    pub longitude: Radian,
    /// Heliocentric latitude in radians.
    pub latitude: Radian,
    /// Heliocentric distance in AU.
    pub radius: f64,
}

impl Vsop87Model {
    /// Ecliptic position of the planet by the loaded VSOP87B theory.
    ///
    /// Arguments
    /// ---------
    /// * `jde`: Julian ephemeris date for which the position is desired
    ///
    /// Return
    /// ------
    /// * heliocentric spherical coordinates for the dynamical equinox and
    ///   ecliptic J2000
    pub fn spherical_position(&self, jde: JulianDay) -> SphericalPosition {
        let tau = j2000_century(jde) * 0.1;
        SphericalPosition {
            longitude: principal_angle(sum_series(&self.longitude, tau)),
            latitude: sum_series(&self.latitude, tau),
            radius: sum_series(&self.radius, tau),
        }
    }
}

/// Sum one quantity's table at the reduced time τ.
///
/// Each populated power contributes the sum of its periodic terms, taken in
/// reverse insertion order; the per-power sums then act as polynomial
/// coefficients in τ, combined by Horner's method over exactly the populated
/// slot count. An entirely empty table is a programming error and panics in
/// [`horner`].
fn sum_series(table: &SeriesTable, tau: f64) -> f64 {
    let populated = table
        .iter()
        .rposition(|terms| !terms.is_empty())
        .map_or(0, |last| last + 1);

    let mut sums = [0.0_f64; 6];
    for (power, terms) in table.iter().enumerate().take(populated) {
        let mut total = 0.0;
        for term in terms.iter().rev() {
            total += term.amplitude * (term.phase + term.frequency * tau).cos();
        }
        sums[power] = total;
    }

    horner(tau, &sums[..populated])
}
