//! # Constants and type definitions for heliopos
//!
//! This module centralizes the **physical constants** and **common type
//! definitions** used throughout the `heliopos` library.
//!
//! ## Overview
//!
//! - Reference epoch and time-scale constants (J2000, Julian century)
//! - Orbital dynamics constants (Gaussian gravitational constant)
//! - J2000 obliquity sine/cosine used by the orbit geometry
//! - Core type aliases used across the crate
//!
//! These definitions are used by all main modules, including the series
//! evaluator, the orbit propagator, and the coordinate transforms.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Julian date of the J2000.0 epoch (2000-01-01 12:00:00 TT)
pub const J2000: f64 = 2_451_545.0;

/// Number of days in a Julian century
pub const JULIAN_CENTURY: f64 = 36_525.0;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2_400_000.5;

/// Gaussian gravitational constant k (used in classical orbit dynamics)
pub const GAUSS_GRAV: f64 = 0.01720209895;

/// k², often used in Kepler’s third law
pub const GAUSS_GRAV_SQUARED: f64 = GAUSS_GRAV * GAUSS_GRAV;

/// Sine of the obliquity of the ecliptic at J2000
pub const SOBL_J2000: f64 = 0.397777156;

/// Cosine of the obliquity of the ecliptic at J2000
pub const COBL_J2000: f64 = 0.917482062;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Julian Date (days)
pub type JulianDay = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
