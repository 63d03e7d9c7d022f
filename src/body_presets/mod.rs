//! Preset celestial bodies of the Solar System.
//!
//! Planets carry J2000 mean elements around the Sun from E. M. Standish,
//! "Keplerian Elements for Approximate Positions of the Major Planets"
//! (valid 1800 AD to 2050 AD). The Moon carries mean elements around the Earth.
//!
//! Gravitational parameters are in km^3 s^-2, radii in kilometres.

pub mod moons;
pub mod planets;
pub mod stars;

/// The astronomical unit, in kilometres.
pub const AU: f64 = 149_597_870.7;
