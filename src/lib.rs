//! # Orbit Plotting
//! This library crate draws orbits and the paths of celestial bodies for
//! visual inspection, without tying itself to any particular rendering
//! target.
//!
//! A plot is anchored to a single central body, the *attractor*. Every orbit,
//! body path or precomputed trajectory drawn on it is kept, so the plot can be
//! redrawn at will, for example after switching to another projection frame.
//! The attractor is resized as trajectories are added: it is drawn at its real
//! size around low orbits, and grows to stay visible around very high ones.
//!
//! ## Getting started
//! This crate provides these main items:
//! - [`OrbitPlotter`]: The plotter. It keeps the plotted [`Trajectory`]s,
//!   binds the attractor, and samples orbits and body ephemerides.
//! - [`Backend`]: The drawing hooks a rendering target implements.
//!   The [`backends`] module contains two of them: a retained 3D scene and a
//!   2D figure that renders to SVG.
//! - [`OrbitPlotter2D`]: A plotter for two-dimensional backends. It projects
//!   everything onto an orbital [`Frame`].
//! - [`Orbit`]: A two-body orbit implementing [`PlotOrbit`], the capabilities a
//!   plotter needs from an orbit.
//! - [`Body`]: A celestial body. The [`body_presets`] module contains the Sun,
//!   the planets and the Moon, with mean elements to estimate their paths.
//!
//! Lengths are in kilometres and times in seconds throughout.
//!
//! ## Example
//!
//! ```rust
//! use orbit_plotter::{backends::SceneBackend, body_presets, Epoch, OrbitPlotter, PlotterConfig};
//!
//! # fn main() -> orbit_plotter::Result<()> {
//! let mut plotter = OrbitPlotter::new(SceneBackend::new(), PlotterConfig::default())?;
//!
//! let epoch = Epoch::from_calendar(2020, 1, 1, 0, 0, 0.0);
//! plotter.plot_body_orbit(&body_presets::planets::earth(), epoch, None, None, false)?;
//! plotter.plot_body_orbit(&body_presets::planets::mars(), epoch, None, None, true)?;
//!
//! assert_eq!(plotter.trajectories().len(), 2);
//! assert_eq!(plotter.attractor().unwrap().name, "Sun");
//! # Ok(())
//! # }
//! ```

pub mod backends;
mod backend;
mod body;
pub mod body_presets;
pub mod color;
mod config;
mod ephem;
mod error;
mod frame;
mod mean_elements;
mod orbit;
mod plotter;
mod representation;
mod solvers;
mod time;
mod trajectory;

pub use backend::Backend;
pub use body::Body;
pub use color::Color;
pub use config::PlotterConfig;
pub use ephem::{Ephemeris, MeanElementsEphemeris};
pub use error::{PlotError, Result};
pub use frame::{Backend2D, Frame, FrameProjection, OrbitPlotter2D};
pub use mean_elements::{get_mean_elements, ElementsAtEpoch, MeanElements};
pub use orbit::{Orbit, PlotOrbit};
pub use plotter::OrbitPlotter;
pub use representation::{Cylindrical, Spherical, ToCartesian};
pub use time::{generate_label, time_range, Epoch};
pub use trajectory::Trajectory;

use glam::DMat3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Obliquity of the ecliptic at J2000, in radians (84381.448 arcseconds).
pub const J2000_OBLIQUITY: f64 = 84_381.448 / 3_600.0 * (core::f64::consts::PI / 180.0);

/// The fundamental plane coordinates are expressed in.
///
/// Both planes share the x axis, pointing at the vernal equinox of J2000.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Plane {
    /// The Earth's mean equator at J2000.
    #[default]
    EarthEquator,
    /// The mean ecliptic at J2000.
    EarthEcliptic,
}

impl Plane {
    /// The rotation taking coordinates expressed in `self` to coordinates
    /// expressed in `target`.
    ///
    /// # Example
    /// ```
    /// use glam::DVec3;
    ///
    /// use orbit_plotter::Plane;
    ///
    /// // The ecliptic pole, seen from the equator, is tilted towards -y.
    /// let pole = Plane::EarthEcliptic.rotation_to(Plane::EarthEquator) * DVec3::Z;
    /// assert!(pole.y < 0.0);
    /// assert!(pole.z > 0.9);
    /// ```
    pub fn rotation_to(self, target: Plane) -> DMat3 {
        match (self, target) {
            (Plane::EarthEquator, Plane::EarthEcliptic) => DMat3::from_rotation_x(-J2000_OBLIQUITY),
            (Plane::EarthEcliptic, Plane::EarthEquator) => DMat3::from_rotation_x(J2000_OBLIQUITY),
            _ => DMat3::IDENTITY,
        }
    }
}

#[cfg(test)]
mod tests;
