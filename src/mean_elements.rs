//! Averaged orbital elements and the orbit estimate built from them.
//!
//! Elements follow the layout of E. M. Standish, "Keplerian Elements for
//! Approximate Positions of the Major Planets": a value at J2000 plus a
//! linear rate per Julian century, referred to the J2000 ecliptic.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Body, Epoch, Orbit, Plane, PlotError, Result};

/// Averaged orbital elements of a body around its parent.
///
/// Each element is `value + rate * T`, with `T` in Julian centuries since
/// J2000. Angles are in degrees, distances in kilometres.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeanElements {
    pub semi_major_axis: f64,
    pub semi_major_axis_rate: f64,
    pub eccentricity: f64,
    pub eccentricity_rate: f64,
    pub inclination_deg: f64,
    pub inclination_rate_deg: f64,
    pub mean_longitude_deg: f64,
    pub mean_longitude_rate_deg: f64,
    /// Longitude of periapsis (ϖ = ω + Ω).
    pub long_periapsis_deg: f64,
    pub long_periapsis_rate_deg: f64,
    pub long_asc_node_deg: f64,
    pub long_asc_node_rate_deg: f64,
}

/// Elements evaluated at a given epoch, in kilometres and radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementsAtEpoch {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub arg_pe: f64,
    pub long_asc_node: f64,
    pub mean_anomaly: f64,
}

impl MeanElements {
    /// Evaluates the linear element model at `epoch`.
    pub fn at(&self, epoch: Epoch) -> ElementsAtEpoch {
        let t = epoch.julian_centuries();

        let mean_longitude = self.mean_longitude_deg + self.mean_longitude_rate_deg * t;
        let long_periapsis = self.long_periapsis_deg + self.long_periapsis_rate_deg * t;
        let long_asc_node = self.long_asc_node_deg + self.long_asc_node_rate_deg * t;

        ElementsAtEpoch {
            semi_major_axis: self.semi_major_axis + self.semi_major_axis_rate * t,
            eccentricity: self.eccentricity + self.eccentricity_rate * t,
            inclination: (self.inclination_deg + self.inclination_rate_deg * t).to_radians(),
            arg_pe: (long_periapsis - long_asc_node).to_radians(),
            long_asc_node: long_asc_node.to_radians(),
            mean_anomaly: (mean_longitude - long_periapsis).rem_euclid(360.0).to_radians(),
        }
    }
}

/// Builds the approximate orbit of `body` around its parent at `epoch`
/// from the body's mean elements.
///
/// The orbit is expressed in the ecliptic plane; use
/// [`change_plane`][crate::PlotOrbit::change_plane] to move it.
///
/// # Errors
/// [`PlotError::NoParent`] if the body orbits nothing, and
/// [`PlotError::NoMeanElements`] if it carries no mean elements.
///
/// # Example
/// ```
/// use orbit_plotter::{body_presets, get_mean_elements, Epoch};
///
/// let earth = body_presets::planets::earth();
/// let orbit = get_mean_elements(&earth, Epoch::J2000).unwrap();
///
/// let days = orbit.period() / 86_400.0;
/// assert!((days - 365.25).abs() < 0.5);
/// ```
pub fn get_mean_elements(body: &Body, epoch: Epoch) -> Result<Orbit> {
    let parent = body.parent.clone().ok_or_else(|| PlotError::NoParent {
        body: body.name.clone(),
    })?;
    let mean_elements = body.mean_elements.ok_or_else(|| PlotError::NoMeanElements {
        body: body.name.clone(),
    })?;

    let elements = mean_elements.at(epoch);

    Ok(Orbit::new(
        elements.eccentricity,
        elements.semi_major_axis * (1.0 - elements.eccentricity),
        elements.inclination,
        elements.arg_pe,
        elements.long_asc_node,
        elements.mean_anomaly,
        parent,
        epoch,
        Plane::EarthEcliptic,
    ))
}
