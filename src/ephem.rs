//! Ephemeris sources: positions of a body relative to its parent over time.

use glam::DVec3;

use crate::{get_mean_elements, Body, Epoch, Plane, PlotOrbit, Result};

/// A source of body positions.
///
/// Implementors return the Cartesian position of `body` relative to its
/// parent at each of `epochs`, expressed in `plane`, in kilometres.
pub trait Ephemeris {
    /// Samples the body's position at every epoch, in order.
    fn sample(&self, body: &Body, epochs: &[Epoch], plane: Plane) -> Result<Vec<DVec3>>;
}

/// An ephemeris that evaluates the body's mean elements at each epoch.
///
/// Accuracy is that of the mean elements themselves, good enough for
/// plotting, not for navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeanElementsEphemeris;

impl Ephemeris for MeanElementsEphemeris {
    fn sample(&self, body: &Body, epochs: &[Epoch], plane: Plane) -> Result<Vec<DVec3>> {
        let rotation = Plane::EarthEcliptic.rotation_to(plane);

        epochs
            .iter()
            .map(|&epoch| {
                let orbit = get_mean_elements(body, epoch)?;
                Ok(rotation * orbit.position())
            })
            .collect()
    }
}
