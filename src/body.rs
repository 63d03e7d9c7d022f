use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{color::body_color, Color, MeanElements};

/// A struct representing a celestial body.
///
/// Bodies compare by value: two separately built copies of the same preset
/// are the same attractor as far as a plotter is concerned.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Body {
    /// The name of the celestial body.
    pub name: String,

    /// The gravitational parameter (GM) of the body, in km^3 s^-2.
    pub mu: f64,

    /// The mean radius of the body, in kilometres.
    pub radius: f64,

    /// The body this one orbits, if any.
    pub parent: Option<Arc<Body>>,

    /// Averaged orbital elements around the parent, if known.
    pub mean_elements: Option<MeanElements>,
}

impl Body {
    /// Creates a new `Body` instance.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the celestial body.
    /// * `mu` - The gravitational parameter, in km^3 s^-2.
    /// * `radius` - The mean radius, in kilometres.
    /// * `parent` - The body it orbits, if any.
    pub fn new(name: impl Into<String>, mu: f64, radius: f64, parent: Option<Arc<Body>>) -> Self {
        Self {
            name: name.into(),
            mu,
            radius,
            parent,
            mean_elements: None,
        }
    }

    /// Attaches mean elements around the parent body.
    pub fn with_mean_elements(mut self, mean_elements: MeanElements) -> Self {
        self.mean_elements = Some(mean_elements);
        self
    }

    /// The default display color of the body, if it has one.
    pub fn color(&self) -> Option<Color> {
        body_color(&self.name)
    }
}

impl core::fmt::Display for Body {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}
