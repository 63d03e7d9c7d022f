#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Plane, PlotError, Result};

/// Settings fixed when a plotter is created.
///
/// # Example
/// ```
/// use orbit_plotter::{Plane, PlotterConfig};
///
/// let config = PlotterConfig::default()
///     .num_points(300)
///     .plane(Plane::EarthEcliptic);
///
/// assert!(config.validate().is_ok());
/// assert!(PlotterConfig::default().num_points(1).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlotterConfig {
    /// Number of samples taken along each orbit or body path.
    pub num_points: usize,

    /// The reference plane everything is reprojected onto.
    pub plane: Plane,
}

impl PlotterConfig {
    /// Sample count used when none is given.
    pub const DEFAULT_NUM_POINTS: usize = 150;

    /// Sets the number of samples per path.
    pub fn num_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }

    /// Sets the reference plane.
    pub fn plane(mut self, plane: Plane) -> Self {
        self.plane = plane;
        self
    }

    /// Checks that the settings can describe a path.
    ///
    /// A path needs at least two samples.
    pub fn validate(&self) -> Result<()> {
        if self.num_points < 2 {
            return Err(PlotError::InvalidConfig(format!(
                "num_points must be at least 2, got {}",
                self.num_points
            )));
        }

        Ok(())
    }
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self {
            num_points: Self::DEFAULT_NUM_POINTS,
            plane: Plane::default(),
        }
    }
}
