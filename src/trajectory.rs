use glam::DVec3;

use crate::Color;

/// One plotted path, its optional current-position marker and its styling.
///
/// Trajectories are created by the plotter and never change afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    /// Cartesian samples of the path, in kilometres.
    pub coordinates: Vec<DVec3>,
    /// The "current" position, marked separately from the path.
    pub position: Option<DVec3>,
    pub label: String,
    /// Primary color first, then trail variants.
    pub colors: Vec<Color>,
    pub dashed: bool,
}

impl Trajectory {
    /// The smallest distance from the origin among the samples.
    ///
    /// Infinite for a trajectory without samples.
    pub fn min_distance(&self) -> f64 {
        self.coordinates
            .iter()
            .map(|point| point.length())
            .fold(f64::INFINITY, f64::min)
    }
}
