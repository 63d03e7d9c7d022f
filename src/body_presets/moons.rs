//! This module contains presets for natural satellites.

use std::sync::Arc;

use super::planets::earth;
use crate::{Body, MeanElements};

/// Returns the Moon, orbiting the Earth.
///
/// Mean elements are referred to the J2000 ecliptic. The node regresses
/// once every 18.6 years and the line of apsides advances once every 8.85.
pub fn the_moon() -> Body {
    Body::new("Moon", 4_902.800_066, 1_737.4, Some(Arc::new(earth()))).with_mean_elements(
        MeanElements {
            semi_major_axis: 384_400.0,
            semi_major_axis_rate: 0.0,
            eccentricity: 0.0549,
            eccentricity_rate: 0.0,
            inclination_deg: 5.145,
            inclination_rate_deg: 0.0,
            mean_longitude_deg: 218.316_447_7,
            mean_longitude_rate_deg: 481_267.881_234_21,
            long_periapsis_deg: 83.353_246_5,
            long_periapsis_rate_deg: 4_069.013_728_7,
            long_asc_node_deg: 125.044_555_0,
            long_asc_node_rate_deg: -1_934.136_184_9,
        },
    )
}
