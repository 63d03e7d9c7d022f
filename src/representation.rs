//! Spatial representations accepted for precomputed trajectories.
//!
//! Everything is normalized to Cartesian coordinates before it is stored.

use glam::DVec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A spatial position that can be expressed in Cartesian coordinates.
pub trait ToCartesian {
    /// Converts the position into Cartesian `(x, y, z)` coordinates.
    fn to_cartesian(&self) -> DVec3;
}

impl ToCartesian for DVec3 {
    #[inline]
    fn to_cartesian(&self) -> DVec3 {
        *self
    }
}

impl ToCartesian for [f64; 3] {
    #[inline]
    fn to_cartesian(&self) -> DVec3 {
        DVec3::from_array(*self)
    }
}

impl<T: ToCartesian + ?Sized> ToCartesian for &T {
    #[inline]
    fn to_cartesian(&self) -> DVec3 {
        (**self).to_cartesian()
    }
}

/// A position given as distance, latitude and longitude.
///
/// Latitude is measured from the xy-plane, longitude from the x axis
/// towards the y axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Spherical {
    /// Distance from the origin.
    pub distance: f64,
    /// Angle above the xy-plane, in radians.
    pub lat: f64,
    /// Angle from the x axis in the xy-plane, in radians.
    pub lon: f64,
}

impl ToCartesian for Spherical {
    fn to_cartesian(&self) -> DVec3 {
        let (sin_lat, cos_lat) = self.lat.sin_cos();
        let (sin_lon, cos_lon) = self.lon.sin_cos();

        DVec3::new(
            self.distance * cos_lat * cos_lon,
            self.distance * cos_lat * sin_lon,
            self.distance * sin_lat,
        )
    }
}

/// A position given as distance from the z axis, azimuth and height.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cylindrical {
    pub rho: f64,
    /// Azimuth from the x axis, in radians.
    pub phi: f64,
    pub z: f64,
}

impl ToCartesian for Cylindrical {
    fn to_cartesian(&self) -> DVec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        DVec3::new(self.rho * cos_phi, self.rho * sin_phi, self.z)
    }
}
