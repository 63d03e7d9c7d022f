use core::f64::consts::TAU;
use std::sync::Arc;

use glam::{DMat3, DVec3};

use crate::{
    solvers::{
        eccentric_anomaly_elliptic, eccentric_anomaly_hyperbolic, parabolic_anomaly,
        true_anomaly_elliptic, true_anomaly_hyperbolic,
    },
    Body, Epoch, Plane,
};

/// How far out open trajectories are sampled, as a multiple of the
/// periapsis distance.
const OPEN_SAMPLE_DISTANCE_RATIO: f64 = 3.0;

/// The capabilities a plotter needs from an orbit.
///
/// Anything that can name its attractor, move between reference planes and
/// trace its own path can be plotted.
pub trait PlotOrbit {
    /// The central body of the orbit.
    fn attractor(&self) -> &Arc<Body>;

    /// The epoch of the orbit's current state.
    fn epoch(&self) -> Epoch;

    /// The reference plane the orbit is expressed in.
    fn plane(&self) -> Plane;

    /// The same orbit expressed in another reference plane.
    fn change_plane(&self, plane: Plane) -> Self
    where
        Self: Sized;

    /// Samples `values` Cartesian positions along the orbit, in kilometres.
    fn sample(&self, values: usize) -> Vec<DVec3>;

    /// The position at the orbit's epoch, in kilometres.
    fn position(&self) -> DVec3;

    /// The perifocal basis `[p, q, w]`: periapsis direction, the in-plane
    /// direction 90° ahead of it, and the orbit normal.
    fn pqw(&self) -> [DVec3; 3];
}

/// A two-body conic orbit around an attractor.
///
/// The orientation is kept as the perifocal basis rather than as angles,
/// so moving between reference planes is a single rotation.
///
/// # Example
/// ```
/// use std::sync::Arc;
///
/// use orbit_plotter::{body_presets, Epoch, Orbit, Plane, PlotOrbit};
///
/// let earth = Arc::new(body_presets::planets::earth());
/// let orbit = Orbit::circular(earth, 7000.0, 0.0, Epoch::J2000, Plane::EarthEquator);
///
/// let points = orbit.sample(8);
/// assert_eq!(points.len(), 8);
/// assert!((orbit.position().length() - 7000.0).abs() < 1e-6);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Orbit {
    attractor: Arc<Body>,
    epoch: Epoch,
    plane: Plane,

    /// e < 1: ellipse
    /// e = 1: parabola
    /// e > 1: hyperbola
    eccentricity: f64,

    /// Distance of closest approach, in kilometres.
    periapsis: f64,

    /// Mean anomaly at `epoch`, in radians.
    mean_anomaly: f64,

    /// Columns are the perifocal unit vectors p, q and w.
    basis: DMat3,
}

impl Orbit {
    /// Creates a new orbit from classical elements.
    ///
    /// Angles are in radians, the periapsis in kilometres.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        eccentricity: f64,
        periapsis: f64,
        inclination: f64,
        arg_pe: f64,
        long_asc_node: f64,
        mean_anomaly: f64,
        attractor: Arc<Body>,
        epoch: Epoch,
        plane: Plane,
    ) -> Orbit {
        Orbit {
            attractor,
            epoch,
            plane,
            eccentricity,
            periapsis,
            mean_anomaly,
            basis: Self::perifocal_basis(inclination, arg_pe, long_asc_node),
        }
    }

    /// Creates an equatorial circular orbit of the given radius.
    pub fn circular(
        attractor: Arc<Body>,
        radius: f64,
        mean_anomaly: f64,
        epoch: Epoch,
        plane: Plane,
    ) -> Orbit {
        Self::new(0.0, radius, 0.0, 0.0, 0.0, mean_anomaly, attractor, epoch, plane)
    }

    fn perifocal_basis(inclination: f64, arg_pe: f64, long_asc_node: f64) -> DMat3 {
        let (sin_inc, cos_inc) = inclination.sin_cos();
        let (sin_arg_pe, cos_arg_pe) = arg_pe.sin_cos();
        let (sin_lan, cos_lan) = long_asc_node.sin_cos();

        // https://downloads.rene-schwarz.com/download/M001-Keplerian_Orbit_Elements_to_Cartesian_State_Vectors.pdf
        let p = DVec3::new(
            cos_arg_pe * cos_lan - sin_arg_pe * cos_inc * sin_lan,
            cos_arg_pe * sin_lan + sin_arg_pe * cos_inc * cos_lan,
            sin_arg_pe * sin_inc,
        );
        let q = DVec3::new(
            -(sin_arg_pe * cos_lan + cos_arg_pe * cos_inc * sin_lan),
            cos_arg_pe * cos_inc * cos_lan - sin_arg_pe * sin_lan,
            cos_arg_pe * sin_inc,
        );
        let w = DVec3::new(sin_lan * sin_inc, -cos_lan * sin_inc, cos_inc);

        DMat3::from_cols(p, q, w)
    }

    /// Gets the eccentricity of the orbit.
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Gets the periapsis distance, in kilometres.
    pub fn periapsis(&self) -> f64 {
        self.periapsis
    }

    /// Gets the mean anomaly at the orbit's epoch, in radians.
    pub fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }

    /// Gets the semi-major axis of the orbit.
    ///
    /// Infinite for parabolic orbits, negative for hyperbolic ones.
    pub fn semi_major_axis(&self) -> f64 {
        self.periapsis / (1.0 - self.eccentricity)
    }

    /// Gets the semi-latus rectum of the orbit.
    pub fn semi_latus_rectum(&self) -> f64 {
        self.periapsis * (1.0 + self.eccentricity)
    }

    /// Gets the mean motion, in radians per second.
    ///
    /// For parabolic orbits this is the rate of Barker's mean anomaly.
    pub fn mean_motion(&self) -> f64 {
        let mu = self.attractor.mu;
        if self.eccentricity == 1.0 {
            (mu / (2.0 * self.periapsis.powi(3))).sqrt()
        } else {
            (mu / self.semi_major_axis().abs().powi(3)).sqrt()
        }
    }

    /// Gets the time it takes to complete one revolution, in seconds.
    ///
    /// Open orbits never complete one and return infinity.
    pub fn period(&self) -> f64 {
        if self.eccentricity < 1.0 {
            // T = 2pi * sqrt(a^3 / GM)
            TAU / self.mean_motion()
        } else {
            f64::INFINITY
        }
    }

    /// Gets the true anomaly at the orbit's epoch, in radians.
    pub fn true_anomaly(&self) -> f64 {
        let e = self.eccentricity;
        if e < 1.0 {
            true_anomaly_elliptic(eccentric_anomaly_elliptic(self.mean_anomaly, e), e)
        } else if e == 1.0 {
            2.0 * parabolic_anomaly(self.mean_anomaly).atan()
        } else {
            true_anomaly_hyperbolic(eccentric_anomaly_hyperbolic(self.mean_anomaly, e), e)
        }
    }

    /// Gets the position at a true anomaly, in kilometres.
    pub fn position_at_true_anomaly(&self, true_anomaly: f64) -> DVec3 {
        let (sin, cos) = true_anomaly.sin_cos();
        let radius = self.semi_latus_rectum() / (1.0 + self.eccentricity * cos);

        self.basis * DVec3::new(radius * cos, radius * sin, 0.0)
    }

    /// The same orbit `dt` seconds later.
    pub fn propagate(&self, dt: f64) -> Orbit {
        let mut mean_anomaly = self.mean_anomaly + self.mean_motion() * dt;
        if self.eccentricity < 1.0 {
            mean_anomaly = mean_anomaly.rem_euclid(TAU);
        }

        Orbit {
            epoch: self.epoch + dt,
            mean_anomaly,
            ..self.clone()
        }
    }

    /// The true anomalies sampled along the path.
    ///
    /// Closed orbits start at the current position and cover one full
    /// revolution, evenly spaced in eccentric anomaly. Open orbits are
    /// sampled evenly in true anomaly out to a few periapsis distances.
    fn sample_anomalies(&self, values: usize) -> Vec<f64> {
        let e = self.eccentricity;

        if e < 1.0 {
            let start = eccentric_anomaly_elliptic(self.mean_anomaly, e);
            linspace(start, start + TAU, values)
                .into_iter()
                .map(|eccentric_anomaly| true_anomaly_elliptic(eccentric_anomaly, e))
                .collect()
        } else {
            let limit = (((1.0 + e) / OPEN_SAMPLE_DISTANCE_RATIO - 1.0) / e).acos();
            linspace(-limit, limit, values)
        }
    }
}

impl PlotOrbit for Orbit {
    fn attractor(&self) -> &Arc<Body> {
        &self.attractor
    }

    fn epoch(&self) -> Epoch {
        self.epoch
    }

    fn plane(&self) -> Plane {
        self.plane
    }

    fn change_plane(&self, plane: Plane) -> Orbit {
        Orbit {
            plane,
            basis: self.plane.rotation_to(plane) * self.basis,
            ..self.clone()
        }
    }

    fn sample(&self, values: usize) -> Vec<DVec3> {
        self.sample_anomalies(values)
            .into_iter()
            .map(|true_anomaly| self.position_at_true_anomaly(true_anomaly))
            .collect()
    }

    fn position(&self) -> DVec3 {
        self.position_at_true_anomaly(self.true_anomaly())
    }

    fn pqw(&self) -> [DVec3; 3] {
        [self.basis.x_axis, self.basis.y_axis, self.basis.z_axis]
    }
}

/// `values` evenly spaced numbers from `start` to `end`, both included.
fn linspace(start: f64, end: f64, values: usize) -> Vec<f64> {
    match values {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (values - 1) as f64;
            (0..values).map(|i| start + step * i as f64).collect()
        }
    }
}
