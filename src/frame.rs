//! Projection of 3D trajectories onto a 2D orbital frame.
//!
//! Only two-dimensional backends need this: they implement [`Backend2D`]
//! and are driven through an [`OrbitPlotter2D`], which keeps the frame and
//! the already plotted content consistent.

use std::sync::Arc;

use glam::{DVec2, DVec3};
use tracing::debug;

use crate::{
    get_mean_elements, Backend, Body, Color, Epoch, OrbitPlotter, Plane, PlotError, PlotOrbit,
    PlotterConfig, Result, ToCartesian, Trajectory,
};

/// Relative tolerance of the frame checks.
const RELATIVE_TOLERANCE: f64 = 1e-5;

/// Absolute tolerance of the frame checks.
const ABSOLUTE_TOLERANCE: f64 = 1e-8;

#[inline]
fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= ABSOLUTE_TOLERANCE + RELATIVE_TOLERANCE * b.abs()
}

/// An orthonormal projection basis.
///
/// `p` and `q` span the drawing plane; `w` is its normal.
///
/// # Example
/// ```
/// use glam::{DVec2, DVec3};
///
/// use orbit_plotter::Frame;
///
/// let frame = Frame::new(DVec3::Y, DVec3::Z, DVec3::X).unwrap();
/// let projected = frame.project(&[DVec3::new(5.0, 1.0, 2.0)]);
/// assert_eq!(projected, vec![DVec2::new(1.0, 2.0)]);
///
/// assert!(Frame::new(DVec3::X, DVec3::X, DVec3::Z).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    p: DVec3,
    q: DVec3,
    w: DVec3,
}

impl Frame {
    /// Validates and builds a frame.
    ///
    /// # Errors
    /// [`PlotError::NotUnit`] if a vector does not have unit length, and
    /// [`PlotError::NotOrthogonal`] if two of them are not perpendicular.
    pub fn new(p: DVec3, q: DVec3, w: DVec3) -> Result<Frame> {
        if ![p, q, w].iter().all(|v| is_close(v.length(), 1.0)) {
            return Err(PlotError::NotUnit);
        }
        if ![p.dot(q), q.dot(w), w.dot(p)]
            .iter()
            .all(|&dot| is_close(dot, 0.0))
        {
            return Err(PlotError::NotOrthogonal);
        }

        Ok(Frame { p, q, w })
    }

    /// The perifocal frame of an orbit.
    pub fn from_orbit(orbit: &impl PlotOrbit) -> Result<Frame> {
        let [p, q, w] = orbit.pqw();
        Frame::new(p, q, w)
    }

    pub fn p(&self) -> DVec3 {
        self.p
    }

    pub fn q(&self) -> DVec3 {
        self.q
    }

    pub fn w(&self) -> DVec3 {
        self.w
    }

    /// Projects one point onto the `(p, q)` plane.
    #[inline]
    pub fn project_point(&self, point: DVec3) -> DVec2 {
        let in_plane = point - point.dot(self.w) * self.w;
        DVec2::new(in_plane.dot(self.p), in_plane.dot(self.q))
    }

    /// Projects points onto the `(p, q)` plane by dropping their component
    /// along `w`.
    pub fn project(&self, points: &[DVec3]) -> Vec<DVec2> {
        points.iter().map(|&point| self.project_point(point)).collect()
    }
}

/// The frame state a 2D backend projects through.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameProjection {
    frame: Option<Frame>,
}

impl FrameProjection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current frame, if one was chosen.
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    pub fn set_frame(&mut self, frame: Frame) {
        self.frame = Some(frame);
    }

    /// Projects one point through the current frame.
    pub fn project_point(&self, point: DVec3) -> Result<DVec2> {
        self.frame
            .as_ref()
            .map(|frame| frame.project_point(point))
            .ok_or(PlotError::NoFrame)
    }

    /// Projects points through the current frame.
    ///
    /// # Errors
    /// [`PlotError::NoFrame`] if no frame was chosen.
    pub fn project(&self, points: &[DVec3]) -> Result<Vec<DVec2>> {
        self.frame
            .as_ref()
            .map(|frame| frame.project(points))
            .ok_or(PlotError::NoFrame)
    }
}

/// A backend that draws in two dimensions through a [`FrameProjection`].
pub trait Backend2D: Backend {
    fn projection(&self) -> &FrameProjection;

    fn projection_mut(&mut self) -> &mut FrameProjection;

    /// Erases everything drawn so far, ahead of a full redraw.
    fn clear_figure(&mut self) -> Result<()> {
        Err(PlotError::unimplemented("clear_figure"))
    }
}

/// An [`OrbitPlotter`] for two-dimensional backends.
///
/// The first orbit or body plotted picks the projection frame unless one was
/// set explicitly. Changing the frame redraws everything already plotted.
///
/// # Example
/// ```
/// use std::sync::Arc;
///
/// use orbit_plotter::{
///     backends::FigureBackend, body_presets, Epoch, Orbit, OrbitPlotter2D, Plane, PlotterConfig,
/// };
///
/// let earth = Arc::new(body_presets::planets::earth());
/// let orbit = Orbit::new(0.3, 8_000.0, 0.9, 0.4, 1.2, 0.0, earth, Epoch::J2000, Plane::EarthEquator);
///
/// let mut plotter = OrbitPlotter2D::new(FigureBackend::new(), PlotterConfig::default()).unwrap();
/// plotter.plot(&orbit, None, None, false).unwrap();
///
/// assert!(plotter.frame().is_some());
/// assert!(plotter.backend().to_svg(400, 400).unwrap().starts_with("<svg"));
/// ```
#[derive(Debug)]
pub struct OrbitPlotter2D<B: Backend2D> {
    plotter: OrbitPlotter<B>,
}

impl<B: Backend2D> OrbitPlotter2D<B> {
    pub fn new(backend: B, config: PlotterConfig) -> Result<Self> {
        Ok(Self::from_plotter(OrbitPlotter::new(backend, config)?))
    }

    pub fn from_plotter(plotter: OrbitPlotter<B>) -> Self {
        Self { plotter }
    }

    /// The underlying plotter.
    pub fn plotter(&self) -> &OrbitPlotter<B> {
        &self.plotter
    }

    pub fn into_plotter(self) -> OrbitPlotter<B> {
        self.plotter
    }

    pub fn trajectories(&self) -> &[Trajectory] {
        self.plotter.trajectories()
    }

    pub fn plane(&self) -> Plane {
        self.plotter.plane()
    }

    pub fn backend(&self) -> &B {
        self.plotter.backend()
    }

    /// The current projection frame, if one was chosen.
    pub fn frame(&self) -> Option<&Frame> {
        self.plotter.backend().projection().frame()
    }

    /// See [`OrbitPlotter::set_attractor`].
    pub fn set_attractor(&mut self, attractor: impl Into<Arc<Body>>) -> Result<()> {
        self.plotter.set_attractor(attractor)
    }

    /// Sets the projection frame from three raw vectors.
    ///
    /// # Errors
    /// [`PlotError::NotUnit`] or [`PlotError::NotOrthogonal`]; the frame is
    /// left unchanged.
    #[deprecated(note = "use `set_orbit_frame` or `set_body_frame` instead")]
    pub fn set_frame(&mut self, p: DVec3, q: DVec3, w: DVec3) -> Result<()> {
        self.apply_frame(Frame::new(p, q, w)?)
    }

    /// Projects onto the perifocal frame of `orbit`, taken in the plot plane.
    pub fn set_orbit_frame<O: PlotOrbit>(&mut self, orbit: &O) -> Result<()> {
        let orbit = orbit.change_plane(self.plane());
        self.apply_frame(Frame::from_orbit(&orbit)?)
    }

    /// Projects onto the perifocal frame of the body's mean orbit at
    /// `epoch`, or now when no epoch is given.
    pub fn set_body_frame(&mut self, body: &Body, epoch: Option<Epoch>) -> Result<()> {
        let epoch = epoch.unwrap_or_else(Epoch::now);
        let orbit = get_mean_elements(body, epoch)?;
        self.set_orbit_frame(&orbit)
    }

    /// See [`OrbitPlotter::plot`]. Picks the orbit's frame first if no frame
    /// is set.
    pub fn plot<O: PlotOrbit>(
        &mut self,
        orbit: &O,
        label: Option<&str>,
        color: Option<Color>,
        trail: bool,
    ) -> Result<()> {
        if self.frame().is_none() {
            self.plotter.check_attractor(orbit.attractor())?;
            self.set_orbit_frame(orbit)?;
        }

        self.plotter.plot(orbit, label, color, trail)
    }

    /// See [`OrbitPlotter::plot_body_orbit`]. Picks the body's frame at
    /// `epoch` first if no frame is set.
    pub fn plot_body_orbit(
        &mut self,
        body: &Body,
        epoch: Epoch,
        label: Option<&str>,
        color: Option<Color>,
        trail: bool,
    ) -> Result<()> {
        if self.frame().is_none() {
            let parent = body.parent.as_deref().ok_or_else(|| PlotError::NoParent {
                body: body.name.clone(),
            })?;
            self.plotter.check_attractor(parent)?;
            self.set_body_frame(body, Some(epoch))?;
        }

        self.plotter
            .plot_body_orbit(body, epoch, label, color, trail)
    }

    /// See [`OrbitPlotter::plot_trajectory`].
    ///
    /// # Errors
    /// [`PlotError::NoFrame`] until a frame is set.
    pub fn plot_trajectory<I>(
        &mut self,
        coordinates: I,
        label: Option<&str>,
        color: Option<Color>,
        trail: bool,
    ) -> Result<()>
    where
        I: IntoIterator,
        I::Item: ToCartesian,
    {
        if self.frame().is_none() {
            return Err(PlotError::NoFrame);
        }

        self.plotter.plot_trajectory(coordinates, label, color, trail)
    }

    fn apply_frame(&mut self, frame: Frame) -> Result<()> {
        debug!(p = %frame.p, q = %frame.q, w = %frame.w, "setting projection frame");
        self.plotter.backend_mut().projection_mut().set_frame(frame);

        if !self.plotter.trajectories().is_empty() {
            self.plotter.backend_mut().clear_figure()?;
            self.plotter.redraw_attractor()?;
            self.plotter.redraw()?;
        }

        Ok(())
    }
}
