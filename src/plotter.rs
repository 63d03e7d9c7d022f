use core::fmt;
use std::sync::Arc;

use glam::DVec3;
use tracing::{debug, trace, warn};

use crate::{
    color::body_color, generate_label, get_mean_elements, time_range, Backend, Body, Color,
    Ephemeris, Epoch, MeanElementsEphemeris, Plane, PlotError, PlotOrbit, PlotterConfig, Result,
    ToCartesian, Trajectory,
};

/// Share of the closest trajectory distance the attractor is drawn at,
/// when that is larger than its real radius.
const ATTRACTOR_VISIBLE_FRACTION: f64 = 0.15;

/// Smallest position marker, as a share of the attractor radius, used when
/// the marker heuristic yields nothing drawable.
const MIN_MARKER_FRACTION: f64 = 0.01;

/// Plots orbits and body paths around a single attractor.
///
/// The plotter keeps every trajectory it has drawn, sizes the attractor so it
/// stays visible next to them, and hands the actual drawing to its
/// [`Backend`].
///
/// # Example
/// ```
/// use std::sync::Arc;
///
/// use orbit_plotter::{
///     backends::SceneBackend, body_presets, Epoch, Orbit, OrbitPlotter, Plane, PlotterConfig,
/// };
///
/// let earth = Arc::new(body_presets::planets::earth());
/// let orbit = Orbit::circular(earth, 42_164.0, 0.0, Epoch::J2000, Plane::EarthEquator);
///
/// let mut plotter = OrbitPlotter::new(SceneBackend::new(), PlotterConfig::default()).unwrap();
/// plotter.plot(&orbit, Some("GEO"), None, false).unwrap();
///
/// assert_eq!(plotter.trajectories().len(), 1);
/// assert!(plotter.trajectories()[0].dashed);
/// ```
pub struct OrbitPlotter<B: Backend> {
    backend: B,
    num_points: usize,
    plane: Plane,
    trajectories: Vec<Trajectory>,
    attractor: Option<Arc<Body>>,
    attractor_radius: f64,
    ephemeris: Box<dyn Ephemeris + Send + Sync>,
}

impl<B: Backend> OrbitPlotter<B> {
    /// Creates a plotter drawing onto `backend`.
    ///
    /// Body paths are sampled from a [`MeanElementsEphemeris`] unless
    /// another source is given with [`with_ephemeris`][Self::with_ephemeris].
    pub fn new(backend: B, config: PlotterConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            backend,
            num_points: config.num_points,
            plane: config.plane,
            trajectories: Vec::new(),
            attractor: None,
            attractor_radius: f64::INFINITY,
            ephemeris: Box::new(MeanElementsEphemeris),
        })
    }

    /// Replaces the source of body positions.
    pub fn with_ephemeris(mut self, ephemeris: impl Ephemeris + Send + Sync + 'static) -> Self {
        self.ephemeris = Box::new(ephemeris);
        self
    }

    /// The trajectories drawn so far, in the order they were plotted.
    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }

    /// The reference plane of the plot.
    pub fn plane(&self) -> Plane {
        self.plane
    }

    /// Number of samples taken along each orbit or body path.
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// The body anchoring the plot, if one is bound.
    pub fn attractor(&self) -> Option<&Arc<Body>> {
        self.attractor.as_ref()
    }

    /// The radius the attractor is drawn at, in kilometres.
    ///
    /// Infinite until the first trajectory is plotted.
    pub fn attractor_radius(&self) -> f64 {
        self.attractor_radius
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Binds the central body of the plot.
    ///
    /// Binding the same body again does nothing.
    ///
    /// # Errors
    /// [`PlotError::AttractorAlreadySet`] if another body is already bound.
    pub fn set_attractor(&mut self, attractor: impl Into<Arc<Body>>) -> Result<()> {
        let attractor = attractor.into();
        self.check_attractor(&attractor)?;

        if self.attractor.is_none() {
            debug!(attractor = %attractor.name, "binding attractor");
            self.attractor = Some(attractor);
        }

        Ok(())
    }

    /// Fails if another body than `attractor` is bound. Binds nothing.
    pub(crate) fn check_attractor(&self, attractor: &Body) -> Result<()> {
        match &self.attractor {
            Some(current) if !core::ptr::eq(&**current, attractor) && **current != *attractor => {
                Err(PlotError::attractor_already_set(
                    current.name.as_str(),
                    attractor.name.as_str(),
                ))
            }
            _ => Ok(()),
        }
    }

    /// Plots a precomputed trajectory. An attractor must be bound first.
    ///
    /// Any spatial representation is accepted and stored as Cartesian
    /// coordinates.
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
        if self.attractor.is_none() {
            return Err(PlotError::NoAttractor);
        }

        let coordinates = coordinates
            .into_iter()
            .map(|point| point.to_cartesian())
            .collect();
        let colors = self.backend.get_colors(color, trail)?;

        self.add_trajectory(Trajectory {
            coordinates,
            position: None,
            label: label.unwrap_or_default().to_string(),
            colors,
            dashed: false,
        })
    }

    /// Plots an osculating orbit and its current position in the plot plane.
    ///
    /// Binds the orbit's attractor if none is bound yet.
    pub fn plot<O: PlotOrbit>(
        &mut self,
        orbit: &O,
        label: Option<&str>,
        color: Option<Color>,
        trail: bool,
    ) -> Result<()> {
        self.set_attractor(orbit.attractor().clone())?;

        let orbit = orbit.change_plane(self.plane);

        let label = generate_label(orbit.epoch(), label);
        let coordinates = orbit.sample(self.num_points);
        let colors = self.backend.get_colors(color, trail)?;

        self.add_trajectory(Trajectory {
            coordinates,
            position: Some(orbit.position()),
            label,
            colors,
            dashed: true,
        })
    }

    /// Plots one complete revolution of a body around its parent, starting
    /// at `epoch`, and marks its position at `epoch`.
    ///
    /// The color defaults to the body's own color.
    ///
    /// # Errors
    /// [`PlotError::NoParent`] or [`PlotError::NoMeanElements`] if the
    /// body's revolution can't be estimated, and
    /// [`PlotError::AttractorAlreadySet`] if the plot is anchored elsewhere.
    pub fn plot_body_orbit(
        &mut self,
        body: &Body,
        epoch: Epoch,
        label: Option<&str>,
        color: Option<Color>,
        trail: bool,
    ) -> Result<()> {
        let parent = body.parent.clone().ok_or_else(|| PlotError::NoParent {
            body: body.name.clone(),
        })?;

        // Approximate, mean value for the period
        let period = get_mean_elements(body, epoch)?.period();

        self.set_attractor(parent)?;

        let label = generate_label(epoch, Some(label.unwrap_or(&body.name)));
        let epochs = time_range(epoch, epoch + period, self.num_points);
        let coordinates = self.ephemeris.sample(body, &epochs, self.plane)?;
        let position = coordinates.first().copied();
        let colors = self.backend.get_colors(color.or_else(|| body.color()), trail)?;

        self.add_trajectory(Trajectory {
            coordinates,
            position,
            label,
            colors,
            dashed: false,
        })
    }

    /// Replays every stored trajectory through the backend, in the order
    /// they were plotted.
    pub fn redraw(&mut self) -> Result<()> {
        trace!(trajectories = self.trajectories.len(), "redrawing");

        for index in 0..self.trajectories.len() {
            self.draw_trajectory(index)?;
        }

        Ok(())
    }

    /// Resizes the attractor against the stored trajectories and draws it
    /// again.
    ///
    /// The attractor keeps its real size for low orbits and grows to 15% of
    /// the closest approach for high ones.
    pub(crate) fn redraw_attractor(&mut self) -> Result<()> {
        let attractor = self.attractor.clone().ok_or(PlotError::NoAttractor)?;

        let min_distance = self
            .trajectories
            .iter()
            .map(Trajectory::min_distance)
            .fold(f64::INFINITY, f64::min);
        let min_distance = if min_distance.is_finite() {
            min_distance
        } else {
            0.0
        };

        self.attractor_radius = attractor
            .radius
            .max(min_distance * ATTRACTOR_VISIBLE_FRACTION);
        trace!(radius = self.attractor_radius, "attractor resized");

        let color = body_color(&attractor.name).unwrap_or(Color::FALLBACK);

        self.backend.clear_attractor()?;
        self.backend
            .draw_sphere(self.attractor_radius, color, &attractor.name, None)
    }

    /// Radius of the marker drawn at `position`.
    ///
    /// A display heuristic only. Positions at or below the attractor surface
    /// get the smallest marker instead of a degenerate one.
    pub fn position_marker_radius(&self, position: DVec3) -> f64 {
        let body_radius = self.attractor.as_ref().map_or(0.0, |body| body.radius);

        let radius = 0.5
            * (self.attractor_radius * 0.5).min((position.length() - body_radius) * 0.5);

        if radius > 0.0 && radius.is_finite() {
            radius
        } else {
            let clamped = self.attractor_radius * MIN_MARKER_FRACTION;
            warn!(
                distance = position.length(),
                radius = clamped,
                "position lies inside the attractor, clamping marker"
            );
            clamped
        }
    }

    fn add_trajectory(&mut self, trajectory: Trajectory) -> Result<()> {
        debug!(
            label = %trajectory.label,
            samples = trajectory.coordinates.len(),
            dashed = trajectory.dashed,
            "adding trajectory"
        );

        let previous_radius = self.attractor_radius;
        self.trajectories.push(trajectory);

        let drawn = self
            .redraw_attractor()
            .and_then(|()| self.draw_trajectory(self.trajectories.len() - 1));

        if drawn.is_err() {
            self.trajectories.pop();
            self.attractor_radius = previous_radius;
        }

        drawn
    }

    fn draw_trajectory(&mut self, index: usize) -> Result<()> {
        let marker = self.trajectories[index]
            .position
            .map(|position| (position, self.position_marker_radius(position)));

        let trajectory = &self.trajectories[index];
        self.backend.plot_coordinates(
            &trajectory.coordinates,
            &trajectory.label,
            &trajectory.colors,
            trajectory.dashed,
        )?;

        if let Some((position, radius)) = marker {
            let color = trajectory.colors.first().copied().unwrap_or(Color::FALLBACK);
            self.backend
                .draw_point(radius, color, &trajectory.label, Some(position))?;
        }

        Ok(())
    }
}

impl<B: Backend + fmt::Debug> fmt::Debug for OrbitPlotter<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrbitPlotter")
            .field("backend", &self.backend)
            .field("num_points", &self.num_points)
            .field("plane", &self.plane)
            .field("trajectories", &self.trajectories)
            .field("attractor", &self.attractor)
            .field("attractor_radius", &self.attractor_radius)
            .finish_non_exhaustive()
    }
}
