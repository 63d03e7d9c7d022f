//! The drawing capabilities a rendering target provides to the plotter.

use glam::DVec3;

use crate::{Color, PlotError, Result};

/// Drawing hooks implemented by a rendering target.
///
/// The plotter decides *what* to draw and when; a backend only knows how.
/// Every hook defaults to [`PlotError::Unimplemented`], so a backend that
/// forgets one fails loudly the first time the plotter needs it.
pub trait Backend {
    /// Removes the attractor visuals drawn by the last
    /// [`draw_sphere`][Backend::draw_sphere].
    fn clear_attractor(&mut self) -> Result<()> {
        Err(PlotError::unimplemented("clear_attractor"))
    }

    /// Draws a body of the given radius, centered on the origin when
    /// `center` is `None`.
    fn draw_sphere(
        &mut self,
        radius: f64,
        color: Color,
        name: &str,
        center: Option<DVec3>,
    ) -> Result<()> {
        let _ = (radius, color, name, center);
        Err(PlotError::unimplemented("draw_sphere"))
    }

    /// Draws a position marker of the given radius.
    fn draw_point(
        &mut self,
        radius: f64,
        color: Color,
        name: &str,
        center: Option<DVec3>,
    ) -> Result<()> {
        let _ = (radius, color, name, center);
        Err(PlotError::unimplemented("draw_point"))
    }

    /// Draws a path through `coordinates`.
    fn plot_coordinates(
        &mut self,
        coordinates: &[DVec3],
        label: &str,
        colors: &[Color],
        dashed: bool,
    ) -> Result<()> {
        let _ = (coordinates, label, colors, dashed);
        Err(PlotError::unimplemented("plot_coordinates"))
    }

    /// Resolves the color set of a new trajectory. The first entry is the
    /// primary color.
    fn get_colors(&mut self, color: Option<Color>, trail: bool) -> Result<Vec<Color>> {
        let _ = (color, trail);
        Err(PlotError::unimplemented("get_colors"))
    }
}
