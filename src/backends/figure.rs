use glam::{DVec2, DVec3};
use plotters::{
    coord::Shift,
    element::DashedPathElement,
    prelude::{
        Circle, Color as _, DrawingArea, DrawingAreaErrorKind, DrawingBackend, IntoDrawingArea,
        PathElement, RGBAColor, SVGBackend, Text, WHITE,
    },
};

use super::next_palette_color;
use crate::{Backend, Backend2D, Color, FrameProjection, PlotError, Result};

/// Share of the drawing kept free around the content.
const MARGIN: f64 = 0.05;

const LINE_WIDTH: u32 = 2;

/// Dash and gap lengths of dashed paths, in pixels.
const DASH: i32 = 6;
const GAP: i32 = 4;

const FONT: &str = "sans-serif";
const FONT_SIZE: i32 = 12;

/// One drawable in a [`FigureBackend`], already projected to 2D.
#[derive(Clone, Debug, PartialEq)]
pub enum FigureElement {
    /// The attractor, drawn as a filled disc.
    Disc {
        name: String,
        radius: f64,
        color: Color,
        center: DVec2,
    },
    /// A position marker.
    Marker {
        name: String,
        radius: f64,
        color: Color,
        center: DVec2,
    },
    /// A projected path.
    Line {
        label: String,
        points: Vec<DVec2>,
        colors: Vec<Color>,
        dashed: bool,
    },
}

impl FigureElement {
    /// Lower-left and upper-right corners of the element.
    fn bounds(&self) -> Option<(DVec2, DVec2)> {
        match self {
            FigureElement::Disc { radius, center, .. }
            | FigureElement::Marker { radius, center, .. } => {
                let extent = DVec2::splat(*radius);
                Some((*center - extent, *center + extent))
            }
            FigureElement::Line { points, .. } => points.iter().fold(None, |bounds, &point| {
                Some(match bounds {
                    None => (point, point),
                    Some((min, max)) => (min.min(point), max.max(point)),
                })
            }),
        }
    }
}

/// A static 2D figure.
///
/// Every drawing call is projected through the current frame and kept as a
/// [`FigureElement`]; [`to_svg`][FigureBackend::to_svg] renders the figure.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FigureBackend {
    projection: FrameProjection,
    elements: Vec<FigureElement>,
    color_cursor: usize,
}

impl FigureBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything drawn, in drawing order.
    pub fn elements(&self) -> &[FigureElement] {
        &self.elements
    }

    /// The projected paths, in drawing order.
    pub fn lines(&self) -> impl Iterator<Item = &FigureElement> {
        self.elements
            .iter()
            .filter(|element| matches!(element, FigureElement::Line { .. }))
    }

    /// Renders the figure as an SVG document of the given pixel size.
    pub fn to_svg(&self, width: u32, height: u32) -> Result<String> {
        let mut svg = String::new();
        {
            let area =
                SVGBackend::with_string(&mut svg, (width.max(1), height.max(1))).into_drawing_area();
            self.draw_on(&area)?;
        }
        Ok(svg)
    }

    /// Draws the figure onto any `plotters` drawing area, fitted to its
    /// size.
    ///
    /// The y axis points up. Trails fade from the trail color at the first
    /// sample to the primary color at the last one.
    pub fn draw_on<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<()> {
        let (width, height) = area.dim_in_pixel();
        let viewport = Viewport::fit(&self.elements, width, height);

        area.fill(&WHITE).map_err(render_error)?;

        for element in &self.elements {
            match element {
                FigureElement::Disc {
                    name,
                    radius,
                    color,
                    center,
                }
                | FigureElement::Marker {
                    name,
                    radius,
                    color,
                    center,
                } => {
                    let pixel = viewport.pixel(*center);
                    area.draw(&Circle::new(
                        pixel,
                        (radius * viewport.scale).max(1.0),
                        rgba(*color).filled(),
                    ))
                    .map_err(render_error)?;

                    if !name.is_empty() {
                        area.draw(&Text::new(name.as_str(), pixel, (FONT, FONT_SIZE)))
                            .map_err(render_error)?;
                    }
                }
                FigureElement::Line {
                    points,
                    colors,
                    dashed,
                    ..
                } => draw_line(area, &viewport, points, colors, *dashed)?,
            }
        }

        area.present().map_err(render_error)
    }
}

/// Maps figure coordinates onto pixels.
struct Viewport {
    width: f64,
    height: f64,
    center: DVec2,
    scale: f64,
}

impl Viewport {
    /// Fits every element into the drawing, keeping a margin around it.
    fn fit(elements: &[FigureElement], width: u32, height: u32) -> Self {
        let (width, height) = (width.max(1) as f64, height.max(1) as f64);

        let bounds = elements
            .iter()
            .filter_map(FigureElement::bounds)
            .reduce(|(min_a, max_a), (min_b, max_b)| (min_a.min(min_b), max_a.max(max_b)));

        let (min, max) = match bounds {
            Some((min, max)) if min.is_finite() && max.is_finite() => (min, max),
            _ => (DVec2::splat(-1.0), DVec2::splat(1.0)),
        };

        let span = (max - min).max(DVec2::splat(f64::EPSILON));
        let usable = DVec2::new(width, height) * (1.0 - 2.0 * MARGIN);

        Viewport {
            width,
            height,
            center: (min + max) * 0.5,
            scale: (usable.x / span.x).min(usable.y / span.y),
        }
    }

    fn pixel(&self, point: DVec2) -> (i32, i32) {
        (
            (self.width * 0.5 + (point.x - self.center.x) * self.scale).round() as i32,
            (self.height * 0.5 - (point.y - self.center.y) * self.scale).round() as i32,
        )
    }
}

fn draw_line<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    viewport: &Viewport,
    points: &[DVec2],
    colors: &[Color],
    dashed: bool,
) -> Result<()> {
    let primary = colors.first().copied().unwrap_or(Color::FALLBACK);
    let pixels: Vec<_> = points.iter().map(|&point| viewport.pixel(point)).collect();

    match colors.last() {
        Some(&faded) if colors.len() > 1 && pixels.len() > 1 => {
            let segments = pixels.len() - 1;
            for (i, pair) in pixels.windows(2).enumerate() {
                let color = faded.lerp(primary, (i + 1) as f64 / segments as f64);
                draw_path(area, pair.to_vec(), color, dashed)?;
            }
            Ok(())
        }
        _ => draw_path(area, pixels, primary, dashed),
    }
}

fn draw_path<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    pixels: Vec<(i32, i32)>,
    color: Color,
    dashed: bool,
) -> Result<()> {
    let style = rgba(color).stroke_width(LINE_WIDTH);

    let drawn = if dashed {
        area.draw(&DashedPathElement::new(pixels, DASH, GAP, style))
    } else {
        area.draw(&PathElement::new(pixels, style))
    };

    drawn.map_err(render_error)
}

fn rgba(color: Color) -> RGBAColor {
    RGBAColor(color.r, color.g, color.b, color.opacity())
}

fn render_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> PlotError {
    PlotError::Render(err.to_string())
}

impl Backend for FigureBackend {
    fn clear_attractor(&mut self) -> Result<()> {
        self.elements
            .retain(|element| !matches!(element, FigureElement::Disc { .. }));
        Ok(())
    }

    fn draw_sphere(
        &mut self,
        radius: f64,
        color: Color,
        name: &str,
        center: Option<DVec3>,
    ) -> Result<()> {
        let center = match center {
            Some(center) => self.projection.project_point(center)?,
            None => DVec2::ZERO,
        };

        self.elements.push(FigureElement::Disc {
            name: name.to_string(),
            radius,
            color,
            center,
        });
        Ok(())
    }

    fn draw_point(
        &mut self,
        radius: f64,
        color: Color,
        name: &str,
        center: Option<DVec3>,
    ) -> Result<()> {
        let center = match center {
            Some(center) => self.projection.project_point(center)?,
            None => DVec2::ZERO,
        };

        self.elements.push(FigureElement::Marker {
            name: name.to_string(),
            radius,
            color,
            center,
        });
        Ok(())
    }

    fn plot_coordinates(
        &mut self,
        coordinates: &[DVec3],
        label: &str,
        colors: &[Color],
        dashed: bool,
    ) -> Result<()> {
        let points = self.projection.project(coordinates)?;

        self.elements.push(FigureElement::Line {
            label: label.to_string(),
            points,
            colors: colors.to_vec(),
            dashed,
        });
        Ok(())
    }

    fn get_colors(&mut self, color: Option<Color>, trail: bool) -> Result<Vec<Color>> {
        let color = color.unwrap_or_else(|| next_palette_color(&mut self.color_cursor));
        Ok(color.trail(trail))
    }
}

impl Backend2D for FigureBackend {
    fn projection(&self) -> &FrameProjection {
        &self.projection
    }

    fn projection_mut(&mut self) -> &mut FrameProjection {
        &mut self.projection
    }

    fn clear_figure(&mut self) -> Result<()> {
        self.elements.clear();
        Ok(())
    }
}
