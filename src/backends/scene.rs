use glam::DVec3;

use super::next_palette_color;
use crate::{Backend, Color, Result};

/// One drawable in a [`SceneBackend`].
#[derive(Clone, Debug, PartialEq)]
pub enum SceneItem {
    /// A body, drawn as a sphere.
    Sphere {
        name: String,
        radius: f64,
        color: Color,
        center: DVec3,
    },
    /// A position marker.
    Marker {
        name: String,
        radius: f64,
        color: Color,
        center: DVec3,
    },
    /// A path through space.
    Trace {
        label: String,
        coordinates: Vec<DVec3>,
        colors: Vec<Color>,
        dashed: bool,
    },
}

/// A retained-mode 3D scene.
///
/// Items are kept in drawing order, ready to be handed to an interactive
/// viewer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneBackend {
    items: Vec<SceneItem>,
    color_cursor: usize,
}

impl SceneBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything drawn, in drawing order.
    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    /// The traces drawn, in drawing order.
    pub fn traces(&self) -> impl Iterator<Item = &SceneItem> {
        self.items
            .iter()
            .filter(|item| matches!(item, SceneItem::Trace { .. }))
    }

    /// The markers drawn, in drawing order.
    pub fn markers(&self) -> impl Iterator<Item = &SceneItem> {
        self.items
            .iter()
            .filter(|item| matches!(item, SceneItem::Marker { .. }))
    }

    /// The current attractor sphere, if drawn.
    pub fn attractor(&self) -> Option<&SceneItem> {
        self.items
            .iter()
            .find(|item| matches!(item, SceneItem::Sphere { .. }))
    }

    /// Removes everything from the scene.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Backend for SceneBackend {
    fn clear_attractor(&mut self) -> Result<()> {
        self.items
            .retain(|item| !matches!(item, SceneItem::Sphere { .. }));
        Ok(())
    }

    fn draw_sphere(
        &mut self,
        radius: f64,
        color: Color,
        name: &str,
        center: Option<DVec3>,
    ) -> Result<()> {
        self.items.push(SceneItem::Sphere {
            name: name.to_string(),
            radius,
            color,
            center: center.unwrap_or(DVec3::ZERO),
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
        self.items.push(SceneItem::Marker {
            name: name.to_string(),
            radius,
            color,
            center: center.unwrap_or(DVec3::ZERO),
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
        self.items.push(SceneItem::Trace {
            label: label.to_string(),
            coordinates: coordinates.to_vec(),
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
