//! Reference rendering targets.
//!
//! - [`SceneBackend`]: a retained 3D scene, the shape an interactive viewer
//!   consumes.
//! - [`FigureBackend`]: a projected 2D figure that renders to SVG.

mod figure;
mod scene;

pub use figure::{FigureBackend, FigureElement};
pub use scene::{SceneBackend, SceneItem};

use crate::{color::PALETTE, Color};

/// Picks the next palette color, cycling.
fn next_palette_color(cursor: &mut usize) -> Color {
    let color = PALETTE[*cursor % PALETTE.len()];
    *cursor += 1;
    color
}
