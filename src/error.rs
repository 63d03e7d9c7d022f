//! Error types for the plotter.

use thiserror::Error;

/// Result type alias for plotting operations.
pub type Result<T> = core::result::Result<T, PlotError>;

/// Errors that can occur while plotting.
///
/// Most variants are configuration errors raised by the caller's input.
/// [`Unimplemented`][PlotError::Unimplemented] points at a backend that does
/// not provide a hook the plotter needs, and [`Render`][PlotError::Render]
/// carries a failure of the drawing library.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PlotError {
    /// A trajectory was plotted before any attractor was bound.
    #[error(
        "An attractor must be set up first, please use \
        set_attractor(body) or plot(orbit)"
    )]
    NoAttractor,

    /// The plotter is already anchored to another body.
    #[error("Attractor has already been set to {current}, cannot switch to {requested}")]
    AttractorAlreadySet { current: String, requested: String },

    /// A frame vector does not have unit length.
    #[error("Vectors must be unit.")]
    NotUnit,

    /// Two frame vectors are not perpendicular.
    #[error("Vectors must be mutually orthogonal.")]
    NotOrthogonal,

    /// A 2D backend was asked to project before a frame was chosen.
    #[error(
        "A frame must be set up first, please use \
        set_orbit_frame(orbit) or plot(orbit)"
    )]
    NoFrame,

    /// The body does not orbit anything.
    #[error("Body {body} has no parent to orbit around")]
    NoParent { body: String },

    /// The body carries no mean elements to estimate its orbit from.
    #[error("No mean elements available for {body}")]
    NoMeanElements { body: String },

    /// The plotter configuration is unusable.
    #[error("Invalid plotter configuration: {0}")]
    InvalidConfig(String),

    /// A color string could not be parsed.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// A rendering target failed to produce its output.
    #[error("Rendering failed: {0}")]
    Render(String),

    /// The backend does not implement a drawing hook.
    #[error("Backend does not implement {hook}")]
    Unimplemented { hook: &'static str },
}

impl PlotError {
    /// Create an AttractorAlreadySet error.
    pub fn attractor_already_set(current: impl Into<String>, requested: impl Into<String>) -> Self {
        Self::AttractorAlreadySet {
            current: current.into(),
            requested: requested.into(),
        }
    }

    /// Create an Unimplemented error.
    pub fn unimplemented(hook: &'static str) -> Self {
        Self::Unimplemented { hook }
    }
}
