//! This module contains presets for stars.
//!
//! "A star is a luminous spheroid of plasma held together by self-gravity."  
//!
//! \- [Wikipedia](https://en.wikipedia.org/wiki/Star)

use crate::Body;

/// Returns the Sun.
///
/// The Sun has no parent, so it can anchor a plot but has no orbit of its own.
pub fn the_sun() -> Body {
    Body::new("Sun", 1.327_124_400_18e11, 695_700.0, None)
}
