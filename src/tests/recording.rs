use std::sync::{Arc, Mutex};

use glam::DVec3;

use crate::{
    Backend, Backend2D, Body, Color, Ephemeris, Epoch, FrameProjection, MeanElementsEphemeris,
    Plane, PlotError, Result,
};

/// A drawing hook invocation, as seen by [`RecordingBackend`].
#[derive(Clone, Debug, PartialEq)]
pub(super) enum Call {
    ClearAttractor,
    Sphere { radius: f64, name: String },
    Point { radius: f64, center: Option<DVec3> },
    Coordinates { label: String, len: usize, dashed: bool },
    ClearFigure,
}

/// A backend that records every hook call, and can be told to fail one.
#[derive(Debug, Default)]
pub(super) struct RecordingBackend {
    pub calls: Vec<Call>,
    pub fail_on: Option<&'static str>,
    projection: FrameProjection,
}

impl RecordingBackend {
    pub fn failing_on(hook: &'static str) -> Self {
        Self {
            fail_on: Some(hook),
            ..Self::default()
        }
    }

    fn record(&mut self, hook: &'static str, call: Call) -> Result<()> {
        if self.fail_on == Some(hook) {
            return Err(PlotError::unimplemented(hook));
        }
        self.calls.push(call);
        Ok(())
    }
}

impl Backend for RecordingBackend {
    fn clear_attractor(&mut self) -> Result<()> {
        self.record("clear_attractor", Call::ClearAttractor)
    }

    fn draw_sphere(
        &mut self,
        radius: f64,
        _color: Color,
        name: &str,
        _center: Option<DVec3>,
    ) -> Result<()> {
        self.record(
            "draw_sphere",
            Call::Sphere {
                radius,
                name: name.to_string(),
            },
        )
    }

    fn draw_point(
        &mut self,
        radius: f64,
        _color: Color,
        _name: &str,
        center: Option<DVec3>,
    ) -> Result<()> {
        self.record("draw_point", Call::Point { radius, center })
    }

    fn plot_coordinates(
        &mut self,
        coordinates: &[DVec3],
        label: &str,
        _colors: &[Color],
        dashed: bool,
    ) -> Result<()> {
        self.record(
            "plot_coordinates",
            Call::Coordinates {
                label: label.to_string(),
                len: coordinates.len(),
                dashed,
            },
        )
    }

    fn get_colors(&mut self, color: Option<Color>, trail: bool) -> Result<Vec<Color>> {
        if self.fail_on == Some("get_colors") {
            return Err(PlotError::unimplemented("get_colors"));
        }
        Ok(color.unwrap_or(Color::FALLBACK).trail(trail))
    }
}

impl Backend2D for RecordingBackend {
    fn projection(&self) -> &FrameProjection {
        &self.projection
    }

    fn projection_mut(&mut self) -> &mut FrameProjection {
        &mut self.projection
    }

    fn clear_figure(&mut self) -> Result<()> {
        self.record("clear_figure", Call::ClearFigure)
    }
}

/// A backend relying on the default hooks only.
#[derive(Debug, Default)]
pub(super) struct BareBackend {
    projection: FrameProjection,
}

impl Backend for BareBackend {}

impl Backend2D for BareBackend {
    fn projection(&self) -> &FrameProjection {
        &self.projection
    }

    fn projection_mut(&mut self) -> &mut FrameProjection {
        &mut self.projection
    }
}

/// Mean-elements ephemeris that remembers the epochs it was asked for.
#[derive(Clone, Debug, Default)]
pub(super) struct RecordingEphemeris {
    pub epochs: Arc<Mutex<Vec<Epoch>>>,
}

impl Ephemeris for RecordingEphemeris {
    fn sample(&self, body: &Body, epochs: &[Epoch], plane: Plane) -> Result<Vec<DVec3>> {
        if let Ok(mut seen) = self.epochs.lock() {
            seen.extend_from_slice(epochs);
        }
        MeanElementsEphemeris.sample(body, epochs, plane)
    }
}
