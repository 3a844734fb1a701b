//! Construction options for a [`Dial`](crate::Dial).
//!
//! Every option is optional. When deserialized, the option names follow the
//! flat keys an embedding page passes in (`angle`, `offsetTop`, `colorFill`,
//! `canvasWidth`, ...) and missing keys fall back to the defaults in
//! [`constants`](crate::constants).

use crate::constants::*;
use glam::DVec2;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("span angle must be in (0, {max}] degrees, got {0}", max = MAX_SPAN_ANGLE)]
    SpanAngle(f64),
    #[error("radius must be positive, got {0}")]
    Radius(f64),
    #[error("stroke width must not be negative, got {0}")]
    StrokeWidth(f64),
    #[error("surface must be at least 1x1, got {width}x{height}")]
    SurfaceSize { width: u32, height: u32 },
    #[error("value must be in [0, 1], got {0}")]
    Value(f64),
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

/// Where the dial sits on its surface and where its arc starts.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Offset {
    #[serde(rename = "offsetTop")]
    pub top: f64,
    #[serde(rename = "offsetLeft")]
    pub left: f64,
    /// Start of the arc in degrees, clockwise from east.
    #[serde(rename = "offsetAngle")]
    pub angle: f64,
}

impl Default for Offset {
    fn default() -> Self {
        Self {
            top: DEFAULT_OFFSET_TOP,
            left: DEFAULT_OFFSET_LEFT,
            angle: DEFAULT_OFFSET_ANGLE,
        }
    }
}

impl Offset {
    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Colors {
    #[serde(rename = "colorArc")]
    pub arc: String,
    #[serde(rename = "colorFill")]
    pub fill: String,
    #[serde(rename = "colorText")]
    pub text: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            arc: DEFAULT_COLOR_ARC.to_string(),
            fill: DEFAULT_COLOR_FILL.to_string(),
            text: DEFAULT_COLOR_TEXT.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SurfaceSize {
    #[serde(rename = "canvasWidth")]
    pub width: u32,
    #[serde(rename = "canvasHeight")]
    pub height: u32,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_SURFACE_WIDTH,
            height: DEFAULT_SURFACE_HEIGHT,
        }
    }
}

impl SurfaceSize {
    #[inline]
    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.width as f64, self.height as f64)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DialConfig {
    /// Initial value.
    pub value: f64,
    /// Sweep of the active arc in degrees.
    #[serde(rename = "angle")]
    pub span_angle: f64,
    #[serde(rename = "width")]
    pub stroke_width: f64,
    pub radius: f64,
    #[serde(flatten)]
    pub offset: Offset,
    #[serde(flatten)]
    pub colors: Colors,
    pub font: String,
    #[serde(flatten)]
    pub surface: SurfaceSize,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            value: 0.0,
            span_angle: DEFAULT_SPAN_ANGLE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            radius: DEFAULT_RADIUS,
            offset: Offset::default(),
            colors: Colors::default(),
            font: DEFAULT_FONT.to_string(),
            surface: SurfaceSize::default(),
        }
    }
}

impl DialConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("value", self.value),
            ("span angle", self.span_angle),
            ("stroke width", self.stroke_width),
            ("radius", self.radius),
            ("offset top", self.offset.top),
            ("offset left", self.offset.left),
            ("offset angle", self.offset.angle),
        ];
        if let Some(&(field, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NotFinite { field });
        }
        if !(0.0..=1.0).contains(&self.value) {
            return Err(ConfigError::Value(self.value));
        }
        if self.span_angle <= 0.0 || self.span_angle > MAX_SPAN_ANGLE {
            return Err(ConfigError::SpanAngle(self.span_angle));
        }
        if self.radius <= 0.0 {
            return Err(ConfigError::Radius(self.radius));
        }
        if self.stroke_width < 0.0 {
            return Err(ConfigError::StrokeWidth(self.stroke_width));
        }
        let SurfaceSize { width, height } = self.surface;
        if width == 0 || height == 0 {
            return Err(ConfigError::SurfaceSize { width, height });
        }
        Ok(())
    }
}
