//! The radial control: value, drag state and rendering onto a [`Surface`].

use crate::config::{ConfigError, DialConfig};
use crate::geometry::{
    percent_label, pointer_to_value, surface_to_centered, value_to_angles, ArcAngles,
};
use glam::DVec2;
use smallvec::SmallVec;

/// One stroked arc segment, angles in radians.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcStroke<'a> {
    pub center: DVec2,
    pub radius: f64,
    pub start: f64,
    pub end: f64,
    pub width: f64,
    pub color: &'a str,
}

/// Text centred on `position`.
#[derive(Clone, Debug, PartialEq)]
pub struct Label<'a> {
    pub text: &'a str,
    pub position: DVec2,
    pub font: &'a str,
    pub color: &'a str,
}

/// A 2D drawing target owned by a dial.
pub trait Surface {
    fn resize(&mut self, width: u32, height: u32);
    fn clear(&mut self);
    fn stroke_arc(&mut self, arc: &ArcStroke<'_>);
    fn fill_text(&mut self, label: &Label<'_>);
}

/// Attaches a surface to a container of type `C`.
pub trait Mount<C: ?Sized> {
    fn mount(&self, container: &C);
}

pub type Listener = Box<dyn FnMut(f64)>;

pub struct Dial<S: Surface> {
    config: DialConfig,
    value: f64,
    dragging: bool,
    surface: S,
    callback: Option<Listener>,
    listeners: SmallVec<[Listener; 2]>,
}

impl<S: Surface> Dial<S> {
    pub fn new(config: DialConfig, mut surface: S) -> Result<Self, ConfigError> {
        config.validate()?;
        surface.resize(config.surface.width, config.surface.height);
        Ok(Self {
            value: config.value,
            config,
            dragging: false,
            surface,
            callback: None,
            listeners: SmallVec::new(),
        })
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[inline]
    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn angles(&self) -> ArcAngles {
        value_to_angles(self.value, self.config.offset.angle, self.config.span_angle)
    }

    /// Set the value and redraw. Non-finite input leaves the value as it was
    /// but still redraws. No clamping is applied.
    pub fn update(&mut self, value: f64) -> &mut Self {
        if value.is_finite() {
            self.value = value;
        } else {
            log::debug!("[dial] ignoring non-finite value {}", value);
        }
        self.clear().draw()
    }

    pub fn clear(&mut self) -> &mut Self {
        self.surface.clear();
        self
    }

    pub fn draw(&mut self) -> &mut Self {
        let ArcAngles {
            start,
            current,
            end,
        } = self.angles();
        let cfg = &self.config;
        let center = cfg.offset.center();

        self.surface.stroke_arc(&ArcStroke {
            center,
            radius: cfg.radius,
            start,
            end: current,
            width: cfg.stroke_width,
            color: &cfg.colors.fill,
        });
        self.surface.stroke_arc(&ArcStroke {
            center,
            radius: cfg.radius,
            start: current,
            end,
            width: cfg.stroke_width,
            color: &cfg.colors.arc,
        });

        let text = percent_label(self.value);
        self.surface.fill_text(&Label {
            text: &text,
            position: center,
            font: &cfg.font,
            color: &cfg.colors.text,
        });
        self
    }

    /// Set the single change callback, replacing any previous one. Listeners
    /// added with [`add_listener`](Self::add_listener) are kept.
    pub fn on_change(&mut self, callback: impl FnMut(f64) + 'static) -> &mut Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Add a listener after the existing ones. The change callback fires
    /// first, then listeners in registration order.
    pub fn add_listener(&mut self, callback: impl FnMut(f64) + 'static) -> &mut Self {
        self.listeners.push(Box::new(callback));
        self
    }

    pub fn append_to<C: ?Sized>(&mut self, container: &C) -> &mut Self
    where
        S: Mount<C>,
    {
        self.surface.mount(container);
        self
    }

    // ---------------- Pointer interaction ----------------

    /// Begin a drag at surface pixel `px` and sample it straight away, so a
    /// click without movement still sets a value.
    pub fn press(&mut self, px: DVec2) -> Option<f64> {
        self.dragging = true;
        self.sample(px)
    }

    pub fn drag_to(&mut self, px: DVec2) -> Option<f64> {
        if !self.dragging {
            return None;
        }
        self.sample(px)
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    fn sample(&mut self, px: DVec2) -> Option<f64> {
        let pointer = surface_to_centered(px, self.config.surface.as_dvec2());
        let value = pointer_to_value(pointer, self.config.offset.angle, self.config.span_angle)?;
        self.update(value);
        if let Some(callback) = self.callback.as_mut() {
            callback(value);
        }
        for listener in self.listeners.iter_mut() {
            listener(value);
        }
        Some(value)
    }
}
