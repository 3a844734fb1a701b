// Shared fakes for host-side tests: a surface that records draw calls and a
// volume sink that records every value it receives.

#![allow(dead_code)]

use dial_core::{ArcStroke, Label, Mount, Surface, VolumeSink};
use std::cell::RefCell;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Resize(u32, u32),
    Clear,
    Arc {
        start: f64,
        end: f64,
        radius: f64,
        width: f64,
        color: String,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        color: String,
    },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// Ops since the last clear, i.e. what is currently on screen.
    pub fn frame(&self) -> &[DrawOp] {
        let last_clear = self
            .ops
            .iter()
            .rposition(|op| *op == DrawOp::Clear)
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.ops[last_clear..]
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.ops.push(DrawOp::Resize(width, height));
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn stroke_arc(&mut self, arc: &ArcStroke<'_>) {
        self.ops.push(DrawOp::Arc {
            start: arc.start,
            end: arc.end,
            radius: arc.radius,
            width: arc.width,
            color: arc.color.to_string(),
        });
    }

    fn fill_text(&mut self, label: &Label<'_>) {
        self.ops.push(DrawOp::Text {
            text: label.text.to_string(),
            x: label.position.x,
            y: label.position.y,
            color: label.color.to_string(),
        });
    }
}

/// Container stand-in: records how many surfaces were mounted into it.
#[derive(Default)]
pub struct Slot {
    pub mounted: RefCell<usize>,
}

impl Mount<Slot> for RecordingSurface {
    fn mount(&self, container: &Slot) {
        *container.mounted.borrow_mut() += 1;
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub volumes: RefCell<Vec<f64>>,
}

impl VolumeSink for RecordingSink {
    fn set_volume(&self, value: f64) {
        self.volumes.borrow_mut().push(value);
    }
}

/// Surface pixel on a circle of `radius` around `center` at `angle_deg`
/// (canvas convention: clockwise from east).
pub fn px_at(center: (f64, f64), radius: f64, angle_deg: f64) -> glam::DVec2 {
    let a = angle_deg.to_radians();
    glam::DVec2::new(center.0 + radius * a.cos(), center.1 + radius * a.sin())
}
