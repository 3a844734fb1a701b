use dial_core::{ArcStroke, Label, Mount, Surface};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D surface owned by a single dial.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    #[inline]
    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn stroke_arc(&mut self, arc: &ArcStroke<'_>) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(arc.center.x, arc.center.y, arc.radius, arc.start, arc.end);
        self.ctx.set_line_width(arc.width);
        self.ctx.set_stroke_style_str(arc.color);
        self.ctx.stroke();
    }

    fn fill_text(&mut self, label: &Label<'_>) {
        self.ctx.set_font(label.font);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style_str(label.color);
        _ = self
            .ctx
            .fill_text(label.text, label.position.x, label.position.y);
    }
}

impl Mount<web::Element> for CanvasSurface {
    fn mount(&self, container: &web::Element) {
        if let Err(e) = container.append_child(&self.canvas) {
            log::error!("[dial] appendChild failed: {:?}", e);
        }
    }
}
