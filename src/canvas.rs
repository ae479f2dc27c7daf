use crate::core::{FogFrame, FogSurface, NoisePattern, Rgba, SurfaceSize};
use anyhow::anyhow;
use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys as web;

/// `FogSurface` backed by an on-page canvas plus an off-screen canvas that
/// receives the noise pattern before it is drawn.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    pattern_canvas: web::HtmlCanvasElement,
    pattern_ctx: web::CanvasRenderingContext2d,
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))
}

impl CanvasSurface {
    pub fn new(document: &web::Document, canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = context_2d(&canvas)?;
        let pattern_canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow!("{:?}", e))?;
        let pattern_ctx = context_2d(&pattern_canvas)?;
        Ok(Self {
            canvas,
            ctx,
            pattern_canvas,
            pattern_ctx,
        })
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    fn upload_pattern(&self, pattern: &NoisePattern) -> Result<(), JsValue> {
        let size = pattern.size();
        if self.pattern_canvas.width() != size.width {
            self.pattern_canvas.set_width(size.width);
        }
        if self.pattern_canvas.height() != size.height {
            self.pattern_canvas.set_height(size.height);
        }
        let image = web::ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(pattern.pixels()),
            size.width,
            size.height,
        )?;
        self.pattern_ctx.put_image_data(&image, 0.0, 0.0)
    }

    fn fog_pass(&self, frame: &FogFrame) -> Result<(), JsValue> {
        let w = frame.size.width as f64;
        let h = frame.size.height as f64;
        self.ctx.set_global_composite_operation(frame.composite)?;
        self.ctx.translate(frame.drift.x as f64, frame.drift.y as f64)?;

        let g = &frame.gradient;
        let gradient = self.ctx.create_linear_gradient(
            g.start.x as f64,
            g.start.y as f64,
            g.end.x as f64,
            g.end.y as f64,
        );
        for stop in &g.stops {
            gradient.add_color_stop(stop.offset, &stop.color.css())?;
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, w, h);

        self.ctx.set_global_alpha(frame.pattern_alpha as f64);
        self.ctx
            .draw_image_with_html_canvas_element_and_dw_and_dh(&self.pattern_canvas, 0.0, 0.0, w, h)
    }
}

impl FogSurface for CanvasSurface {
    fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.canvas.width(), self.canvas.height())
    }

    fn set_size(&mut self, size: SurfaceSize) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }

    fn fill_trail(&mut self, color: Rgba) {
        let size = self.size();
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(0.0, 0.0, size.width as f64, size.height as f64);
    }

    fn draw_fog(&mut self, frame: &FogFrame, pattern: &NoisePattern) {
        if let Err(e) = self.upload_pattern(pattern) {
            log::warn!("[fog] pattern upload failed: {:?}", e);
            return;
        }
        self.ctx.save();
        let res = self.fog_pass(frame);
        self.ctx.restore();
        if let Err(e) = res {
            log::warn!("[fog] draw failed: {:?}", e);
        }
    }
}
