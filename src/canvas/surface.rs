//! Drawing surface abstraction shared by the particle field and the cursor
//! trail. `CanvasSurface` is the real 2d canvas; `RecordingSurface` keeps the
//! draw calls in memory so animations can be stepped without a browser.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

/// Minimal set of 2d primitives the effects need.
pub trait Surface {
    fn size(&self) -> (f64, f64);
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str, glow: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: &str, glow_color: &str, glow: f64);
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap the canvas with the given id. Fails when the element is missing,
    /// is not a canvas, or has no 2d context.
    pub fn from_id(document: &web_sys::Document, id: &str) -> Result<Self, JsValue> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("#{} not found", id)))?
            .dyn_into::<HtmlCanvasElement>()?;
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, context })
    }

    pub fn resize_to(&mut self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    pub fn resize_to_viewport(&mut self, window: &Window) {
        let (w, h) = viewport_size(window);
        self.resize_to(w, h);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.context.clear_rect(0.0, 0.0, w, h);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str, glow: f64) {
        self.context.set_fill_style_str(color);
        self.context.set_shadow_blur(glow);
        self.context.set_shadow_color(color);
        self.context.fill_rect(x, y, w, h);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: &str, glow_color: &str, glow: f64) {
        self.context.set_fill_style_str(fill);
        self.context.set_shadow_blur(glow);
        self.context.set_shadow_color(glow_color);
        self.context.begin_path();
        let _ = self
            .context
            .arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
        self.context.fill();
    }
}

/// `innerWidth` x `innerHeight`, or zero when unavailable.
pub fn viewport_size(window: &Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Rect { x: f64, y: f64, w: f64, h: f64, color: String },
    Circle { x: f64, y: f64, radius: f64, fill: String },
}

/// In-memory surface; every call since the last `Clear` is kept.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str, _glow: f64) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            w,
            h,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: &str, _glow_color: &str, _glow: f64) {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            radius,
            fill: fill.to_string(),
        });
    }
}
