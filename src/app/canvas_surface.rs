// src/app/canvas_surface.rs
//! `<canvas>` の 2D コンテキストに描く Surface 実装。

use log::{error, info};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::surface::{Color, Surface, SurfaceSize};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    size: SurfaceSize,
}

impl CanvasSurface {
    /// キャンバスを作って body にくっつける。
    /// window/document/body/2d コンテキストのどれかが取れなかったら起動失敗 (Err) だよ。
    pub fn attach(size: SurfaceSize) -> Result<Self, JsValue> {
        let window = window().ok_or("Failed to get window")?;
        let document = window.document().ok_or("Failed to get document")?;

        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("Created element is not a canvas"))?;
        canvas.set_width(size.width as u32);
        canvas.set_height(size.height as u32);

        let context = canvas
            .get_context("2d")?
            .ok_or("Failed to get 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("2d context has unexpected type"))?;

        document
            .body()
            .ok_or("Failed to get document body")?
            .append_child(&canvas)?;

        info!("CanvasSurface: attached {}x{} canvas", canvas.width(), canvas.height());
        Ok(Self { canvas, context, size })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self) {
        self.context.set_fill_style_str(Color::BLACK.as_str());
        self.context.fill_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.context.set_fill_style_str(color.as_str());
        self.context.fill_rect(x, y, w, h);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
        self.context.set_stroke_style_str(color.as_str());
        self.context.stroke_rect(x, y, w, h);
    }

    fn fill_triangle(&mut self, points: [(f64, f64); 3], color: Color) {
        let [(x0, y0), (x1, y1), (x2, y2)] = points;
        self.context.set_fill_style_str(color.as_str());
        self.context.begin_path();
        self.context.move_to(x0, y0);
        self.context.line_to(x1, y1);
        self.context.line_to(x2, y2);
        self.context.fill();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Color) {
        self.context.set_fill_style_str(color.as_str());
        if let Err(e) = self.context.fill_text(text, x, y) {
            error!("CanvasSurface: fill_text failed: {:?}", e);
        }
    }
}
