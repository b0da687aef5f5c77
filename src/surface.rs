// src/surface.rs

//! 描画バックエンドとの約束ごと (Surface トレイト) だよ！🎨
//! コアは「描いて」とお願いするだけで、実際にどう描くかは知らない。
//! ブラウザでは `app::canvas_surface::CanvasSurface` がこれを実装してる。

use serde::{Deserialize, Serialize};

use crate::config::layout::{SURFACE_HEIGHT, SURFACE_WIDTH};

/// 論理的な描画サイズ。初期化の時に一回決めたら変わらない。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
        }
    }
}

/// CSS の色文字列 (`#0ff` とか)。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub &'static str);

impl Color {
    pub const BLACK: Color = Color("#000");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

pub trait Surface {
    fn size(&self) -> SurfaceSize;

    /// 画面全体を黒で塗りつぶす。毎フレームの描画の最初に呼ばれるよ。
    fn clear(&mut self);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color);

    fn fill_triangle(&mut self, points: [(f64, f64); 3], color: Color);

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Color);
}

/// テスト用: 描画命令を全部メモしておくだけの Surface。
#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Clear,
        FillRect { x: f64, y: f64, w: f64, h: f64, color: Color },
        StrokeRect { x: f64, y: f64, w: f64, h: f64, color: Color },
        FillTriangle { points: [(f64, f64); 3], color: Color },
        FillText { text: String, x: f64, y: f64, color: Color },
    }

    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub size: SurfaceSize,
        pub calls: Vec<DrawCall>,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn texts(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    DrawCall::FillText { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> SurfaceSize {
            self.size
        }

        fn clear(&mut self) {
            self.calls.push(DrawCall::Clear);
        }

        fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
            self.calls.push(DrawCall::FillRect { x, y, w, h, color });
        }

        fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Color) {
            self.calls.push(DrawCall::StrokeRect { x, y, w, h, color });
        }

        fn fill_triangle(&mut self, points: [(f64, f64); 3], color: Color) {
            self.calls.push(DrawCall::FillTriangle { points, color });
        }

        fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Color) {
            self.calls.push(DrawCall::FillText { text: text.to_string(), x, y, color });
        }
    }
}
