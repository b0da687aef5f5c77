// src/content/debug.rs

//! デバッグ用のオーバーレイ。どれも `visible` タグだけ持ってて render しかしない。
//! 設定 (`DebugOverlays`) でオンにした時だけシーンに入るよ。🛠️

use crate::config::layout::{DEBUG_LINE_HEIGHT, DEBUG_TEXT_TOP, DEBUG_TEXT_X};
use crate::ecs::context::RenderContext;
use crate::ecs::entity::{Entity, Renderable};
use crate::ecs::tags::{Tags, SOLID, VISIBLE};
use crate::input::Action;
use crate::surface::Color;

const BOUNDS_COLOR: Color = Color("#f00");
const CROSSHAIR_COLOR: Color = Color("#fa9");
const TEXT_COLOR: Color = Color("#ff0");

macro_rules! overlay_entity {
    ($name:ident) => {
        impl $name {
            pub fn new() -> Self {
                Self { tags: Tags::from([VISIBLE]) }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Entity for $name {
            fn tags(&self) -> &Tags {
                &self.tags
            }

            fn tags_mut(&mut self) -> &mut Tags {
                &mut self.tags
            }

            fn as_renderable(&self) -> Option<&dyn Renderable> {
                Some(self)
            }
        }
    };
}

/// solid なエンティティの境界を赤枠で、中心を十字で描く。
pub struct DebugSolids {
    tags: Tags,
}

overlay_entity!(DebugSolids);

impl Renderable for DebugSolids {
    fn render(&self, ctx: &mut RenderContext<'_>) {
        let scene = ctx.scene;
        for slot in scene.find_all_with_tag(SOLID) {
            let Some(b) = slot.entity().bounds() else {
                continue;
            };
            ctx.surface.stroke_rect(b.left, b.top, b.width(), b.height(), BOUNDS_COLOR);
            ctx.surface.stroke_rect(b.x, b.y - 4.0, 1.0, 9.0, CROSSHAIR_COLOR);
            ctx.surface.stroke_rect(b.x - 4.0, b.y, 9.0, 1.0, CROSSHAIR_COLOR);
        }
    }
}

/// 各アクションが押されてるか Y/N で表示する。
pub struct DebugInput {
    tags: Tags,
}

overlay_entity!(DebugInput);

impl Renderable for DebugInput {
    fn render(&self, ctx: &mut RenderContext<'_>) {
        let input = *ctx.input();
        let mut cy = DEBUG_TEXT_TOP;
        for action in Action::ALL {
            let flag = if input.is_pressed(action) { "Y" } else { "N" };
            ctx.surface.fill_text(&format!("{}: {}", action.label(), flag), DEBUG_TEXT_X, cy, TEXT_COLOR);
            cy += DEBUG_LINE_HEIGHT;
        }
    }
}

/// ライブ数と、追加待ち/削除待ちの数を表示する。
pub struct DebugEntities {
    tags: Tags,
}

overlay_entity!(DebugEntities);

impl Renderable for DebugEntities {
    fn render(&self, ctx: &mut RenderContext<'_>) {
        let scene = ctx.scene;
        let text = format!(
            "Entity Count: {} +{} -{}",
            scene.len(),
            scene.pending_add_len(),
            scene.pending_remove_len()
        );
        ctx.surface.fill_text(&text, DEBUG_TEXT_X, DEBUG_TEXT_TOP, TEXT_COLOR);
    }
}
