// src/content/stars.rs

// 背景の流れる星空だよ！✨
// 奥の星 (z が小さい) ほど遅くて暗い、手前の星ほど速くて明るい。

use rand::rngs::StdRng;
use rand::Rng;

use crate::config::layout::{
    STAR_HEIGHT, STAR_MAX_SPEED, STAR_MAX_Z, STAR_MIN_SPEED, STAR_MIN_Z, STAR_WIDTH,
};
use crate::ecs::context::{RenderContext, UpdateContext};
use crate::ecs::entity::{Entity, Renderable, Updatable};
use crate::ecs::tags::{Tags, ACTIVE, BACKGROUND, STARS, VISIBLE};
use crate::surface::{Color, SurfaceSize};

/// 暗い → 明るい の順。
const PALETTE: [Color; 5] = [
    Color("#222"),
    Color("#444"),
    Color("#666"),
    Color("#999"),
    Color("#bbb"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub speed: f64,
    pub color: Color,
}

pub struct Starfield {
    tags: Tags,
    points: Vec<Star>,
    rng: StdRng,
}

impl Starfield {
    pub fn new(count: usize, surface: SurfaceSize, mut rng: StdRng) -> Self {
        let points = (0..count)
            .map(|_| {
                let z = (STAR_MIN_Z + rng.gen::<f64>() * (STAR_MAX_Z - STAR_MIN_Z)).floor();
                Star {
                    x: (rng.gen::<f64>() * surface.width).floor(),
                    y: (rng.gen::<f64>() * surface.height).floor(),
                    z,
                    speed: speed_for_depth(z),
                    color: color_for_depth(z),
                }
            })
            .collect();

        Starfield {
            tags: Tags::from([ACTIVE, VISIBLE, STARS, BACKGROUND]),
            points,
            rng,
        }
    }

    pub fn points(&self) -> &[Star] {
        &self.points
    }
}

fn speed_for_depth(z: f64) -> f64 {
    STAR_MIN_SPEED + (z / STAR_MAX_Z) * (STAR_MAX_SPEED - STAR_MIN_SPEED)
}

// z を [0, MAX_Z) からパレットの段に割り振る。
fn color_for_depth(z: f64) -> Color {
    let step = ((z / STAR_MAX_Z) * PALETTE.len() as f64) as usize;
    PALETTE[step.min(PALETTE.len() - 1)]
}

impl Entity for Starfield {
    fn tags(&self) -> &Tags {
        &self.tags
    }

    fn tags_mut(&mut self) -> &mut Tags {
        &mut self.tags
    }

    fn as_updatable(&mut self) -> Option<&mut dyn Updatable> {
        Some(self)
    }

    fn as_renderable(&self) -> Option<&dyn Renderable> {
        Some(self)
    }
}

impl Updatable for Starfield {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        let delta = ctx.delta();
        let surface = ctx.surface();
        for p in self.points.iter_mut() {
            p.y += p.speed * delta;
            // 下から抜けたら上に戻して x を振り直す
            if p.y > surface.height {
                p.y = 0.0;
                p.x = (self.rng.gen::<f64>() * surface.width).floor();
            }
        }
    }
}

impl Renderable for Starfield {
    fn render(&self, ctx: &mut RenderContext<'_>) {
        for p in &self.points {
            ctx.surface.fill_rect(p.x, p.y, STAR_WIDTH, STAR_HEIGHT, p.color);
        }
    }
}
