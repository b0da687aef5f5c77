// src/content/bullet.rs

use crate::config::layout::{BULLET_HEIGHT, BULLET_KILL_Y, BULLET_SPEED, BULLET_WIDTH};
use crate::ecs::context::{RenderContext, UpdateContext};
use crate::ecs::entity::{Entity, Renderable, Updatable};
use crate::ecs::tags::{Tags, ACTIVE, BULLET, DEAD, VISIBLE};
use crate::surface::Color;

const BULLET_COLOR: Color = Color("#0f0");

/// 自機が撃つ弾。まっすぐ上に飛んで、画面の上を抜けたら自分で dead になる。
pub struct PlayerBullet {
    tags: Tags,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    speed: f64,
    /// -1 で上向き
    direction: f64,
}

impl PlayerBullet {
    pub fn new(x: f64, y: f64) -> Self {
        PlayerBullet {
            tags: Tags::from([VISIBLE, ACTIVE, BULLET]),
            x,
            y,
            w: BULLET_WIDTH,
            h: BULLET_HEIGHT,
            speed: BULLET_SPEED,
            direction: -1.0,
        }
    }
}

impl Entity for PlayerBullet {
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

impl Updatable for PlayerBullet {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        self.y += self.speed * self.direction * ctx.delta();
        if self.y < BULLET_KILL_Y {
            self.speed = 0.0;
            self.tags.replace([DEAD]);
        }
    }
}

impl Renderable for PlayerBullet {
    fn render(&self, ctx: &mut RenderContext<'_>) {
        ctx.surface.fill_rect(self.x, self.y, self.w, self.h, BULLET_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::context::{FrameInfo, FrameTime};
    use crate::ecs::scene::Scene;
    use crate::input::InputSnapshot;
    use crate::surface::SurfaceSize;

    fn step(scene: &mut Scene, delta: f64) {
        let input = InputSnapshot::default();
        scene.update(FrameInfo {
            time: FrameTime { delta, elapsed: delta },
            input: &input,
            surface: SurfaceSize::default(),
        });
    }

    #[test]
    fn bullet_flies_up_then_dies_off_screen() {
        let mut scene = Scene::new("range");
        let id = scene.add(PlayerBullet::new(100.0, 20.0));

        // 20 - 350 * 0.05 = 2.5 -> まだ生きてる
        step(&mut scene, 0.05);
        assert!(scene.contains(id));
        assert!(scene.find_first_with_tag(BULLET).is_some());

        // 2.5 - 350 * 0.05 = -15 -> dead になって同じフレームで消える
        step(&mut scene, 0.05);
        assert!(!scene.contains(id), "画面外に出た弾は消えるはず");
        assert!(scene.find_all_with_tag(BULLET).is_empty());
    }

    #[test]
    fn huge_delta_kills_bullet_on_first_update() {
        let mut scene = Scene::new("range");
        let id = scene.add(PlayerBullet::new(0.0, 300.0));
        step(&mut scene, 10.0);
        assert!(!scene.contains(id));
    }
}
