// src/content/player.rs

// 自機だよ！🚀 入力で動いて、fire1 を押した瞬間に弾を 1 発撃つ。

use crate::config::layout::{
    PLAYER_HEIGHT, PLAYER_MAX_Y_RATIO, PLAYER_MIN_Y_RATIO, PLAYER_SPEED_X, PLAYER_SPEED_Y,
    PLAYER_START_Y_RATIO, PLAYER_WIDTH,
};
use crate::content::bullet::PlayerBullet;
use crate::ecs::context::{RenderContext, UpdateContext};
use crate::ecs::entity::{Bounds, Entity, Renderable, Updatable};
use crate::ecs::tags::{Tags, ACTIVE, PLAYER, SOLID, VISIBLE};
use crate::surface::{Color, SurfaceSize};

const SHIP_COLOR: Color = Color("#0ff");

pub struct PlayerShip {
    tags: Tags,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    speed_x: f64,
    speed_y: f64,
    /// fire1 を押しっぱなしの間は true。離すまで次の弾は出ない。
    fired: bool,
    bounds: Bounds,
}

impl PlayerShip {
    pub fn new(surface: SurfaceSize) -> Self {
        let x = (surface.width * 0.5).trunc();
        let y = (surface.height * PLAYER_START_Y_RATIO).trunc();
        PlayerShip {
            tags: Tags::from([PLAYER, ACTIVE, VISIBLE, SOLID]),
            x,
            y,
            w: PLAYER_WIDTH,
            h: PLAYER_HEIGHT,
            speed_x: PLAYER_SPEED_X,
            speed_y: PLAYER_SPEED_Y,
            fired: false,
            bounds: Bounds::centered(x, y, PLAYER_WIDTH, PLAYER_HEIGHT),
        }
    }

    fn update_bounds(&mut self) {
        self.bounds = Bounds::centered(self.x, self.y, self.w, self.h);
    }
}

impl Entity for PlayerShip {
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

    fn bounds(&self) -> Option<Bounds> {
        Some(self.bounds)
    }
}

impl Updatable for PlayerShip {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        let input = *ctx.input();
        let delta = ctx.delta();
        let surface = ctx.surface();
        let hw = (self.w * 0.5).trunc();
        let hh = (self.h * 0.5).trunc();

        // 押した瞬間だけ撃つ
        if input.fire1() && !self.fired {
            self.fired = true;
            ctx.commands.add(PlayerBullet::new(self.x, self.y - hh));
        } else if !input.fire1() && self.fired {
            self.fired = false;
        }

        if input.left() {
            self.x -= self.speed_x * delta;
        } else if input.right() {
            self.x += self.speed_x * delta;
        }
        if input.up() {
            self.y -= self.speed_y * delta;
        } else if input.down() {
            self.y += self.speed_y * delta;
        }

        self.x = self.x.clamp(hw, surface.width - hw);
        self.y = self.y.clamp(
            surface.height * PLAYER_MIN_Y_RATIO,
            surface.height * PLAYER_MAX_Y_RATIO,
        );
        self.update_bounds();
    }
}

impl Renderable for PlayerShip {
    fn render(&self, ctx: &mut RenderContext<'_>) {
        let b = self.bounds;
        ctx.surface.fill_triangle(
            [(b.left, b.bottom), (self.x, b.top), (b.right, b.bottom)],
            SHIP_COLOR,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::keymap::KeyBindings;
    use crate::ecs::context::{FrameInfo, FrameTime};
    use crate::ecs::scene::Scene;
    use crate::ecs::tags::BULLET;
    use crate::input::{InputSnapshot, KeyState};

    fn input_with(keys: &[&str]) -> InputSnapshot {
        let mut state = KeyState::new();
        for k in keys {
            state.press(k);
        }
        InputSnapshot::capture(&state, &KeyBindings::default())
    }

    fn step(scene: &mut Scene, input: &InputSnapshot, delta: f64) {
        scene.update(FrameInfo {
            time: FrameTime { delta, elapsed: delta },
            input,
            surface: SurfaceSize::default(),
        });
    }

    fn ship_bounds(scene: &Scene) -> Bounds {
        scene
            .find_first_with_tag(PLAYER)
            .and_then(|slot| slot.entity().bounds())
            .expect("player should be live with bounds")
    }

    #[test]
    fn ship_starts_centered_low() {
        let ship = PlayerShip::new(SurfaceSize::default());
        assert_eq!(ship.x, 256.0);
        assert_eq!(ship.y, 274.0); // trunc(392 * 0.7)
        let b = ship.bounds().expect("ship has bounds");
        assert_eq!(b.left, 232.0);
        assert_eq!(b.top, 262.0);
    }

    #[test]
    fn fire_is_edge_triggered() {
        let mut scene = Scene::new("room");
        scene.add(PlayerShip::new(SurfaceSize::default()));

        let firing = input_with(&[" "]);
        step(&mut scene, &firing, 0.016);
        assert_eq!(scene.pending_add_len(), 1, "押した瞬間に 1 発");

        // 押しっぱなしでは出ない
        step(&mut scene, &firing, 0.016);
        assert_eq!(scene.find_all_with_tag(BULLET).len(), 1);
        assert_eq!(scene.pending_add_len(), 0);

        // 離してからもう一回押すと出る
        step(&mut scene, &InputSnapshot::default(), 0.016);
        step(&mut scene, &input_with(&["z"]), 0.016);
        assert_eq!(scene.pending_add_len(), 1);
    }

    #[test]
    fn bullet_spawns_at_ship_nose() {
        let mut scene = Scene::new("room");
        scene.add(PlayerShip::new(SurfaceSize::default()));
        step(&mut scene, &input_with(&[" "]), 0.0);
        step(&mut scene, &InputSnapshot::default(), 0.0);

        let bullet = scene.find_first_with_tag(BULLET).expect("bullet should be live");
        assert!(bullet.has_tag(ACTIVE));
        let mut surface = crate::surface::recording::RecordingSurface::new();
        let input = InputSnapshot::default();
        scene.render(
            FrameInfo { time: FrameTime::default(), input: &input, surface: SurfaceSize::default() },
            &mut surface,
        );
        assert!(surface.calls.contains(&crate::surface::recording::DrawCall::FillRect {
            x: 256.0,
            y: 262.0,
            w: 4.0,
            h: 24.0,
            color: Color("#0f0"),
        }));
    }

    #[test]
    fn ship_moves_and_stays_clamped() {
        let mut scene = Scene::new("room");
        scene.add(PlayerShip::new(SurfaceSize::default()));

        step(&mut scene, &input_with(&["ArrowLeft"]), 0.1);
        let b = ship_bounds(&scene);
        assert_eq!(b.x, 231.0); // 256 - 250 * 0.1

        // 大きすぎる delta でも画面の中に収まる
        step(&mut scene, &input_with(&["a", "w"]), 100.0);
        let b = ship_bounds(&scene);
        assert_eq!(b.x, 24.0);
        assert!((b.y - 392.0 * 0.1).abs() < 1e-9);

        step(&mut scene, &input_with(&["d", "s"]), 100.0);
        let b = ship_bounds(&scene);
        assert_eq!(b.x, 512.0 - 24.0);
        assert!((b.y - 392.0 * 0.95).abs() < 1e-9);
    }

    #[test]
    fn left_wins_over_right_and_up_over_down() {
        let mut scene = Scene::new("room");
        scene.add(PlayerShip::new(SurfaceSize::default()));
        step(&mut scene, &input_with(&["a", "d", "w", "s"]), 0.1);
        let b = ship_bounds(&scene);
        assert!(b.x < 256.0);
        assert!(b.y < 274.0);
    }
}
