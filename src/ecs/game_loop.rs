// src/ecs/game_loop.rs

//! ゲームループ本体だよ！🔁
//!
//! 1 フレームでやること (この順番は絶対):
//!   1. 時間を測る (delta / elapsed)
//!   2. それをフレーム情報としてエンティティに公開
//!   3. 一番上のシーンのライフサイクル更新 (flush → update → cull → flush)
//!   4. 画面クリア → visible なエンティティを描画
//!   5. 次のフレームはホスト (ブラウザの requestAnimationFrame) に任せる
//!
//! 固定タイムステップじゃないので delta はいくらでも大きく/小さくなりうる。

use log::{info, warn};

use crate::ecs::context::{FrameInfo, FrameTime};
use crate::ecs::scene::UpdateReport;
use crate::ecs::scene_stack::SceneStack;
use crate::input::InputSnapshot;
use crate::surface::Surface;

/// 最初の tick より前の delta。
pub const INITIAL_DELTA: f64 = 0.33;

/// 壁時計ベースのタイマー (単位は秒)。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    last_time: f64,
    elapsed: f64,
    delta: f64,
}

impl FrameClock {
    pub fn new(start_time: f64) -> Self {
        Self {
            last_time: start_time,
            elapsed: 0.0,
            delta: INITIAL_DELTA,
        }
    }

    /// delta = now - last, elapsed += delta, last = now。
    pub fn tick(&mut self, now: f64) -> FrameTime {
        self.delta = now - self.last_time; // 上限はつけない。タブ復帰直後とかは大きくなるよ
        self.elapsed += self.delta;
        self.last_time = now;
        self.time()
    }

    pub fn time(&self) -> FrameTime {
        FrameTime {
            delta: self.delta,
            elapsed: self.elapsed,
        }
    }

    pub fn last_time(&self) -> f64 {
        self.last_time
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Uninitialized,
    /// 一度 Running になったら止まらない (止めるのはホスト側)。
    Running,
}

/// 1 フレーム分の結果。
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub time: FrameTime,
    /// 一番上のシーンがあったか
    pub had_scene: bool,
    pub update: UpdateReport,
    /// render を呼んだエンティティ数
    pub rendered: usize,
}

/// シーンスタックとタイマーを持ってて、フレームを 1 個ずつ進める。
#[derive(Debug)]
pub struct GameLoop {
    state: LoopState,
    scenes: SceneStack,
    clock: FrameClock,
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl GameLoop {
    pub fn new() -> Self {
        GameLoop {
            state: LoopState::Uninitialized,
            scenes: SceneStack::new(),
            clock: FrameClock::new(0.0),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn scenes(&self) -> &SceneStack {
        &self.scenes
    }

    pub fn scenes_mut(&mut self) -> &mut SceneStack {
        &mut self.scenes
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Uninitialized → Running。`now` がタイマーの起点になる。二回目以降は無視。
    pub fn start(&mut self, now: f64) {
        if self.state == LoopState::Running {
            warn!("GameLoop: start() called while already running, ignoring");
            return;
        }
        self.clock = FrameClock::new(now);
        self.state = LoopState::Running;
        info!("GameLoop: running (start time {:.3}s, {} scene(s))", now, self.scenes.len());
    }

    /// 1 フレーム進める。Running じゃなければ何もしない。
    /// シーンがなければ update/render はスキップ (画面クリアだけはする)。
    pub fn frame(&mut self, now: f64, input: &InputSnapshot, surface: &mut dyn Surface) -> FrameReport {
        // まだ start してない？ なら何もしない (画面クリアもなし)
        if self.state != LoopState::Running {
            return FrameReport::default();
        }

        // --- 1. 時間を測る ---
        let time = self.clock.tick(now);
        // --- 2. フレーム情報としてまとめる (グローバル変数じゃなくて引数で渡す！) ---
        let info = FrameInfo {
            time,
            input,
            surface: surface.size(),
        };

        let mut report = FrameReport {
            time,
            ..FrameReport::default()
        };

        // --- 3. 一番上のシーンだけ更新。シーンがなければ黙ってスキップ ---
        if let Some(scene) = self.scenes.peek_mut() {
            report.had_scene = true;
            report.update = scene.update(info);
        }

        // --- 4. 描画。クリアはシーンがなくても毎回やる ---
        surface.clear();
        if let Some(scene) = self.scenes.peek() {
            report.rendered = scene.render(info, surface);
        }

        // 5. 次のフレームの予約はホスト (requestAnimationFrame) の仕事
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::context::{RenderContext, UpdateContext};
    use crate::ecs::entity::{Entity, Renderable, Updatable};
    use crate::ecs::scene::Scene;
    use crate::ecs::tags::{Tags, ACTIVE, BACKGROUND, VISIBLE};
    use crate::surface::recording::{DrawCall, RecordingSurface};
    use crate::surface::Color;

    const EPS: f64 = 1e-9;

    /// 受け取った delta を覚えておいて、自分の位置に四角を描くだけのエンティティ。
    struct Dot {
        tags: Tags,
        seen_delta: f64,
    }

    impl Entity for Dot {
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

    impl Updatable for Dot {
        fn update(&mut self, ctx: &mut UpdateContext<'_>) {
            self.seen_delta = ctx.delta();
        }
    }

    impl Renderable for Dot {
        fn render(&self, ctx: &mut RenderContext<'_>) {
            ctx.surface.fill_rect(self.seen_delta, 0.0, 1.0, 1.0, Color("#fff"));
        }
    }

    #[test]
    fn clock_tick_computes_delta_and_elapsed() {
        let mut clock = FrameClock::new(10.0);
        assert_eq!(clock.time().delta, INITIAL_DELTA);

        let time = clock.tick(10.016);
        assert!((time.delta - 0.016).abs() < EPS, "delta は 0.016 のはず: {}", time.delta);
        assert!((time.elapsed - 0.016).abs() < EPS);
        assert_eq!(clock.last_time(), 10.016);

        let time = clock.tick(10.048);
        assert!((time.delta - 0.032).abs() < EPS);
        assert!((time.elapsed - 0.048).abs() < EPS);
    }

    #[test]
    fn frame_before_start_does_nothing() {
        let mut game_loop = GameLoop::new();
        game_loop.scenes_mut().push(Scene::new("room"));
        let mut surface = RecordingSurface::new();

        let report = game_loop.frame(1.0, &InputSnapshot::default(), &mut surface);

        assert_eq!(report, FrameReport::default());
        assert!(surface.calls.is_empty(), "始まる前は画面クリアもしない");
        assert_eq!(game_loop.state(), LoopState::Uninitialized);
    }

    #[test]
    fn second_start_is_ignored() {
        let mut game_loop = GameLoop::new();
        game_loop.start(5.0);
        game_loop.start(100.0);
        assert_eq!(game_loop.state(), LoopState::Running);
        assert_eq!(game_loop.clock().last_time(), 5.0);
    }

    #[test]
    fn frame_without_scene_only_clears() {
        let mut game_loop = GameLoop::new();
        game_loop.start(0.0);
        let mut surface = RecordingSurface::new();

        let report = game_loop.frame(0.5, &InputSnapshot::default(), &mut surface);

        assert!(!report.had_scene);
        assert_eq!(report.rendered, 0);
        assert_eq!(surface.calls, vec![DrawCall::Clear]);
        assert!((report.time.delta - 0.5).abs() < EPS);
    }

    #[test]
    fn frame_publishes_delta_then_clears_before_render() {
        let mut game_loop = GameLoop::new();
        let mut scene = Scene::new("room");
        scene.add(Dot { tags: Tags::from([ACTIVE, VISIBLE]), seen_delta: -1.0 });
        game_loop.scenes_mut().push(scene);
        game_loop.start(10.0);

        let mut surface = RecordingSurface::new();
        let report = game_loop.frame(10.25, &InputSnapshot::default(), &mut surface);

        assert!(report.had_scene);
        assert_eq!(report.update.added, 1);
        assert_eq!(report.update.updated, 1);
        assert_eq!(report.rendered, 1);
        assert_eq!(surface.calls.len(), 2);
        assert_eq!(surface.calls[0], DrawCall::Clear);
        match &surface.calls[1] {
            DrawCall::FillRect { x, .. } => assert!((x - 0.25).abs() < EPS, "update で見た delta が描かれるはず"),
            other => panic!("unexpected draw call {:?}", other),
        }
    }

    #[test]
    fn scene_without_active_or_visible_entities_dispatches_nothing() {
        let mut game_loop = GameLoop::new();
        let mut scene = Scene::new("room");
        scene.add(Dot { tags: Tags::from([BACKGROUND]), seen_delta: 0.0 });
        game_loop.scenes_mut().push(scene);
        game_loop.start(0.0);

        let mut surface = RecordingSurface::new();
        let report = game_loop.frame(0.016, &InputSnapshot::default(), &mut surface);

        assert_eq!(report.update.updated, 0);
        assert_eq!(report.rendered, 0);
        assert_eq!(surface.calls, vec![DrawCall::Clear]);
    }

    #[test]
    fn only_top_scene_is_dispatched() {
        let mut game_loop = GameLoop::new();
        let mut bottom = Scene::new("bottom");
        bottom.add(Dot { tags: Tags::from([ACTIVE, VISIBLE]), seen_delta: 0.0 });
        game_loop.scenes_mut().push(bottom);
        game_loop.scenes_mut().push(Scene::new("top"));
        game_loop.start(0.0);

        let mut surface = RecordingSurface::new();
        let report = game_loop.frame(0.016, &InputSnapshot::default(), &mut surface);

        assert_eq!(report.update, UpdateReport::default());
        assert_eq!(report.rendered, 0);

        // top を外すと bottom が動き出す
        game_loop.scenes_mut().pop();
        let report = game_loop.frame(0.032, &InputSnapshot::default(), &mut surface);
        assert_eq!(report.update.updated, 1);
        assert_eq!(report.rendered, 1);
    }
}
