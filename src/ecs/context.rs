// src/ecs/context.rs

//! update/render の時にエンティティへ渡される「そのフレームの情報」。
//! グローバル変数の代わりに、必要なものは全部ここ経由で受け取るよ！📦

use crate::ecs::scene::{Scene, SceneCommands};
use crate::input::InputSnapshot;
use crate::surface::{Surface, SurfaceSize};

/// ゲームループがフレームごとに公開するタイミング情報 (秒)。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// 前のフレームからの経過時間。固定じゃないし上限もないので注意！
    pub delta: f64,
    /// 起動してからの累計。
    pub elapsed: f64,
}

/// update と render の両方で読める、フレーム単位の読み取り専用データ。
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo<'a> {
    pub time: FrameTime,
    pub input: &'a InputSnapshot,
    pub surface: SurfaceSize,
}

/// update 中のエンティティに渡されるもの。
/// `commands` からシーンへの add/remove ができるけど、反映されるのは次の flush だよ。
pub struct UpdateContext<'a> {
    pub frame: FrameInfo<'a>,
    pub commands: SceneCommands<'a>,
}

impl<'a> UpdateContext<'a> {
    pub fn delta(&self) -> f64 {
        self.frame.time.delta
    }

    pub fn elapsed(&self) -> f64 {
        self.frame.time.elapsed
    }

    pub fn input(&self) -> &InputSnapshot {
        self.frame.input
    }

    pub fn surface(&self) -> SurfaceSize {
        self.frame.surface
    }
}

/// render 中のエンティティに渡されるもの。シーンは読み取り専用で覗ける。
pub struct RenderContext<'a> {
    pub frame: FrameInfo<'a>,
    pub scene: &'a Scene,
    pub surface: &'a mut dyn Surface,
}

impl<'a> RenderContext<'a> {
    pub fn input(&self) -> &InputSnapshot {
        self.frame.input
    }
}
