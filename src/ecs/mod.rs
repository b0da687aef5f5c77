// src/ecs/mod.rs
//! シーン/エンティティのライフサイクル管理とゲームループのコア。

pub mod context;
pub mod entity;
pub mod game_loop;
pub mod scene;
pub mod scene_stack;
pub mod tags;

// よく使う型は `crate::ecs::X` で使えるように re-export
pub use context::{FrameInfo, FrameTime, RenderContext, UpdateContext};
pub use entity::{Bounds, Entity, EntityId, EntitySlot, Renderable, Updatable};
pub use game_loop::{FrameClock, FrameReport, GameLoop, LoopState};
pub use scene::{Scene, SceneCommands, UpdateReport};
pub use scene_stack::SceneStack;
pub use tags::Tags;
