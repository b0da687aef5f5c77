// src/app/state_getter.rs
//! 一番上のシーンの中身を JSON にするデバッグ用の関数たち。

use serde::Serialize;

use crate::ecs::entity::EntityId;
use crate::ecs::scene::Scene;
use crate::ecs::scene_stack::SceneStack;

#[derive(Debug, Serialize)]
pub struct EntityState {
    pub id: EntityId,
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SceneState {
    pub name: String,
    pub live: usize,
    pub pending_add: usize,
    pub pending_remove: usize,
    pub entities: Vec<EntityState>,
}

impl SceneState {
    pub fn capture(scene: &Scene) -> Self {
        SceneState {
            name: scene.name().to_string(),
            live: scene.len(),
            pending_add: scene.pending_add_len(),
            pending_remove: scene.pending_remove_len(),
            entities: scene
                .entities()
                .map(|slot| EntityState {
                    id: slot.id(),
                    tags: slot.tags().sorted().into_iter().map(String::from).collect(),
                })
                .collect(),
        }
    }
}

/// 一番上のシーンの状態を JSON 文字列に。シーンがなければ `null`。
pub fn scene_state_json(scenes: &SceneStack) -> Result<String, serde_json::Error> {
    let state = scenes.peek().map(SceneState::capture);
    serde_json::to_string(&state)
}
