// src/ecs/scene_stack.rs

use log::info;

use crate::ecs::scene::Scene;

/// シーンの積み重ね。毎フレーム動くのは一番上のシーンだけ！
/// push/pop してもシーン側には何も通知しない (enter/exit フックはなし)。
#[derive(Debug, Default)]
pub struct SceneStack {
    stack: Vec<Scene>,
}

impl SceneStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, scene: Scene) {
        info!("SceneStack: push '{}' (depth {})", scene.name(), self.stack.len() + 1);
        self.stack.push(scene);
    }

    /// 一番上のシーン。空なら None。
    pub fn peek(&self) -> Option<&Scene> {
        self.stack.last()
    }

    pub fn peek_mut(&mut self) -> Option<&mut Scene> {
        self.stack.last_mut()
    }

    /// 一番上のシーンを取り外して返す。空なら None。
    pub fn pop(&mut self) -> Option<Scene> {
        let scene = self.stack.pop();
        if let Some(scene) = &scene {
            info!("SceneStack: pop '{}' (depth {})", scene.name(), self.stack.len());
        }
        scene
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_and_pop_on_empty_stack() {
        let mut stack = SceneStack::new();
        assert!(stack.peek().is_none());
        assert!(stack.peek_mut().is_none());
        assert!(stack.pop().is_none());
        assert!(stack.is_empty());
    }

    #[test]
    fn top_scene_is_the_last_pushed() {
        let mut stack = SceneStack::new();
        stack.push(Scene::new("title"));
        stack.push(Scene::new("level"));

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek().map(Scene::name), Some("level"));

        let popped = stack.pop().expect("level should pop");
        assert_eq!(popped.name(), "level");
        assert_eq!(stack.peek().map(Scene::name), Some("title"));

        stack.pop();
        assert!(stack.peek().is_none());
    }
}
