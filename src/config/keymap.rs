// src/config/keymap.rs
//! キー割り当て。アクション 1 つにつきキーが 2 つ (方向キー + 文字キー) だよ！

use serde::{Deserialize, Serialize};

use crate::input::Action;

/// 各アクションに割り当てるキー (`KeyboardEvent.key` の値) のペア。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub up: [String; 2],
    pub down: [String; 2],
    pub left: [String; 2],
    pub right: [String; 2],
    pub fire1: [String; 2],
    pub fire2: [String; 2],
}

fn pair(a: &str, b: &str) -> [String; 2] {
    [a.to_string(), b.to_string()]
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: pair("ArrowUp", "w"),
            down: pair("ArrowDown", "s"),
            left: pair("ArrowLeft", "a"),
            right: pair("ArrowRight", "d"),
            fire1: pair(" ", "z"),
            fire2: pair("Control", "x"),
        }
    }
}

impl KeyBindings {
    pub fn keys_for(&self, action: Action) -> &[String; 2] {
        match action {
            Action::Up => &self.up,
            Action::Down => &self.down,
            Action::Left => &self.left,
            Action::Right => &self.right,
            Action::Fire1 => &self.fire1,
            Action::Fire2 => &self.fire2,
        }
    }

    /// どれかのアクションに割り当てられてるキー？
    pub fn is_bound(&self, key: &str) -> bool {
        Action::ALL.iter().any(|a| self.keys_for(*a).iter().any(|k| k == key))
    }
}
