// src/input.rs

//! 入力まわり！⌨️
//!
//! ブラウザのキーイベントが `KeyState` (今押されてるキーの集合) を書き換えて、
//! ゲームループはフレームの頭で `InputSnapshot` を一枚撮るだけ。
//! エンティティはそのスナップショットしか見ないから、フレームの途中でキー状態が変わっても影響なし。

use std::collections::HashSet;

use crate::config::keymap::KeyBindings;

/// コントローラーの 6 つのボタン。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Fire1,
    Fire2,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::Fire1,
        Action::Fire2,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Action::Up => "Up",
            Action::Down => "Down",
            Action::Left => "Left",
            Action::Right => "Right",
            Action::Fire1 => "Fire1",
            Action::Fire2 => "Fire2",
        }
    }
}

/// 今押されてるキー (`KeyboardEvent.key` の値) の集合。
/// キーリスナーが書いて、ループが読む。
#[derive(Debug, Default, Clone)]
pub struct KeyState {
    held: HashSet<String>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.held.insert(key.to_string());
    }

    pub fn release(&mut self, key: &str) {
        self.held.remove(key);
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }
}

/// 1 フレーム分の入力の写真📸。作ったあとは変わらない。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputSnapshot {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    fire1: bool,
    fire2: bool,
}

impl InputSnapshot {
    /// キー状態とキー割り当てからスナップショットを作る。
    /// 各アクションは割り当てられた 2 つのキーのどっちかが押されてれば true。
    pub fn capture(keys: &KeyState, bindings: &KeyBindings) -> Self {
        let held = |action: Action| bindings.keys_for(action).iter().any(|k| keys.is_held(k));
        Self {
            up: held(Action::Up),
            down: held(Action::Down),
            left: held(Action::Left),
            right: held(Action::Right),
            fire1: held(Action::Fire1),
            fire2: held(Action::Fire2),
        }
    }

    pub fn up(&self) -> bool {
        self.up
    }

    pub fn down(&self) -> bool {
        self.down
    }

    pub fn left(&self) -> bool {
        self.left
    }

    pub fn right(&self) -> bool {
        self.right
    }

    pub fn fire1(&self) -> bool {
        self.fire1
    }

    pub fn fire2(&self) -> bool {
        self.fire2
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        match action {
            Action::Up => self.up,
            Action::Down => self.down,
            Action::Left => self.left,
            Action::Right => self.right,
            Action::Fire1 => self.fire1,
            Action::Fire2 => self.fire2,
        }
    }
}
