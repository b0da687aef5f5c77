// src/config/mod.rs
//! ゲーム全体の設定 (画面サイズ、キー割り当て、デバッグ表示)。
//! JS から JSON で一部だけ渡しても、足りないところはデフォルトで埋まるよ。

pub mod keymap;
pub mod layout;

use serde::{Deserialize, Serialize};

use crate::surface::SurfaceSize;
use keymap::KeyBindings;

/// デバッグ用オーバーレイのオン/オフ。全部デフォルトでオフ。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugOverlays {
    /// solid なエンティティの境界を赤枠で描く
    pub solids: bool,
    /// エンティティ数 (live +追加待ち -削除待ち) を表示
    pub entities: bool,
    /// 入力の Y/N を表示
    pub input: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub surface: SurfaceSize,
    pub bindings: KeyBindings,
    pub debug: DebugOverlays,
    pub log_level: String,
    pub star_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceSize::default(),
            bindings: KeyBindings::default(),
            debug: DebugOverlays::default(),
            log_level: "info".to_string(),
            star_count: layout::STAR_COUNT,
        }
    }
}

impl GameConfig {
    /// JSON から設定を読む。書いてないフィールドはデフォルト値。
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// `log_level` を `log::LevelFilter` に変換。読めなかったら Info。
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_surface_size_and_key_bindings() {
        let config = GameConfig::default();
        assert_eq!(config.surface.width, 512.0);
        assert_eq!(config.surface.height, 392.0);
        assert_eq!(config.bindings.up, ["ArrowUp".to_string(), "w".to_string()]);
        assert_eq!(config.star_count, 50);
        assert_eq!(config.debug, DebugOverlays::default());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config = GameConfig::from_json(r#"{ "debug": { "solids": true }, "log_level": "debug" }"#)
            .expect("parse should succeed");
        assert!(config.debug.solids);
        assert!(!config.debug.input);
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        assert_eq!(config.bindings, KeyBindings::default());
        assert_eq!(config.surface, SurfaceSize::default());
    }

    #[test]
    fn rebinding_one_action_keeps_the_others() {
        let config = GameConfig::from_json(r#"{ "bindings": { "fire1": ["Enter", "j"] } }"#)
            .expect("parse should succeed");
        assert!(config.bindings.is_bound("Enter"));
        assert!(config.bindings.is_bound("ArrowLeft"));
        assert!(!config.bindings.is_bound(" "));
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(GameConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let config = GameConfig { log_level: "loud".into(), ..GameConfig::default() };
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
