// src/app/init_handler.rs
//! 起動まわり: 設定の読み込み、キャンバスの用意、最初のシーンの組み立て。

use log::info;
use rand::rngs::StdRng;
use wasm_bindgen::JsValue;

use crate::app::canvas_surface::CanvasSurface;
use crate::config::GameConfig;
use crate::content::{DebugEntities, DebugInput, DebugSolids, PlayerShip, Starfield};
use crate::ecs::scene::Scene;

pub const DEBUG_ROOM: &str = "debug-room";

/// JS から渡された JSON (なければデフォルト) から設定を作る。
pub(crate) fn load_config(json: Option<&str>) -> Result<GameConfig, serde_json::Error> {
    match json {
        Some(json) if !json.trim().is_empty() => GameConfig::from_json(json),
        _ => Ok(GameConfig::default()),
    }
}

/// 描画バックエンドの初期化。失敗したら起動を止める。
pub(crate) fn initialize_canvas(config: &GameConfig) -> Result<CanvasSurface, JsValue> {
    CanvasSurface::attach(config.surface)
}

/// デバッグルームを組み立てる。星空 → 自機 → (設定でオンなら) デバッグ表示 の順で add。
pub fn build_debug_room(config: &GameConfig, rng: StdRng) -> Scene {
    let mut scene = Scene::new(DEBUG_ROOM);
    scene.add(Starfield::new(config.star_count, config.surface, rng));
    scene.add(PlayerShip::new(config.surface));

    if config.debug.solids {
        scene.add(DebugSolids::new());
    }
    if config.debug.entities {
        scene.add(DebugEntities::new());
    }
    if config.debug.input {
        scene.add(DebugInput::new());
    }

    info!(
        "App::Init: built scene '{}' with {} pending entities",
        scene.name(),
        scene.pending_add_len()
    );
    scene
}
