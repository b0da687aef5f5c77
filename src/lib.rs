// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ 役割ごとに分けてるよ。
pub mod app; // ブラウザ側 (キャンバス、キー入力、requestAnimationFrame)
pub mod config; // 設定とレイアウト定数
pub mod content; // デバッグルームに置くエンティティ
pub mod ecs; // シーン/エンティティのライフサイクルとゲームループ
pub mod input; // キー状態とフレームごとの入力スナップショット
pub mod logger; // log クレート → ブラウザのコンソール
pub mod surface; // 描画先の抽象化

pub use app::game_app::{boot, GameApp};
pub use config::GameConfig;
pub use ecs::{Entity, EntityId, GameLoop, Scene, SceneStack, Tags};
pub use surface::{Surface, SurfaceSize};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn on_wasm_load() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    log::info!("Panic hook and console logger set!");
}
