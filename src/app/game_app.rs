// src/app/game_app.rs

// --- 必要なものをインポート ---
use std::sync::{Arc, Mutex};

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use web_sys::Event;

use crate::app::canvas_surface::CanvasSurface;
use crate::app::{frame_scheduler, init_handler, keyboard_listener, lock_or_recover, now_seconds, state_getter};
use crate::config::GameConfig;
use crate::ecs::game_loop::{GameLoop, LoopState};
use crate::input::{InputSnapshot, KeyState};

/// ブラウザから見たゲーム全体。JS 側はこれを作って `start()` するだけ！
///
/// 中身は全部ここが持ってる (グローバルなゲームオブジェクトはない):
/// - `game_loop`: シーンスタックとタイマー
/// - `keys`: キーリスナーが書き込むキー状態
/// - `surface`: 描画先のキャンバス
#[wasm_bindgen]
pub struct GameApp {
    config: GameConfig,
    game_loop: Arc<Mutex<GameLoop>>,
    keys: Arc<Mutex<KeyState>>,
    surface: Arc<Mutex<CanvasSurface>>,
    // リスナーが生きてる間はクロージャを持っておく
    key_closures: Vec<Closure<dyn FnMut(Event)>>,
}

#[wasm_bindgen]
impl GameApp {
    /// バックエンド (キャンバス、キー入力) を初期化して、デバッグルームを積む。
    /// キャンバスやイベントソースが取れなかったら Err で起動失敗。
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<GameApp, JsValue> {
        info!("GameApp: Initializing...");
        let config = init_handler::load_config(config_json.as_deref())
            .map_err(|e| JsValue::from_str(&format!("Invalid game config: {}", e)))?;
        log::set_max_level(config.level_filter());

        let surface = init_handler::initialize_canvas(&config)?;
        let keys = Arc::new(Mutex::new(KeyState::new()));
        let key_closures = keyboard_listener::attach_key_listeners(Arc::clone(&keys))?;

        let mut game_loop = GameLoop::new();
        let scene = init_handler::build_debug_room(&config, StdRng::from_entropy());
        game_loop.scenes_mut().push(scene);

        info!("GameApp: Initialization complete.");
        Ok(GameApp {
            config,
            game_loop: Arc::new(Mutex::new(game_loop)),
            keys,
            surface: Arc::new(Mutex::new(surface)),
            key_closures,
        })
    }

    /// ループを開始する。以後は requestAnimationFrame が毎フレーム呼んでくれる。
    pub fn start(&self) -> Result<(), JsValue> {
        {
            let mut game_loop = lock_or_recover(&self.game_loop);
            if game_loop.state() == LoopState::Running {
                warn!("GameApp: start() called twice, ignoring");
                return Ok(());
            }
            game_loop.start(now_seconds());
        }

        let game_loop = Arc::clone(&self.game_loop);
        let keys = Arc::clone(&self.keys);
        let surface = Arc::clone(&self.surface);
        let bindings = self.config.bindings.clone();

        frame_scheduler::start_frame_loop(move || {
            // フレームの頭で入力を一枚撮る。このフレーム中はずっとこれを使う。
            let input = InputSnapshot::capture(&lock_or_recover(&keys), &bindings);
            let mut surface = lock_or_recover(&surface);
            lock_or_recover(&game_loop).frame(now_seconds(), &input, &mut *surface);
        })?;

        info!("GameApp: frame loop started ({} key listeners)", self.key_closures.len());
        Ok(())
    }

    /// 一番上のシーンの状態 (JSON)。デバッグ用！
    pub fn scene_state_json(&self) -> Result<String, JsValue> {
        let game_loop = lock_or_recover(&self.game_loop);
        state_getter::scene_state_json(game_loop.scenes())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize scene state: {}", e)))
    }

    /// 一番上のシーンのライブなエンティティ数。
    pub fn entity_count(&self) -> usize {
        lock_or_recover(&self.game_loop).scenes().peek().map_or(0, |scene| scene.len())
    }

    /// 経過時間 (秒)。
    pub fn elapsed(&self) -> f64 {
        lock_or_recover(&self.game_loop).clock().time().elapsed
    }
}

/// ページ読み込み後に JS から呼ぶ入口: 初期化してすぐループ開始。
#[wasm_bindgen]
pub fn boot(config_json: Option<String>) -> Result<GameApp, JsValue> {
    let app = GameApp::new(config_json)?;
    app.start()?;
    Ok(app)
}
