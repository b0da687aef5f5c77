// src/logger.rs

//! `log` クレートの出力先をブラウザのコンソールにするよ！📝
//! 中身は `console_log` にお任せ (レベルごとに console.error / warn / info / log を使い分けてくれる)。
//! `#[wasm_bindgen(start)]` で一回だけ仕込む。ネイティブのテストでは仕込まないので log は空振りする。

use log::{Level, LevelFilter};

/// ロガーを登録して最大レベルを決める。二回目以降の登録は無視 (レベルだけ更新)。
pub fn init(level: LevelFilter) {
    // Off の時も登録だけはしておく (あとで設定から上げられるように)
    let register_level = level.to_level().unwrap_or(Level::Error);
    // 登録は一回しか成功しない。失敗 = もう登録済みなので気にしない。
    let _ = console_log::init_with_level(register_level);
    log::set_max_level(level);
}
