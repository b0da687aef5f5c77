// src/config/layout.rs
//! 画面レイアウトとコンテンツの定数だよ！
//! 論理サイズは 512x392。キャンバスの大きさもこれ。

pub const SURFACE_WIDTH: f64 = 512.0; // 論理的な画面の幅
pub const SURFACE_HEIGHT: f64 = 392.0; // 論理的な画面の高さ

// --- 星空 (背景) ---
pub const STAR_COUNT: usize = 50;
pub const STAR_MIN_SPEED: f64 = 160.0; // 一番奥の星の落下速度
pub const STAR_MAX_SPEED: f64 = 250.0; // 一番手前の星の落下速度
pub const STAR_MIN_Z: f64 = 0.0;
pub const STAR_MAX_Z: f64 = 100.0;
pub const STAR_WIDTH: f64 = 2.0;
pub const STAR_HEIGHT: f64 = 3.0;

// --- 自機 ---
pub const PLAYER_WIDTH: f64 = 48.0;
pub const PLAYER_HEIGHT: f64 = 24.0;
pub const PLAYER_SPEED_X: f64 = 250.0;
pub const PLAYER_SPEED_Y: f64 = 250.0;
pub const PLAYER_START_Y_RATIO: f64 = 0.7; // 画面の高さに対する初期位置
pub const PLAYER_MIN_Y_RATIO: f64 = 0.1; // 上に行ける限界
pub const PLAYER_MAX_Y_RATIO: f64 = 0.95; // 下に行ける限界

// --- 自機の弾 ---
pub const BULLET_WIDTH: f64 = 4.0;
pub const BULLET_HEIGHT: f64 = 24.0;
pub const BULLET_SPEED: f64 = 350.0;
pub const BULLET_KILL_Y: f64 = -10.0; // これより上に行ったら dead

// --- デバッグ表示 ---
pub const DEBUG_TEXT_X: f64 = 16.0;
pub const DEBUG_TEXT_TOP: f64 = 16.0;
pub const DEBUG_LINE_HEIGHT: f64 = 16.0;
