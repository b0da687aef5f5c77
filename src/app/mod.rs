// src/app/mod.rs
//! ブラウザとコアをつなぐ部分を役割ごとに分けて置くモジュールだよ！

pub mod canvas_surface;
pub mod frame_scheduler;
pub mod game_app;
pub mod init_handler;
pub mod keyboard_listener;
pub mod state_getter;

use std::sync::{Mutex, MutexGuard};

use log::warn;

/// Mutex をロックする。毒されてても (前にパニックしてても) 中身を取り出して続行。
pub(crate) fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("App: mutex was poisoned, recovering inner value");
            poisoned.into_inner()
        }
    }
}

/// ブラウザの壁時計 (秒)。
pub(crate) fn now_seconds() -> f64 {
    js_sys::Date::now() * 0.001
}
