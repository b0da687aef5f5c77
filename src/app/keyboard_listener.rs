// src/app/keyboard_listener.rs
//! window に keydown/keyup リスナーをつけて、押されてるキーを KeyState に書き込むよ。
//! ループとは非同期に動くので、ループ側はフレームの頭でスナップショットを撮るだけ。

use std::sync::{Arc, Mutex};

use log::{debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, KeyboardEvent};

use crate::app::lock_or_recover;
use crate::input::KeyState;

/// キーリスナーを 2 つ (keydown, keyup) つけて、そのクロージャを返す。
/// 返したクロージャを drop するとリスナーが壊れるので、呼び出し側で持っておいてね！
pub(crate) fn attach_key_listeners(
    keys: Arc<Mutex<KeyState>>,
) -> Result<Vec<Closure<dyn FnMut(Event)>>, JsValue> {
    let window = window().ok_or("Failed to get window")?;

    // --- keydown ---
    let keys_down = Arc::clone(&keys);
    let keydown_closure = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        match event.dyn_into::<KeyboardEvent>() {
            Ok(key_event) => lock_or_recover(&keys_down).press(&key_event.key()),
            Err(_) => error!("Failed to cast event to KeyboardEvent in keydown listener"),
        }
    }) as Box<dyn FnMut(Event)>);
    window.add_event_listener_with_callback("keydown", keydown_closure.as_ref().unchecked_ref())?;

    // --- keyup ---
    let keys_up = Arc::clone(&keys);
    let keyup_closure = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        match event.dyn_into::<KeyboardEvent>() {
            Ok(key_event) => lock_or_recover(&keys_up).release(&key_event.key()),
            Err(_) => error!("Failed to cast event to KeyboardEvent in keyup listener"),
        }
    }) as Box<dyn FnMut(Event)>);
    window.add_event_listener_with_callback("keyup", keyup_closure.as_ref().unchecked_ref())?;

    debug!("Keyboard: attached keydown/keyup listeners");
    Ok(vec![keydown_closure, keyup_closure])
}
