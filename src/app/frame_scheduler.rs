// src/app/frame_scheduler.rs
//! requestAnimationFrame で 1 フレームずつループを回す。
//! 前のフレームが終わってから次を予約するので、フレームが重なることはないよ。

use std::sync::{Arc, Mutex};

use log::error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::app::lock_or_recover;

type FrameCallback = Arc<Mutex<Option<Closure<dyn FnMut()>>>>;

fn request_animation_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()
        .ok_or("Failed to get window")?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

/// `on_frame` を毎フレーム呼ぶループを開始する。止める手段はない (ページが閉じるまで回る)。
pub(crate) fn start_frame_loop(mut on_frame: impl FnMut() + 'static) -> Result<(), JsValue> {
    // クロージャが自分自身を次のフレームに予約できるように、自分への参照を共有しておく
    let slot: FrameCallback = Arc::new(Mutex::new(None));
    let slot_for_closure = Arc::clone(&slot);

    let closure = Closure::wrap(Box::new(move || {
        on_frame();
        let next = lock_or_recover(&slot_for_closure);
        if let Some(callback) = next.as_ref() {
            if let Err(e) = request_animation_frame(callback) {
                error!("FrameScheduler: failed to request next frame: {:?}", e);
            }
        }
    }) as Box<dyn FnMut()>);

    let mut guard = lock_or_recover(&slot);
    *guard = Some(closure);
    if let Some(callback) = guard.as_ref() {
        request_animation_frame(callback)?;
    }
    Ok(())
}
