//! Welcome line typed out one character at a time.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::{TYPE_DELAY_MS, WELCOME_TEXT};

/// Type [`WELCOME_TEXT`] into `typed`.
pub fn type_welcome(typed: RwSignal<String>) {
    spawn_local(async move {
        for c in WELCOME_TEXT.chars() {
            TimeoutFuture::new(TYPE_DELAY_MS).await;
            typed.update(|text| text.push(c));
        }
        log::debug!("welcome line typed");
    });
}
