//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands.

mod todo;

use std::future::Future;
use std::pin::Pin;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // `catch` turns a rejected invoke into an Err instead of a throw,
    // so update/delete failures reach the calling component.
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Boxed future returned by the awaitable row callbacks (save/delete).
pub type CommandFuture = Pin<Box<dyn Future<Output = Result<(), String>>>>;

/// Render a rejected invoke value as a plain string.
fn js_error_to_string(err: JsValue) -> String {
    err.as_string()
        .or_else(|| js_sys::JSON::stringify(&err).ok().map(String::from))
        .unwrap_or_else(|| "unknown backend error".to_string())
}

// Re-export all public items
pub use todo::*;
