//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands. Calls go through the [`Bridge`]
//! trait so the controller can run against a scripted bridge in tests.

mod todo;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::error::{remote_message, ViewError};

pub use todo::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Channel for named remote calls to the host
#[async_trait(?Send)]
pub trait Bridge {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, ViewError>;
}

/// Bridge backed by `window.__TAURI__.core.invoke`
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriBridge;

impl TauriBridge {
    /// `Some` once the Tauri global API has been injected
    pub fn locate() -> Option<Self> {
        tauri_core_ready().then_some(TauriBridge)
    }
}

#[async_trait(?Send)]
impl Bridge for TauriBridge {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value, ViewError> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let js_args = args.serialize(&serializer).map_err(|e| ViewError::codec(command, e))?;
        let result = invoke(command, js_args)
            .await
            .map_err(|e| ViewError::RemoteCall(describe_js_error(&e)))?;
        if result.is_undefined() || result.is_null() {
            return Ok(Value::Null);
        }
        serde_wasm_bindgen::from_value(result).map_err(|e| ViewError::codec(command, e))
    }
}

fn tauri_core_ready() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    ["__TAURI__", "core", "invoke"]
        .iter()
        .try_fold(JsValue::from(window), |target, key| {
            js_sys::Reflect::get(&target, &JsValue::from_str(key))
                .ok()
                .filter(|value| !value.is_undefined() && !value.is_null())
        })
        .is_some_and(|invoke| invoke.is_function())
}

/// Host rejections are either a plain string or an object with `message`.
fn describe_js_error(err: &JsValue) -> String {
    remote_message(&js_error_value(err))
}

// `Error.message` is not enumerable, so it is read before the generic conversion
fn js_error_value(err: &JsValue) -> Value {
    if let Some(message) = err.as_string() {
        return Value::String(message);
    }
    if let Some(message) = js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
    {
        return serde_json::json!({ "message": message });
    }
    serde_wasm_bindgen::from_value(err.clone()).unwrap_or_else(|_| Value::String(format!("{:?}", err)))
}
