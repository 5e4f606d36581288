//! DOM interop for browser host adapters.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    fn js_error(context: &str, err: JsValue) -> String {
        format!("{context}: {}", err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }

    pub async fn open_external_url(url: &str) -> Result<(), String> {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        window
            .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
            .map_err(|err| js_error("window.open failed", err))?;
        Ok(())
    }

    pub async fn write_clipboard_text(text: &str) -> Result<(), String> {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        let navigator = window.navigator();
        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(|err| js_error("navigator.clipboard unavailable", err))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err("navigator.clipboard unavailable".to_string());
        }
        let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .map_err(|err| js_error("clipboard.writeText unavailable", err))?
            .dyn_into::<js_sys::Function>()
            .map_err(|err| js_error("clipboard.writeText is not callable", err))?;
        let promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|err| js_error("clipboard.writeText failed", err))?
            .dyn_into::<js_sys::Promise>()
            .map_err(|err| js_error("clipboard.writeText returned no promise", err))?;
        JsFuture::from(promise)
            .await
            .map_err(|err| js_error("clipboard write rejected", err))?;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{open_external_url, write_clipboard_text};

#[cfg(not(target_arch = "wasm32"))]
pub async fn open_external_url(_url: &str) -> Result<(), String> {
    Err("external urls are only available when compiled for wasm32".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn write_clipboard_text(_text: &str) -> Result<(), String> {
    Err("clipboard is only available when compiled for wasm32".to_string())
}
