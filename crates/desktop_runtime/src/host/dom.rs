#[cfg(target_arch = "wasm32")]
use desktop_app_contract::window_primary_input_dom_id;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::model::{AppId, Viewport};

// Used off the browser, where no window exists to measure.
const FALLBACK_VIEWPORT: Viewport = Viewport { w: 1280, h: 800 };

pub(super) fn focus_window_input(app_id: AppId) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        // Deferred so the window body has mounted before lookup.
        let callback = Closure::once_into_js(move || {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let Some(element) = document.get_element_by_id(&window_primary_input_dom_id(app_id))
            else {
                return;
            };
            if let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() {
                let _ = element.focus();
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = app_id;
}

pub(super) fn viewport() -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return FALLBACK_VIEWPORT;
        };
        let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>, fallback| {
            value
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(fallback)
        };
        Viewport {
            w: dimension(window.inner_width(), FALLBACK_VIEWPORT.w),
            h: dimension(window.inner_height(), FALLBACK_VIEWPORT.h),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        FALLBACK_VIEWPORT
    }
}
