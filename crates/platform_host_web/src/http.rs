//! `fetch`-backed [`HttpService`] implementation.

use platform_host::{FormField, HttpFuture, HttpService};
use serde_json::Value;

#[cfg(target_arch = "wasm32")]
mod imp {
    use js_sys::Promise;
    use platform_host::FormField;
    use serde_json::Value;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{FormData, Request, RequestInit, Response};

    fn js_error_to_string(err: JsValue) -> String {
        if let Some(text) = err.as_string() {
            return text;
        }
        if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
            if let Some(text) = message.as_string() {
                return text;
            }
        }
        format!("{err:?}")
    }

    async fn await_promise(promise: Promise) -> Result<JsValue, String> {
        JsFuture::from(promise).await.map_err(js_error_to_string)
    }

    async fn send(request: Request) -> Result<Value, String> {
        let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(js_error_to_string)?;
        let response: Response = await_promise(window.fetch_with_request(&request))
            .await?
            .dyn_into()
            .map_err(js_error_to_string)?;
        if !response.ok() {
            return Err(format!(
                "request failed with status {}: {}",
                response.status(),
                response.url()
            ));
        }
        let body = await_promise(response.json().map_err(js_error_to_string)?).await?;
        serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())
    }

    pub async fn get_json(url: &str) -> Result<Value, String> {
        let init = RequestInit::new();
        init.set_method("GET");
        let request = Request::new_with_str_and_init(url, &init).map_err(js_error_to_string)?;
        send(request).await
    }

    pub async fn post_form(url: &str, fields: &[FormField]) -> Result<Value, String> {
        let form = FormData::new().map_err(js_error_to_string)?;
        for field in fields {
            form.append_with_str(&field.name, &field.value)
                .map_err(js_error_to_string)?;
        }
        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&form);
        let request = Request::new_with_str_and_init(url, &init).map_err(js_error_to_string)?;
        send(request).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use platform_host::FormField;
    use serde_json::Value;

    fn unsupported() -> String {
        "Browser fetch is only available when compiled for wasm32".to_string()
    }

    pub async fn get_json(_url: &str) -> Result<Value, String> {
        Err(unsupported())
    }

    pub async fn post_form(_url: &str, _fields: &[FormField]) -> Result<Value, String> {
        Err(unsupported())
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser HTTP adapter backed by `window.fetch`.
///
/// Every request asks for JSON; non-2xx responses and undecodable bodies are errors.
pub struct WebHttpService;

impl HttpService for WebHttpService {
    fn get_json<'a>(&'a self, url: &'a str) -> HttpFuture<'a, Result<Value, String>> {
        Box::pin(async move { imp::get_json(url).await })
    }

    fn post_form<'a>(
        &'a self,
        url: &'a str,
        fields: &'a [FormField],
    ) -> HttpFuture<'a, Result<Value, String>> {
        Box::pin(async move { imp::post_form(url, fields).await })
    }
}
