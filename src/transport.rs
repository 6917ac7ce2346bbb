//! HTTP Transport
//!
//! Every backend call goes through [`Transport::send`], which normalizes
//! failures into [`ApiError`].

use std::future::Future;

use async_trait::async_trait;
use futures::future::{self, Either};
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, AbortSignal, Request, RequestInit, Response};

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// A single backend call, path relative to the API base
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    /// Success is decided by status alone; the body is never parsed
    pub discard_body: bool,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
            discard_body: false,
        }
    }

    pub fn post(path: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body,
            discard_body: false,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
            discard_body: false,
        }
    }

    pub fn discard_body(mut self) -> Self {
        self.discard_body = true;
        self
    }
}

/// Backend seam; the browser uses [`FetchTransport`], tests use a mock.
#[async_trait(?Send)]
pub trait Transport {
    /// Parsed JSON body, or `Value::Null` when `discard_body` is set.
    async fn send(&self, request: ApiRequest) -> ApiResult<Value>;
}

/// `window.fetch` transport with an optional abort-on-timeout
pub struct FetchTransport {
    base: String,
    timeout_ms: Option<u32>,
}

impl FetchTransport {
    pub fn new(base: impl Into<String>, timeout_ms: Option<u32>) -> Self {
        Self {
            base: base.into(),
            timeout_ms,
        }
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }

    async fn fetch(&self, request: &ApiRequest, signal: Option<&AbortSignal>) -> ApiResult<Value> {
        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(&body.to_string()));
        }
        if let Some(signal) = signal {
            init.set_signal(Some(signal));
        }

        let req = Request::new_with_str_and_init(&self.url(&request.path), &init).map_err(js_error)?;
        if request.body.is_some() {
            req.headers()
                .set("Content-Type", "application/json")
                .map_err(js_error)?;
        }

        let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".into()))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        check_status(response.status())?;
        if request.discard_body {
            return Ok(Value::Null);
        }

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        let text = text
            .as_string()
            .ok_or_else(|| ApiError::Decode("body is not text".into()))?;
        decode_body(&text)
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        let Some(timeout_ms) = self.timeout_ms else {
            return self.fetch(&request, None).await;
        };

        let controller = AbortController::new().map_err(js_error)?;
        let signal = controller.signal();
        race_deadline(
            self.fetch(&request, Some(&signal)),
            TimeoutFuture::new(timeout_ms),
            timeout_ms,
            || controller.abort(),
        )
        .await
    }
}

/// Resolve `request` unless `deadline` fires first; `on_expire` runs only then
async fn race_deadline<T>(
    request: impl Future<Output = ApiResult<T>>,
    deadline: impl Future<Output = ()>,
    timeout_ms: u32,
    on_expire: impl FnOnce(),
) -> ApiResult<T> {
    futures::pin_mut!(request);
    futures::pin_mut!(deadline);

    match future::select(request, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            on_expire();
            Err(ApiError::Transport(format!("timed out after {} ms", timeout_ms)))
        }
    }
}

/// Any non-2xx status is a failed request
fn check_status(status: u16) -> ApiResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::RequestFailed { status })
    }
}

/// Parse a 2xx body; anything that is not JSON is a decode error
pub fn decode_body(text: &str) -> ApiResult<Value> {
    serde_json::from_str(text).map_err(ApiError::from)
}

pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Transport(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
