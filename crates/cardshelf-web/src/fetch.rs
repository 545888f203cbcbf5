#![forbid(unsafe_code)]

//! `window.fetch` as a [`Fetcher`].

use cardshelf_core::{Fetcher, LoadError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

pub struct DomFetcher {
    window: Window,
}

impl DomFetcher {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl Fetcher for DomFetcher {
    async fn fetch(&self, url: &str) -> Result<String, LoadError> {
        let transport = |err: JsValue| LoadError::Transport {
            url: url.to_owned(),
            reason: describe(&err),
        };

        let response = JsFuture::from(self.window.fetch_with_str(url))
            .await
            .map_err(transport)?
            .dyn_into::<Response>()
            .map_err(transport)?;
        if !response.ok() {
            return Err(LoadError::Status {
                url: url.to_owned(),
                status: response.status(),
            });
        }

        let body = JsFuture::from(response.text().map_err(transport)?)
            .await
            .map_err(transport)?;
        body.as_string().ok_or_else(|| LoadError::Decode {
            url: url.to_owned(),
            reason: "response body is not text".to_owned(),
        })
    }
}
