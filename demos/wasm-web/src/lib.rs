//! # Country Sampler for the browser
//!
//! A WebAssembly module that drives the country sampler from a web page.
//! The page owns the markup (input, spinner, error banner, card grid) and
//! calls into this handle on startup and on every keystroke.
//!
//! ## Build
//!
//! ```bash
//! wasm-pack build --target web --release
//! # outputs pkg/country_sampler_web_bg.wasm and glue JS
//! ```
//!
//! ## Usage
//!
//! ```typescript
//! import init, { CountrySampler } from "./pkg/country_sampler_web.js";
//!
//! await init();
//! const sampler = new CountrySampler();
//! const render = () => draw(JSON.parse(sampler.view_json()));
//! input.addEventListener("input", () => {
//!   sampler.input(input.value);
//!   input.value = sampler.input_text();
//!   render();
//! });
//! render();
//! await sampler.load();
//! render();
//! ```

use std::{cell::RefCell, rc::Rc};

use country_sampler::{render, AppState, CountriesClient};
use wasm_bindgen::prelude::*;

/// WASM-exported handle to one sampler session.
#[wasm_bindgen]
pub struct CountrySampler {
    client: CountriesClient,
    state: Rc<RefCell<AppState>>,
}

impl Default for CountrySampler {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl CountrySampler {
    /// Creates a session against the public REST Countries API.
    #[wasm_bindgen(constructor)]
    pub fn new() -> CountrySampler {
        CountrySampler {
            client: CountriesClient::new(),
            state: Rc::new(RefCell::new(AppState::new())),
        }
    }

    /// Creates a session against a mirror, e.g. a local fixture server.
    pub fn with_base_url(base_url: &str) -> CountrySampler {
        CountrySampler {
            client: CountriesClient::with_base_url(base_url),
            state: Rc::new(RefCell::new(AppState::new())),
        }
    }

    /// Fetches the country list. Only the first call does any work.
    ///
    /// Failures are not thrown; they show up in `error()` and `view_json()`.
    pub async fn load(&self) {
        if !self.state.borrow_mut().start_loading() {
            return;
        }
        let outcome = self.client.fetch_countries().await;
        self.state.borrow_mut().finish_loading(outcome);
    }

    /// Applies one edit of the count input.
    pub fn input(&self, raw: &str) {
        self.state.borrow_mut().input(raw);
    }

    /// Value the input element should show after the last edit.
    pub fn input_text(&self) -> String {
        self.state.borrow().input_text()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error().map(str::to_owned)
    }

    /// Serializes the current view:
    ///
    /// ```json
    /// {
    ///   "loading": false,
    ///   "error": null,
    ///   "input": "2",
    ///   "status": "Displaying: 2",
    ///   "cards": [
    ///     { "name": "Chile", "capital": "Santiago", "languages": ["Spanish"] },
    ///     { "name": "Kenya", "capital": "Nairobi", "languages": ["English", "Swahili"] }
    ///   ]
    /// }
    /// ```
    pub fn view_json(&self) -> Result<String, String> {
        let view = render::view(&self.state.borrow());
        serde_json::to_string(&view).map_err(|e| e.to_string())
    }
}
