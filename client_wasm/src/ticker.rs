//! Fixed-interval timer over `window.setInterval`

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Repeating timer. Stopping is idempotent.
#[derive(Default)]
pub struct Ticker {
    handle: Option<i32>,
    // Stays alive after stop so a callback may stop its own ticker
    callback: Option<Closure<dyn FnMut()>>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `tick` every `period_ms` until stopped
    pub fn start(&mut self, period_ms: u32, tick: impl FnMut() + 'static) -> Result<(), JsValue> {
        self.stop();
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;

        let callback = Closure::<dyn FnMut()>::new(tick);
        let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            timeout,
        )?;

        self.handle = Some(handle);
        self.callback = Some(callback);
        log::debug!("ticker started every {period_ms} ms");
        Ok(())
    }

    /// Cancel the interval; no further ticks fire
    pub fn stop(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(handle);
        }
        log::debug!("ticker stopped");
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
