//! `setInterval` timer owned by a Rust handle

use std::time::Duration;

use tracing::debug;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::Window;

/// A running page interval, cleared when dropped
#[derive(Debug)]
pub struct IntervalHandle {
    window: Window,
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl IntervalHandle {
    /// Call `callback` every `period`
    pub fn start<F>(window: &Window, period: Duration, callback: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let millis = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            millis,
        )?;
        debug!(id, millis, "Interval started");

        Ok(Self {
            window: window.clone(),
            id,
            _callback: callback,
        })
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.id);
        debug!(id = self.id, "Interval cleared");
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use wasm_bindgen_test::wasm_bindgen_test;

    use super::*;
    use crate::dom::{self, fixture::sleep};

    #[wasm_bindgen_test]
    async fn ticks_until_dropped() {
        let window = dom::window().unwrap();
        let ticks = Rc::new(Cell::new(0_u32));
        let counter = Rc::clone(&ticks);

        let handle = IntervalHandle::start(&window, Duration::from_millis(10), move || {
            counter.set(counter.get() + 1);
        })
        .unwrap();

        sleep(60).await;
        assert!(ticks.get() >= 2);

        drop(handle);
        let stopped_at = ticks.get();
        sleep(60).await;
        assert_eq!(ticks.get(), stopped_at);
    }
}
