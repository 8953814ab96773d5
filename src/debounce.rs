//! Debounced Input
//!
//! Coalesces rapid updates into one applied value after a quiet period.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Default quiet period before a search update applies
pub const DEFAULT_DEBOUNCE_MS: u32 = 300;

/// Timer-backed handle that applies only the latest submitted value once
/// input has been quiet for the configured delay.
///
/// The pending timer lives in arena storage, so the handle is `Copy` and
/// any copy can cancel it.
#[derive(Clone, Copy)]
pub struct DebouncedInput {
    delay_ms: u32,
    pending: StoredValue<Option<Timeout>, LocalStorage>,
}

impl DebouncedInput {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: StoredValue::new_local(None),
        }
    }

    /// Schedule `apply` for `value`, replacing any not-yet-fired update
    pub fn submit<F>(&self, value: String, apply: F)
    where
        F: FnOnce(String) + 'static,
    {
        let timeout = Timeout::new(self.delay_ms, move || apply(value));
        self.pending.update_value(|pending| {
            if let Some(previous) = pending.replace(timeout) {
                previous.cancel();
            }
        });
    }

    /// Drop any pending update (component teardown, or an immediate
    /// override such as the clear button)
    pub fn cancel(&self) {
        self.pending.update_value(|pending| {
            if let Some(previous) = pending.take() {
                previous.cancel();
            }
        });
    }
}
