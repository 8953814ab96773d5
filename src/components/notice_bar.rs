//! Notice Bar Component
//!
//! Transient outcome messages, auto-dismissed after a short delay.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::{use_app_context, NoticeKind};

/// How long a notice stays on screen
const NOTICE_DISMISS_MS: u32 = 2000;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = use_app_context();

    // Restart the dismiss timer whenever a new notice lands.
    let pending: StoredValue<Option<Timeout>, LocalStorage> = StoredValue::new_local(None);
    Effect::new(move |_| {
        if ctx.notice.get().is_some() {
            let timeout = Timeout::new(NOTICE_DISMISS_MS, move || ctx.dismiss());
            pending.update_value(|slot| {
                if let Some(previous) = slot.replace(timeout) {
                    previous.cancel();
                }
            });
        }
    });

    view! {
        {move || ctx.notice.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice success",
                NoticeKind::Error => "notice error",
                NoticeKind::Info => "notice info",
            };
            view! { <div class=class role="status">{notice.text}</div> }
        })}
    }
}
