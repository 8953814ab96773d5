//! Application Context
//!
//! Shared state provided via Leptos Context API.

use billing_core::BillingStore;
use leptos::prelude::*;

use crate::storage::BrowserStorage;

/// Kind of a transient outcome message
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// A transient outcome message shown by the notice bar
#[derive(Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The billing state controller
    pub store: RwSignal<BillingStore<BrowserStorage>>,
    /// Latest notice - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Latest notice - write
    set_notice: WriteSignal<Option<Notice>>,
}

impl AppContext {
    pub fn new(
        store: RwSignal<BillingStore<BrowserStorage>>,
        notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>),
    ) -> Self {
        Self {
            store,
            notice: notice.0,
            set_notice: notice.1,
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(NoticeKind::Info, text.into());
    }

    /// Clear the current notice (called by the notice bar's timer)
    pub fn dismiss(&self) {
        self.set_notice.set(None);
    }

    fn push(&self, kind: NoticeKind, text: String) {
        self.set_notice.set(Some(Notice { kind, text }));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
