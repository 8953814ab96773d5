//! MediBill Frontend App
//!
//! Main application component: state wiring, projection and layout.

use billing_core::{project, BillingStore, KeyValueStorage, SortMode};
use leptos::prelude::*;

use crate::components::{
    CustomTestForm, NoticeBar, SearchBar, SortSelector, SummaryCard, TestList,
};
use crate::context::{AppContext, Notice};
use crate::storage::BrowserStorage;

/// Record key for the dark mode preference
const THEME_KEY: &str = "isDarkMode";

#[component]
pub fn App() -> impl IntoView {
    let store = RwSignal::new(BillingStore::load(BrowserStorage::new()));
    let (search_query, set_search_query) = signal(String::new());
    let (sort_mode, set_sort_mode) = signal(SortMode::Default);
    let (dark_mode, set_dark_mode) = signal(load_theme());
    let (notice, set_notice) = signal(Option::<Notice>::None);

    provide_context(AppContext::new(store, (notice, set_notice)));

    // Recomputed on any change to catalog, selection, search text or sort
    // mode; components only ever see this projection, never a stale copy.
    let displayed = Memo::new(move |_| {
        store.with(|state| {
            project(
                state.catalog(),
                state.selection(),
                &search_query.get(),
                sort_mode.get(),
            )
        })
    });

    Effect::new(move |_| save_theme(dark_mode.get()));

    view! {
        <div class=move || if dark_mode.get() { "app dark" } else { "app" }>
            <header class="app-header">
                <div class="app-title">
                    <h1>"MediBill"</h1>
                    <p class="tagline">"Effortless Medical Test Billing"</p>
                </div>
                <button
                    class="theme-toggle"
                    title=move || {
                        if dark_mode.get() { "Switch to Light Mode" } else { "Switch to Dark Mode" }
                    }
                    on:click=move |_| set_dark_mode.update(|dark| *dark = !*dark)
                >
                    {move || if dark_mode.get() { "☀" } else { "☾" }}
                </button>
            </header>

            <NoticeBar />

            <div class="columns">
                <SummaryCard />

                <div class="catalog-column">
                    <CustomTestForm />

                    <section class="card available-tests">
                        <div class="card-header">
                            <h2>"Available Tests"</h2>
                            <SortSelector
                                current=sort_mode
                                on_change=move |mode| set_sort_mode.set(mode)
                            />
                        </div>
                        <SearchBar on_search=move |query| set_search_query.set(query) />
                        <TestList displayed=displayed />
                    </section>
                </div>
            </div>

            <footer class="app-footer">
                <p>"Effortless billing for every visit"</p>
            </footer>
        </div>
    }
}

fn load_theme() -> bool {
    match BrowserStorage::new().get(THEME_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or(false),
        _ => false,
    }
}

fn save_theme(dark: bool) {
    let raw = if dark { "true" } else { "false" };
    if let Err(err) = BrowserStorage::new().set(THEME_KEY, raw) {
        web_sys::console::warn_1(&format!("failed to save theme: {err}").into());
    }
}
