//! Search Bar Component
//!
//! Debounced search input with a clear button. Keystrokes update the raw
//! input immediately; the query itself applies only after a quiet period.

use leptos::prelude::*;

use crate::debounce::{DebouncedInput, DEFAULT_DEBOUNCE_MS};

#[component]
pub fn SearchBar(#[prop(into)] on_search: Callback<String>) -> impl IntoView {
    let (raw_input, set_raw_input) = signal(String::new());

    let debounce = DebouncedInput::new(DEFAULT_DEBOUNCE_MS);
    on_cleanup(move || debounce.cancel());

    view! {
        <div class="search-bar">
            <input
                type="text"
                class="search-input"
                placeholder="Search tests..."
                prop:value=move || raw_input.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_raw_input.set(value.clone());
                    debounce.submit(value, move |applied| on_search.run(applied));
                }
            />
            <Show when=move || !raw_input.get().is_empty()>
                <button
                    type="button"
                    class="clear-search-btn"
                    on:click=move |_| {
                        // The clear action applies immediately; a pending
                        // debounced update must not undo it.
                        debounce.cancel();
                        set_raw_input.set(String::new());
                        on_search.run(String::new());
                    }
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
