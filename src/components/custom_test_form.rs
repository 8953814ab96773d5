//! Custom Test Form Component
//!
//! Form for adding custom tests, with a live duplicate check.

use billing_core::TestDraft;
use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn CustomTestForm() -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());

    // Immediate feedback while typing; submission re-validates through the
    // catalog.
    let duplicate_hint = move || {
        let draft = TestDraft::new(name.get(), price.get());
        ctx.store.with(|state| draft.duplicates_existing(state.catalog()))
    };

    let add_test = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = TestDraft::new(name.get(), price.get());
        let (test_name, test_price) = match draft.validate() {
            Ok(validated) => validated,
            Err(err) => {
                ctx.error(err.to_string());
                return;
            }
        };

        match ctx
            .store
            .try_update(|state| state.add_test(&test_name, test_price))
        {
            Some(Ok(item)) => {
                ctx.success(format!("Test \"{}\" added", item.name));
                set_name.set(String::new());
                set_price.set(String::new());
            }
            Some(Err(err)) => ctx.error(err.to_string()),
            None => {}
        }
    };

    view! {
        <section class="card custom-test-form">
            <h2>"Add Custom Test"</h2>
            <form on:submit=add_test>
                <label for="test-name">"Test Name"</label>
                <input
                    id="test-name"
                    type="text"
                    placeholder="Enter test name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <Show when=duplicate_hint>
                    <p class="duplicate-hint">"A test with this name already exists"</p>
                </Show>
                <label for="test-price">"Price (₹)"</label>
                <input
                    id="test-price"
                    type="number"
                    placeholder="Enter price"
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
                <button type="submit">"Add Test"</button>
            </form>
        </section>
    }
}
