//! Summary Card Component
//!
//! Selected tests with the running total.

use billing_core::TestItem;
use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn SummaryCard() -> impl IntoView {
    let ctx = use_app_context();

    let selected = Memo::new(move |_| ctx.store.with(|state| state.selected_tests()));
    let total = Memo::new(move |_| ctx.store.with(|state| state.total()));

    let clear_all = move |_| {
        ctx.store.update(|state| state.clear_selection());
        ctx.info("All tests deselected");
    };

    view! {
        <section class="card summary-card">
            <div class="card-header">
                <h2>"Selected Tests"</h2>
                <Show when=move || !selected.get().is_empty()>
                    <button class="clear-all-btn" on:click=clear_all>"Clear All"</button>
                </Show>
            </div>

            <Show
                when=move || !selected.get().is_empty()
                fallback=|| view! { <p class="empty-state">"No tests selected"</p> }
            >
                <ul class="selected-list">
                    <For
                        each=move || selected.get()
                        key=|test| format!("{}:{}:{}", test.id, test.name, test.price)
                        children=|test: TestItem| {
                            let price = test.price;
                            view! {
                                <li class="selected-row">
                                    <span class="selected-name">{test.name}</span>
                                    <span class="selected-price">{format!("₹{price}")}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>

            <div class="summary-total">
                "Total: "
                <span class="total-amount">{move || format!("₹{}", total.get())}</span>
            </div>
        </section>
    }
}
