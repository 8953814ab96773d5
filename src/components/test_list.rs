//! Test List Component
//!
//! The projected catalog: checkbox selection, inline edit and delete.

use billing_core::{TestDraft, TestItem};
use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;

#[component]
pub fn TestList(displayed: Memo<Vec<TestItem>>) -> impl IntoView {
    view! {
        <Show
            when=move || !displayed.get().is_empty()
            fallback=|| view! { <p class="empty-state">"No tests available"</p> }
        >
            <ul class="test-list">
                <For
                    each=move || displayed.get()
                    // Name and price participate in the key so edited rows
                    // re-render.
                    key=|test| format!("{}:{}:{}", test.id, test.name, test.price)
                    children=move |test: TestItem| {
                        view! { <TestRow test=test /> }
                    }
                />
            </ul>
        </Show>
    }
}

/// A single test row with checkbox, inline edit and delete confirmation
#[component]
fn TestRow(test: TestItem) -> impl IntoView {
    let ctx = use_app_context();

    let id = test.id;
    let price = test.price;
    let name = test.name;

    let (editing, set_editing) = signal(false);
    let (edit_name, set_edit_name) = signal(String::new());
    let (edit_price, set_edit_price) = signal(String::new());

    let is_selected = move || ctx.store.with(|state| state.selection().contains(id));
    let toggle = move || ctx.store.update(|state| state.toggle_selected(id));

    let save_edit = move |_| {
        let draft = TestDraft::new(edit_name.get(), edit_price.get());
        let (new_name, new_price) = match draft.validate() {
            Ok(validated) => validated,
            Err(err) => {
                ctx.error(err.to_string());
                return;
            }
        };

        match ctx
            .store
            .try_update(|state| state.update_test(id, &new_name, new_price))
        {
            Some(Ok(_)) => {
                ctx.success("Test updated");
                set_editing.set(false);
            }
            Some(Err(err)) => ctx.error(err.to_string()),
            None => {}
        }
    };

    let delete = move |_: ()| {
        match ctx.store.try_update(|state| state.remove_test(id)) {
            Some(Ok(removed)) => ctx.success(format!("Test \"{}\" deleted", removed.name)),
            Some(Err(err)) => ctx.error(err.to_string()),
            None => {}
        }
    };

    view! {
        <li class=move || if is_selected() { "test-row selected" } else { "test-row" }>
            {move || if editing.get() {
                view! {
                    <div class="test-row-edit">
                        <input
                            type="text"
                            placeholder="Test name"
                            prop:value=move || edit_name.get()
                            on:input=move |ev| set_edit_name.set(event_target_value(&ev))
                        />
                        <input
                            type="number"
                            placeholder="Price (₹)"
                            prop:value=move || edit_price.get()
                            on:input=move |ev| set_edit_price.set(event_target_value(&ev))
                        />
                        <button class="save-btn" on:click=save_edit>"Save"</button>
                        <button class="cancel-btn" on:click=move |_| set_editing.set(false)>
                            "Cancel"
                        </button>
                    </div>
                }.into_any()
            } else {
                let label = name.clone();
                let edit_source = name.clone();
                let begin_edit = move |_| {
                    set_edit_name.set(edit_source.clone());
                    set_edit_price.set(price.to_string());
                    set_editing.set(true);
                };
                view! {
                    <div class="test-row-main">
                        <input
                            type="checkbox"
                            class="test-checkbox"
                            prop:checked=is_selected
                            on:change=move |_| toggle()
                        />
                        <span class="test-name" on:click=move |_| toggle()>{label}</span>
                        <span class="test-price">{format!("₹{price}")}</span>
                        <button class="edit-btn" on:click=begin_edit>"✎"</button>
                        <DeleteConfirmButton button_class="delete-btn" on_confirm=delete />
                    </div>
                }.into_any()
            }}
        </li>
    }
}
