//! Sort Selector Component
//!
//! Sort mode dropdown for the available tests card.

use billing_core::SortMode;
use leptos::prelude::*;

/// Sort mode options
const SORT_MODES: &[(SortMode, &str)] = &[
    (SortMode::Default, "Default"),
    (SortMode::Name, "Sort by Name"),
    (SortMode::Price, "Sort by Price"),
];

#[component]
pub fn SortSelector(
    current: ReadSignal<SortMode>,
    on_change: impl Fn(SortMode) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="sort-select"
            prop:value=move || current.get().as_str()
            on:change=move |ev| on_change(SortMode::from_str(&event_target_value(&ev)))
        >
            {SORT_MODES.iter().map(|(mode, label)| {
                view! { <option value=mode.as_str()>{*label}</option> }
            }).collect_view()}
        </select>
    }
}
