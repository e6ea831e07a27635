//! Status filter popover for the list toolbars.

use leptos::prelude::*;

/// Popover with a status dropdown and Apply/Clear actions.
///
/// Edits are staged in a local signal and only land in `status` on Apply,
/// so dismissing the popover leaves the active filter untouched. An empty
/// selection means no filter.
#[component]
pub fn FilterPopover(
    status: RwSignal<Option<String>>,
    options: Vec<(&'static str, &'static str)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let pending = RwSignal::new(status.get_untracked().unwrap_or_default());
    view! {
        <div class="menu-backdrop" on:click=move |_| on_close.run(())>
            <div class="filter-popover" on:click=|ev| ev.stop_propagation()>
                <span class="field__label">"Status"</span>
                <select
                    class="field__input"
                    prop:value=move || pending.get()
                    on:change=move |ev| pending.set(event_target_value(&ev))
                >
                    <option value="">"All statuses"</option>
                    {options
                        .into_iter()
                        .map(|(val, text)| view! { <option value=val>{text}</option> })
                        .collect_view()}
                </select>
                <div class="filter-popover__actions">
                    <button
                        class="btn"
                        on:click=move |_| {
                            pending.set(String::new());
                            status.set(None);
                            on_close.run(());
                        }
                    >
                        "Clear"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| {
                            let value = pending.get_untracked();
                            status.set(if value.is_empty() { None } else { Some(value) });
                            on_close.run(());
                        }
                    >
                        "Apply"
                    </button>
                </div>
            </div>
        </div>
    }
}
