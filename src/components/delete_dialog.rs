//! Confirmation dialog shown before any row delete.

use leptos::prelude::*;

/// Modal asking the user to confirm a destructive delete.
///
/// The backdrop cancels like the Cancel button, except while the delete
/// request is in flight, when both are inert.
#[component]
pub fn DeleteDialog(
    /// Display name of the record about to be removed.
    title: String,
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let message =
        format!("Are you sure you want to delete \"{title}\"? This action cannot be undone.");
    view! {
        <div
            class="dialog-backdrop"
            on:click=move |_| {
                if !busy.get_untracked() {
                    on_cancel.run(());
                }
            }
        >
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2 class="dialog__title">"Confirm Deletion"</h2>
                <p class="dialog__message">{message}</p>
                {move || error.get().map(|msg| view! { <p class="dialog__error">{msg}</p> })}
                <div class="dialog__actions">
                    <button
                        class="btn"
                        disabled=move || busy.get()
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {move || if busy.get() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
