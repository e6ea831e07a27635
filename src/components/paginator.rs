//! Page controls under each list table.

use leptos::prelude::*;

/// Previous/Next buttons with numbered pages in between.
///
/// `page` is 1-based. An empty collection renders as "Page 1 of 1" with
/// both arrows disabled.
#[component]
pub fn Paginator(page: usize, total: usize, on_page: Callback<usize>) -> impl IntoView {
    view! {
        <div class="paginator">
            <span class="paginator__label">{format!("Page {page} of {}", total.max(1))}</span>
            <button
                class="paginator__btn"
                disabled={page <= 1}
                on:click=move |_| on_page.run(page.saturating_sub(1))
            >
                "Previous"
            </button>
            {(1..=total.max(1))
                .map(|n| {
                    view! {
                        <button
                            class="paginator__btn paginator__btn--page"
                            class:paginator__btn--active={n == page}
                            disabled={total == 0}
                            on:click=move |_| on_page.run(n)
                        >
                            {n}
                        </button>
                    }
                })
                .collect_view()}
            <button
                class="paginator__btn"
                disabled={total == 0 || page >= total}
                on:click=move |_| on_page.run(page + 1)
            >
                "Next"
            </button>
        </div>
    }
}
