//! Floating per-row action menu anchored to the trigger button.
//!
//! DESIGN
//! ======
//! The menu renders in a fixed-position layer under an invisible backdrop.
//! Pages keep at most one open menu in a signal holding the row id and the
//! anchor position computed from the trigger's bounding rect, so opening a
//! second menu replaces the first and a backdrop click closes it.

#[cfg(test)]
#[path = "action_menu_test.rs"]
mod action_menu_test;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast as _;

/// Width the menu is laid out at, used to keep it inside the viewport.
pub const MENU_WIDTH: f64 = 160.0;

/// Viewport coordinates for the top-left corner of an open menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuPosition {
    pub top: f64,
    pub left: f64,
}

/// Keeps a menu of `MENU_WIDTH` fully visible in a viewport `viewport` wide.
pub fn clamp_menu_left(left: f64, viewport: f64) -> f64 {
    left.min(viewport - MENU_WIDTH).max(0.0)
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(f64::INFINITY)
}

/// Menu position just below the element the click landed on.
pub fn position_from_event(ev: &MouseEvent) -> MenuPosition {
    let rect = ev
        .current_target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|el| el.get_bounding_client_rect());
    match rect {
        Some(rect) => MenuPosition {
            top: rect.bottom() + 5.0,
            left: clamp_menu_left(rect.left(), viewport_width()),
        },
        None => MenuPosition { top: 0.0, left: 0.0 },
    }
}

/// Row action menu with Edit and Delete entries plus an optional View.
///
/// Every entry closes the menu before running its action so a handler that
/// opens a dialog never races the backdrop.
#[component]
pub fn ActionMenu(
    position: MenuPosition,
    #[prop(optional)] on_view: Option<Callback<()>>,
    on_edit: Callback<()>,
    on_delete: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="menu-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="action-menu"
                style:top=format!("{}px", position.top)
                style:left=format!("{}px", position.left)
                on:click=|ev| ev.stop_propagation()
            >
                {on_view.map(|view_action| {
                    view! {
                        <button
                            class="action-menu__item"
                            on:click=move |_| {
                                on_close.run(());
                                view_action.run(());
                            }
                        >
                            "View"
                        </button>
                    }
                })}
                <button
                    class="action-menu__item"
                    on:click=move |_| {
                        on_close.run(());
                        on_edit.run(());
                    }
                >
                    "Edit"
                </button>
                <button
                    class="action-menu__item action-menu__item--danger"
                    on:click=move |_| {
                        on_close.run(());
                        on_delete.run(());
                    }
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
