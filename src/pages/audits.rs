//! Stock audit list: quantity checks recorded against products.

#[cfg(test)]
#[path = "audits_test.rs"]
mod audits_test;

use leptos::prelude::*;

use crate::components::action_menu::{ActionMenu, MenuPosition, position_from_event};
use crate::components::delete_dialog::DeleteDialog;
use crate::components::feedback::{EmptyState, ErrorState, LoadingState};
use crate::components::form::TextField;
use crate::components::paginator::Paginator;
use crate::components::shell::Shell;
use crate::net::api;
use crate::net::types::{Audit, AuditDraft, AuditUpdate};
use crate::state::auth::{AuthState, NOT_AUTHENTICATED};
use crate::state::collection::{Collection, PAGE_SIZE, filter_rows, page_slice, total_pages};
use crate::util::export::{csv_document, download_csv};
use crate::util::format::{format_date, format_naira, full_name};

const CSV_HEADER: [&str; 6] = ["Product", "Supplier", "Quantity", "Price", "Location", "Created"];

#[derive(Clone, PartialEq)]
enum Pane {
    List,
    Add,
    Edit(Audit),
}

fn search_fields(audit: &Audit) -> Vec<String> {
    let mut fields = vec![audit.location.clone()];
    if let Some(product) = &audit.product {
        fields.push(product.name.clone());
        fields.push(product.description.clone());
    }
    fields.push(supplier_name(audit));
    fields
}

/// Full name of the user who requested the audit, or a dash.
fn supplier_name(audit: &Audit) -> String {
    match &audit.user {
        Some(user) => full_name(&user.firstname, &user.lastname),
        None => "—".to_owned(),
    }
}

/// Quantity plus the product's unit, e.g. "40 kg".
fn quantity_label(audit: &Audit) -> String {
    if audit.quantity.is_empty() {
        return "—".to_owned();
    }
    match audit.product.as_ref().filter(|p| !p.unit.is_empty()) {
        Some(product) => format!("{} {}", audit.quantity, product.unit),
        None => audit.quantity.clone(),
    }
}

fn price_label(audit: &Audit) -> String {
    match &audit.product {
        Some(product) => format_naira(product.price),
        None => "—".to_owned(),
    }
}

/// Name to show in the delete confirmation.
fn display_title(audit: &Audit) -> String {
    if let Some(product) = audit.product.as_ref().filter(|p| !p.name.trim().is_empty()) {
        return product.name.clone();
    }
    if !audit.location.trim().is_empty() {
        return audit.location.clone();
    }
    audit.id.clone()
}

fn csv_rows(rows: &[Audit]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            vec![
                row.product.as_ref().map(|p| p.name.clone()).unwrap_or_default(),
                supplier_name(row),
                quantity_label(row),
                price_label(row),
                row.location.clone(),
                format_date(&row.created_at),
            ]
        })
        .collect()
}

#[component]
pub fn AuditsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let collection: Collection<Audit> = Collection::new();

    Effect::new(move || {
        collection.track_reload();
        let Some(token) = auth.get_untracked().token().map(str::to_owned) else {
            collection.resolve(Err(NOT_AUTHENTICATED.to_owned()));
            return;
        };
        collection.begin_load();
        leptos::task::spawn_local(async move {
            let outcome = api::get_audits(&token).await;
            collection.resolve(outcome.map_err(|err| err.to_string()));
        });
    });

    let pane = RwSignal::new(Pane::List);
    let menu = RwSignal::new(None::<(String, MenuPosition)>);
    let pending_delete = RwSignal::new(None::<(String, String)>);
    let delete_busy = RwSignal::new(false);
    let delete_error = RwSignal::new(None::<String>);

    let visible = move || {
        let term = collection.search.get();
        collection.items.with(|rows| filter_rows(rows, &term, search_fields))
    };

    let on_export = move |_| {
        let rows = visible();
        download_csv("audits.csv", &csv_document(&CSV_HEADER, &csv_rows(&rows)));
    };

    let close_pane = Callback::new(move |saved: bool| {
        pane.set(Pane::List);
        if saved {
            collection.request_reload();
        }
    });

    let on_delete_confirm = Callback::new(move |()| {
        let Some((id, _)) = pending_delete.get_untracked() else {
            return;
        };
        let Some(token) = auth.get_untracked().token().map(str::to_owned) else {
            delete_error.set(Some(NOT_AUTHENTICATED.to_owned()));
            return;
        };
        delete_busy.set(true);
        delete_error.set(None);
        leptos::task::spawn_local(async move {
            match api::delete_audit(&token, &id).await {
                Ok(()) => {
                    pending_delete.set(None);
                    collection.request_reload();
                }
                Err(err) => delete_error.set(Some(err.to_string())),
            }
            delete_busy.set(false);
        });
    });

    view! {
        <Shell title="Audits">
            {move || match pane.get() {
                Pane::Add => view! { <AuditAddForm on_done=close_pane/> }.into_any(),
                Pane::Edit(audit) => {
                    view! { <AuditEditForm audit=audit on_done=close_pane/> }.into_any()
                }
                Pane::List => {
                    view! {
                        <div class="toolbar">
                            <input
                                class="toolbar__search"
                                type="search"
                                placeholder="Search"
                                prop:value=move || collection.search.get()
                                on:input=move |ev| collection.set_search(event_target_value(&ev))
                            />
                            <div class="toolbar__spacer"></div>
                            <button class="btn" on:click=on_export>"Export CSV"</button>
                            <button class="btn btn--primary" on:click=move |_| pane.set(Pane::Add)>
                                "Add Audit"
                            </button>
                        </div>

                        {move || {
                            if collection.loading.get() {
                                return view! { <LoadingState/> }.into_any();
                            }
                            if let Some(message) = collection.error.get() {
                                return view! {
                                    <ErrorState
                                        message=message
                                        on_retry=Callback::new(move |()| collection.request_reload())
                                    />
                                }
                                    .into_any();
                            }
                            let rows = visible();
                            if rows.is_empty() {
                                let message = if collection.items.with(Vec::is_empty) {
                                    "No audits recorded yet."
                                } else {
                                    "No audits match your search."
                                };
                                return view! { <EmptyState message=message.to_owned()/> }
                                    .into_any();
                            }
                            let total = total_pages(rows.len(), PAGE_SIZE);
                            let page = collection.page.get();
                            let slice = page_slice(&rows, page, PAGE_SIZE);
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Product"</th>
                                            <th>"Supplier"</th>
                                            <th>"Quantity"</th>
                                            <th>"Price"</th>
                                            <th>"Location"</th>
                                            <th>"Created"</th>
                                            <th class="data-table__actions-head">"Action"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {slice
                                            .into_iter()
                                            .map(|row| {
                                                let row_id = row.id.clone();
                                                view! {
                                                    <tr>
                                                        <td>
                                                            {row
                                                                .product
                                                                .as_ref()
                                                                .map(|p| p.name.clone())
                                                                .unwrap_or_else(|| "—".to_owned())}
                                                        </td>
                                                        <td>{supplier_name(&row)}</td>
                                                        <td>{quantity_label(&row)}</td>
                                                        <td>{price_label(&row)}</td>
                                                        <td>{row.location.clone()}</td>
                                                        <td>{format_date(&row.created_at)}</td>
                                                        <td class="data-table__actions">
                                                            <button
                                                                class="data-table__menu-btn"
                                                                on:click=move |ev| {
                                                                    menu.set(
                                                                        Some((
                                                                            row_id.clone(),
                                                                            position_from_event(&ev),
                                                                        )),
                                                                    );
                                                                }
                                                            >
                                                                "⋮"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                                <Paginator
                                    page=page
                                    total=total
                                    on_page=Callback::new(move |p| collection.go_to_page(p, total))
                                />
                            }
                                .into_any()
                        }}

                        {move || {
                            menu.get()
                                .map(|(id, position)| {
                                    let edit_id = id.clone();
                                    let delete_id = id;
                                    view! {
                                        <ActionMenu
                                            position=position
                                            on_edit=Callback::new(move |()| {
                                                let row = collection
                                                    .items
                                                    .with_untracked(|rows| {
                                                        rows.iter().find(|r| r.id == edit_id).cloned()
                                                    });
                                                if let Some(row) = row {
                                                    pane.set(Pane::Edit(row));
                                                }
                                            })
                                            on_delete=Callback::new(move |()| {
                                                let row = collection
                                                    .items
                                                    .with_untracked(|rows| {
                                                        rows.iter().find(|r| r.id == delete_id).cloned()
                                                    });
                                                if let Some(row) = row {
                                                    delete_error.set(None);
                                                    pending_delete
                                                        .set(Some((row.id.clone(), display_title(&row))));
                                                }
                                            })
                                            on_close=Callback::new(move |()| menu.set(None))
                                        />
                                    }
                                })
                        }}

                        {move || {
                            pending_delete
                                .get()
                                .map(|(_, title)| {
                                    view! {
                                        <DeleteDialog
                                            title=title
                                            busy=delete_busy
                                            error=delete_error
                                            on_confirm=on_delete_confirm
                                            on_cancel=Callback::new(move |()| {
                                                pending_delete.set(None);
                                                delete_error.set(None);
                                            })
                                        />
                                    }
                                })
                        }}
                    }
                        .into_any()
                }
            }}
        </Shell>
    }
}

#[component]
fn AuditAddForm(on_done: Callback<bool>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let product_id = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let saved = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let product_value = product_id.get().trim().to_owned();
        let quantity_value = quantity.get().trim().to_owned();
        let location_value = location.get().trim().to_owned();
        if product_value.is_empty() || quantity_value.is_empty() || location_value.is_empty() {
            error.set(Some("Product id, quantity, and location are required".to_owned()));
            return;
        }
        let Some(token) = auth.get_untracked().token().map(str::to_owned) else {
            error.set(Some(NOT_AUTHENTICATED.to_owned()));
            return;
        };
        let draft = AuditDraft {
            product_id: product_value,
            quantity: quantity_value,
            location: location_value,
        };
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::create_audit(&token, &draft).await {
                Ok(()) => {
                    saved.set(true);
                    gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                    on_done.run(true);
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="record-form">
            <div class="record-form__head">
                <button
                    class="record-form__back"
                    disabled=move || busy.get()
                    on:click=move |_| on_done.run(false)
                >
                    "← Back"
                </button>
                <h2 class="record-form__title">"Add Audit"</h2>
            </div>
            <Show
                when=move || !saved.get()
                fallback=|| {
                    view! {
                        <p class="record-form__success">"Audit submitted successfully!"</p>
                    }
                }
            >
                <form class="record-form__body" on:submit=on_submit>
                    <TextField label="Product ID" value=product_id placeholder="Product object id"/>
                    <TextField label="Quantity" value=quantity placeholder="e.g. 40"/>
                    <TextField label="Location" value=location placeholder="e.g. Lagos warehouse"/>
                    {move || error.get().map(|msg| view! { <p class="record-form__error">{msg}</p> })}
                    <div class="record-form__actions">
                        <button
                            type="button"
                            class="btn"
                            disabled=move || busy.get()
                            on:click=move |_| on_done.run(false)
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

#[component]
fn AuditEditForm(audit: Audit, on_done: Callback<bool>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let id = audit.id.clone();
    let quantity = RwSignal::new(audit.quantity.clone());
    let location = RwSignal::new(audit.location.clone());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let saved = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let quantity_value = quantity.get().trim().to_owned();
        let location_value = location.get().trim().to_owned();
        if quantity_value.is_empty() || location_value.is_empty() {
            error.set(Some("Quantity and location are required".to_owned()));
            return;
        }
        let Some(token) = auth.get_untracked().token().map(str::to_owned) else {
            error.set(Some(NOT_AUTHENTICATED.to_owned()));
            return;
        };
        let update = AuditUpdate { quantity: quantity_value, location: location_value };
        let id = id.clone();
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::update_audit(&token, &id, &update).await {
                Ok(()) => {
                    saved.set(true);
                    gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                    on_done.run(true);
                }
                Err(err) => {
                    error.set(Some(err.to_string()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="record-form">
            <div class="record-form__head">
                <button
                    class="record-form__back"
                    disabled=move || busy.get()
                    on:click=move |_| on_done.run(false)
                >
                    "← Back"
                </button>
                <h2 class="record-form__title">"Edit Audit"</h2>
            </div>
            <Show
                when=move || !saved.get()
                fallback=|| {
                    view! {
                        <p class="record-form__success">"Audit updated successfully!"</p>
                    }
                }
            >
                <form class="record-form__body" on:submit=on_submit.clone()>
                    // Product is fixed once the audit exists.
                    <label class="field">
                        <span class="field__label">"Product"</span>
                        <input class="field__input" type="text" prop:value=display_title(&audit) disabled/>
                    </label>
                    <TextField label="Quantity" value=quantity/>
                    <TextField label="Location" value=location/>
                    {move || error.get().map(|msg| view! { <p class="record-form__error">{msg}</p> })}
                    <div class="record-form__actions">
                        <button
                            type="button"
                            class="btn"
                            disabled=move || busy.get()
                            on:click=move |_| on_done.run(false)
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}
