//! Signed report list.
//!
//! Reports ride the service's legacy order schema: each carries product
//! lines with quantities and unit prices alongside the incident reference
//! and signature fields, and the edit form keeps those lines editable.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use leptos::prelude::*;

use crate::components::action_menu::{ActionMenu, MenuPosition, position_from_event};
use crate::components::delete_dialog::DeleteDialog;
use crate::components::feedback::{EmptyState, ErrorState, LoadingState, StatusBadge};
use crate::components::form::{SelectField, TextArea, TextField};
use crate::components::paginator::Paginator;
use crate::components::shell::Shell;
use crate::net::api;
use crate::net::types::{IncidentRef, Report, ReportDraft, ReportProductDraft, ReportUpdate};
use crate::state::auth::{AuthState, NOT_AUTHENTICATED};
use crate::state::collection::{Collection, PAGE_SIZE, filter_rows, page_slice, total_pages};
use crate::util::export::{csv_document, download_csv};
use crate::util::format::{format_date, full_name, truncate_chars};

const SIGNATURE_OPTIONS: [(&str, &str); 3] =
    [("SHA256", "SHA256"), ("SHA512", "SHA512"), ("MD5", "MD5")];

const STATUS_OPTIONS: [(&str, &str); 4] = [
    ("pending", "Pending"),
    ("processing", "Processing"),
    ("completed", "Completed"),
    ("canceled", "Canceled"),
];

const CSV_HEADER: [&str; 6] = ["Incident", "Content", "Signed", "Signature", "Status", "Created"];

#[derive(Clone, PartialEq)]
enum Pane {
    List,
    Add,
    Edit(Report),
}

fn search_fields(report: &Report) -> Vec<String> {
    vec![
        report.content.clone().unwrap_or_default(),
        report.incident.as_ref().and_then(IncidentRef::title).unwrap_or_default().to_owned(),
        report.signed.clone().unwrap_or_default(),
        report.signature.clone().unwrap_or_default(),
        report.note.clone(),
        orderer_name(report),
    ]
}

/// Incident column text: the populated title, a bare reference id, or a dash.
fn incident_label(report: &Report) -> String {
    match &report.incident {
        Some(IncidentRef::Embedded(summary)) if !summary.title.is_empty() => summary.title.clone(),
        Some(IncidentRef::Id(id)) if !id.is_empty() => id.clone(),
        _ => "—".to_owned(),
    }
}

fn orderer_name(report: &Report) -> String {
    match &report.ordered_by {
        Some(user) => full_name(&user.firstname, &user.lastname),
        None => "—".to_owned(),
    }
}

/// Name to show in the delete confirmation.
fn display_title(report: &Report) -> String {
    let incident = incident_label(report);
    if incident != "—" {
        return incident;
    }
    match report.content.as_ref().filter(|c| !c.trim().is_empty()) {
        Some(content) => truncate_chars(content, 40),
        None => report.id.clone(),
    }
}

fn csv_rows(rows: &[Report]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            vec![
                incident_label(row),
                row.content.clone().unwrap_or_default(),
                row.signed.clone().unwrap_or_default(),
                row.signature.clone().unwrap_or_default(),
                row.status.clone(),
                format_date(&row.created_at),
            ]
        })
        .collect()
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let collection: Collection<Report> = Collection::new();

    Effect::new(move || {
        collection.track_reload();
        let Some(token) = auth.get_untracked().token().map(str::to_owned) else {
            collection.resolve(Err(NOT_AUTHENTICATED.to_owned()));
            return;
        };
        collection.begin_load();
        leptos::task::spawn_local(async move {
            let outcome = api::get_reports(&token).await;
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
        download_csv("reports.csv", &csv_document(&CSV_HEADER, &csv_rows(&rows)));
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
            match api::delete_report(&token, &id).await {
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
        <Shell title="Reports">
            {move || match pane.get() {
                Pane::Add => view! { <ReportAddForm on_done=close_pane/> }.into_any(),
                Pane::Edit(report) => {
                    view! { <ReportEditForm report=report on_done=close_pane/> }.into_any()
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
                                "Add Report"
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
                                    "No reports filed yet."
                                } else {
                                    "No reports match your search."
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
                                            <th>"Incident"</th>
                                            <th>"Content"</th>
                                            <th>"Signed"</th>
                                            <th>"Signature"</th>
                                            <th>"Status"</th>
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
                                                        <td>{incident_label(&row)}</td>
                                                        <td>
                                                            {truncate_chars(
                                                                row.content.as_deref().unwrap_or(""),
                                                                60,
                                                            )}
                                                        </td>
                                                        <td>
                                                            {row
                                                                .signed
                                                                .clone()
                                                                .unwrap_or_else(|| "—".to_owned())}
                                                        </td>
                                                        <td>
                                                            {row
                                                                .signature
                                                                .clone()
                                                                .unwrap_or_else(|| "—".to_owned())}
                                                        </td>
                                                        <td>
                                                            <StatusBadge status=row.status.clone()/>
                                                        </td>
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
fn ReportAddForm(on_done: Callback<bool>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let incident_id = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let signed = RwSignal::new(String::new());
    let signature = RwSignal::new("SHA256".to_owned());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let saved = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let incident_value = incident_id.get().trim().to_owned();
        let content_value = content.get().trim().to_owned();
        if incident_value.is_empty() || content_value.is_empty() {
            error.set(Some("Incident id and content are required".to_owned()));
            return;
        }
        let Some(token) = auth.get_untracked().token().map(str::to_owned) else {
            error.set(Some(NOT_AUTHENTICATED.to_owned()));
            return;
        };
        let draft = ReportDraft {
            incident_id: incident_value,
            content: content_value,
            signed: signed.get().trim().to_owned(),
            signature: signature.get(),
        };
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::create_report(&token, &draft).await {
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
                <h2 class="record-form__title">"Add New Report"</h2>
            </div>
            <Show
                when=move || !saved.get()
                fallback=|| {
                    view! {
                        <p class="record-form__success">"Report created successfully!"</p>
                    }
                }
            >
                <form class="record-form__body" on:submit=on_submit>
                    <TextField label="Incident ID" value=incident_id placeholder="Incident object id"/>
                    <TextArea label="Content" value=content/>
                    <TextField label="Signed By" value=signed placeholder="Investigator name"/>
                    <SelectField
                        label="Signature Type"
                        value=signature
                        options=SIGNATURE_OPTIONS.to_vec()
                    />
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

/// One editable product line in the report edit form.
#[derive(Clone, Copy)]
struct ProductRow {
    product_id: RwSignal<String>,
    quantity: RwSignal<String>,
    unit_price: RwSignal<String>,
}

impl ProductRow {
    fn new(product_id: &str, quantity: f64, unit_price: f64) -> Self {
        Self {
            product_id: RwSignal::new(product_id.to_owned()),
            quantity: RwSignal::new(quantity.to_string()),
            unit_price: RwSignal::new(unit_price.to_string()),
        }
    }

    fn blank() -> Self {
        Self::new("", 1.0, 0.0)
    }

    fn to_draft(self) -> ReportProductDraft {
        ReportProductDraft {
            product_id: self.product_id.get_untracked().trim().to_owned(),
            quantity: self.quantity.get_untracked().trim().parse().unwrap_or(0.0),
            unit_price: self.unit_price.get_untracked().trim().parse().unwrap_or(0.0),
        }
    }
}

#[component]
fn ReportEditForm(report: Report, on_done: Callback<bool>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let id = report.id.clone();
    let note = RwSignal::new(report.note.clone());
    let status = RwSignal::new(report.status.clone());
    let initial_rows: Vec<ProductRow> = if report.products.is_empty() {
        vec![ProductRow::blank()]
    } else {
        report
            .products
            .iter()
            .map(|p| ProductRow::new(&p.product_id, p.quantity, p.unit_price))
            .collect()
    };
    let rows = RwSignal::new(initial_rows);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let saved = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let products: Vec<ReportProductDraft> =
            rows.get_untracked().into_iter().map(ProductRow::to_draft).collect();
        if products.iter().any(|p| p.product_id.is_empty()) {
            error.set(Some("Every product row needs a product id".to_owned()));
            return;
        }
        let Some(token) = auth.get_untracked().token().map(str::to_owned) else {
            error.set(Some(NOT_AUTHENTICATED.to_owned()));
            return;
        };
        let update = ReportUpdate {
            note: note.get().trim().to_owned(),
            status: status.get(),
            products,
        };
        let id = id.clone();
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::update_report(&token, &id, &update).await {
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
                <h2 class="record-form__title">"Edit Report"</h2>
            </div>
            <Show
                when=move || !saved.get()
                fallback=|| {
                    view! {
                        <p class="record-form__success">"Report updated successfully!"</p>
                    }
                }
            >
                <form class="record-form__body" on:submit=on_submit.clone()>
                    <SelectField label="Status" value=status options=STATUS_OPTIONS.to_vec()/>
                    <TextArea
                        label="Note"
                        value=note
                        placeholder="Add any notes about this report"
                        rows=4
                    />

                    <div class="product-rows">
                        <div class="product-rows__head">
                            <span class="field__label">"Products"</span>
                            <button
                                type="button"
                                class="btn btn--small"
                                on:click=move |_| rows.update(|list| list.push(ProductRow::blank()))
                            >
                                "Add Product"
                            </button>
                        </div>
                        {move || {
                            let count = rows.with(Vec::len);
                            rows.get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, row)| {
                                    view! {
                                        <div class="product-rows__card">
                                            <div class="product-rows__card-head">
                                                <span class="product-rows__name">
                                                    {format!("Product #{}", index + 1)}
                                                </span>
                                                {(count > 1)
                                                    .then(|| {
                                                        view! {
                                                            <button
                                                                type="button"
                                                                class="btn btn--small btn--danger"
                                                                on:click=move |_| {
                                                                    rows.update(|list| {
                                                                        list.remove(index);
                                                                    });
                                                                }
                                                            >
                                                                "Remove"
                                                            </button>
                                                        }
                                                    })}
                                            </div>
                                            <div class="record-form__row">
                                                <TextField label="Product ID" value=row.product_id/>
                                                <TextField
                                                    label="Quantity"
                                                    value=row.quantity
                                                    input_type="number"
                                                />
                                                <TextField
                                                    label="Unit Price"
                                                    value=row.unit_price
                                                    input_type="number"
                                                />
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>

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
