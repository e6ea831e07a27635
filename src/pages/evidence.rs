//! Evidence list: files attached to incidents, with hash bookkeeping.
//!
//! Older records predate required fields upstream, so every searchable
//! field is optional and the row helpers have to be null-safe.

#[cfg(test)]
#[path = "evidence_test.rs"]
mod evidence_test;

use leptos::prelude::*;

use crate::components::action_menu::{ActionMenu, MenuPosition, position_from_event};
use crate::components::delete_dialog::DeleteDialog;
use crate::components::feedback::{EmptyState, ErrorState, LoadingState, StatusBadge};
use crate::components::form::{SelectField, TextArea, TextField};
use crate::components::paginator::Paginator;
use crate::components::shell::Shell;
use crate::net::api;
use crate::net::types::{Evidence, EvidenceDraft, EvidenceUpdate};
use crate::state::auth::{AuthState, NOT_AUTHENTICATED};
use crate::state::collection::{Collection, PAGE_SIZE, filter_rows, page_slice, total_pages};
use crate::util::export::{csv_document, download_csv};
use crate::util::format::{format_date, truncate_chars};

const FILE_TYPE_OPTIONS: [(&str, &str); 5] = [
    ("image", "Image"),
    ("video", "Video"),
    ("audio", "Audio"),
    ("document", "Document"),
    ("other", "Other"),
];

const CSV_HEADER: [&str; 6] =
    ["File URL", "File Type", "Description", "Hash", "Status", "Created"];

#[derive(Clone, PartialEq)]
enum Pane {
    List,
    Add,
    Edit(Evidence),
}

fn search_fields(evidence: &Evidence) -> Vec<String> {
    vec![
        evidence.title.clone().unwrap_or_default(),
        evidence.description.clone().unwrap_or_default(),
        evidence.file_type.clone().unwrap_or_default(),
        evidence.file_url.clone().unwrap_or_default(),
        evidence.hash.clone().unwrap_or_default(),
    ]
}

/// Name to show in the delete confirmation for a row that may have no title.
fn display_title(evidence: &Evidence) -> String {
    if let Some(title) = evidence.title.as_ref().filter(|t| !t.trim().is_empty()) {
        return title.clone();
    }
    if let Some(url) = evidence.file_url.as_ref().filter(|u| !u.trim().is_empty()) {
        return url.clone();
    }
    "Untitled evidence".to_owned()
}

fn csv_rows(rows: &[Evidence]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            vec![
                row.file_url.clone().unwrap_or_default(),
                row.file_type.clone().unwrap_or_default(),
                row.description.clone().unwrap_or_default(),
                row.hash.clone().unwrap_or_default(),
                row.status.clone(),
                format_date(&row.created_at),
            ]
        })
        .collect()
}

fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

#[component]
pub fn EvidencePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let collection: Collection<Evidence> = Collection::new();

    Effect::new(move || {
        collection.track_reload();
        let Some(token) = auth.get_untracked().token().map(str::to_owned) else {
            collection.resolve(Err(NOT_AUTHENTICATED.to_owned()));
            return;
        };
        collection.begin_load();
        leptos::task::spawn_local(async move {
            let outcome = api::get_evidence(&token).await;
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
        download_csv("evidence.csv", &csv_document(&CSV_HEADER, &csv_rows(&rows)));
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
            match api::delete_evidence(&token, &id).await {
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
        <Shell title="Evidence">
            {move || match pane.get() {
                Pane::Add => view! { <EvidenceAddForm on_done=close_pane/> }.into_any(),
                Pane::Edit(evidence) => {
                    view! { <EvidenceEditForm evidence=evidence on_done=close_pane/> }.into_any()
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
                                "Add Evidence"
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
                                    "No evidence submitted yet."
                                } else {
                                    "No evidence matches your search."
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
                                            <th>"File URL"</th>
                                            <th>"File Type"</th>
                                            <th>"Description"</th>
                                            <th>"Hash"</th>
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
                                                        <td>
                                                            {truncate_chars(
                                                                row.file_url.as_deref().unwrap_or("—"),
                                                                40,
                                                            )}
                                                        </td>
                                                        <td>
                                                            {row
                                                                .file_type
                                                                .clone()
                                                                .unwrap_or_else(|| "—".to_owned())}
                                                        </td>
                                                        <td>
                                                            {truncate_chars(
                                                                row.description.as_deref().unwrap_or(""),
                                                                60,
                                                            )}
                                                        </td>
                                                        <td class="data-table__mono">
                                                            {truncate_chars(
                                                                row.hash.as_deref().unwrap_or("—"),
                                                                16,
                                                            )}
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
                                    let view_id = id.clone();
                                    let edit_id = id.clone();
                                    let delete_id = id;
                                    view! {
                                        <ActionMenu
                                            position=position
                                            on_view=Callback::new(move |()| {
                                                let url = collection
                                                    .items
                                                    .with_untracked(|rows| {
                                                        rows.iter()
                                                            .find(|r| r.id == view_id)
                                                            .and_then(|r| r.file_url.clone())
                                                    });
                                                if let Some(url) = url {
                                                    open_in_new_tab(&url);
                                                }
                                            })
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
fn EvidenceAddForm(on_done: Callback<bool>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let incident_id = RwSignal::new(String::new());
    let file_url = RwSignal::new(String::new());
    let file_type = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let hash = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let saved = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let incident_value = incident_id.get().trim().to_owned();
        let url_value = file_url.get().trim().to_owned();
        let hash_value = hash.get().trim().to_owned();
        let description_value = description.get().trim().to_owned();
        if incident_value.is_empty()
            || url_value.is_empty()
            || hash_value.is_empty()
            || description_value.is_empty()
        {
            error.set(Some(
                "Incident id, file URL, hash, and description are required".to_owned(),
            ));
            return;
        }
        let Some(token) = auth.get_untracked().token().map(str::to_owned) else {
            error.set(Some(NOT_AUTHENTICATED.to_owned()));
            return;
        };
        let draft = EvidenceDraft {
            incident_id: incident_value,
            file_url: url_value,
            file_type: file_type.get(),
            description: description_value,
            hash: hash_value,
        };
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::create_evidence(&token, &draft).await {
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
                <h2 class="record-form__title">"Add Evidence"</h2>
            </div>
            <Show
                when=move || !saved.get()
                fallback=|| {
                    view! {
                        <p class="record-form__success">"Evidence submitted successfully!"</p>
                    }
                }
            >
                <form class="record-form__body" on:submit=on_submit>
                    <TextField label="Incident ID" value=incident_id placeholder="Owning incident id"/>
                    <TextField label="File URL" value=file_url placeholder="https://..."/>
                    <SelectField label="File Type" value=file_type options=FILE_TYPE_OPTIONS.to_vec()/>
                    <TextField label="Hash" value=hash placeholder="Content hash"/>
                    <TextArea label="Description" value=description/>
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
fn EvidenceEditForm(evidence: Evidence, on_done: Callback<bool>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let id = evidence.id.clone();
    let file_type = RwSignal::new(evidence.file_type.clone().unwrap_or_default());
    let description = RwSignal::new(evidence.description.clone().unwrap_or_default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let saved = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let type_value = file_type.get().trim().to_owned();
        let description_value = description.get().trim().to_owned();
        if type_value.is_empty() || description_value.is_empty() {
            error.set(Some("File type and description are required".to_owned()));
            return;
        }
        let Some(token) = auth.get_untracked().token().map(str::to_owned) else {
            error.set(Some(NOT_AUTHENTICATED.to_owned()));
            return;
        };
        let update = EvidenceUpdate { file_type: type_value, description: description_value };
        let id = id.clone();
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::update_evidence(&token, &id, &update).await {
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
                <h2 class="record-form__title">"Edit Evidence"</h2>
            </div>
            <Show
                when=move || !saved.get()
                fallback=|| {
                    view! {
                        <p class="record-form__success">"Evidence updated successfully!"</p>
                    }
                }
            >
                <form class="record-form__body" on:submit=on_submit.clone()>
                    <TextField label="File Type" value=file_type/>
                    <TextArea label="Description" value=description/>
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
