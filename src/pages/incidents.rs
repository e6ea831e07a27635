//! Incident list: search, filter, paginate, and manage reported incidents.
//!
//! ARCHITECTURE
//! ============
//! The page owns one [`Collection`] bundle and derives its visible rows on
//! every render: substring search first, then the status filter, then the
//! page slice. Add and edit are full-pane forms that replace the table and
//! hand control back through an `on_done(saved)` callback; any saved
//! mutation requests a refetch rather than patching rows locally.

#[cfg(test)]
#[path = "incidents_test.rs"]
mod incidents_test;

use leptos::prelude::*;

use crate::components::action_menu::{ActionMenu, MenuPosition, position_from_event};
use crate::components::delete_dialog::DeleteDialog;
use crate::components::feedback::{EmptyState, ErrorState, LoadingState, StatusBadge};
use crate::components::filter_popover::FilterPopover;
use crate::components::form::{TextArea, TextField};
use crate::components::paginator::Paginator;
use crate::components::shell::Shell;
use crate::net::api;
use crate::net::types::{GeoPoint, Incident, IncidentDraft, IncidentUpdate};
use crate::state::auth::{AuthState, NOT_AUTHENTICATED};
use crate::state::collection::{Collection, PAGE_SIZE, filter_rows, page_slice, total_pages};
use crate::util::export::{csv_document, download_csv};
use crate::util::format::{format_date, truncate_chars};
use crate::util::validation::parse_list;

const STATUS_OPTIONS: [(&str, &str); 3] =
    [("open", "Open"), ("closed", "Closed"), ("resolved", "Resolved")];

const CSV_HEADER: [&str; 6] =
    ["Title", "Description", "Location", "Tags", "Status", "Created"];

/// What the content area is currently showing.
#[derive(Clone, PartialEq)]
enum Pane {
    List,
    Add,
    Edit(Incident),
}

fn search_fields(incident: &Incident) -> Vec<String> {
    let mut fields = vec![
        incident.title.clone(),
        incident.description.clone(),
        incident.status.clone(),
    ];
    fields.extend(incident.tags.iter().cloned());
    fields
}

/// "lat, lon" cell text; incidents without coordinates show a dash.
fn location_label(location: Option<&GeoPoint>) -> String {
    match location {
        Some(point) => format!("{}, {}", point.latitude, point.longitude),
        None => "—".to_owned(),
    }
}

/// Coordinate fields accept free text; blanks and junk become 0.0 the way
/// the service itself defaults them.
fn parse_coordinate(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

fn csv_rows(rows: &[Incident]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            vec![
                row.title.clone(),
                row.description.clone(),
                location_label(row.location.as_ref()),
                row.tags.join("; "),
                row.status.clone(),
                format_date(&row.created_at),
            ]
        })
        .collect()
}

#[component]
pub fn IncidentsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let collection: Collection<Incident> = Collection::new();

    // Fetch on mount and again whenever a mutation bumps the reload counter.
    Effect::new(move || {
        collection.track_reload();
        let Some(token) = auth.get_untracked().token().map(str::to_owned) else {
            collection.resolve(Err(NOT_AUTHENTICATED.to_owned()));
            return;
        };
        collection.begin_load();
        leptos::task::spawn_local(async move {
            let outcome = api::get_incidents(&token).await;
            collection.resolve(outcome.map_err(|err| err.to_string()));
        });
    });

    let pane = RwSignal::new(Pane::List);
    let status_filter = RwSignal::new(None::<String>);
    let show_filter = RwSignal::new(false);
    let menu = RwSignal::new(None::<(String, MenuPosition)>);
    let pending_delete = RwSignal::new(None::<(String, String)>);
    let delete_busy = RwSignal::new(false);
    let delete_error = RwSignal::new(None::<String>);

    let visible = move || {
        let term = collection.search.get();
        let rows = collection.items.with(|rows| filter_rows(rows, &term, search_fields));
        match status_filter.get() {
            Some(status) => rows
                .into_iter()
                .filter(|row| row.status.eq_ignore_ascii_case(&status))
                .collect(),
            None => rows,
        }
    };

    let on_export = move |_| {
        let rows = visible();
        download_csv("incidents.csv", &csv_document(&CSV_HEADER, &csv_rows(&rows)));
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
            match api::delete_incident(&token, &id).await {
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
        <Shell title="Incidents">
            {move || match pane.get() {
                Pane::Add => view! { <IncidentAddForm on_done=close_pane/> }.into_any(),
                Pane::Edit(incident) => {
                    view! { <IncidentEditForm incident=incident on_done=close_pane/> }.into_any()
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
                            <button
                                class="btn"
                                class:btn--engaged=move || status_filter.get().is_some()
                                on:click=move |_| show_filter.set(true)
                            >
                                "Filter"
                            </button>
                            <button class="btn" on:click=on_export>"Export CSV"</button>
                            <button class="btn btn--primary" on:click=move |_| pane.set(Pane::Add)>
                                "Add Incident"
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
                                    "No incidents reported yet."
                                } else {
                                    "No incidents match your search."
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
                                            <th>"Title"</th>
                                            <th>"Description"</th>
                                            <th>"Location"</th>
                                            <th>"Tags"</th>
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
                                                        <td>{row.title.clone()}</td>
                                                        <td>{truncate_chars(&row.description, 60)}</td>
                                                        <td>{location_label(row.location.as_ref())}</td>
                                                        <td>{row.tags.join(", ")}</td>
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

                        <Show when=move || show_filter.get()>
                            <FilterPopover
                                status=status_filter
                                options=STATUS_OPTIONS.to_vec()
                                on_close=Callback::new(move |()| show_filter.set(false))
                            />
                        </Show>

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
                                                        .set(Some((row.id.clone(), row.title.clone())));
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
fn IncidentAddForm(on_done: Callback<bool>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let latitude = RwSignal::new(String::new());
    let longitude = RwSignal::new(String::new());
    let tags = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let saved = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let title_value = title.get().trim().to_owned();
        let description_value = description.get().trim().to_owned();
        if title_value.is_empty() || description_value.is_empty() {
            error.set(Some("Title and description are required".to_owned()));
            return;
        }
        let Some(token) = auth.get_untracked().token().map(str::to_owned) else {
            error.set(Some(NOT_AUTHENTICATED.to_owned()));
            return;
        };
        let draft = IncidentDraft {
            title: title_value,
            description: description_value,
            location: GeoPoint {
                latitude: parse_coordinate(&latitude.get()),
                longitude: parse_coordinate(&longitude.get()),
            },
            tags: parse_list(&tags.get()),
        };
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::create_incident(&token, &draft).await {
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
                <h2 class="record-form__title">"Add Incident"</h2>
            </div>
            <Show
                when=move || !saved.get()
                fallback=|| {
                    view! {
                        <p class="record-form__success">"Incident created successfully!"</p>
                    }
                }
            >
                <form class="record-form__body" on:submit=on_submit>
                    <TextField label="Title" value=title/>
                    <TextArea label="Description" value=description/>
                    <div class="record-form__row">
                        <TextField label="Latitude" value=latitude placeholder="6.5244"/>
                        <TextField label="Longitude" value=longitude placeholder="3.3792"/>
                    </div>
                    <TextField label="Tags" value=tags placeholder="Comma-separated, e.g. fire, theft"/>
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
fn IncidentEditForm(incident: Incident, on_done: Callback<bool>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let id = incident.id.clone();
    let description = RwSignal::new(incident.description.clone());
    let latitude = RwSignal::new(
        incident.location.map(|l| l.latitude.to_string()).unwrap_or_default(),
    );
    let longitude = RwSignal::new(
        incident.location.map(|l| l.longitude.to_string()).unwrap_or_default(),
    );
    let tags = RwSignal::new(incident.tags.join(", "));
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let saved = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let description_value = description.get().trim().to_owned();
        if description_value.is_empty() {
            error.set(Some("Description is required".to_owned()));
            return;
        }
        let Some(token) = auth.get_untracked().token().map(str::to_owned) else {
            error.set(Some(NOT_AUTHENTICATED.to_owned()));
            return;
        };
        let update = IncidentUpdate {
            description: description_value,
            location: GeoPoint {
                latitude: parse_coordinate(&latitude.get()),
                longitude: parse_coordinate(&longitude.get()),
            },
            tags: parse_list(&tags.get()),
        };
        let id = id.clone();
        busy.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::update_incident(&token, &id, &update).await {
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
                <h2 class="record-form__title">"Edit Incident"</h2>
            </div>
            <Show
                when=move || !saved.get()
                fallback=|| {
                    view! {
                        <p class="record-form__success">"Incident updated successfully!"</p>
                    }
                }
            >
                <form class="record-form__body" on:submit=on_submit.clone()>
                    // Title is immutable after creation.
                    <label class="field">
                        <span class="field__label">"Title"</span>
                        <input class="field__input" type="text" prop:value=incident.title.clone() disabled/>
                    </label>
                    <TextArea label="Description" value=description/>
                    <div class="record-form__row">
                        <TextField label="Latitude" value=latitude/>
                        <TextField label="Longitude" value=longitude/>
                    </div>
                    <TextField label="Tags" value=tags placeholder="Comma-separated"/>
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
