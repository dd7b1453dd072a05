//! Entity Pages
//!
//! List and detail views for applications, companies, employees and
//! questions.

use leptos::prelude::*;

use crate::api::{record_fields, record_id, record_title, ResourceKind};
use crate::components::NavLink;
use crate::context::use_app_context;
use crate::query::{use_query, QueryKey};
use crate::routes::Route;

/// Cache key for a collection
fn list_key(kind: ResourceKind) -> QueryKey {
    QueryKey::new(kind.segment())
}

/// Cache key for one record
fn detail_key(kind: ResourceKind, id: u64) -> QueryKey {
    QueryKey::new(format!("{}/{}", kind.segment(), id))
}

#[component]
pub fn ResourceListPage(kind: ResourceKind) -> impl IntoView {
    let ctx = use_app_context();
    let records = {
        let api = ctx.api.clone();
        use_query(list_key(kind), move || {
            let api = api.clone();
            async move { api.list_resource(kind).await }
        })
    };

    view! {
        <div class="resource-page">
            <h1>{kind.title()}</h1>
            <Show when=move || records.is_loading.get()>
                <p class="muted">"Loading..."</p>
            </Show>
            {move || records.error.get().map(|e| view! { <p class="error-text">{e.user_message()}</p> })}
            <ul class="resource-list">
                {move || {
                    records
                        .data
                        .get()
                        .map(|list| {
                            list.iter()
                                .map(|record| {
                                    let title = record_title(record);
                                    match record_id(record) {
                                        Some(id) => view! {
                                            <li class="resource-item">
                                                <NavLink to=Route::ResourceDetail(kind, id)>{title}</NavLink>
                                            </li>
                                        }
                                        .into_any(),
                                        None => view! { <li class="resource-item">{title}</li> }.into_any(),
                                    }
                                })
                                .collect_view()
                        })
                }}
            </ul>
            {move || {
                records
                    .data
                    .get()
                    .filter(|list| list.is_empty())
                    .map(|_| view! { <p class="muted">{format!("No {} yet.", kind.segment())}</p> })
            }}
        </div>
    }
}

#[component]
pub fn ResourceDetailPage(kind: ResourceKind, id: u64) -> impl IntoView {
    let ctx = use_app_context();
    let record = {
        let api = ctx.api.clone();
        use_query(detail_key(kind, id), move || {
            let api = api.clone();
            async move { api.get_resource(kind, id).await }
        })
    };

    view! {
        <div class="resource-page">
            <NavLink to=Route::Resources(kind) class="back-link">{format!("Back to {}", kind.title())}</NavLink>
            <h1>
                {move || {
                    record
                        .data
                        .get()
                        .map(|r| record_title(&r))
                        .unwrap_or_else(|| format!("{} #{}", kind.singular(), id))
                }}
            </h1>
            {move || record.error.get().map(|e| view! { <p class="error-text">{e.user_message()}</p> })}
            <dl class="field-list">
                {move || {
                    record
                        .data
                        .get()
                        .map(|r| record_fields(&r))
                        .unwrap_or_default()
                        .into_iter()
                        .map(|(label, value)| view! {
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        })
                        .collect_view()
                }}
            </dl>
        </div>
    }
}
