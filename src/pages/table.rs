//! Applications Table Page

use leptos::prelude::*;
use serde_json::Value;

use crate::api::{display_value, field_label, table_columns, ResourceKind};
use crate::context::use_app_context;
use crate::query::{use_query, QueryKey};

/// Cell texts in column order; missing keys are blank
fn table_row(record: &Value, columns: &[String]) -> Vec<String> {
    columns
        .iter()
        .map(|c| record.get(c).map(display_value).unwrap_or_default())
        .collect()
}

#[component]
pub fn TablePage() -> impl IntoView {
    let ctx = use_app_context();
    let kind = ResourceKind::Applications;
    // same key as the applications list, so both pages share the response
    let records = {
        let api = ctx.api.clone();
        use_query(QueryKey::new(kind.segment()), move || {
            let api = api.clone();
            async move { api.list_resource(kind).await }
        })
    };
    let columns = Memo::new(move |_| {
        records
            .data
            .get()
            .map(|r| table_columns(&r))
            .unwrap_or_default()
    });

    view! {
        <div class="table-page">
            <h1>"Applications table"</h1>
            {move || records.error.get().map(|e| view! { <p class="error-text">{e.user_message()}</p> })}
            <table class="data-table">
                <thead>
                    <tr>
                        {move || {
                            columns
                                .get()
                                .into_iter()
                                .map(|c| view! { <th>{field_label(&c)}</th> })
                                .collect_view()
                        }}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let columns = columns.get();
                        records
                            .data
                            .get()
                            .map(|list| {
                                list.iter()
                                    .map(|record| view! {
                                        <tr>
                                            {table_row(record, &columns)
                                                .into_iter()
                                                .map(|cell| view! { <td>{cell}</td> })
                                                .collect_view()}
                                        </tr>
                                    })
                                    .collect_view()
                            })
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rows_follow_column_order() {
        let columns = vec!["id".to_string(), "position".to_string(), "remote".to_string()];
        let record = json!({"position": "Engineer", "id": 4});
        assert_eq!(table_row(&record, &columns), vec!["4", "Engineer", ""]);
    }
}
