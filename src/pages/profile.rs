//! Profile Page

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::UserProfile;
use crate::query::{use_query, QueryKey};

fn profile_rows(user: &UserProfile) -> Vec<(&'static str, String)> {
    vec![
        ("Username", user.username.clone()),
        ("Email", user.email.clone().unwrap_or_default()),
        ("First name", user.first_name.clone().unwrap_or_default()),
        ("Last name", user.last_name.clone().unwrap_or_default()),
    ]
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app_context();
    let user = {
        let api = ctx.api.clone();
        use_query(QueryKey::USER, move || {
            let api = api.clone();
            async move { api.current_user().await }
        })
    };

    view! {
        <div class="profile-page">
            <h1>{move || user.data.get().map(|u| u.display_name()).unwrap_or_else(|| "Profile".to_string())}</h1>
            {move || user.error.get().map(|e| view! { <p class="error-text">{e.user_message()}</p> })}
            <dl class="field-list">
                {move || {
                    user.data
                        .get()
                        .map(|u| profile_rows(&u))
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
