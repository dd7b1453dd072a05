//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::sign_in;
use crate::components::{FormInput, NavLink};
use crate::context::use_app_context;
use crate::models::LoginForm;
use crate::routes::Route;
use crate::session::today_utc;
use crate::store::{store_sign_in, use_app_store};
use crate::toast::use_toaster;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let toaster = use_toaster();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let form = LoginForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        set_loading.set(true);
        let api = ctx.api.clone();
        spawn_local(async move {
            match sign_in(&api, &form, today_utc()).await {
                Ok(signed_in) => {
                    toaster.success("Login successful");
                    // the session effect in App takes us to the dashboard
                    store_sign_in(&store, signed_in.state, signed_in.user);
                }
                Err(e) => {
                    log::info!("[SESSION] Login failed: {}", e);
                    toaster.error(e.user_message());
                }
            }
            let _ = set_loading.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Sign in"</h1>
                <FormInput label="Username" name="username" value=username disabled=loading />
                <FormInput label="Password" name="password" input_type="password" value=password disabled=loading />
                <button type="submit" class="primary-btn" prop:disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Login" }}
                </button>
                <p class="auth-switch">
                    "No account yet? "
                    <NavLink to=Route::Register>"Register"</NavLink>
                </p>
            </form>
        </div>
    }
}
