//! Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FormInput, NavLink};
use crate::context::use_app_context;
use crate::error::AppError;
use crate::models::RegisterForm;
use crate::navigation::use_navigator;
use crate::routes::Route;
use crate::toast::use_toaster;

/// Field errors from the backend are worth showing as-is
fn register_error_message(error: &AppError) -> String {
    match error {
        AppError::Status { status: 400, message } => message.clone(),
        other => other.user_message(),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app_context();
    let toaster = use_toaster();
    let navigator = use_navigator();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let form = RegisterForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(e) = form.validate() {
            toaster.error(e.user_message());
            return;
        }
        set_loading.set(true);
        let api = ctx.api.clone();
        spawn_local(async move {
            match api.register(&form).await {
                Ok(()) => {
                    log::info!("[SESSION] Registered {}", form.username);
                    toaster.success("Registration successful");
                    navigator.navigate(Route::Login);
                }
                Err(e) => {
                    log::info!("[SESSION] Registration failed: {}", e);
                    toaster.error(register_error_message(&e));
                }
            }
            let _ = set_loading.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Create account"</h1>
                <FormInput label="Username" name="username" value=username disabled=loading />
                <FormInput label="Email" name="email" input_type="email" value=email disabled=loading />
                <FormInput label="Password" name="password" input_type="password" value=password disabled=loading />
                <button type="submit" class="primary-btn" prop:disabled=move || loading.get()>
                    {move || if loading.get() { "Creating..." } else { "Register" }}
                </button>
                <p class="auth-switch">
                    "Already registered? "
                    <NavLink to=Route::Login>"Sign in"</NavLink>
                </p>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_message_is_shown_verbatim() {
        let e = AppError::Status {
            status: 400,
            message: "A user with that username already exists.".into(),
        };
        assert_eq!(register_error_message(&e), "A user with that username already exists.");
    }

    #[test]
    fn test_server_errors_stay_generic() {
        let e = AppError::Status { status: 500, message: "Internal Server Error".into() };
        assert_eq!(register_error_message(&e), crate::error::GENERIC_ERROR_MESSAGE);
    }
}
