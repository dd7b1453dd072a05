//! Toast Container Component
//!
//! Bottom-center stack; clicking a toast closes it early.

use leptos::prelude::*;

use crate::toast::{use_toaster, ToastKind};

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-container">
            {move || {
                toaster
                    .toasts()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast-success",
                            ToastKind::Error => "toast toast-error",
                        };
                        view! {
                            <div class=class role="status" on:click=move |_| toaster.dismiss(id)>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
