//! Form Input Component

use leptos::prelude::*;

/// Labelled input bound to a string signal
#[component]
pub fn FormInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] input_type: Option<String>,
    value: RwSignal<String>,
    #[prop(optional)] disabled: Option<ReadSignal<bool>>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    let is_disabled = move || disabled.map(|d| d.get()).unwrap_or(false);

    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                class="form-input"
                type=input_type
                name=name
                prop:value=move || value.get()
                prop:disabled=is_disabled
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
