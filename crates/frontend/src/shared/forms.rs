use contracts::shared::validation::FieldError;
use leptos::prelude::*;

/// Inline field-level validation message, shown under the input it
/// belongs to. Empty when the field is clean.
#[component]
pub fn FieldHint(errors: Signal<Vec<FieldError>>, field: &'static str) -> impl IntoView {
    view! {
        {move || {
            errors
                .get()
                .iter()
                .find(|e| e.field == field)
                .map(|e| {
                    view! {
                        <div style="font-size: 12px; color: var(--color-error); margin-top: 4px;">
                            {e.message}
                        </div>
                    }
                })
        }}
    }
}

/// Inline server-error box shown inside an open modal. The form stays
/// open with entered values so the user can correct and retry.
#[component]
pub fn ErrorBox(error: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || {
            error
                .get()
                .map(|e| {
                    view! {
                        <div style="padding: 12px; margin-bottom: 16px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px;">
                            <span style="color: var(--color-error);">{e}</span>
                        </div>
                    }
                })
        }}
    }
}
