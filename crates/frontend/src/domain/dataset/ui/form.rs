use contracts::domain::dataset::DatasetDraft;
use contracts::shared::validation::FieldError;
use leptos::prelude::*;
use thaw::*;

use crate::domain::dataset::api::create_dataset;
use crate::shared::forms::{ErrorBox, FieldHint};
use crate::shared::notify::NotifyService;
use crate::shared::resource::SubmitGuard;

/// Create-dataset modal form. Editing is not offered: the platform owns
/// dataset contents, the console only creates and deletes them.
#[component]
#[allow(non_snake_case)]
pub fn DatasetForm(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let notify = use_context::<NotifyService>().expect("NotifyService not found in context");

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let (server_error, set_server_error) = signal::<Option<String>>(None);
    let submitting = SubmitGuard::new();

    let handle_submit = move |_| {
        let draft = DatasetDraft {
            name: name.get(),
            description: description.get(),
        };
        match draft.validate() {
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
            Ok(()) => field_errors.set(Vec::new()),
        }

        let payload = draft.into_payload();
        submitting.run(
            async move { create_dataset(&payload).await },
            move |_| {
                notify.success("Knowledge base created");
                on_saved.run(());
            },
            move |err| set_server_error.set(Some(err.message)),
        );
    };

    view! {
        <div style="padding: 20px;">
            <h2 style="font-size: 20px; font-weight: bold; margin-bottom: 16px;">
                "New knowledge base"
            </h2>

            <ErrorBox error=server_error.into() />

            <div class="form__group">
                <label class="form__label">
                    "Name"
                    <span style="color: red;">"*"</span>
                </label>
                <Input value=name placeholder="e.g. Product docs" />
                <FieldHint errors=field_errors.into() field="name" />
            </div>

            <div class="form__group">
                <label class="form__label">"Description"</label>
                <Textarea value=description placeholder="What goes into this knowledge base" />
            </div>

            <Space>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_submit
                    disabled=submitting.busy()
                >
                    {move || if submitting.busy().get() { "Creating..." } else { "Create" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </Button>
            </Space>
        </div>
    }
}
