use contracts::domain::model::{AiModel, ModelDraft, ModelProvider};
use contracts::shared::secret::SecretField;
use contracts::shared::validation::FieldError;
use leptos::prelude::*;
use thaw::*;

use crate::domain::model::api::{create_model, update_model};
use crate::shared::forms::{ErrorBox, FieldHint};
use crate::shared::notify::NotifyService;
use crate::shared::resource::SubmitGuard;

/// Create/edit form for one model registration, rendered inside a modal.
///
/// All form state lives here and is dropped when the modal closes, so a
/// new create workflow always starts from empty defaults.
#[component]
#[allow(non_snake_case)]
pub fn ModelForm(
    record: Option<AiModel>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let notify = use_context::<NotifyService>().expect("NotifyService not found in context");

    let editing_id = record.as_ref().map(|r| r.id.clone());
    let initial = record
        .as_ref()
        .map(ModelDraft::from_record)
        .unwrap_or_default();
    let had_secret = initial.api_key == SecretField::Unchanged;

    let name = RwSignal::new(initial.name);
    let provider = RwSignal::new(initial.provider.as_str().to_string());
    let model_name = RwSignal::new(initial.model_name);
    let base_url = RwSignal::new(initial.base_url);
    let api_key = RwSignal::new(SecretField::display_value(had_secret));
    let enabled = RwSignal::new(initial.enabled);
    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let (server_error, set_server_error) = signal::<Option<String>>(None);
    let submitting = SubmitGuard::new();

    let is_edit_mode = editing_id.is_some();

    let handle_submit = move |_| {
        let draft = ModelDraft {
            name: name.get(),
            provider: ModelProvider::from_str(&provider.get()).unwrap_or(ModelProvider::OpenAi),
            model_name: model_name.get(),
            base_url: base_url.get(),
            api_key: SecretField::from_input(&api_key.get()),
            enabled: enabled.get(),
        };
        match draft.validate() {
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
            Ok(()) => field_errors.set(Vec::new()),
        }

        let payload = draft.into_payload();
        let id = editing_id.clone();
        submitting.run(
            async move {
                match id {
                    Some(id) => update_model(&id, &payload).await,
                    None => create_model(&payload).await,
                }
            },
            move |_| {
                notify.success(if is_edit_mode {
                    "Model updated"
                } else {
                    "Model created"
                });
                on_saved.run(());
            },
            move |err| set_server_error.set(Some(err.message)),
        );
    };

    view! {
        <div style="padding: 20px;">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 16px;">
                <h2 style="font-size: 20px; font-weight: bold;">
                    {if is_edit_mode { "Edit model" } else { "Add model" }}
                </h2>
            </Flex>

            <ErrorBox error=server_error.into() />

            <div class="form__group">
                <label class="form__label">
                    "Display name"
                    <span style="color: red;">"*"</span>
                </label>
                <Input value=name placeholder="e.g. GPT-4 chat model" />
                <FieldHint errors=field_errors.into() field="name" />
            </div>

            <div class="form__group">
                <label class="form__label">"Provider"</label>
                <select
                    class="form__select"
                    on:change=move |ev| provider.set(event_target_value(&ev))
                    prop:value=move || provider.get()
                >
                    {ModelProvider::ALL
                        .iter()
                        .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="form__group">
                <label class="form__label">
                    "Model name"
                    <span style="color: red;">"*"</span>
                </label>
                <Input value=model_name placeholder="e.g. gpt-4, claude-2, llama2" />
                <FieldHint errors=field_errors.into() field="model_name" />
            </div>

            <div class="form__group">
                <label class="form__label">"API address"</label>
                <Input value=base_url placeholder="For local providers such as Ollama" />
            </div>

            <div class="form__group">
                <label class="form__label">"API key"</label>
                <Input value=api_key input_type=InputType::Password placeholder="Enter an API key (if required)" />
            </div>

            <div style="display: flex; align-items: center; gap: 8px; margin-bottom: 16px;">
                <input
                    type="checkbox"
                    prop:checked=move || enabled.get()
                    on:change=move |ev| enabled.set(event_target_checked(&ev))
                />
                <span>"Enabled"</span>
            </div>

            <Space>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_submit
                    disabled=submitting.busy()
                >
                    {move || {
                        if submitting.busy().get() {
                            if is_edit_mode { "Updating..." } else { "Creating..." }
                        } else if is_edit_mode {
                            "Update"
                        } else {
                            "Create"
                        }
                    }}
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
