use contracts::domain::config::{ConfigDraft, ConnectionConfig, DEFAULT_BASE_URL};
use contracts::shared::secret::SecretField;
use contracts::shared::validation::FieldError;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::api::{fetch_config, save_config, test_connection};
use crate::shared::forms::FieldHint;
use crate::shared::notify::NotifyService;
use crate::shared::resource::SubmitGuard;

/// Singleton configuration panel. Unlike the collection panels this is a
/// zero-or-one resource: there is no list, only the current settings.
#[component]
#[allow(non_snake_case)]
pub fn ConfigPanel() -> impl IntoView {
    let notify = use_context::<NotifyService>().expect("NotifyService not found in context");

    let (config, set_config) = signal::<Option<ConnectionConfig>>(None);
    let (loading, set_loading) = signal(true);
    let base_url = RwSignal::new(DEFAULT_BASE_URL.to_string());
    let api_key = RwSignal::new(String::new());
    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let saving = SubmitGuard::new();
    let testing = SubmitGuard::new();

    let load = move || {
        spawn_local(async move {
            match fetch_config().await {
                Ok(cfg) => {
                    base_url.try_set(cfg.base_url.clone());
                    api_key.try_set(SecretField::display_value(cfg.configured));
                    set_config.try_set(Some(cfg));
                }
                Err(err) => {
                    notify.error(format!("Failed to load configuration: {}", err.message));
                }
            }
            set_loading.try_set(false);
        });
    };
    load();

    let handle_save = move |_| {
        let draft = ConfigDraft {
            base_url: base_url.get(),
            api_key: SecretField::from_input(&api_key.get()),
        };
        match draft.validate() {
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
            Ok(()) => field_errors.set(Vec::new()),
        }

        let payload = draft.into_payload();
        saving.run(
            async move { save_config(&payload).await },
            move |ack| {
                notify.success(
                    ack.message
                        .unwrap_or_else(|| "Configuration saved".to_string()),
                );
                load();
            },
            move |err| notify.error(format!("Failed to save configuration: {}", err.message)),
        );
    };

    let handle_test = move |_| {
        testing.run(
            test_connection(),
            move |ack| {
                notify.success(
                    ack.message
                        .unwrap_or_else(|| "Connection test succeeded".to_string()),
                );
            },
            move |err| notify.error(format!("Connection test failed: {}", err.message)),
        );
    };

    let configured = move || config.get().map(|c| c.configured).unwrap_or(false);

    view! {
        <div style="max-width: 560px;">
            <h1 style="font-size: 24px; font-weight: bold; margin-bottom: 16px;">
                "Platform Connection"
            </h1>

            <Show when=move || loading.get()>
                <Spinner />
            </Show>

            <Show when=move || !loading.get()>
                <Show when=move || !configured()>
                    <div style="padding: 12px; margin-bottom: 16px; background: var(--color-warning-50); border: 1px solid var(--color-warning-100); border-radius: 8px;">
                        <strong>"Connection not configured"</strong>
                        <div style="font-size: 13px; margin-top: 4px;">
                            "Set the platform API address and key to enable knowledge-base management."
                        </div>
                    </div>
                </Show>

                <Card>
                    <div class="form__group">
                        <label class="form__label">
                            "API address"
                            <span style="color: red;">"*"</span>
                        </label>
                        <Input value=base_url placeholder=DEFAULT_BASE_URL />
                        <FieldHint errors=field_errors.into() field="base_url" />
                    </div>

                    <div class="form__group">
                        <label class="form__label">
                            "API key"
                            <span style="color: red;">"*"</span>
                        </label>
                        <Input value=api_key input_type=InputType::Password placeholder="Enter the platform API key" />
                        <FieldHint errors=field_errors.into() field="api_key" />
                    </div>

                    <Space>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=handle_save
                            disabled=saving.busy()
                        >
                            {move || if saving.busy().get() { "Saving..." } else { "Save configuration" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=handle_test
                            disabled=Signal::derive(move || testing.busy().get() || !configured())
                        >
                            {move || if testing.busy().get() { "Testing..." } else { "Test connection" }}
                        </Button>
                    </Space>
                </Card>

                <Show when=move || configured()>
                    <div style="padding: 12px; margin-top: 16px; background: var(--color-success-50); border: 1px solid var(--color-success-100); border-radius: 8px;">
                        <strong>"Configuration active"</strong>
                        <div style="font-size: 13px; margin-top: 4px;">
                            {move || config.get().map(|c| format!("Current address: {}", c.base_url))}
                        </div>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
