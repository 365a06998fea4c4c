use contracts::domain::dataset::{is_supported_file, UPLOAD_ACCEPT};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

use crate::domain::dataset::api::upload_file;
use crate::shared::forms::ErrorBox;
use crate::shared::notify::NotifyService;
use crate::shared::resource::SubmitGuard;

/// Document upload dialog for one dataset.
///
/// Holds at most one selected file; picking another file replaces it.
/// Unsupported types are rejected at selection time, before any network
/// traffic is possible.
#[component]
#[allow(non_snake_case)]
pub fn UploadDialog(
    dataset_id: String,
    on_uploaded: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let notify = use_context::<NotifyService>().expect("NotifyService not found in context");

    // web_sys::File is not thread-safe; keep it out of ordinary signals.
    let selected_file = StoredValue::new_local(None::<web_sys::File>);
    let (selected_name, set_selected_name) = signal::<Option<String>>(None);
    let (selected_size, set_selected_size) = signal(0u64);
    let (server_error, set_server_error) = signal::<Option<String>>(None);
    let uploading = SubmitGuard::new();

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                if !is_supported_file(&file.name()) {
                    notify.warning(format!(
                        "Unsupported file type: {}. Allowed: TXT, PDF, DOC, DOCX, MD, HTML",
                        file.name()
                    ));
                    input.set_value("");
                    selected_file.set_value(None);
                    set_selected_name.set(None);
                    return;
                }
                set_selected_name.set(Some(file.name()));
                set_selected_size.set(file.size() as u64);
                set_server_error.set(None);
                selected_file.set_value(Some(file));
            }
        }
    };

    let handle_confirm = move |_| {
        let file = match selected_file.get_value() {
            Some(file) => file,
            None => {
                notify.warning("Select a file first");
                return;
            }
        };

        let dataset_id = dataset_id.clone();
        uploading.run(
            async move { upload_file(&dataset_id, &file).await },
            move |ack| {
                notify.success(ack.message.unwrap_or_else(|| "File uploaded".to_string()));
                on_uploaded.run(());
            },
            // Selection stays in place so the user can retry as is.
            move |err| set_server_error.set(Some(err.message)),
        );
    };

    view! {
        <div style="padding: 20px;">
            <h2 style="font-size: 20px; font-weight: bold; margin-bottom: 16px;">
                "Upload file to knowledge base"
            </h2>

            <ErrorBox error=server_error.into() />

            <div style="border: 2px dashed var(--color-border); border-radius: 8px; padding: 24px; text-align: center;">
                <label
                    class="button button--primary"
                    for="dataset-upload-input"
                    style="cursor: pointer;"
                >
                    "Choose file"
                </label>
                <input
                    id="dataset-upload-input"
                    type="file"
                    accept=UPLOAD_ACCEPT
                    on:change=handle_file_select
                    style="display: none;"
                />
                <div style="margin-top: 8px; font-size: 12px; color: var(--color-text-tertiary);">
                    "Supported formats: TXT, PDF, DOC, DOCX, MD, HTML"
                </div>
            </div>

            {move || selected_name.get().map(|name| {
                let size = selected_size.get();
                view! {
                    <div style="margin-top: 16px; padding: 8px 16px; background: var(--color-neutral-50); border-radius: 4px;">
                        <strong>"Selected file: "</strong>
                        {name}
                        {format!(" ({:.2} KB)", size as f64 / 1024.0)}
                    </div>
                }
            })}

            <div style="margin-top: 16px;">
                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=handle_confirm
                        disabled=Signal::derive(move || {
                            uploading.busy().get() || selected_name.get().is_none()
                        })
                    >
                        {move || if uploading.busy().get() { "Uploading..." } else { "Upload" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </Button>
                </Space>
            </div>
        </div>
    }
}
