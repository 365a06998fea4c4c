use contracts::domain::dataset::Dataset;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::form::DatasetForm;
use super::upload::UploadDialog;
use crate::domain::config::api::ensure_configured;
use crate::domain::dataset::api::{delete_dataset, fetch_datasets};
use crate::shared::date_utils::format_date;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::notify::NotifyService;
use crate::shared::resource::ListController;

const CONFIGURE_FIRST: &str = "Please configure the platform connection first";

#[component]
#[allow(non_snake_case)]
pub fn DatasetList() -> impl IntoView {
    let notify = use_context::<NotifyService>().expect("NotifyService not found in context");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let controller = ListController::<Dataset>::new(notify, "knowledge bases");
    controller.refresh(fetch_datasets);

    // Gate re-checked on every attempted mutation; the modal only opens
    // once the backend confirms a configured connection.
    let handle_create = move |_| {
        spawn_local(async move {
            if !ensure_configured().await {
                notify.info(CONFIGURE_FIRST);
                return;
            }
            modal_stack.push(move |handle| {
                view! {
                    <DatasetForm
                        on_saved=Callback::new({
                            let handle = handle.clone();
                            move |_| {
                                handle.close();
                                controller.refresh(fetch_datasets);
                            }
                        })
                        on_cancel=Callback::new({
                            let handle = handle.clone();
                            move |_| handle.close()
                        })
                    />
                }
                .into_any()
            });
        });
    };

    let handle_upload = move |dataset_id: String| {
        spawn_local(async move {
            if !ensure_configured().await {
                notify.info(CONFIGURE_FIRST);
                return;
            }
            let dataset_id = dataset_id.clone();
            modal_stack.push(move |handle| {
                let dataset_id = dataset_id.clone();
                view! {
                    <UploadDialog
                        dataset_id=dataset_id
                        on_uploaded=Callback::new({
                            let handle = handle.clone();
                            move |_| {
                                handle.close();
                                controller.refresh(fetch_datasets);
                            }
                        })
                        on_cancel=Callback::new({
                            let handle = handle.clone();
                            move |_| handle.close()
                        })
                    />
                }
                .into_any()
            });
        });
    };

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message("Delete this knowledge base?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match delete_dataset(&id).await {
                Ok(()) => {
                    notify.success("Knowledge base deleted");
                    controller.refresh(fetch_datasets);
                }
                Err(err) => {
                    notify.error(format!("Failed to delete knowledge base: {}", err.message))
                }
            }
        });
    };

    view! {
        <div>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h1 style="font-size: 24px; font-weight: bold;">"Knowledge Bases"</h1>
                <Space>
                    <Button appearance=ButtonAppearance::Primary on_click=handle_create>
                        "New knowledge base"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| controller.refresh(fetch_datasets)
                        disabled=controller.loading
                    >
                        "Refresh"
                    </Button>
                </Space>
            </Flex>

            <div style="padding: 12px; margin: 16px 0; background: var(--color-info-50); border: 1px solid var(--color-info-100); border-radius: 8px; font-size: 13px;">
                "Knowledge bases live on the external platform. Configure the connection first, then manage datasets and documents here."
            </div>

            <Show when=move || controller.loading.get()>
                <Spinner />
            </Show>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=180.0>"Name"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=220.0>"Description"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Documents"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Created"</TableHeaderCell>
                        <TableHeaderCell min_width=160.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || controller.items.get().into_iter().map(|dataset| {
                        let id_for_upload = dataset.id.clone();
                        let id_for_delete = dataset.id.clone();
                        view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>{dataset.name.clone()}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        {dataset.description.clone().unwrap_or_default()}
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        {format!("{} documents", dataset.document_count)}
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{format_date(&dataset.created_at)}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <Space>
                                            <Button
                                                size=ButtonSize::Small
                                                on_click=move |_| handle_upload(id_for_upload.clone())
                                            >
                                                "Upload file"
                                            </Button>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| handle_delete(id_for_delete.clone())
                                            >
                                                "Delete"
                                            </Button>
                                        </Space>
                                    </TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>

            <Show when=move || !controller.loading.get() && controller.items.get().is_empty()>
                <div style="padding: 24px; text-align: center; color: var(--color-text-tertiary);">
                    "No knowledge bases yet"
                </div>
            </Show>
        </div>
    }
}
