use contracts::domain::model::AiModel;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::form::ModelForm;
use crate::domain::model::api::{delete_model, fetch_models};
use crate::shared::date_utils::format_timestamp;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::notify::NotifyService;
use crate::shared::resource::ListController;

#[component]
#[allow(non_snake_case)]
pub fn ModelList() -> impl IntoView {
    let notify = use_context::<NotifyService>().expect("NotifyService not found in context");
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let controller = ListController::<AiModel>::new(notify, "models");
    controller.refresh(fetch_models);

    let open_form = move |record: Option<AiModel>| {
        modal_stack.push(move |handle| {
            let record = record.clone();
            view! {
                <ModelForm
                    record=record
                    on_saved=Callback::new({
                        let handle = handle.clone();
                        move |_| {
                            handle.close();
                            controller.refresh(fetch_models);
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
    };

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|win| win.confirm_with_message("Delete this model?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match delete_model(&id).await {
                Ok(()) => {
                    notify.success("Model deleted");
                    controller.refresh(fetch_models);
                }
                Err(err) => notify.error(format!("Failed to delete model: {}", err.message)),
            }
        });
    };

    view! {
        <div>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h1 style="font-size: 24px; font-weight: bold;">"AI Models"</h1>
                <Space>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open_form(None)
                    >
                        "Add model"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| controller.refresh(fetch_models)
                        disabled=controller.loading
                    >
                        "Refresh"
                    </Button>
                </Space>
            </Flex>

            <Show when=move || controller.loading.get()>
                <div style="margin-top: 16px;">
                    <Spinner />
                </div>
            </Show>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=180.0>"Name"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>"Provider"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=150.0>"Model"</TableHeaderCell>
                        <TableHeaderCell min_width=90.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=130.0>"Created"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || controller.items.get().into_iter().map(|model| {
                        let record_for_edit = model.clone();
                        let id_for_delete = model.id.clone();
                        let (status_color, status_text) = if model.enabled {
                            ("var(--color-success)", "enabled")
                        } else {
                            ("var(--color-error)", "disabled")
                        };
                        view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>
                                        <a
                                            href="#"
                                            style="color: var(--colorBrandForeground1); text-decoration: none; cursor: pointer;"
                                            on:click=move |e| {
                                                e.prevent_default();
                                                open_form(Some(record_for_edit.clone()));
                                            }
                                        >
                                            {model.name.clone()}
                                        </a>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{model.provider.label()}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{model.model_name.clone()}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <span style=format!("color: {};", status_color)>{status_text}</span>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{format_timestamp(&model.created_at)}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| handle_delete(id_for_delete.clone())
                                        >
                                            "Delete"
                                        </Button>
                                    </TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}
