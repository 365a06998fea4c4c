use leptos::prelude::*;

use crate::domain::config::ui::ConfigPanel;
use crate::domain::dataset::ui::DatasetList;
use crate::domain::model::ui::ModelList;
use crate::layout::{Panel, Shell};
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::notify::{NotifyHost, NotifyService};

#[component]
pub fn App() -> impl IntoView {
    provide_context(NotifyService::new());
    provide_context(ModalStackService::new());

    let active = RwSignal::new(Panel::Config);

    view! {
        <Shell active=active>
            {move || match active.get() {
                Panel::Config => view! { <ConfigPanel /> }.into_any(),
                Panel::Models => view! { <ModelList /> }.into_any(),
                Panel::Datasets => view! { <DatasetList /> }.into_any(),
            }}
        </Shell>
        <ModalHost />
        <NotifyHost />
    }
}
