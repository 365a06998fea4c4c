use leptos::prelude::*;

/// The three admin panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Config,
    Models,
    Datasets,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Config, Panel::Models, Panel::Datasets];

    pub fn title(&self) -> &'static str {
        match self {
            Panel::Config => "Platform Connection",
            Panel::Models => "AI Models",
            Panel::Datasets => "Knowledge Bases",
        }
    }
}

#[component]
fn SidebarItem(panel: Panel, active: RwSignal<Panel>) -> impl IntoView {
    let is_active = move || active.get() == panel;
    view! {
        <button
            style=move || {
                format!(
                    "display: block; width: 100%; text-align: left; padding: 10px 16px; border: none; border-radius: 6px; cursor: pointer; background: {}; color: {}; font-size: 14px;",
                    if is_active() { "var(--colorBrandBackground2)" } else { "transparent" },
                    if is_active() { "var(--colorBrandForeground1)" } else { "inherit" },
                )
            }
            on:click=move |_| active.set(panel)
        >
            {panel.title()}
        </button>
    }
}

/// Application chrome: header, sidebar, content area.
#[component]
pub fn Shell(active: RwSignal<Panel>, children: Children) -> impl IntoView {
    view! {
        <div style="display: flex; flex-direction: column; min-height: 100vh;">
            <header style="padding: 12px 24px; border-bottom: 1px solid var(--color-border); font-size: 18px; font-weight: bold;">
                "Platform Admin Console"
            </header>
            <div style="display: flex; flex: 1;">
                <nav style="width: 220px; padding: 16px 8px; border-right: 1px solid var(--color-border); display: flex; flex-direction: column; gap: 4px;">
                    {Panel::ALL
                        .iter()
                        .map(|panel| view! { <SidebarItem panel=*panel active=active /> })
                        .collect_view()}
                </nav>
                <main style="flex: 1; padding: 24px;">{children()}</main>
            </div>
        </div>
    }
}
