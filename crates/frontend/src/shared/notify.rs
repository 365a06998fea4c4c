use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Notice {
    id: u64,
    kind: NoticeKind,
    text: String,
}

/// Transient user-visible notifications, provided once via context.
///
/// Every notice auto-dismisses after a fixed interval; clicking one
/// dismisses it early.
#[derive(Clone, Copy)]
pub struct NotifyService {
    notices: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
}

impl NotifyService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(NoticeKind::Info, text.into());
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.push(NoticeKind::Warning, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        let text = text.into();
        log::error!("{}", text);
        self.push(NoticeKind::Error, text);
    }

    fn push(&self, kind: NoticeKind, text: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.notices.update(|n| n.push(Notice { id, kind, text }));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            svc.dismiss(id);
        });
    }

    fn dismiss(&self, id: u64) {
        self.notices.try_update(|n| n.retain(|notice| notice.id != id));
    }
}

impl Default for NotifyService {
    fn default() -> Self {
        Self::new()
    }
}

fn notice_colors(kind: NoticeKind) -> (&'static str, &'static str, &'static str) {
    match kind {
        NoticeKind::Success => ("var(--color-success-50)", "var(--color-success-100)", "var(--color-success)"),
        NoticeKind::Info => ("var(--color-info-50)", "var(--color-info-100)", "var(--color-info)"),
        NoticeKind::Warning => ("var(--color-warning-50)", "var(--color-warning-100)", "var(--color-warning)"),
        NoticeKind::Error => ("var(--color-error-50)", "var(--color-error-100)", "var(--color-error)"),
    }
}

/// Renders the notification stack. Must be mounted exactly once.
#[component]
pub fn NotifyHost() -> impl IntoView {
    let svc = use_context::<NotifyService>()
        .expect("NotifyService not provided in context (provide it in app root)");

    view! {
        <div style="position: fixed; top: 16px; right: 16px; z-index: 2000; display: flex; flex-direction: column; gap: 8px; max-width: 420px;">
            <For
                each=move || svc.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let (bg, border, color) = notice_colors(notice.kind);
                    let id = notice.id;
                    view! {
                        <div
                            style=format!(
                                "padding: 10px 14px; background: {}; border: 1px solid {}; border-radius: 8px; box-shadow: var(--shadow-md); cursor: pointer;",
                                bg, border,
                            )
                            on:click=move |_| svc.dismiss(id)
                        >
                            <span style=format!("color: {};", color)>{notice.text.clone()}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
