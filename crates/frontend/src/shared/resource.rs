//! The shared synchronization layer between panels and the backend.
//!
//! Each panel owns one [`ListController`] for its resource collection and
//! one [`SubmitGuard`] per open mutation workflow. Network completions may
//! arrive after the owning panel or modal is gone; both types drop such
//! stale results instead of acting on torn-down state.

use std::future::Future;

use contracts::shared::api_error::ApiError;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::notify::NotifyService;

/// Canonical in-memory collection for one resource type.
///
/// `items` always reflects the last successfully completed fetch: a failed
/// refresh surfaces a notification and leaves the previous items in place.
/// Overlapping refreshes are sequenced with a monotonically increasing
/// ticket; responses older than the latest issued request are discarded.
pub struct ListController<T: Clone + Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    seq: RwSignal<u64>,
    notify: NotifyService,
    noun: &'static str,
}

impl<T: Clone + Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Clone + Send + Sync + 'static> Copy for ListController<T> {}

impl<T: Clone + Send + Sync + 'static> ListController<T> {
    /// Create a controller owned by the current reactive scope; its
    /// signals are disposed together with the owning panel.
    pub fn new(notify: NotifyService, noun: &'static str) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            seq: RwSignal::new(0),
            notify,
            noun,
        }
    }

    /// Fetch the collection and replace `items` on success.
    ///
    /// Safe to call repeatedly; each call issues a fresh ticket and only
    /// the newest one may apply its response.
    pub fn refresh<F, Fut>(&self, fetch: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        let ticket = self.seq.get_untracked() + 1;
        self.seq.set(ticket);
        self.loading.set(true);

        let this = *self;
        let fut = fetch();
        spawn_local(async move {
            let result = fut.await;

            // Stale if a newer request was issued meanwhile, or if the
            // panel was torn down (signal disposed).
            if this.seq.try_get_untracked() != Some(ticket) {
                return;
            }

            match result {
                Ok(items) => {
                    this.items.try_set(items);
                }
                Err(err) => {
                    log::warn!("refresh of {} failed: {}", this.noun, err);
                    this.notify
                        .error(format!("Failed to load {}: {}", this.noun, err.message));
                }
            }
            this.loading.try_set(false);
        });
    }
}

/// Busy flag for one modal workflow instance.
///
/// Refuses re-entrant submission while a request is in flight. When the
/// response arrives after the modal was closed, both callbacks are
/// skipped: the stale result is silently dropped.
#[derive(Clone, Copy)]
pub struct SubmitGuard {
    busy: RwSignal<bool>,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self {
            busy: RwSignal::new(false),
        }
    }

    pub fn busy(&self) -> Signal<bool> {
        self.busy.into()
    }

    pub fn run<T, Fut>(
        &self,
        fut: Fut,
        on_ok: impl FnOnce(T) + 'static,
        on_err: impl FnOnce(ApiError) + 'static,
    ) where
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        if self.busy.get_untracked() {
            return;
        }
        self.busy.set(true);

        let busy = self.busy;
        spawn_local(async move {
            let result = fut.await;

            // try_set returns the rejected value when the signal is
            // disposed, i.e. the workflow no longer exists.
            if busy.try_set(false).is_some() {
                return;
            }

            match result {
                Ok(value) => on_ok(value),
                Err(err) => on_err(err),
            }
        });
    }
}

impl Default for SubmitGuard {
    fn default() -> Self {
        Self::new()
    }
}
