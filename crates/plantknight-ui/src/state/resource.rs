//! Remote resources bound to signals.
//!
//! Every fetch starts a new generation; a response is written to its signal
//! only if no newer fetch started in the meantime, so a slow response for an
//! old route parameter can never overwrite the current one.

use std::future::Future;

use leptos::prelude::*;
use plantknight_core::{RequestTracker, ResourceState};
use wasm_bindgen_futures::spawn_local;

/// A fetched value plus the tracker guarding its signal.
#[derive(Debug)]
pub struct RemoteResource<T: Send + Sync + 'static> {
    pub state: RwSignal<ResourceState<T>>,
    tracker: RequestTracker,
}

impl<T: Send + Sync + 'static> RemoteResource<T> {
    /// An idle resource; nothing is fetched until [`Self::load`].
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ResourceState::Idle),
            tracker: RequestTracker::new(),
        }
    }

    /// Run `fetch` and store its result unless a newer load started first.
    pub fn load<Fut>(&self, fetch: Fut)
    where
        Fut: Future<Output = ResourceState<T>> + 'static,
    {
        let generation = self.tracker.begin();
        let state = self.state;
        let tracker = self.tracker.clone();
        state.set(ResourceState::Loading);

        spawn_local(async move {
            let result = fetch.await;
            tracker.apply_if_current(generation, || store(state, result));
        });
    }

    /// Replace the value outright, superseding any load still in flight.
    pub fn replace(&self, value: ResourceState<T>) {
        self.tracker.begin();
        store(self.state, value);
    }
}

// Manual impl: the signal is `Copy` whatever `T` is.
impl<T: Send + Sync + 'static> Clone for RemoteResource<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            tracker: self.tracker.clone(),
        }
    }
}

impl<T: Send + Sync + 'static> Default for RemoteResource<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn store<T: Send + Sync + 'static>(state: RwSignal<ResourceState<T>>, value: ResourceState<T>) {
    if state.try_set(value).is_some() {
        tracing::debug!("view unmounted before response arrived");
    }
}

/// Fetch whenever `key` changes.
///
/// `key` is read inside an effect, so any signal it touches (a route
/// parameter, a refresh counter) re-runs the fetch.
pub fn use_remote_resource<T, K, F, Fut>(
    key: impl Fn() -> K + 'static,
    fetch: F,
) -> RemoteResource<T>
where
    T: Send + Sync + 'static,
    K: 'static,
    F: Fn(K) -> Fut + 'static,
    Fut: Future<Output = ResourceState<T>> + 'static,
{
    let resource = RemoteResource::new();
    let handle = resource.clone();
    Effect::new(move |_| {
        handle.load(fetch(key()));
    });
    resource
}
