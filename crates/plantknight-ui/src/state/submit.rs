//! Form submission plumbing shared by the form pages.

use std::future::Future;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use plantknight_core::form::{FormOutcome, Redirect, SubmitGuard, SubmitState};
use wasm_bindgen_futures::spawn_local;

/// Run one submission: claim the guard, show the in-flight state, await the
/// outcome, render it and follow its redirect.
///
/// A second submit while the first is in flight is dropped without sending
/// anything; `work` is lazy so nothing runs until the guard is claimed.
pub fn submit_form<Fut, N>(
    guard: &SubmitGuard,
    state: RwSignal<SubmitState>,
    navigate: N,
    work: Fut,
) where
    Fut: Future<Output = FormOutcome> + 'static,
    N: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let Some(ticket) = guard.try_begin() else {
        tracing::debug!("submission already in flight, ignoring");
        return;
    };
    state.set(SubmitState::Submitting);

    spawn_local(async move {
        let outcome = work.await;
        drop(ticket);

        let redirect = outcome.redirect.clone();
        if state.try_set(outcome.into_state()).is_some() {
            return;
        }
        if let Some(redirect) = redirect {
            follow_redirect(redirect, navigate);
        }
    });
}

/// Navigate now, or after the redirect's delay.
pub fn follow_redirect<N>(redirect: Redirect, navigate: N)
where
    N: Fn(&str, NavigateOptions) + 'static,
{
    if redirect.delay_ms == 0 {
        navigate(&redirect.path, NavigateOptions::default());
        return;
    }
    Timeout::new(redirect.delay_ms, move || {
        navigate(&redirect.path, NavigateOptions::default());
    })
    .forget();
}

/// Clear `message` after `delay_ms`, unless it changed in the meantime.
pub fn clear_after<T>(message: RwSignal<Option<T>>, delay_ms: u32)
where
    T: PartialEq + Clone + Send + Sync + 'static,
{
    let shown = message.get_untracked();
    Timeout::new(delay_ms, move || {
        if message.try_get_untracked().flatten() == shown {
            message.try_set(None);
        }
    })
    .forget();
}
