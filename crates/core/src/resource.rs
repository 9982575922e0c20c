//! Remote-resource view state.
//!
//! A page that shows fetched data moves through `Idle -> Loading -> Ready |
//! Failed` on every activation. A failed fetch may still carry a fallback
//! value so the page has something to render.
//!
//! Requests are never cancelled. Instead each activation takes a
//! [`Generation`] from a [`RequestTracker`]; when the response arrives it is
//! applied only if no newer activation has started since.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// State of one remotely fetched value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResourceState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed {
        message: String,
        fallback: Option<T>,
    },
}

impl<T> ResourceState<T> {
    /// A failure with a substitute value.
    pub fn failed_with(message: impl Into<String>, fallback: Option<T>) -> Self {
        Self::Failed {
            message: message.into(),
            fallback,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The value to render: the fetched one, or the fallback after a failure.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Failed { fallback, .. } => fallback.as_ref(),
            Self::Idle | Self::Loading => None,
        }
    }

    /// The failure message, if the last fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Token identifying one activation of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

/// Hands out generations and remembers the latest one.
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: Arc<AtomicU64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new activation; every earlier generation becomes stale.
    pub fn begin(&self) -> Generation {
        Generation(self.latest.fetch_add(1, Ordering::SeqCst).wrapping_add(1))
    }

    /// True if `generation` is still the newest activation.
    #[must_use]
    pub fn is_current(&self, generation: Generation) -> bool {
        self.latest.load(Ordering::SeqCst) == generation.0
    }

    /// Run `apply` only when `generation` is current; returns whether it ran.
    pub fn apply_if_current<F: FnOnce()>(&self, generation: Generation, apply: F) -> bool {
        if self.is_current(generation) {
            apply();
            true
        } else {
            tracing::debug!(
                generation = generation.0,
                "discarding stale response"
            );
            false
        }
    }
}
