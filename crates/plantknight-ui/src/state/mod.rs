//! Application state management
//!
//! The pages share one [`AppContext`], provided at the root: the page
//! services over a `fetch` transport and `localStorage`, plus a signal with
//! the logged-in username for the header.

pub mod config;
pub mod resource;
pub mod storage;
pub mod submit;
pub mod transport;

use std::sync::Arc;

use leptos::prelude::*;
use plantknight_core::{AppConfig, PlantApi, Services, Session};

pub use config::load_config;
pub use resource::{RemoteResource, use_remote_resource};
pub use storage::BrowserStorage;
pub use submit::{clear_after, follow_redirect, submit_form};
pub use transport::BrowserTransport;

/// Page services as wired in the browser
pub type AppServices = Services<BrowserTransport, BrowserStorage>;

/// Shared state provided through Leptos context
#[derive(Debug, Clone)]
pub struct AppContext {
    services: Arc<AppServices>,
    current_user: RwSignal<Option<String>>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let api = PlantApi::new(BrowserTransport::new(config.api_base_url.clone()));
        let services = Services::new(api, Session::new(BrowserStorage), config);
        let current_user = RwSignal::new(services.session().username());
        Self {
            services: Arc::new(services),
            current_user,
        }
    }

    /// Shared handle to the page services, for moving into async blocks.
    #[must_use]
    pub fn services(&self) -> Arc<AppServices> {
        Arc::clone(&self.services)
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        self.services.config()
    }

    /// Username shown in the header; `None` when logged out.
    #[must_use]
    pub const fn current_user(&self) -> RwSignal<Option<String>> {
        self.current_user
    }

    /// Re-read the username after the session changed.
    pub fn refresh_user(&self) {
        self.current_user.set(self.services.session().username());
    }

    pub fn logout(&self) {
        self.services.logout();
        self.current_user.set(None);
    }
}

/// The [`AppContext`] provided by the root component.
///
/// # Panics
/// Panics if called outside the tree under `App`.
#[must_use]
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
