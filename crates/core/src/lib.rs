//! Core of the PlantKnight web front-end.
//!
//! Everything here is platform-agnostic and runs under native tests; the
//! Leptos crate supplies a browser [`api::Transport`] and
//! [`session::SessionStore`] and renders the results.
//!
//! ## Module Structure
//! - `models`: plant records, API payloads, sample data
//! - `api`: transport trait and typed client
//! - `resource`: remote-resource state and stale-response tracking
//! - `form`: form fields, validation, submit state
//! - `services`: per-page workflows
//! - `session`: client-side key-value session
//! - `config`: settings
//! - `paths`: front-end routes

#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod paths;
pub mod resource;
pub mod result;
pub mod services;
pub mod session;

pub use api::{PlantApi, Transport};
pub use config::AppConfig;
pub use error::Error;
pub use resource::{Generation, RequestTracker, ResourceState};
pub use result::{Result, ResultExt};
pub use services::{PlantList, RemovalOutcome, Services};
pub use session::{MemoryStore, Session, SessionStore};

#[cfg(test)]
mod tests;
