//! Leptos 0.7 CSR front-end for PlantKnight
//!
//! Browser UI for the PlantKnight plant monitor: log in, set up an account,
//! browse plants and their latest sensor readings, add, remove and re-pair
//! plants. All request logic lives in `plantknight-core`; this crate wires it
//! to `fetch`, `localStorage`, timers and the DOM.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown), bundled with Trunk
//! - Type-safe routing with leptos_router
//!
//! ## Module Structure
//! - `app`: root component, header and context setup
//! - `router`: route definitions
//! - `pages`: one component per route
//! - `components`: reusable UI pieces
//! - `state`: shared context, browser transport/storage, resource and form hooks
//! - `error`: browser-side error type

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod error;
pub mod pages;
pub mod router;
pub mod state;

// Re-export main App component for convenience
pub use app::App;

#[cfg(test)]
mod tests;
