//! Behavior tests for the page workflows, run against a scripted transport.
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::indexing_slicing)]

pub mod support;

pub mod form_behaviors;
pub mod normalization_properties;
pub mod removal_behaviors;
