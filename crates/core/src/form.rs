//! Form-submit pattern.
//!
//! A form collects required strings, refuses to submit while a previous
//! submission is still in flight, issues one request, and ends with a
//! [`FormOutcome`]: a visible message plus an optional delayed redirect.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::Error;
use crate::result::Result;

/// Where to go after a successful submission, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub path: String,
    pub delay_ms: u32,
}

impl Redirect {
    pub fn after(path: impl Into<String>, delay_ms: u32) -> Self {
        Self {
            path: path.into(),
            delay_ms,
        }
    }

    pub fn immediate(path: impl Into<String>) -> Self {
        Self::after(path, 0)
    }
}

/// Result of one submission as the page renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOutcome {
    pub success: bool,
    pub message: String,
    pub redirect: Option<Redirect>,
}

impl FormOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            redirect: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            redirect: None,
        }
    }

    /// Builder pattern: navigate after success
    #[must_use]
    pub fn with_redirect(mut self, redirect: Redirect) -> Self {
        self.redirect = Some(redirect);
        self
    }

    /// The state a page shows once this outcome arrives.
    #[must_use]
    pub fn into_state(self) -> SubmitState {
        if self.success {
            SubmitState::Succeeded(self.message)
        } else {
            SubmitState::Failed(self.message)
        }
    }
}

/// UI state of a form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmitState {
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The message to show under the form; empty while idle or submitting.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Succeeded(message) | Self::Failed(message) => message,
            Self::Idle | Self::Submitting => "",
        }
    }
}

/// Rejects a second submission while one is in flight.
///
/// Clones share the flag.
#[derive(Debug, Clone, Default)]
pub struct SubmitGuard {
    in_flight: Arc<AtomicBool>,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the form. `None` while another submission holds it.
    #[must_use]
    pub fn try_begin(&self) -> Option<SubmitTicket> {
        self.in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| SubmitTicket {
                in_flight: Arc::clone(&self.in_flight),
            })
    }
}

/// Held for the duration of a submission; dropping it frees the form.
#[derive(Debug)]
pub struct SubmitTicket {
    in_flight: Arc<AtomicBool>,
}

impl Drop for SubmitTicket {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::SeqCst);
    }
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::MissingField { field })
    } else {
        Ok(())
    }
}

/// Login form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    /// `MissingField` for the first blank field.
    pub fn validate(&self) -> Result<()> {
        require("Username", &self.username)?;
        require("Password", &self.password)
    }
}

/// Account setup form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupForm {
    pub username: String,
    pub password: String,
    pub device_id: String,
}

impl SetupForm {
    /// # Errors
    /// `MissingField` for the first blank field.
    pub fn validate(&self) -> Result<()> {
        require("Username", &self.username)?;
        require("Password", &self.password)?;
        require("Connection Id", &self.device_id)
    }
}

/// Add-plant form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddPlantForm {
    pub plant_name: String,
    pub species: String,
    pub device_id: String,
}

impl AddPlantForm {
    /// # Errors
    /// `MissingField` for the first blank field.
    pub fn validate(&self) -> Result<()> {
        require("Name", &self.plant_name)?;
        require("Species", &self.species)?;
        require("Device Id", &self.device_id)
    }
}

/// Change-connection form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeConnectionForm {
    pub device_id: String,
}

impl ChangeConnectionForm {
    /// # Errors
    /// `MissingField` when the id is blank.
    pub fn validate(&self) -> Result<()> {
        require("Connection Id", &self.device_id)
    }
}
