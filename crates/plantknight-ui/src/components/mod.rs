//! Reusable UI components

pub mod confirm_dialog;
pub mod loading;
pub mod plant_list;
pub mod reading_row;
pub mod status_message;

pub use confirm_dialog::ConfirmDialog;
pub use loading::LoadingIndicator;
pub use plant_list::PlantListView;
pub use reading_row::ReadingRow;
pub use status_message::{StatusMessage, SubmitStatus};
