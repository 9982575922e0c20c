//! Page components for PlantKnight
//!
//! One component per route. Pages hold only field and display state; the
//! request/response work happens in `plantknight_core::Services`.

pub mod add_plant;
pub mod change_connection;
pub mod home;
pub mod login;
pub mod not_found;
pub mod plant;
pub mod plants;
pub mod remove_plant;
pub mod setup;

pub use add_plant::AddPlant;
pub use change_connection::ChangeConnection;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use plant::Plant;
pub use plants::Plants;
pub use remove_plant::RemovePlant;
pub use setup::Setup;
