//! Router configuration for PlantKnight
//!
//! Maps URL paths to pages. Paths come from `plantknight_core::paths` so
//! redirects issued by the page services always land on a real route.

use leptos::prelude::*;
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Routes},
};

use crate::pages::{
    AddPlant, ChangeConnection, Home, Login, NotFound, Plant, Plants, RemovePlant, Setup,
};
use crate::pages::plant::PLANT_ID_PARAM;

/// Route definitions as constants for type safety
pub mod routes {
    pub use plantknight_core::paths::{
        ADD_PLANT, CHANGE_CONNECTION, HOME, LOGIN, PLANTS, REMOVE_PLANT, SETUP, plant as plant_path,
    };
}

/// All page routes; must be rendered inside a `Router`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFound /> }>
            <Route path=StaticSegment("") view=Home />
            <Route path=StaticSegment("login") view=Login />
            <Route path=StaticSegment("setup") view=Setup />
            <Route path=StaticSegment("plants") view=Plants />
            <Route path=(StaticSegment("plants"), ParamSegment(PLANT_ID_PARAM)) view=Plant />
            <Route path=StaticSegment("addplant") view=AddPlant />
            <Route path=StaticSegment("removeplant") view=RemovePlant />
            <Route path=StaticSegment("changeconnection") view=ChangeConnection />
        </Routes>
    }
}
