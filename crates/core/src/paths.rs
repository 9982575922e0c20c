//! Front-end route paths, shared by redirects and the router.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const SETUP: &str = "/setup";
pub const PLANTS: &str = "/plants";
pub const ADD_PLANT: &str = "/addplant";
pub const REMOVE_PLANT: &str = "/removeplant";
pub const CHANGE_CONNECTION: &str = "/changeconnection";

/// Detail page path for one plant.
#[must_use]
pub fn plant(id: &str) -> String {
    let Ok(mut url) = url::Url::parse("http://localhost/plants") else {
        return format!("{PLANTS}/{id}");
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(id);
    }
    url.path().to_string()
}

/// Add-plant page with the device id field prefilled.
#[must_use]
pub fn add_plant_for(device_id: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("device_id", device_id)
        .finish();
    format!("{ADD_PLANT}?{query}")
}
