pub mod flags;
pub mod params;
pub mod routes;
pub mod settings;
pub mod status_page;
pub mod tls;
pub mod views;
