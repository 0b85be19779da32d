#[macro_use]
mod logging;

pub mod api;
pub mod components;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod map;
pub mod models;
pub mod render;

pub use components::app::App;
