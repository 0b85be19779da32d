pub mod app;
pub mod route_form;
pub mod route_info;
pub mod route_map;
