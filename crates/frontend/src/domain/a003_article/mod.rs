//! Articles

pub mod ui;

pub const ENTITY: &str = "articulos";
pub const ENDPOINT: &str = "/api/articulos";
