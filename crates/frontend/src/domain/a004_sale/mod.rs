//! Sales

pub mod ui;

pub const ENTITY: &str = "ventas";
pub const ENDPOINT: &str = "/api/ventas";
