//! Stock movements

pub mod ui;

pub const ENTITY: &str = "movimientos";
pub const ENDPOINT: &str = "/api/movimientos";
