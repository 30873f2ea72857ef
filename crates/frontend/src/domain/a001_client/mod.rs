//! Clients

pub mod ui;

/// Route segment and permission resource
pub const ENTITY: &str = "clientes";
pub const ENDPOINT: &str = "/api/clientes";
