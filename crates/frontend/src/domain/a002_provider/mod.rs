//! Providers

pub mod ui;

pub const ENTITY: &str = "proveedores";
pub const ENDPOINT: &str = "/api/proveedores";
