pub mod ui;

/// Resource name used in permission strings (`usuarios.ver`, ...)
pub const ENTITY: &str = "usuarios";
pub const ENDPOINT: &str = "/api/usuarios";
