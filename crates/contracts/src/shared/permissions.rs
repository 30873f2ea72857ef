//! Permission strings have the shape `<resource>.<action>`, e.g. `clientes.eliminar`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermissionAction {
    #[serde(rename = "ver")]
    View,
    #[serde(rename = "crear")]
    Create,
    #[serde(rename = "editar")]
    Update,
    #[serde(rename = "eliminar")]
    Delete,
}

impl PermissionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionAction::View => "ver",
            PermissionAction::Create => "crear",
            PermissionAction::Update => "editar",
            PermissionAction::Delete => "eliminar",
        }
    }
}

/// Build the permission string for a resource/action pair
pub fn permission(resource: &str, action: PermissionAction) -> String {
    format!("{}.{}", resource, action.as_str())
}
