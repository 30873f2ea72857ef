use contracts::shared::permissions::PermissionAction;
use leptos::prelude::*;

use super::super::{ENDPOINT, ENTITY};
use crate::shared::entity_page::EntityPage;
use crate::shared::format::{active_cell, format_datetime};
use crate::shared::list::{
    json_mapper, AddAction, CellValue, ColumnDescriptor, ListConfig, RowPermissions,
};
use crate::system::auth::use_auth;
use crate::system::users::ui::details::detail_config;

fn admin_cell(value: &CellValue) -> String {
    match value {
        CellValue::Bool(true) => "Administrador".to_string(),
        CellValue::Bool(false) => "Operador".to_string(),
        other => other.to_string(),
    }
}

fn last_login_cell(value: &CellValue) -> String {
    match value {
        CellValue::Text(s) => format_datetime(s),
        CellValue::Null => "Nunca".to_string(),
        other => other.to_string(),
    }
}

pub fn list_config(permissions: RowPermissions, can_create: bool) -> ListConfig {
    let columns = vec![
        ColumnDescriptor::new("username", "Usuario").width(140).always_visible(),
        ColumnDescriptor::new("fullName", "Nombre").flex(2),
        ColumnDescriptor::new("email", "Email").flex(2),
        ColumnDescriptor::new("isAdmin", "Rol").width(130).format(admin_cell),
        ColumnDescriptor::new("isActive", "Estado").width(100).format(active_cell),
        ColumnDescriptor::new("lastLoginAt", "Último acceso")
            .width(150)
            .format(last_login_cell),
    ];

    // no typed DTO for users on this side; fields are copied as they come
    let mapper = json_mapper(
        ENTITY,
        "id",
        vec!["username", "fullName", "email", "isAdmin", "isActive", "lastLoginAt"],
    );

    let mut config = ListConfig::new("usuarios--list", "Usuarios", ENDPOINT, columns, mapper);
    config.permissions = permissions;
    config.detail_url = Some("/usuarios");
    config.edit_url = Some("/usuarios/editar");
    config.toolbar.export = Some("usuarios.csv");
    if can_create {
        config.toolbar.add = Some(AddAction {
            label: "Nuevo usuario",
            url: "/usuarios/nuevo",
        });
    }
    config.confirm.title = "¿Eliminar usuario?";
    config.confirm.description = "El usuario perderá el acceso al sistema.";
    config
}

#[component]
pub fn UserList() -> impl IntoView {
    let auth = use_auth();
    let config = list_config(
        auth.row_permissions(ENTITY),
        auth.can(ENTITY, PermissionAction::Create),
    );

    view! { <EntityPage config=config detail=detail_config() /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_is_valid() {
        assert_eq!(list_config(RowPermissions::all(), true).validate(), Ok(()));
    }

    #[test]
    fn test_rows_copy_raw_fields() {
        let config = list_config(RowPermissions::all(), false);
        let rows = (config.mapper)(json!({
            "usuarios": [
                {"id": 1, "username": "admin", "fullName": "Administrador", "email": null,
                 "isAdmin": true, "isActive": true, "permissions": [],
                 "createdAt": "2024-01-01T00:00:00Z", "lastLoginAt": "2024-05-02T09:15:00Z"},
                {"id": 2, "username": "mlopez", "fullName": null, "email": "m@x.com",
                 "isAdmin": false, "isActive": false, "permissions": ["clientes.ver"],
                 "createdAt": "2024-01-03T00:00:00Z", "lastLoginAt": null}
            ]
        }))
        .unwrap();

        assert_eq!(rows.len(), 2);
        let role = config.column("isAdmin").unwrap();
        let login = config.column("lastLoginAt").unwrap();
        assert_eq!(role.display(&rows[0]), "Administrador");
        assert_eq!(login.display(&rows[0]), "02/05/2024 09:15");
        assert_eq!(login.display(&rows[1]), "Nunca");
    }

    #[test]
    fn test_missing_wrapper_key_is_a_decode_error() {
        let config = list_config(RowPermissions::all(), false);
        assert!((config.mapper)(json!({"users": []})).is_err());
    }
}
