use contracts::domain::a002_provider::Provider;
use contracts::shared::permissions::PermissionAction;
use leptos::prelude::*;

use super::super::{ENDPOINT, ENTITY};
use crate::domain::a002_provider::ui::details::detail_config;
use crate::shared::entity_page::EntityPage;
use crate::shared::format::active_cell;
use crate::shared::list::{wrapped_mapper, AddAction, ColumnDescriptor, ListConfig, Row, RowPermissions};
use crate::system::auth::use_auth;

fn project(p: &Provider) -> Row {
    Row::new(p.id)
        .with("name", p.name.as_str())
        .with("tax_id", p.tax_id.as_deref())
        .with("contact_name", p.contact_name.as_deref())
        .with("phone", p.phone.as_deref())
        .with("email", p.email.as_deref())
        .with("is_active", p.is_active)
}

pub fn list_config(permissions: RowPermissions, can_create: bool) -> ListConfig {
    let columns = vec![
        ColumnDescriptor::new("name", "Razón social").flex(2).always_visible(),
        ColumnDescriptor::new("tax_id", "CUIT").width(130),
        ColumnDescriptor::new("contact_name", "Contacto").flex(1),
        ColumnDescriptor::new("phone", "Teléfono").width(140),
        ColumnDescriptor::new("email", "Email").flex(1),
        ColumnDescriptor::new("is_active", "Estado").width(100).format(active_cell),
    ];

    let mut config = ListConfig::new(
        "proveedores--list",
        "Proveedores",
        ENDPOINT,
        columns,
        wrapped_mapper(ENTITY, project),
    );
    config.permissions = permissions;
    config.detail_url = Some("/proveedores");
    config.edit_url = Some("/proveedores/editar");
    config.toolbar.export = Some("proveedores.csv");
    if can_create {
        config.toolbar.add = Some(AddAction {
            label: "Nuevo proveedor",
            url: "/proveedores/nuevo",
        });
    }
    config.confirm.title = "¿Eliminar proveedor?";
    config
}

#[component]
pub fn ProviderList() -> impl IntoView {
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
    fn test_quick_filter_matches_contact_name() {
        let config = list_config(RowPermissions::all(), false);
        let rows = (config.mapper)(json!({
            "proveedores": [
                {"id": 1, "name": "Aceros SA", "taxId": null, "contactName": "Jorge Paz",
                 "email": null, "phone": null, "address": null, "isActive": true, "createdAt": "2023-05-01"},
                {"id": 2, "name": "Maderas Norte", "taxId": null, "contactName": "Lucía Gil",
                 "email": null, "phone": null, "address": null, "isActive": false, "createdAt": "2023-06-01"}
            ]
        }))
        .unwrap();

        let mut state = crate::shared::list::ListState::for_config(&config);
        let ticket = state.begin_load();
        state.complete_load(ticket, Ok(rows));
        state.query.filter = "lucía".to_string();

        let page = state.page(&config);
        assert_eq!(page.total_count, 1);
        assert_eq!(page.rows[0].id.as_str(), "2");
    }
}
