use contracts::domain::a001_client::Client;
use contracts::shared::permissions::PermissionAction;
use leptos::prelude::*;

use super::super::{ENDPOINT, ENTITY};
use crate::domain::a001_client::ui::details::detail_config;
use crate::shared::entity_page::EntityPage;
use crate::shared::format::{active_cell, money_cell};
use crate::shared::list::{
    wrapped_mapper, AddAction, CellValue, ColumnDescriptor, ListConfig, Row, RowPermissions,
};
use crate::system::auth::use_auth;

fn project(c: &Client) -> Row {
    Row::new(c.id)
        .with("name", c.name.as_str())
        .with("tax_id", c.tax_id.as_deref())
        .with("city", c.city.as_deref())
        .with("phone", c.phone.as_deref())
        .with("email", c.email.as_deref())
        .with("balance", c.balance)
        .with("is_active", c.is_active)
        .with("created_at", CellValue::date_from_str(&c.created_at))
}

pub fn list_config(permissions: RowPermissions, can_create: bool) -> ListConfig {
    let columns = vec![
        ColumnDescriptor::new("name", "Nombre").flex(2).always_visible(),
        ColumnDescriptor::new("tax_id", "CUIT").width(130),
        ColumnDescriptor::new("city", "Ciudad").flex(1),
        ColumnDescriptor::new("phone", "Teléfono").width(140),
        ColumnDescriptor::new("email", "Email").flex(1),
        ColumnDescriptor::new("balance", "Saldo").width(130).numeric().format(money_cell),
        ColumnDescriptor::new("is_active", "Estado").width(100).format(active_cell),
        ColumnDescriptor::new("created_at", "Alta").width(110),
    ];

    let mut config = ListConfig::new(
        "clientes--list",
        "Clientes",
        ENDPOINT,
        columns,
        wrapped_mapper(ENTITY, project),
    );
    config.permissions = permissions;
    config.detail_url = Some("/clientes");
    config.edit_url = Some("/clientes/editar");
    config.toolbar.export = Some("clientes.csv");
    if can_create {
        config.toolbar.add = Some(AddAction {
            label: "Nuevo cliente",
            url: "/clientes/nuevo",
        });
    }
    config.confirm.title = "¿Eliminar cliente?";
    config
}

#[component]
pub fn ClientList() -> impl IntoView {
    let auth = use_auth();
    let config = list_config(
        auth.row_permissions(ENTITY),
        auth.can(ENTITY, PermissionAction::Create),
    );

    view! { <EntityPage config=config detail=detail_config() /> }
}
