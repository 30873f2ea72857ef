use contracts::domain::a005_stock_movement::StockMovement;
use contracts::shared::permissions::PermissionAction;
use leptos::prelude::*;

use super::super::{ENDPOINT, ENTITY};
use crate::domain::a005_stock_movement::ui::details::detail_config;
use crate::shared::entity_page::EntityPage;
use crate::shared::format::quantity_cell;
use crate::shared::list::{
    wrapped_mapper, AddAction, CellValue, ColumnDescriptor, ListConfig, Row, RowPermissions,
    SortSpec,
};
use crate::system::auth::use_auth;

fn project(m: &StockMovement) -> Row {
    Row::new(m.id)
        .with("date", CellValue::date_from_str(&m.date))
        .with("article_code", m.article_code.as_str())
        .with("article_description", m.article_description.as_str())
        .with("kind", m.kind.label())
        .with("quantity", m.signed_quantity())
        .with("reason", m.reason.as_deref())
        .with("user_name", m.user_name.as_deref())
}

/// Signed quantity with an explicit `+` for incoming stock
fn signed_quantity_cell(value: &CellValue) -> String {
    match value {
        CellValue::Number(n) if *n > 0.0 => format!("+{}", quantity_cell(value)),
        other => quantity_cell(other),
    }
}

pub fn list_config(permissions: RowPermissions, can_create: bool) -> ListConfig {
    let columns = vec![
        ColumnDescriptor::new("date", "Fecha").width(110).always_visible(),
        ColumnDescriptor::new("article_code", "Código").width(110),
        ColumnDescriptor::new("article_description", "Artículo").flex(2),
        ColumnDescriptor::new("kind", "Tipo").width(100),
        ColumnDescriptor::new("quantity", "Cantidad")
            .width(110)
            .numeric()
            .format(signed_quantity_cell),
        ColumnDescriptor::new("reason", "Motivo").flex(2),
        ColumnDescriptor::new("user_name", "Usuario").width(130),
    ];

    let mut config = ListConfig::new(
        "movimientos--list",
        "Movimientos de stock",
        ENDPOINT,
        columns,
        wrapped_mapper(ENTITY, project),
    );
    // movimientos are append-only: no edit action even with the permission
    config.permissions = RowPermissions {
        update: false,
        ..permissions
    };
    config.default_sort = SortSpec::descending("date");
    config.detail_url = Some("/movimientos");
    config.toolbar.export = Some("movimientos.csv");
    if can_create {
        config.toolbar.add = Some(AddAction {
            label: "Nuevo movimiento",
            url: "/movimientos/nuevo",
        });
    }
    config
}

#[component]
pub fn StockMovementList() -> impl IntoView {
    let auth = use_auth();
    let config = list_config(
        auth.row_permissions(ENTITY),
        auth.can(ENTITY, PermissionAction::Create),
    );

    view! { <EntityPage config=config detail=detail_config() /> }
}
