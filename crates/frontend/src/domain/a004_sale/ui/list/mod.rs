use contracts::domain::a004_sale::{Sale, SaleStatus};
use contracts::shared::permissions::PermissionAction;
use leptos::prelude::*;
use thaw::*;

use super::super::{ENDPOINT, ENTITY};
use crate::domain::a004_sale::ui::details::detail_config;
use crate::shared::entity_page::EntityPage;
use crate::shared::format::money_cell;
use crate::shared::list::{
    wrapped_mapper, AddAction, CellValue, ColumnDescriptor, ListConfig, Row, RowPermissions,
    SortSpec,
};
use crate::system::auth::use_auth;

fn project(s: &Sale) -> Row {
    Row::new(s.id)
        .with("number", s.number.as_str())
        .with("date", CellValue::date_from_str(&s.date))
        .with("client_name", s.client_name.as_str())
        .with("payment_method", s.payment_method.as_deref())
        .with("status", s.status.label())
        .with("total", s.total)
}

fn status_from_label(label: &str) -> Option<SaleStatus> {
    [SaleStatus::Pendiente, SaleStatus::Pagada, SaleStatus::Anulada]
        .into_iter()
        .find(|s| s.label() == label)
}

fn status_cell(row: &Row) -> AnyView {
    let label = row.get("status").to_string();
    let color = match status_from_label(&label) {
        Some(SaleStatus::Pagada) => BadgeColor::Success,
        Some(SaleStatus::Anulada) => BadgeColor::Danger,
        _ => BadgeColor::Warning,
    };
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>{label}</Badge>
    }
    .into_any()
}

pub fn list_config(permissions: RowPermissions, can_create: bool) -> ListConfig {
    let columns = vec![
        ColumnDescriptor::new("number", "Número").width(120).always_visible(),
        ColumnDescriptor::new("date", "Fecha").width(110),
        ColumnDescriptor::new("client_name", "Cliente").flex(2),
        ColumnDescriptor::new("payment_method", "Forma de pago").flex(1),
        ColumnDescriptor::new("status", "Estado").width(110).render(status_cell),
        ColumnDescriptor::new("total", "Total").width(140).numeric().format(money_cell),
    ];

    let mut config = ListConfig::new(
        "ventas--list",
        "Ventas",
        ENDPOINT,
        columns,
        wrapped_mapper(ENTITY, project),
    );
    config.permissions = permissions;
    config.default_sort = SortSpec::descending("date");
    config.detail_url = Some("/ventas");
    config.edit_url = Some("/ventas/editar");
    config.toolbar.export = Some("ventas.csv");
    if can_create {
        config.toolbar.add = Some(AddAction {
            label: "Nueva venta",
            url: "/ventas/nuevo",
        });
    }
    config.confirm.title = "¿Anular y eliminar la venta?";
    config
}

#[component]
pub fn SaleList() -> impl IntoView {
    let auth = use_auth();
    let config = list_config(
        auth.row_permissions(ENTITY),
        auth.can(ENTITY, PermissionAction::Create),
    );

    view! { <EntityPage config=config detail=detail_config() /> }
}
