use contracts::domain::a003_article::Article;
use contracts::shared::permissions::PermissionAction;
use leptos::prelude::*;

use super::super::{ENDPOINT, ENTITY};
use crate::domain::a003_article::ui::details::detail_config;
use crate::shared::entity_page::EntityPage;
use crate::shared::format::{active_cell, money_cell, quantity_cell};
use crate::shared::list::{
    wrapped_mapper, AddAction, CellValue, ColumnDescriptor, ListConfig, Row, RowPermissions,
    SortSpec,
};
use crate::system::auth::use_auth;

fn project(a: &Article) -> Row {
    Row::new(a.id)
        .with("code", a.code.as_str())
        .with("description", a.description.as_str())
        .with("category", a.category.as_deref())
        .with("provider_name", a.provider_name.as_deref())
        .with("cost_price", a.cost_price)
        .with("sale_price", a.sale_price)
        .with("stock", a.stock)
        .with("min_stock", a.min_stock)
        .with("below_min", a.is_below_min_stock())
        .with("is_active", a.is_active)
}

fn stock_cell(row: &Row) -> AnyView {
    let text = quantity_cell(row.get("stock"));
    if matches!(row.get("below_min"), CellValue::Bool(true)) {
        view! { <span class="cell--warning" title="Stock por debajo del mínimo">{text}</span> }
            .into_any()
    } else {
        text.into_any()
    }
}

pub fn list_config(permissions: RowPermissions, can_create: bool) -> ListConfig {
    let columns = vec![
        ColumnDescriptor::new("code", "Código").width(110).always_visible(),
        ColumnDescriptor::new("description", "Descripción").flex(3),
        ColumnDescriptor::new("category", "Categoría").flex(1),
        ColumnDescriptor::new("provider_name", "Proveedor").flex(1),
        ColumnDescriptor::new("cost_price", "Costo").width(120).numeric().format(money_cell),
        ColumnDescriptor::new("sale_price", "Precio").width(120).numeric().format(money_cell),
        ColumnDescriptor::new("stock", "Stock")
            .width(90)
            .numeric()
            .format(quantity_cell)
            .render(stock_cell),
        ColumnDescriptor::new("is_active", "Estado").width(100).format(active_cell),
    ];

    let mut config = ListConfig::new(
        "articulos--list",
        "Artículos",
        ENDPOINT,
        columns,
        wrapped_mapper(ENTITY, project),
    );
    config.permissions = permissions;
    config.default_sort = SortSpec::ascending("description");
    config.detail_url = Some("/articulos");
    config.edit_url = Some("/articulos/editar");
    config.toolbar.export = Some("articulos.csv");
    if can_create {
        config.toolbar.add = Some(AddAction {
            label: "Nuevo artículo",
            url: "/articulos/nuevo",
        });
    }
    config.confirm.title = "¿Eliminar artículo?";
    config
}

#[component]
pub fn ArticleList() -> impl IntoView {
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
    use crate::shared::list::ListState;
    use serde_json::json;

    fn rows(config: &ListConfig) -> Vec<Row> {
        (config.mapper)(json!({
            "articulos": [
                {"id": 1, "code": "A-01", "description": "Tornillo 5mm", "category": "Bulonería",
                 "providerName": "Aceros SA", "costPrice": 10.0, "salePrice": 15.5,
                 "stock": 3.0, "minStock": 10.0, "isActive": true},
                {"id": 2, "code": "A-02", "description": "Arandela", "category": null,
                 "providerName": null, "costPrice": 1.0, "salePrice": 2.0,
                 "stock": 1500.0, "isActive": true}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_config_is_valid() {
        assert_eq!(list_config(RowPermissions::all(), true).validate(), Ok(()));
    }

    #[test]
    fn test_low_stock_flag_is_projected() {
        let config = list_config(RowPermissions::all(), false);
        let rows = rows(&config);
        assert_eq!(rows[0].get("below_min"), &CellValue::Bool(true));
        assert_eq!(rows[1].get("below_min"), &CellValue::Bool(false));
        assert_eq!(config.column("stock").unwrap().display(&rows[1]), "1.500");
    }

    #[test]
    fn test_default_sort_is_by_description() {
        let config = list_config(RowPermissions::all(), false);
        let mut state = ListState::for_config(&config);
        let ticket = state.begin_load();
        state.complete_load(ticket, Ok(rows(&config)));

        let page = state.page(&config);
        let codes: Vec<_> = page.rows.iter().map(|r| r.get("code").to_string()).collect();
        assert_eq!(codes, vec!["A-02", "A-01"]);
    }
}
