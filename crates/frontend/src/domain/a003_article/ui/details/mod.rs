use leptos::prelude::*;

use super::super::{ENDPOINT, ENTITY};
use crate::shared::detail::{DetailConfig, DetailPage, DetailTab, FieldSpec};

pub fn detail_config() -> DetailConfig {
    DetailConfig {
        title: "Artículo",
        endpoint: ENDPOINT,
        caption_path: "code",
        list_url: "/articulos",
        tabs: vec![
            DetailTab::fields(
                "General",
                vec![
                    FieldSpec::text("Código", "code"),
                    FieldSpec::text("Descripción", "description"),
                    FieldSpec::text("Categoría", "category"),
                    FieldSpec::text("Proveedor", "providerName"),
                    FieldSpec::flag("Activo", "isActive"),
                ],
            ),
            DetailTab::fields(
                "Precios y stock",
                vec![
                    FieldSpec::money("Costo", "costPrice"),
                    FieldSpec::money("Precio de venta", "salePrice"),
                    FieldSpec::number("Stock", "stock"),
                    FieldSpec::number("Stock mínimo", "minStock"),
                ],
            ),
            DetailTab::json(),
        ],
    }
}

#[component]
pub fn ArticleDetailPage() -> impl IntoView {
    view! { <DetailPage entity=ENTITY config=detail_config() /> }
}
