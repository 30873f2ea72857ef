use leptos::prelude::*;

use super::super::{ENDPOINT, ENTITY};
use crate::shared::detail::{DetailConfig, DetailPage, DetailTab, FieldSpec};

pub fn detail_config() -> DetailConfig {
    DetailConfig {
        title: "Movimiento",
        endpoint: ENDPOINT,
        caption_path: "articleCode",
        list_url: "/movimientos",
        tabs: vec![
            DetailTab::fields(
                "General",
                vec![
                    FieldSpec::date("Fecha", "date"),
                    FieldSpec::text("Código", "articleCode"),
                    FieldSpec::text("Artículo", "articleDescription"),
                    FieldSpec::text("Tipo", "kind"),
                    FieldSpec::number("Cantidad", "quantity"),
                    FieldSpec::text("Motivo", "reason"),
                    FieldSpec::text("Usuario", "userName"),
                ],
            ),
            DetailTab::json(),
        ],
    }
}

#[component]
pub fn StockMovementDetailPage() -> impl IntoView {
    view! { <DetailPage entity=ENTITY config=detail_config() /> }
}
