use leptos::prelude::*;

use super::super::{ENDPOINT, ENTITY};
use crate::shared::detail::{DetailConfig, DetailPage, DetailTab, FieldSpec};

pub fn detail_config() -> DetailConfig {
    DetailConfig {
        title: "Cliente",
        endpoint: ENDPOINT,
        caption_path: "name",
        list_url: "/clientes",
        tabs: vec![
            DetailTab::fields(
                "General",
                vec![
                    FieldSpec::text("Nombre", "name"),
                    FieldSpec::text("CUIT", "taxId"),
                    FieldSpec::money("Saldo", "balance"),
                    FieldSpec::flag("Activo", "isActive"),
                    FieldSpec::date("Alta", "createdAt"),
                ],
            ),
            DetailTab::fields(
                "Contacto",
                vec![
                    FieldSpec::text("Email", "email"),
                    FieldSpec::text("Teléfono", "phone"),
                    FieldSpec::text("Dirección", "address"),
                    FieldSpec::text("Ciudad", "city"),
                ],
            ),
            DetailTab::json(),
        ],
    }
}

#[component]
pub fn ClientDetailPage() -> impl IntoView {
    view! { <DetailPage entity=ENTITY config=detail_config() /> }
}
