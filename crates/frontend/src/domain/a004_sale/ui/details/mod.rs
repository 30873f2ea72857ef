use leptos::prelude::*;

use super::super::{ENDPOINT, ENTITY};
use crate::shared::detail::{DetailConfig, DetailPage, DetailTab, FieldSpec};

pub fn detail_config() -> DetailConfig {
    DetailConfig {
        title: "Venta",
        endpoint: ENDPOINT,
        caption_path: "number",
        list_url: "/ventas",
        tabs: vec![
            DetailTab::fields(
                "General",
                vec![
                    FieldSpec::text("Número", "number"),
                    FieldSpec::date("Fecha", "date"),
                    FieldSpec::text("Cliente", "clientName"),
                    FieldSpec::text("Forma de pago", "paymentMethod"),
                    FieldSpec::text("Estado", "status"),
                    FieldSpec::money("Total", "total"),
                ],
            ),
            DetailTab::table(
                "Líneas",
                "lines",
                vec![
                    FieldSpec::text("Código", "articleCode"),
                    FieldSpec::text("Descripción", "description"),
                    FieldSpec::number("Cantidad", "quantity"),
                    FieldSpec::money("Precio unitario", "unitPrice"),
                    FieldSpec::money("Subtotal", "subtotal"),
                ],
            ),
            DetailTab::json(),
        ],
    }
}

#[component]
pub fn SaleDetailPage() -> impl IntoView {
    view! { <DetailPage entity=ENTITY config=detail_config() /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::detail::tabs::table_rows;
    use crate::shared::detail::TabContent;
    use serde_json::json;

    #[test]
    fn test_lines_tab_reads_sale_lines() {
        let config = detail_config();
        let TabContent::Table { path, columns } = &config.tabs[1].content else {
            panic!("second tab is the lines table");
        };
        let record = json!({
            "id": 2,
            "lines": [
                {"articleCode": "A-01", "description": "Tornillo", "quantity": 4,
                 "unitPrice": 15.5, "subtotal": 62.0}
            ]
        });
        assert_eq!(
            table_rows(Some(&record), path, columns),
            vec![vec![
                "A-01".to_string(),
                "Tornillo".to_string(),
                "4".to_string(),
                "$ 15,50".to_string(),
                "$ 62,00".to_string(),
            ]]
        );
    }
}
