use leptos::prelude::*;

use super::super::{ENDPOINT, ENTITY};
use crate::shared::detail::{DetailConfig, DetailPage, DetailTab, FieldFormat, FieldSpec};

pub fn detail_config() -> DetailConfig {
    DetailConfig {
        title: "Usuario",
        endpoint: ENDPOINT,
        caption_path: "username",
        list_url: "/usuarios",
        tabs: vec![
            DetailTab::fields(
                "General",
                vec![
                    FieldSpec::text("Usuario", "username"),
                    FieldSpec::text("Nombre", "fullName"),
                    FieldSpec::text("Email", "email"),
                    FieldSpec::flag("Administrador", "isAdmin"),
                    FieldSpec::flag("Activo", "isActive"),
                    FieldSpec::new("Alta", "createdAt", FieldFormat::DateTime),
                    FieldSpec::new("Último acceso", "lastLoginAt", FieldFormat::DateTime),
                ],
            ),
            DetailTab::fields(
                "Permisos",
                vec![FieldSpec::new("Permisos", "permissions", FieldFormat::List)],
            ),
            DetailTab::json(),
        ],
    }
}

#[component]
pub fn UserDetailPage() -> impl IntoView {
    view! { <DetailPage entity=ENTITY config=detail_config() /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::detail::tabs::field_rows;
    use serde_json::json;

    #[test]
    fn test_permissions_tab_joins_the_list() {
        let config = detail_config();
        let record = json!({"id": 2, "permissions": ["clientes.ver", "ventas.crear"]});
        let crate::shared::detail::TabContent::Fields(fields) = &config.tabs[1].content else {
            panic!("permissions tab shows fields");
        };
        assert_eq!(
            field_rows(Some(&record), fields),
            vec![("Permisos", "clientes.ver, ventas.crear".to_string())]
        );
    }
}
