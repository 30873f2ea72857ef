use contracts::shared::permissions::{permission, PermissionAction};

/// One navigation entry; visible only with `<resource>.ver`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub resource: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

impl MenuItem {
    pub fn required_permission(&self) -> String {
        permission(self.resource, PermissionAction::View)
    }
}

pub fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            resource: "clientes",
            label: "Clientes",
            icon: "clients",
            url: "/clientes",
        },
        MenuItem {
            resource: "proveedores",
            label: "Proveedores",
            icon: "providers",
            url: "/proveedores",
        },
        MenuItem {
            resource: "articulos",
            label: "Artículos",
            icon: "articles",
            url: "/articulos",
        },
        MenuItem {
            resource: "ventas",
            label: "Ventas",
            icon: "sales",
            url: "/ventas",
        },
        MenuItem {
            resource: "movimientos",
            label: "Movimientos de stock",
            icon: "stock",
            url: "/movimientos",
        },
        MenuItem {
            resource: "usuarios",
            label: "Usuarios",
            icon: "users",
            url: "/usuarios",
        },
    ]
}

/// Entries the current user may open
pub fn visible_items(has_permission: impl Fn(&str) -> bool) -> Vec<MenuItem> {
    menu_items()
        .into_iter()
        .filter(|item| has_permission(&item.required_permission()))
        .collect()
}

/// Active when the path is the item's list or one of its sub-pages
pub fn is_active(item: &MenuItem, path: &str) -> bool {
    path == item.url
        || path
            .strip_prefix(item.url)
            .is_some_and(|rest| rest.starts_with('/'))
}
