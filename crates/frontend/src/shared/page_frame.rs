//! PageFrame — root wrapper for every routed page.
//!
//! Sets `id` (`"{entity}--{category}"`, e.g. `"clientes--list"`) and
//! `data-page-category` on the root element.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCategory {
    List,
    Detail,
    System,
}

impl PageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageCategory::List => "list",
            PageCategory::Detail => "detail",
            PageCategory::System => "system",
        }
    }

    fn base_class(&self) -> &'static str {
        match self {
            PageCategory::List => "page",
            PageCategory::Detail => "page page--detail",
            PageCategory::System => "page page--system",
        }
    }
}

pub fn page_id(entity: &str, category: PageCategory) -> String {
    format!("{}--{}", entity, category.as_str())
}

#[component]
pub fn PageFrame(
    #[prop(into)] page_id: String,
    category: PageCategory,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        category.base_class().to_string()
    } else {
        format!("{} {}", category.base_class(), class)
    };

    view! {
        <div id=page_id class=full_class data-page-category=category.as_str()>
            {children()}
        </div>
    }
}
