//! Header cell that toggles the list sort on click
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Total"
//!     field="total"
//!     sort=Signal::derive(move || state.with(|s| s.query.sort.clone()))
//!     on_sort=Callback::new(move |field| toggle_sort(field))
//! />
//! ```

use crate::shared::list::{Align, SortSpec};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    label: &'static str,
    field: &'static str,
    #[prop(into)] sort: Signal<SortSpec>,
    on_sort: Callback<&'static str>,
    /// Unsortable columns render a plain header
    #[prop(optional, default = true)]
    sortable: bool,
    #[prop(optional)] align: Align,
    #[prop(optional, into)] style: String,
) -> impl IntoView {
    let header_style = match align {
        Align::Right => "justify-content: flex-end; padding-right: 12px;",
        Align::Left => "padding-right: 12px;",
    };

    if !sortable {
        return view! {
            <TableHeaderCell attr:style=style>
                <div class="table__header" style=header_style>{label}</div>
            </TableHeaderCell>
        }
        .into_any();
    }

    let indicator_class = move || {
        if sort.with(|s| s.field == field) {
            "table__sort-indicator table__sort-indicator--active"
        } else {
            "table__sort-indicator"
        }
    };

    view! {
        <TableHeaderCell attr:style=style>
            <div
                class="table__sortable-header"
                style=format!("cursor: pointer; {}", header_style)
                on:click=move |_| on_sort.run(field)
            >
                {label}
                <span class=indicator_class>{move || sort.with(|s| s.indicator(field))}</span>
            </div>
        </TableHeaderCell>
    }
    .into_any()
}
