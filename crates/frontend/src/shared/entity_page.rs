//! List page of one entity: the tabular list plus, when the entity has a
//! detail endpoint, the detail dialog opened by the `view` action.

use leptos::prelude::*;

use crate::shared::detail::{DetailConfig, DetailDialog};
use crate::shared::list::{ListConfig, Row, TabularList};

#[component]
pub fn EntityPage(
    config: ListConfig,
    #[prop(optional)] detail: Option<DetailConfig>,
) -> impl IntoView {
    let Some(detail) = detail else {
        return view! { <TabularList config=config /> }.into_any();
    };

    let selected = RwSignal::new(None::<Row>);
    view! {
        <TabularList
            config=config
            on_view=Callback::new(move |row: Row| selected.set(Some(row)))
        />
        <DetailDialog
            config=detail
            selected=selected
            on_close=Callback::new(move |_| selected.set(None))
        />
    }
    .into_any()
}
