use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use serde_json::Value;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::api::fetch_record;
use super::state::DetailState;
use super::tabs::{column_labels, field_rows, json_text, table_rows, DetailConfig, DetailTab, TabContent};
use crate::shared::icons::icon;
use crate::shared::list::{Row, RowId};
use crate::shared::modal_frame::ModalFrame;
use crate::shared::page_frame::{page_id, PageCategory, PageFrame};
use crate::system::auth::context::{use_auth, AuthContext};

/// Open `id` and fetch it when the state machine asks for it
fn open_record(
    auth: AuthContext,
    config: StoredValue<DetailConfig>,
    state: RwSignal<DetailState>,
    id: RowId,
) {
    let Some(Some(ticket)) = state.try_update(|s| s.open(id)) else {
        return;
    };
    let client = auth.client();
    let endpoint = config.with_value(|c| c.endpoint);
    spawn_local(async move {
        let result = fetch_record(&client, endpoint, &ticket.id).await;
        if matches!(&result, Err(e) if e.is_unauthenticated()) {
            auth.expire();
        }
        state.try_update(|s| s.resolve(ticket, result));
    });
}

/// Full-screen overlay over the list. Opens when `selected` becomes `Some`.
#[component]
pub fn DetailDialog(
    config: DetailConfig,
    #[prop(into)] selected: Signal<Option<Row>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let state = RwSignal::new(DetailState::new(config.tabs.len()));
    let config = StoredValue::new(config);

    Effect::new(move |_| match selected.get() {
        Some(row) => open_record(auth, config, state, row.id),
        None => {
            if state.with_untracked(|s| s.is_open()) {
                state.update(|s| s.close());
            }
        }
    });

    view! {
        <Show when=move || state.with(|s| s.is_open())>
            <ModalFrame on_close=on_close modal_class="modal--detail">
                <DetailBody config=config state=state on_close=on_close />
            </ModalFrame>
        </Show>
    }
}

/// Routed variant of the dialog: `/<entity>/:id`
#[component]
pub fn DetailPage(entity: &'static str, config: DetailConfig) -> impl IntoView {
    let auth = use_auth();
    let params = use_params_map();
    let state = RwSignal::new(DetailState::new(config.tabs.len()));
    let config = StoredValue::new(config);

    Effect::new(move |_| {
        if let Some(id) = params.with(|p| p.get("id")) {
            open_record(auth, config, state, RowId::new(id));
        }
    });

    let list_url = config.with_value(|c| c.list_url);

    view! {
        <PageFrame page_id=page_id(entity, PageCategory::Detail) category=PageCategory::Detail>
            <div class="page__toolbar">
                <a class="button button--secondary" href=list_url>
                    {icon("chevron-left")}
                    "Volver al listado"
                </a>
            </div>
            <DetailBody config=config state=state />
        </PageFrame>
    }
}

/// Header, vertical tab rail and the active pane
#[component]
fn DetailBody(
    config: StoredValue<DetailConfig>,
    state: RwSignal<DetailState>,
    #[prop(optional)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    let tab_names = config.with_value(|c| c.tabs.iter().map(|t| t.name).collect::<Vec<_>>());

    view! {
        <div class="detail">
            <div class="detail__header">
                <h2 class="detail__title">
                    {move || state.with(|s| config.with_value(|c| c.caption(s.record())))}
                </h2>
                <Show when=move || state.with(|s| s.is_fetching())>
                    <Spinner />
                </Show>
                {on_close.map(|cb| view! {
                    <button class="button button--icon detail__close" title="Cerrar" on:click=move |_| cb.run(())>
                        {icon("x")}
                    </button>
                })}
            </div>
            <div class="detail__layout">
                <nav class="detail-tabs detail-tabs--vertical">
                    {tab_names
                        .into_iter()
                        .enumerate()
                        .map(|(index, name)| view! {
                            <button
                                class=move || {
                                    if state.with(|s| s.active_tab() == index) {
                                        "detail-tabs__item detail-tabs__item--active"
                                    } else {
                                        "detail-tabs__item"
                                    }
                                }
                                on:click=move |_| {
                                    state.update(|s| {
                                        s.select_tab(index);
                                    })
                                }
                            >
                                {name}
                            </button>
                        })
                        .collect_view()}
                </nav>
                <div class="detail__pane">
                    {move || {
                        state.with(|s| {
                            config.with_value(|c| {
                                c.tabs.get(s.active_tab()).map(|tab| render_tab(tab, s.record()))
                            })
                        })
                    }}
                </div>
            </div>
        </div>
    }
}

/// Single dispatcher over the tab variants
fn render_tab(tab: &DetailTab, record: Option<&Value>) -> AnyView {
    match &tab.content {
        TabContent::Fields(fields) => view! {
            <dl class="detail-grid">
                {field_rows(record, fields)
                    .into_iter()
                    .map(|(label, value)| view! {
                        <dt class="detail-grid__label">{label}</dt>
                        <dd class="detail-grid__value">{value}</dd>
                    })
                    .collect_view()}
            </dl>
        }
        .into_any(),
        TabContent::Table { path, columns } => {
            let rows = table_rows(record, path, columns);
            if rows.is_empty() {
                return view! { <div class="table__empty">"Sin datos"</div> }.into_any();
            }
            let labels = column_labels(columns);
            view! {
                <Table>
                    <TableHeader>
                        <TableRow>
                            {labels
                                .into_iter()
                                .map(|label| view! { <TableHeaderCell>{label}</TableHeaderCell> })
                                .collect_view()}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {rows
                            .into_iter()
                            .map(|cells| view! {
                                <TableRow>
                                    {cells
                                        .into_iter()
                                        .map(|cell| view! { <TableCell>{cell}</TableCell> })
                                        .collect_view()}
                                </TableRow>
                            })
                            .collect_view()}
                    </TableBody>
                </Table>
            }
            .into_any()
        }
        TabContent::Json => view! { <pre class="detail-json">{json_text(record)}</pre> }.into_any(),
    }
}
