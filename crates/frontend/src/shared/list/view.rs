use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::api::{delete_row, fetch_rows};
use super::config::{ListConfig, RowAction};
use super::confirm::ConfirmDialog;
use super::query::arrange;
use super::row::{Row, RowId};
use super::state::{ListState, LoadOutcome};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::export::{export_csv, table_cells};
use crate::shared::icons::icon;
use crate::shared::notification::{use_notifier, Notification};
use crate::system::auth::context::use_auth;

/// Generic list: loads `config.endpoint` on mount, then filters, sorts and
/// pages locally. `reload` changes trigger a refetch.
#[component]
pub fn TabularList(
    config: ListConfig,
    /// Replaces the `view` link with a callback (detail dialog)
    #[prop(optional, into)]
    on_view: Option<Callback<Row>>,
    #[prop(optional, into)] reload: Option<Signal<u32>>,
) -> impl IntoView {
    let auth = use_auth();
    let notifier = use_notifier();

    if let Err(e) = config.validate() {
        log::error!("{}: invalid list configuration: {}", config.page_id, e);
        return view! {
            <div id=config.page_id class="alert alert--error">
                {format!("Configuración de lista inválida: {}", e)}
            </div>
        }
        .into_any();
    }

    let state = RwSignal::new(ListState::for_config(&config));
    let config = StoredValue::new(config);

    let load_data = move || {
        let Some(ticket) = state.try_update(|s| s.begin_load()) else {
            return;
        };
        let client = auth.client();
        let (endpoint, mapper) = config.with_value(|c| (c.endpoint, c.mapper.clone()));
        spawn_local(async move {
            let result = fetch_rows(&client, endpoint, &mapper).await;
            if matches!(&result, Err(e) if e.is_unauthenticated()) {
                auth.expire();
            }
            if let Some(LoadOutcome::Failed(n)) = state.try_update(|s| s.complete_load(ticket, result)) {
                notifier.notify(n);
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded()) {
            load_data();
        }
    });

    if let Some(reload) = reload {
        Effect::new(move |prev: Option<u32>| {
            let value = reload.get();
            if prev.is_some_and(|p| p != value) {
                load_data();
            }
            value
        });
    }

    let search = RwSignal::new(String::new());
    Effect::new(move |_| {
        let text = search.get();
        state.update(|s| {
            if s.query.filter != text {
                s.query.filter = text;
                s.query.page = 0;
            }
        });
    });

    let page = Memo::new(move |_| state.with(|s| config.with_value(|c| s.page(c))));
    let visible_columns = move || {
        state.with(|s| {
            config.with_value(|c| {
                s.query
                    .visible_columns(&c.columns)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
            })
        })
    };
    let actions = config.with_value(|c| c.permissions.actions());
    let has_actions = !actions.is_empty();

    let toggle_sort = Callback::new(move |field: &'static str| {
        state.update(|s| {
            s.query.sort.toggle(field);
            s.query.page = 0;
        });
    });

    let request_delete = move |id: RowId| {
        if let Some(Err(notice)) = state.try_update(|s| s.request_delete(id)) {
            notifier.notify(notice);
        }
    };

    let cancel_delete = Callback::new(move |_: ()| {
        if let Some(n) = state.try_update(|s| s.cancel_delete()) {
            notifier.notify(n);
        }
    });

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(Some(ticket)) = state.try_update(|s| s.confirm_delete()) else {
            return;
        };
        let client = auth.client();
        let endpoint = config.with_value(|c| c.endpoint);
        spawn_local(async move {
            let result = delete_row(&client, endpoint, &ticket.id).await;
            if matches!(&result, Err(e) if e.is_unauthenticated()) {
                auth.expire();
            }
            if let Some(n) = state.try_update(|s| s.complete_delete(ticket, result)) {
                notifier.notify(n);
            }
        });
    });

    let export = move |_| {
        let Some(filename) = config.with_value(|c| c.toolbar.export) else {
            return;
        };
        let (headers, cells) = state.with_untracked(|s| {
            config.with_value(|c| {
                let rows = arrange(s.rows(), &c.columns, &s.query);
                table_cells(&rows, &s.query.visible_columns(&c.columns))
            })
        });
        if let Err(e) = export_csv(&headers, &cells, filename) {
            notifier.notify(Notification::error(e));
        }
    };

    let render_row = move |row: Row| {
        let cells = visible_columns()
            .into_iter()
            .map(|col| {
                let content = match &col.renderer {
                    Some(render) => render(&row),
                    None => col.display(&row).into_any(),
                };
                view! {
                    <TableCell attr:style=col.style()>
                        <TableCellLayout truncate=true>{content}</TableCellLayout>
                    </TableCell>
                }
            })
            .collect_view();

        let buttons = actions
            .iter()
            .map(|action| render_action(*action, &row, config, on_view, request_delete, state))
            .collect_view();

        view! {
            <TableRow>
                {cells}
                {has_actions.then(|| view! {
                    <TableCell>
                        <div class="table__actions">{buttons}</div>
                    </TableCell>
                })}
            </TableRow>
        }
    };

    let (page_id, title, toolbar, confirm_texts) = config.with_value(|c| {
        (c.page_id, c.title, c.toolbar.clone(), c.confirm.clone())
    });

    view! {
        <div id=page_id class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>{move || page.with(|p| p.total_count.to_string())}</Badge>
                    <Show when=move || state.with(|s| s.is_loading())>
                        <Spinner />
                    </Show>
                </div>
                <div class="page__header-right">
                    {toolbar.quick_filter.then(|| view! {
                        <Input value=search placeholder="Buscar… (mín. 3 caracteres)" />
                    })}
                    {toolbar.add.map(|add| view! {
                        <a class="button button--primary" href=add.url>
                            {icon("plus")}
                            {add.label}
                        </a>
                    })}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                    >
                        {icon("refresh")}
                        "Actualizar"
                    </Button>
                    {toolbar.export.map(|_| view! {
                        <Button appearance=ButtonAppearance::Secondary on_click=export>
                            {icon("download")}
                            "Exportar"
                        </Button>
                    })}
                    {toolbar.column_picker.then(|| view! { <ColumnPicker config=config state=state /> })}
                </div>
            </div>

            <div class="page__content">
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {move || {
                                    visible_columns()
                                        .into_iter()
                                        .map(|col| view! {
                                            <SortableHeaderCell
                                                label=col.label
                                                field=col.key
                                                sort=Signal::derive(move || state.with(|s| s.query.sort.clone()))
                                                on_sort=toggle_sort
                                                sortable=col.sortable
                                                align=col.align
                                                style=col.style()
                                            />
                                        })
                                        .collect_view()
                                }}
                                {has_actions.then(|| view! {
                                    <TableHeaderCell attr:style="width: 120px;">"Acciones"</TableHeaderCell>
                                })}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || page.get().rows.into_iter().map(|row| render_row(row)).collect_view()}
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.is_loaded()) && page.with(|p| p.total_count == 0)>
                        <div class="table__empty">
                            {move || if state.with(|s| s.query.is_filter_active()) {
                                "Sin coincidencias para el filtro"
                            } else {
                                "No hay registros"
                            }}
                        </div>
                    </Show>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || page.with(|p| p.page))
                    total_pages=Signal::derive(move || page.with(|p| p.total_pages))
                    total_count=Signal::derive(move || page.with(|p| p.total_count))
                    page_size=Signal::derive(move || state.with(|s| s.query.page_size))
                    on_page_change=Callback::new(move |p: usize| state.update(|s| s.query.page = p))
                    on_page_size_change=Callback::new(move |size: usize| {
                        state.update(|s| {
                            s.query.page_size = size;
                            s.query.page = 0;
                        })
                    })
                />
            </div>

            {move || {
                state.with(|s| s.confirming().is_some()).then(|| {
                    view! {
                        <ConfirmDialog
                            texts=confirm_texts.clone()
                            on_confirm=confirm_delete
                            on_cancel=cancel_delete
                        />
                    }
                })
            }}
        </div>
    }
    .into_any()
}

fn render_action(
    action: RowAction,
    row: &Row,
    config: StoredValue<ListConfig>,
    on_view: Option<Callback<Row>>,
    request_delete: impl Fn(RowId) + Copy + 'static,
    state: RwSignal<ListState>,
) -> AnyView {
    let title = action.title();
    match action {
        RowAction::View if on_view.is_some() => {
            let row = row.clone();
            view! {
                <button
                    class="button button--icon"
                    title=title
                    on:click=move |_| {
                        if let Some(cb) = on_view {
                            cb.run(row.clone());
                        }
                    }
                >
                    {icon(action.icon())}
                </button>
            }
            .into_any()
        }
        RowAction::View | RowAction::Edit => {
            match config.with_value(|c| c.navigation_target(action, &row.id)) {
                Some(href) => view! {
                    <a class="button button--icon" title=title href=href>
                        {icon(action.icon())}
                    </a>
                }
                .into_any(),
                None => ().into_any(),
            }
        }
        RowAction::Delete => {
            let id = row.id.clone();
            let busy_id = row.id.clone();
            view! {
                <button
                    class="button button--icon button--danger"
                    title=title
                    disabled=move || state.with(|s| s.is_deleting(&busy_id))
                    on:click=move |_| request_delete(id.clone())
                >
                    {icon(action.icon())}
                </button>
            }
            .into_any()
        }
    }
}

/// Show/hide toggles for hideable columns
#[component]
fn ColumnPicker(config: StoredValue<ListConfig>, state: RwSignal<ListState>) -> impl IntoView {
    let columns = config.with_value(|c| {
        c.columns
            .iter()
            .filter(|col| col.hideable)
            .cloned()
            .collect::<Vec<_>>()
    });

    view! {
        <details class="column-picker">
            <summary class="button button--secondary">
                {icon("columns")}
                "Columnas"
            </summary>
            <div class="column-picker__menu">
                {columns
                    .into_iter()
                    .map(|col| {
                        let label = col.label;
                        let checked_col = col.clone();
                        view! {
                            <label class="column-picker__item">
                                <input
                                    type="checkbox"
                                    prop:checked=move || state.with(|s| s.query.is_visible(&checked_col))
                                    on:change=move |_| state.update(|s| s.query.toggle_column(&col))
                                />
                                {label}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </details>
    }
}
